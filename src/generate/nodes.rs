//! Random node synthesis.

use rand::Rng;

use crate::types::{GraphError, GraphResult, Node, NODE_NAME_ALPHABET, NODE_NAME_LEN};

/// A random base-36 node name.
pub fn new_node_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..NODE_NAME_LEN)
        .map(|_| NODE_NAME_ALPHABET[rng.gen_range(0..NODE_NAME_ALPHABET.len())] as char)
        .collect()
}

/// A node with the given ID and a random name.
pub fn new_node<R: Rng + ?Sized>(id: u64, rng: &mut R) -> Node {
    Node::new(id, new_node_name(rng))
}

/// Between `min_nodes` and `max_nodes` (inclusive) nodes with IDs `0..count`.
pub fn make_random_nodes<R: Rng + ?Sized>(
    min_nodes: usize,
    max_nodes: usize,
    rng: &mut R,
) -> GraphResult<Vec<Node>> {
    if min_nodes > max_nodes {
        return Err(GraphError::InvalidRange {
            min: min_nodes,
            max: max_nodes,
        });
    }

    let count = rng.gen_range(min_nodes..=max_nodes);
    log::debug!("make_random_nodes: {} nodes", count);

    Ok((0..count as u64).map(|id| new_node(id, &mut *rng)).collect())
}
