//! Random link synthesis over a generated node set.

use rand::Rng;

use crate::types::{Link, Node};

/// A link with the given ID between two node IDs.
pub fn new_link(id: u64, source: u64, target: u64) -> Link {
    Link::new(id, source, target)
}

/// Random links leaving every node in `nodes`.
///
/// Each node gets between 1 and `max(max_links, 1)` links to uniformly
/// chosen nodes of the set, itself included. Link IDs start at 1.
pub fn make_random_links<R: Rng + ?Sized>(
    nodes: &[Node],
    max_links: usize,
    rng: &mut R,
) -> Vec<Link> {
    if nodes.is_empty() {
        return Vec::new();
    }

    let mut links = Vec::new();
    let mut id = 0;

    for node in nodes {
        let total = if max_links == 0 {
            0
        } else {
            rng.gen_range(0..max_links)
        };
        for _ in 0..=total {
            let target = &nodes[rng.gen_range(0..nodes.len())];
            id += 1;
            links.push(new_link(id, node.id, target.id));
        }
    }

    log::debug!(
        "make_random_links: {} links over {} nodes",
        links.len(),
        nodes.len()
    );
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn nodes(count: u64) -> Vec<Node> {
        (0..count).map(|id| Node::new(id, "n")).collect()
    }

    #[test]
    fn zero_max_links_gives_one_per_node() {
        let mut rng = StdRng::seed_from_u64(3);
        let links = make_random_links(&nodes(6), 0, &mut rng);
        assert_eq!(links.len(), 6);
        for (i, link) in links.iter().enumerate() {
            assert_eq!(link.source, i as u64);
        }
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let mut rng = StdRng::seed_from_u64(3);
        let links = make_random_links(&nodes(10), 4, &mut rng);
        for (i, link) in links.iter().enumerate() {
            assert_eq!(link.id, i as u64 + 1);
        }
    }

    #[test]
    fn empty_node_set() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(make_random_links(&[], 5, &mut rng).is_empty());
    }
}
