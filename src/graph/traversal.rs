//! Graph traversal algorithms (BFS shortest path).

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use crate::types::{Endpoints, GraphError, GraphResult, PathStep};

use super::UndirectedGraph;

/// Find one shortest path (by edge count) between two nodes of the
/// undirected graph induced by `edges`.
///
/// Returns `Ok(None)` when both nodes exist but are not connected, and an
/// unknown-node error when either one is not an endpoint of any edge. When
/// several shortest paths exist, which one is returned is unspecified.
pub fn find_path<'a, N, E, I>(
    source: &N,
    target: &N,
    edges: I,
) -> GraphResult<Option<Vec<PathStep<N>>>>
where
    N: Eq + Hash + Clone + Debug,
    E: Endpoints<Node = N> + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let graph = UndirectedGraph::from_edges(edges);
    log::debug!(
        "find_path: {} nodes, {} edges, {:?} -> {:?}",
        graph.node_count(),
        graph.edge_count(),
        source,
        target
    );
    shortest_path(&graph, source, target)
}

/// BFS shortest path on an already built graph.
pub fn shortest_path<N>(
    graph: &UndirectedGraph<N>,
    source: &N,
    target: &N,
) -> GraphResult<Option<Vec<PathStep<N>>>>
where
    N: Eq + Hash + Clone + Debug,
{
    if !graph.contains(source) {
        return Err(GraphError::UnknownSource(format!("{:?}", source)));
    }
    if !graph.contains(target) {
        return Err(GraphError::UnknownTarget(format!("{:?}", target)));
    }

    let mut queue: VecDeque<&N> = VecDeque::new();
    let mut enqueued: HashSet<&N> = HashSet::new();
    let mut visited: HashSet<&N> = HashSet::new();
    let mut predecessors: HashMap<&N, &N> = HashMap::new();

    // The source counts as enqueued so it never gets a predecessor,
    // even through a self-loop.
    queue.push_back(source);
    enqueued.insert(source);

    while let Some(current) = queue.pop_front() {
        if current == target {
            let path = build_path(current, &predecessors);
            log::trace!("find_path: reached {:?} in {} steps", target, path.len());
            return Ok(Some(path));
        }

        for next in graph.neighbors(current) {
            if visited.contains(next) || enqueued.contains(next) {
                continue;
            }
            predecessors.insert(next, current);
            enqueued.insert(next);
            queue.push_back(next);
        }

        visited.insert(current);
    }

    log::debug!(
        "find_path: no path, {} of {} nodes visited",
        visited.len(),
        graph.node_count()
    );
    Ok(None)
}

/// Walk the predecessor map back from `end` and return the steps in
/// source-to-target order.
fn build_path<N: Eq + Hash + Clone>(
    end: &N,
    predecessors: &HashMap<&N, &N>,
) -> Vec<PathStep<N>> {
    let mut steps = Vec::new();
    let mut node = end;

    while let Some(&previous) = predecessors.get(node) {
        steps.push(PathStep::new(previous.clone(), node.clone()));
        node = previous;
    }

    steps.reverse();
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain() {
        let edges = [("A", "B"), ("B", "C"), ("C", "D")];
        let path = find_path(&"A", &"D", &edges).unwrap().unwrap();
        assert_eq!(
            path,
            vec![
                PathStep::new("A", "B"),
                PathStep::new("B", "C"),
                PathStep::new("C", "D"),
            ]
        );
    }

    #[test]
    fn reversed_edges_still_connect() {
        let edges = [("B", "A"), ("C", "B")];
        let path = find_path(&"A", &"C", &edges).unwrap().unwrap();
        assert_eq!(path, vec![PathStep::new("A", "B"), PathStep::new("B", "C")]);
    }

    #[test]
    fn same_node_is_empty_path() {
        let edges = [(1u64, 2u64)];
        let path = find_path(&1, &1, &edges).unwrap().unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn self_loop_on_source_terminates() {
        let edges = [(1u64, 1u64), (1, 2), (2, 3)];
        let path = find_path(&1, &3, &edges).unwrap().unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].source, 1);
    }

    #[test]
    fn build_path_empty_map() {
        let predecessors: HashMap<&u64, &u64> = HashMap::new();
        assert!(build_path(&5u64, &predecessors).is_empty());
    }
}
