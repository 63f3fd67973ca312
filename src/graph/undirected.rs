//! Undirected adjacency structure derived from an edge list.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use crate::types::{Endpoints, GraphResult, PathStep};

use super::traversal;

/// Neighbor sets of a single node.
///
/// Both sets hold the same identifiers: every edge is recorded in both
/// directions, so a node's incoming neighbors are also its outgoing ones.
#[derive(Debug, Clone)]
pub struct Neighbors<N> {
    /// Nodes with an edge into this node.
    pub incoming: HashSet<N>,
    /// Nodes this node has an edge to.
    pub outgoing: HashSet<N>,
}

impl<N> Default for Neighbors<N> {
    fn default() -> Self {
        Self {
            incoming: HashSet::new(),
            outgoing: HashSet::new(),
        }
    }
}

/// An undirected graph keyed by node identifier.
///
/// There is no mutation API: a graph is built once from an edge list and
/// only read afterwards.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<N> {
    adjacency: HashMap<N, Neighbors<N>>,
}

impl<N: Eq + Hash + Clone> UndirectedGraph<N> {
    /// Build the graph from an edge list in a single pass.
    ///
    /// Each node is registered the first time it appears as an endpoint.
    /// Duplicate edges collapse, self-loops make a node its own neighbor.
    pub fn from_edges<'a, E, I>(edges: I) -> Self
    where
        E: Endpoints<Node = N> + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        let adjacency = edges
            .into_iter()
            .fold(HashMap::<N, Neighbors<N>>::new(), |mut adjacency, edge| {
                connect(&mut adjacency, edge.source(), edge.target());
                connect(&mut adjacency, edge.target(), edge.source());
                adjacency
            });
        Self { adjacency }
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct undirected edges. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        let (arcs, loops) = self
            .adjacency
            .iter()
            .fold((0, 0), |(arcs, loops), (node, neighbors)| {
                let looped = usize::from(neighbors.outgoing.contains(node));
                (arcs + neighbors.outgoing.len(), loops + looped)
            });
        (arcs + loops) / 2
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// True if `node` is an endpoint of some edge.
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Iterate over all nodes in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Neighbor sets of a node, if present.
    pub fn adjacency_of(&self, node: &N) -> Option<&Neighbors<N>> {
        self.adjacency.get(node)
    }

    /// Neighbors of a node. Empty for unknown nodes.
    pub fn neighbors(&self, node: &N) -> impl Iterator<Item = &N> {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|neighbors| neighbors.outgoing.iter())
    }

    /// Number of connected components.
    pub fn component_count(&self) -> usize {
        let mut seen: HashSet<&N> = HashSet::with_capacity(self.adjacency.len());
        let mut components = 0;

        for start in self.adjacency.keys() {
            if !seen.insert(start) {
                continue;
            }
            components += 1;

            let mut queue: VecDeque<&N> = VecDeque::from([start]);
            while let Some(current) = queue.pop_front() {
                for next in self.neighbors(current) {
                    if seen.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        components
    }
}

impl<N: Eq + Hash + Clone + Debug> UndirectedGraph<N> {
    /// One shortest path from `source` to `target`, or `None` when the two
    /// nodes are in different components.
    pub fn shortest_path(
        &self,
        source: &N,
        target: &N,
    ) -> GraphResult<Option<Vec<PathStep<N>>>> {
        traversal::shortest_path(self, source, target)
    }

    /// Edge count of the shortest path from `source` to `target`.
    pub fn distance(&self, source: &N, target: &N) -> GraphResult<Option<usize>> {
        Ok(self.shortest_path(source, target)?.map(|path| path.len()))
    }
}

fn connect<N: Eq + Hash + Clone>(adjacency: &mut HashMap<N, Neighbors<N>>, from: &N, to: &N) {
    adjacency
        .entry(from.clone())
        .or_default()
        .outgoing
        .insert(to.clone());
    adjacency
        .entry(to.clone())
        .or_default()
        .incoming
        .insert(from.clone());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_symmetric() {
        let graph = UndirectedGraph::from_edges(&[("a", "b"), ("b", "c")]);
        let b = graph.adjacency_of(&"b").unwrap();
        assert_eq!(b.incoming, b.outgoing);
        assert!(b.outgoing.contains("a"));
        assert!(b.outgoing.contains("c"));
        assert!(graph.neighbors(&"a").any(|n| *n == "b"));
    }

    #[test]
    fn duplicates_and_self_loops() {
        let graph = UndirectedGraph::from_edges(&[(1, 2), (2, 1), (1, 2), (3, 3)]);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.neighbors(&3).any(|n| *n == 3));
    }

    #[test]
    fn components() {
        let graph = UndirectedGraph::from_edges(&[(1, 2), (3, 4), (4, 5), (6, 6)]);
        assert_eq!(graph.component_count(), 3);
    }

    #[test]
    fn empty_graph() {
        let edges: [(u64, u64); 0] = [];
        let graph = UndirectedGraph::from_edges(&edges);
        assert!(graph.is_empty());
        assert_eq!(graph.component_count(), 0);
        assert_eq!(graph.neighbors(&7).count(), 0);
    }
}
