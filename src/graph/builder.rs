//! Fluent API for building UndirectedGraph instances.

use std::hash::Hash;

use crate::types::{Endpoints, PathStep};

use super::UndirectedGraph;

/// Fluent builder collecting edges before a single build pass.
pub struct GraphBuilder<N> {
    edges: Vec<PathStep<N>>,
}

impl<N: Eq + Hash + Clone> GraphBuilder<N> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Add an edge between two nodes.
    pub fn link(&mut self, source: N, target: N) -> &mut Self {
        self.edges.push(PathStep::new(source, target));
        self
    }

    /// Add every edge of an existing edge list.
    pub fn extend<'a, E, I>(&mut self, edges: I) -> &mut Self
    where
        E: Endpoints<Node = N> + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        self.edges.extend(
            edges
                .into_iter()
                .map(|edge| PathStep::new(edge.source().clone(), edge.target().clone())),
        );
        self
    }

    /// Add a chain `nodes[0] - nodes[1] - ... - nodes[n-1]`.
    pub fn chain(&mut self, nodes: &[N]) -> &mut Self {
        for pair in nodes.windows(2) {
            self.link(pair[0].clone(), pair[1].clone());
        }
        self
    }

    /// Edges collected so far.
    pub fn edges(&self) -> &[PathStep<N>] {
        &self.edges
    }

    /// Build the final graph.
    pub fn build(&self) -> UndirectedGraph<N> {
        UndirectedGraph::from_edges(&self.edges)
    }
}

impl<N: Eq + Hash + Clone> Default for GraphBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_links_consecutive_nodes() {
        let graph = GraphBuilder::new().chain(&[1, 2, 3, 4]).link(4, 1).build();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.component_count(), 1);
    }

    #[test]
    fn extend_from_tuples() {
        let mut builder = GraphBuilder::new();
        builder.extend(&[("x", "y"), ("y", "z")]);
        assert_eq!(builder.edges().len(), 2);
        assert!(builder.build().contains(&"z"));
    }
}
