//! Seeded random graph generators for demo and test data.
//!
//! Every generator takes the random source explicitly, so a fixed seed
//! always reproduces the same fixture.

pub mod links;
pub mod nodes;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::types::{GraphResult, Link, Node};

pub use links::{make_random_links, new_link};
pub use nodes::{make_random_nodes, new_node, new_node_name};

/// Settings for [`generate_graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Minimum node count (inclusive).
    pub min_nodes: usize,
    /// Maximum node count (inclusive).
    pub max_nodes: usize,
    /// Upper bound on links leaving each node.
    pub max_links: usize,
    /// Seed for the random source. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_nodes: 5,
            max_nodes: 20,
            max_links: 3,
            seed: None,
        }
    }
}

/// Generate a random node set and links over it.
pub fn generate_graph(config: &GeneratorConfig) -> GraphResult<(Vec<Node>, Vec<Link>)> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let nodes = make_random_nodes(config.min_nodes, config.max_nodes, &mut rng)?;
    let links = make_random_links(&nodes, config.max_links, &mut rng);
    Ok((nodes, links))
}
