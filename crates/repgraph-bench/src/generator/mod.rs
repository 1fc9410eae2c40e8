//! Sentence graph generator.
//!
//! Produces [`SentenceGraph`] instances with a predicate-argument shape:
//! a random spanning tree plus reentrant edges, every edge pointing from an
//! earlier to a later node of a hidden topological order, so generated
//! graphs are DAGs unless cycles are injected on purpose.

pub mod topology;
pub mod vocabulary;

use rand::SeedableRng;
use rand::rngs::StdRng;
use repgraph_core::{Corpus, SentenceGraph};

/// Configuration for the corpus generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of graphs in the corpus.
    pub num_graphs: usize,
    /// Smallest node count per graph (at least 1).
    pub min_nodes: usize,
    /// Largest node count per graph (inclusive).
    pub max_nodes: usize,
    /// Reentrant edges per node, on top of the spanning tree (0.0-1.0).
    pub reentrancy: f64,
    /// Fraction of nodes carrying an anchor (0.0-1.0).
    pub anchored_fraction: f64,
    /// Probability that a graph gets one dangling edge.
    pub dangling_probability: f64,
    /// Probability that a graph gets a directed 2-cycle.
    pub cycle_probability: f64,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 50 graphs of 5-20 nodes (typical sentences).
    Small,
    /// 500 graphs of 10-60 nodes.
    Medium,
    /// 100 graphs of 200-600 nodes (paragraph-scale stress input).
    Large,
}

impl SizeTier {
    /// Returns the default [`GeneratorConfig`] for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        match self {
            SizeTier::Small => GeneratorConfig {
                seed,
                num_graphs: 50,
                min_nodes: 5,
                max_nodes: 20,
                reentrancy: 0.15,
                anchored_fraction: 0.9,
                dangling_probability: 0.05,
                cycle_probability: 0.0,
            },
            SizeTier::Medium => GeneratorConfig {
                seed,
                num_graphs: 500,
                min_nodes: 10,
                max_nodes: 60,
                reentrancy: 0.2,
                anchored_fraction: 0.85,
                dangling_probability: 0.05,
                cycle_probability: 0.05,
            },
            SizeTier::Large => GeneratorConfig {
                seed,
                num_graphs: 100,
                min_nodes: 200,
                max_nodes: 600,
                reentrancy: 0.25,
                anchored_fraction: 0.8,
                dangling_probability: 0.1,
                cycle_probability: 0.1,
            },
        }
    }
}

/// Generates one graph with `nodes` nodes, drawing from `rng`.
///
/// The graph id is `index` zero-padded to eight digits.
pub fn generate_sentence(
    config: &GeneratorConfig,
    rng: &mut StdRng,
    index: usize,
    nodes: usize,
) -> SentenceGraph {
    topology::build_sentence(config, rng, index, nodes.max(1))
}

/// Generates a corpus from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`.
pub fn generate_corpus(config: &GeneratorConfig) -> Corpus {
    use rand::Rng as _;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let min = config.min_nodes.max(1);
    let max = config.max_nodes.max(min);
    (0..config.num_graphs)
        .map(|index| {
            let nodes = rng.gen_range(min..=max);
            generate_sentence(config, &mut rng, index, nodes)
        })
        .collect()
}
