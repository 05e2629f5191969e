//! Seeded random graphs, labelled by their own indices.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    error::{GraphError, Result},
    graph::Graph,
    storage::{Adjacency, Weight},
};

/// Builder for an Erdős–Rényi style graph: every pair of distinct vertices is joined independently
/// with the given probability, with a weight drawn uniformly from the weight range.
#[derive(Debug, Clone)]
pub struct RandomGraph {
    vertices: usize,
    edge_probability: f64,
    min_weight: Weight,
    max_weight: Weight,
    seed: u64,
}

impl RandomGraph {
    /// Defaults to edge probability 0.3, unit weights and seed 0.
    pub fn new(vertices: usize) -> Self {
        Self {
            vertices,
            edge_probability: 0.3,
            min_weight: 1,
            max_weight: 1,
            seed: 0,
        }
    }

    /// Clamped to [0, 1].
    #[must_use]
    pub fn edge_probability(mut self, p: f64) -> Self {
        self.edge_probability = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        self
    }

    /// Inclusive weight range. `min` must be positive, since zero means "no edge".
    #[must_use]
    pub fn weights(mut self, min: Weight, max: Weight) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn build<S: Adjacency>(&self) -> Result<Graph<usize, S>> {
        if self.min_weight == 0 || self.min_weight > self.max_weight {
            return Err(GraphError::InvalidWeightRange {
                min: self.min_weight,
                max: self.max_weight,
            });
        }
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut g = Graph::new(0..self.vertices);
        for u in 0..self.vertices {
            for v in u + 1..self.vertices {
                if rng.gen_bool(self.edge_probability) {
                    g.add_weighted_edge(u, v, rng.gen_range(self.min_weight..=self.max_weight));
                }
            }
        }
        log::debug!(
            "random graph with {} vertices and {} edges (seed {})",
            self.vertices,
            g.edge_count(),
            self.seed
        );
        Ok(g)
    }
}
