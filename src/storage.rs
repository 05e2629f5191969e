//! Edge storage for undirected weighted graphs on vertices `0..n`.

use std::collections::BTreeMap;
use std::fmt::Debug;

/// Edge weight. Zero is reserved to mean "no edge".
pub type Weight = u64;

/// Sum of weights along a path or over a tree. Wide enough that adding up to `usize::MAX` weights never overflows.
pub type Distance = u128;

/// Index-based storage of an undirected, weighted, simple graph.
/// The vertex set is `0..n` and is fixed at creation.
pub trait Adjacency
where
    Self: Debug + Clone,
{
    /// New storage for n vertices and no edges.
    fn new(n: usize) -> Self;
    fn vertex_count(&self) -> usize;
    /// Weight of the edge between u and v, None if there is none. Panics if either is out of range.
    fn weight(&self, u: usize, v: usize) -> Option<Weight>;
    /// Sets the weight of u-v in both directions, overwriting any prior edge. A zero weight removes the edge.
    /// Assumes u != v and both are in range.
    fn set_weight(&mut self, u: usize, v: usize, weight: Weight);
    /// Neighbors of u and the connecting weights, in increasing index order.
    fn neighbors(&self, u: usize) -> impl Iterator<Item = (usize, Weight)> + '_;

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.weight(u, v).is_some()
    }
    fn degree(&self, u: usize) -> usize {
        self.neighbors(u).count()
    }
    /// Every edge once, as (u, v, weight) with u < v, sorted.
    fn edges(&self) -> Vec<(usize, usize, Weight)> {
        let mut edges = vec![];
        for u in 0..self.vertex_count() {
            edges.extend(
                self.neighbors(u)
                    .filter(|&(v, _)| u < v)
                    .map(|(v, w)| (u, v, w)),
            );
        }
        edges
    }
    fn edge_count(&self) -> usize {
        (0..self.vertex_count()).map(|u| self.degree(u)).sum::<usize>() / 2
    }
}

/// Dense V×V weight grid stored row-major in one allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    n: usize,
    weights: Vec<Weight>,
}

impl AdjacencyMatrix {
    pub fn row(&self, u: usize) -> &[Weight] {
        &self.weights[u * self.n..(u + 1) * self.n]
    }
}

impl Adjacency for AdjacencyMatrix {
    fn new(n: usize) -> Self {
        Self {
            n,
            weights: vec![0; n * n],
        }
    }

    fn vertex_count(&self) -> usize {
        self.n
    }

    fn weight(&self, u: usize, v: usize) -> Option<Weight> {
        assert!(u < self.n && v < self.n, "vertex out of range");
        Some(self.weights[u * self.n + v]).filter(|&w| w != 0)
    }

    fn set_weight(&mut self, u: usize, v: usize, weight: Weight) {
        self.weights[u * self.n + v] = weight;
        self.weights[v * self.n + u] = weight;
    }

    fn neighbors(&self, u: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.row(u)
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, w)| w != 0)
    }
}

/// Sparse alternative: one ordered map of neighbor to weight per vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyLists {
    adj: Vec<BTreeMap<usize, Weight>>,
}

impl Adjacency for AdjacencyLists {
    fn new(n: usize) -> Self {
        Self {
            adj: vec![BTreeMap::new(); n],
        }
    }

    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn weight(&self, u: usize, v: usize) -> Option<Weight> {
        assert!(u < self.adj.len() && v < self.adj.len(), "vertex out of range");
        self.adj[u].get(&v).copied()
    }

    fn set_weight(&mut self, u: usize, v: usize, weight: Weight) {
        if weight == 0 {
            self.adj[u].remove(&v);
            self.adj[v].remove(&u);
        } else {
            self.adj[u].insert(v, weight);
            self.adj[v].insert(u, weight);
        }
    }

    fn neighbors(&self, u: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.adj[u].iter().map(|(&v, &w)| (v, w))
    }

    fn degree(&self, u: usize) -> usize {
        self.adj[u].len()
    }
}
