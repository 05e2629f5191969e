//! Labelled graph owning its storage and the biconnectivity scratch state.

use std::fmt::{Debug, Display, Formatter};

use derivative::Derivative;

use crate::{
    biconnected::{Biconnectivity, TarjanState},
    error::{GraphError, Result},
    shortest_path::{self, Route},
    spanning_tree::{self, SpanningTree},
    storage::{Adjacency, AdjacencyMatrix, Weight},
    traversal,
};

/// Undirected weighted graph over a fixed, ordered set of labelled vertices.
/// A vertex's position in the label list is its index for every algorithm.
#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct Graph<L, S = AdjacencyMatrix>
where
    S: Adjacency,
{
    vertices: Vec<L>,
    adjacency: S,
    #[derivative(Debug = "ignore")]
    tarjan: TarjanState,
}

impl<L, S> Graph<L, S>
where
    L: PartialEq + Clone + Debug,
    S: Adjacency,
{
    /// New graph on the given labels, with no edges. Labels should be distinct: lookups return the first match.
    pub fn new(vertices: impl IntoIterator<Item = L>) -> Self {
        let vertices: Vec<L> = vertices.into_iter().collect();
        Self {
            adjacency: S::new(vertices.len()),
            vertices,
            tarjan: TarjanState::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    pub fn labels(&self) -> &[L] {
        &self.vertices
    }

    pub fn label(&self, index: usize) -> Option<&L> {
        self.vertices.get(index)
    }

    pub fn adjacency(&self) -> &S {
        &self.adjacency
    }

    /// Index of the first vertex with this label.
    pub fn index_of(&self, label: &L) -> Option<usize> {
        self.vertices.iter().position(|l| l == label)
    }

    /// Adds an edge of weight 1. See `add_weighted_edge`.
    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        self.add_weighted_edge(u, v, 1)
    }

    /// Sets the edge u-v to the given weight, replacing any previous one. A zero weight removes it.
    /// Returns false and does nothing for self loops or out of range indices.
    pub fn add_weighted_edge(&mut self, u: usize, v: usize, weight: Weight) -> bool {
        let n = self.vertex_count();
        if u == v || u >= n || v >= n {
            log::trace!("ignoring edge {u}-{v} on {n} vertices");
            return false;
        }
        self.adjacency.set_weight(u, v, weight);
        true
    }

    /// `add_weighted_edge` addressed by labels.
    pub fn connect(&mut self, a: &L, b: &L, weight: Weight) -> Result<bool> {
        let u = self.resolve(a)?;
        let v = self.resolve(b)?;
        Ok(self.add_weighted_edge(u, v, weight))
    }

    /// Weight of u-v, None if there is no such edge or either index is out of range.
    pub fn weight(&self, u: usize, v: usize) -> Option<Weight> {
        let n = self.vertex_count();
        if u < n && v < n {
            self.adjacency.weight(u, v)
        } else {
            None
        }
    }

    /// Neighbors of u in increasing index order. Empty if u is out of range.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        (u < self.vertex_count())
            .then(|| self.adjacency.neighbors(u))
            .into_iter()
            .flatten()
    }

    /// Every edge once, as (u, v, weight) with u < v.
    pub fn edges(&self) -> Vec<(usize, usize, Weight)> {
        self.adjacency.edges()
    }

    fn resolve(&self, label: &L) -> Result<usize> {
        self.index_of(label)
            .ok_or_else(|| GraphError::VertexNotFound(format!("{label:?}")))
    }

    fn to_label(&self, index: usize) -> L {
        self.vertices[index].clone()
    }

    fn to_labels(&self, indices: impl IntoIterator<Item = usize>) -> Vec<L> {
        indices.into_iter().map(|i| self.to_label(i)).collect()
    }

    pub fn bfs(&self, start: &L) -> Result<Vec<L>> {
        let order = traversal::bfs(&self.adjacency, self.resolve(start)?)?;
        Ok(self.to_labels(order))
    }

    pub fn dfs(&self, start: &L) -> Result<Vec<L>> {
        let order = traversal::dfs(&self.adjacency, self.resolve(start)?)?;
        Ok(self.to_labels(order))
    }

    /// One route per vertex, in index order. Unreachable vertices have no distance and an empty path.
    pub fn dijkstra(&self, start: &L) -> Result<Vec<Route<L>>> {
        let paths = shortest_path::dijkstra(&self.adjacency, self.resolve(start)?)?;
        Ok(paths
            .routes()
            .into_iter()
            .map(|r| Route {
                target: self.to_label(r.target),
                distance: r.distance,
                path: self.to_labels(r.path),
            })
            .collect())
    }

    pub fn prim(&self, start: &L) -> Result<SpanningTree<L>> {
        let tree = spanning_tree::prim(&self.adjacency, self.resolve(start)?)?;
        Ok(tree.map(|i| self.to_label(i)))
    }

    /// Articulation points, biconnected components and bridges of the whole graph.
    /// Reuses the graph's scratch buffers, hence `&mut self`.
    pub fn find_biconnected_components_and_articulation(&mut self) -> Biconnectivity<L> {
        let result = self.tarjan.run(&self.adjacency);
        result.map(|i| self.vertices[i].clone())
    }

    /// Scratch state left by the last biconnectivity run.
    pub fn tarjan_state(&self) -> &TarjanState {
        &self.tarjan
    }
}

/// Adjacency matrix with a header of labels, one row per vertex.
impl<L, S> Display for Graph<L, S>
where
    L: Display,
    S: Adjacency,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let n = self.vertices.len();
        let cell = |w: Option<Weight>| w.unwrap_or(0).to_string();
        let width = (0..n)
            .flat_map(|u| (0..n).map(move |v| (u, v)))
            .map(|(u, v)| cell(self.adjacency.weight(u, v)).len())
            .chain(self.vertices.iter().map(|l| l.to_string().len()))
            .max()
            .unwrap_or(1);
        write!(f, "{:width$}", "")?;
        for l in &self.vertices {
            write!(f, " {:>width$}", l.to_string())?;
        }
        writeln!(f)?;
        for (u, l) in self.vertices.iter().enumerate() {
            write!(f, "{:<width$}", l.to_string())?;
            for v in 0..n {
                write!(f, " {:>width$}", cell(self.adjacency.weight(u, v)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
