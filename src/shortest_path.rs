//! Single-source shortest paths with the O(V²) selection form of Dijkstra.

use crate::{
    error::{check_vertex, Result},
    storage::{Adjacency, Distance},
};

/// The vertex not yet done with the smallest key, and that key. `None` keys are not reached yet and never
/// selected. Scanning in index order makes the lowest index win ties.
pub(crate) fn select_min<K: Ord + Copy>(
    keys: &[Option<K>],
    done: &[bool],
) -> Option<(usize, K)> {
    let mut best: Option<(usize, K)> = None;
    for (v, &key) in keys.iter().enumerate() {
        let Some(k) = key else {
            continue;
        };
        if !done[v] && best.map_or(true, |(_, b)| k < b) {
            best = Some((v, k));
        }
    }
    best
}

/// Distances and the shortest path tree from one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: usize,
    dist: Vec<Option<Distance>>,
    parent: Vec<Option<usize>>,
}

impl ShortestPaths {
    pub fn source(&self) -> usize {
        self.source
    }
    /// Distance from the source to v, None if v is unreachable.
    pub fn distance(&self, v: usize) -> Option<Distance> {
        self.dist[v]
    }
    /// Previous vertex on the shortest path to v.
    pub fn parent(&self, v: usize) -> Option<usize> {
        self.parent[v]
    }
    pub fn is_reachable(&self, v: usize) -> bool {
        self.distance(v).is_some()
    }
    /// Path from the source to v, both included. None if v is unreachable.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        self.distance(v)?;
        let mut path = vec![v];
        let mut cur = v;
        while let Some(p) = self.parent[cur] {
            path.push(p);
            cur = p;
        }
        path.reverse();
        Some(path)
    }
    pub fn vertex_count(&self) -> usize {
        self.dist.len()
    }
}

/// Shortest distance and path from the source to one target vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V> {
    pub target: V,
    /// None if the target is unreachable.
    pub distance: Option<Distance>,
    /// Source first, target last. Empty if unreachable.
    pub path: Vec<V>,
}

impl ShortestPaths {
    /// One route per vertex, in index order.
    pub fn routes(&self) -> Vec<Route<usize>> {
        (0..self.vertex_count())
            .map(|v| Route {
                target: v,
                distance: self.distance(v),
                path: self.path_to(v).unwrap_or_default(),
            })
            .collect()
    }
}

/// Dijkstra from start. Weights are non-negative by construction of `Weight`.
pub fn dijkstra<A: Adjacency>(adj: &A, start: usize) -> Result<ShortestPaths> {
    let n = adj.vertex_count();
    check_vertex(start, n)?;
    let mut dist: Vec<Option<Distance>> = vec![None; n];
    let mut parent = vec![None; n];
    let mut settled = vec![false; n];
    dist[start] = Some(0);
    // Stops early once everything left is unreachable.
    while let Some((u, du)) = select_min(&dist, &settled) {
        settled[u] = true;
        for (v, w) in adj.neighbors(u) {
            if settled[v] {
                continue;
            }
            let candidate = du + Distance::from(w);
            if dist[v].map_or(true, |d| candidate < d) {
                log::trace!("relax {v} via {u}: {:?} -> {candidate}", dist[v]);
                dist[v] = Some(candidate);
                parent[v] = Some(u);
            }
        }
    }
    log::debug!(
        "dijkstra from {start} reached {} of {n} vertices",
        settled.iter().filter(|&&s| s).count()
    );
    Ok(ShortestPaths {
        source: start,
        dist,
        parent,
    })
}
