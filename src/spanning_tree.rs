//! Minimum spanning tree by Prim's algorithm, O(V²) selection form.

use crate::{
    error::{check_vertex, GraphError, Result},
    shortest_path::select_min,
    storage::{Adjacency, Distance, Weight},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEdge<V> {
    pub parent: V,
    pub child: V,
    pub weight: Weight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree<V> {
    /// Ordered by child index.
    pub edges: Vec<TreeEdge<V>>,
    pub total_weight: Distance,
}

impl<V> SpanningTree<V> {
    pub fn map<W>(self, mut f: impl FnMut(V) -> W) -> SpanningTree<W> {
        SpanningTree {
            edges: self
                .edges
                .into_iter()
                .map(|e| TreeEdge {
                    parent: f(e.parent),
                    child: f(e.child),
                    weight: e.weight,
                })
                .collect(),
            total_weight: self.total_weight,
        }
    }
}

/// Grows a minimum spanning tree from start.
/// Fails with `GraphError::Disconnected` if some vertex can't be reached, instead of returning a partial tree.
pub fn prim<A: Adjacency>(adj: &A, start: usize) -> Result<SpanningTree<usize>> {
    let n = adj.vertex_count();
    check_vertex(start, n)?;
    // key[v] is the lightest known edge from v into the tree
    let mut key: Vec<Option<Weight>> = vec![None; n];
    let mut parent = vec![None; n];
    let mut in_tree = vec![false; n];
    key[start] = Some(0);
    for reached in 0..n {
        let Some((u, _)) = select_min(&key, &in_tree) else {
            log::debug!("prim from {start} stuck after {reached} of {n} vertices");
            return Err(GraphError::Disconnected { reached, total: n });
        };
        in_tree[u] = true;
        for (v, w) in adj.neighbors(u) {
            if !in_tree[v] && key[v].map_or(true, |k| w < k) {
                key[v] = Some(w);
                parent[v] = Some(u);
            }
        }
    }
    let edges: Vec<_> = (0..n)
        .filter_map(|child| {
            Some(TreeEdge {
                parent: parent[child]?,
                child,
                weight: key[child]?,
            })
        })
        .collect();
    let total_weight: Distance = edges.iter().map(|e| Distance::from(e.weight)).sum();
    log::debug!(
        "prim from {start}: {} edges, total weight {total_weight}",
        edges.len()
    );
    Ok(SpanningTree {
        edges,
        total_weight,
    })
}
