//! Articulation points, bridges and biconnected components with Tarjan's low-link DFS.
//!
//! Every tree or back edge is pushed on an edge stack when first traversed. When a child v of u
//! finishes with `low[v] >= dfn[u]`, nothing in v's subtree reaches above u, so the edges pushed
//! since (u, v) form one biconnected component and are popped together. At a DFS root this
//! condition always holds, which closes the last component of every tree.

use std::collections::BTreeSet;
use std::fmt::{Debug, Formatter};

use debug_tree::{add_branch_to, AsTree, TreeBuilder};
use derivative::Derivative;

use crate::storage::Adjacency;

const NO_PARENT: usize = usize::MAX;

/// Prints ∅ for `NO_PARENT`.
struct PrettyParent(usize);

impl Debug for PrettyParent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0 == NO_PARENT {
            write!(f, "∅")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[allow(clippy::ptr_arg)]
fn parents_fmt(parents: &Vec<usize>, f: &mut Formatter) -> std::fmt::Result {
    f.debug_list()
        .entries(parents.iter().copied().map(PrettyParent))
        .finish()
}

/// Outcome of a biconnectivity run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Biconnectivity<V> {
    /// Cut vertices, in increasing index order.
    pub articulation_points: Vec<V>,
    /// Each component is a list of distinct undirected edges (smaller index first), sorted by index.
    /// Components appear in the order the search closed them.
    pub components: Vec<Vec<(V, V)>>,
    /// Edges whose removal disconnects their endpoints, sorted by index.
    pub bridges: Vec<(V, V)>,
}

impl<V> Biconnectivity<V> {
    pub fn is_biconnected(&self) -> bool {
        self.articulation_points.is_empty() && self.components.len() <= 1
    }

    pub fn map<W>(self, mut f: impl FnMut(V) -> W) -> Biconnectivity<W> {
        let mut pair = |(a, b): (V, V)| (f(a), f(b));
        let components: Vec<Vec<(W, W)>> = self
            .components
            .into_iter()
            .map(|c| c.into_iter().map(&mut pair).collect())
            .collect();
        let bridges: Vec<(W, W)> = self.bridges.into_iter().map(&mut pair).collect();
        Biconnectivity {
            articulation_points: self.articulation_points.into_iter().map(f).collect(),
            components,
            bridges,
        }
    }
}

/// Scratch buffers for the search. Sized to the vertex count and cleared at the start of every run,
/// so one instance can be reused across runs and graphs.
#[derive(Derivative, Clone, Default)]
#[derivative(Debug)]
pub struct TarjanState {
    /// Discovery time, starting at 1. Zero means undiscovered.
    dfn: Vec<usize>,
    /// Smallest discovery time reachable from the subtree using at most one back edge.
    low: Vec<usize>,
    /// Parent in the DFS forest.
    #[derivative(Debug(format_with = "parents_fmt"))]
    parent: Vec<usize>,
    is_articulation: Vec<bool>,
    /// Edges (parent, child) of the component currently open.
    edge_stack: Vec<(usize, usize)>,
    timestamp: usize,
    components: Vec<BTreeSet<(usize, usize)>>,
    bridges: BTreeSet<(usize, usize)>,
}

impl TarjanState {
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self, n: usize) {
        for v in [&mut self.dfn, &mut self.low] {
            v.clear();
            v.resize(n, 0);
        }
        self.parent.clear();
        self.parent.resize(n, NO_PARENT);
        self.is_articulation.clear();
        self.is_articulation.resize(n, false);
        self.edge_stack.clear();
        self.timestamp = 0;
        self.components.clear();
        self.bridges.clear();
    }

    /// Runs the search over the whole graph, one DFS tree per connected component.
    pub fn run<A: Adjacency>(&mut self, adj: &A) -> Biconnectivity<usize> {
        let n = adj.vertex_count();
        self.reset(n);
        for root in 0..n {
            if self.dfn[root] == 0 {
                self.visit(adj, root);
            }
        }
        assert!(self.edge_stack.is_empty(), "edges left outside any component");
        let result = Biconnectivity {
            articulation_points: (0..n).filter(|&u| self.is_articulation[u]).collect(),
            components: self
                .components
                .iter()
                .map(|c| c.iter().copied().collect())
                .collect(),
            bridges: self.bridges.iter().copied().collect(),
        };
        log::debug!(
            "biconnectivity on {n} vertices: {} articulation points, {} components, {} bridges",
            result.articulation_points.len(),
            result.components.len(),
            result.bridges.len()
        );
        result
    }

    fn visit<A: Adjacency>(&mut self, adj: &A, u: usize) {
        self.timestamp += 1;
        self.dfn[u] = self.timestamp;
        self.low[u] = self.timestamp;
        let p = self.parent[u];
        let mut skipped_parent = false;
        let mut children = 0;
        for (v, _) in adj.neighbors(u) {
            if v == p && !skipped_parent {
                skipped_parent = true;
                continue;
            }
            if self.dfn[v] == 0 {
                children += 1;
                self.parent[v] = u;
                self.edge_stack.push((u, v));
                self.visit(adj, v);
                self.low[u] = self.low[u].min(self.low[v]);
                if self.low[v] >= self.dfn[u] {
                    if p != NO_PARENT {
                        self.is_articulation[u] = true;
                    }
                    self.close_component(u, v);
                }
                if self.low[v] > self.dfn[u] {
                    self.bridges.insert((u.min(v), u.max(v)));
                }
            } else if self.dfn[v] < self.dfn[u] {
                // Back edge to an ancestor.
                self.edge_stack.push((u, v));
                self.low[u] = self.low[u].min(self.dfn[v]);
            }
        }
        if p == NO_PARENT && children >= 2 {
            self.is_articulation[u] = true;
        }
    }

    /// Pops edges up to and including (u, v) as one component.
    fn close_component(&mut self, u: usize, v: usize) {
        let mut component = BTreeSet::new();
        while let Some((a, b)) = self.edge_stack.pop() {
            component.insert((a.min(b), a.max(b)));
            if (a, b) == (u, v) {
                break;
            }
        }
        log::trace!("closed component at {u}-{v}: {component:?}");
        self.components.push(component);
    }

    /// Discovery times of the last run, zero for vertices it never reached.
    pub fn dfn(&self) -> &[usize] {
        &self.dfn
    }

    /// Low-link values of the last run.
    pub fn low(&self) -> &[usize] {
        &self.low
    }

    /// Parent of u in the DFS forest of the last run, None for roots.
    pub fn parent(&self, u: usize) -> Option<usize> {
        Some(self.parent[u]).filter(|&p| p != NO_PARENT)
    }

    /// The DFS forest of the last run rendered as a tree, with dfn and low of every vertex.
    pub fn forest(&self) -> String {
        let builder = TreeBuilder::new();
        {
            let _b = builder.add_branch("DFS forest");
            for root in 0..self.dfn.len() {
                if self.dfn[root] != 0 && self.parent[root] == NO_PARENT {
                    self.forest_dbg(root, &builder);
                }
            }
        }
        builder.string()
    }

    fn forest_dbg<T: AsTree>(&self, u: usize, tree: &T) {
        add_branch_to!(*tree, "[{u}] dfn {} low {}", self.dfn[u], self.low[u]);
        let mut children: Vec<usize> = (0..self.parent.len())
            .filter(|&v| self.parent[v] == u)
            .collect();
        children.sort_by_key(|&v| self.dfn[v]);
        for v in children {
            self.forest_dbg(v, tree);
        }
    }
}
