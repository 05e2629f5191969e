pub mod biconnected;
pub mod error;
pub mod generate;
pub mod graph;
pub mod shortest_path;
pub mod spanning_tree;
pub mod storage;
pub mod traversal;

pub use biconnected::{Biconnectivity, TarjanState};
pub use error::{GraphError, Result};
pub use graph::Graph;
pub use shortest_path::{Route, ShortestPaths};
pub use spanning_tree::{SpanningTree, TreeEdge};
pub use storage::{Adjacency, AdjacencyLists, AdjacencyMatrix, Distance, Weight};

/// Graph stored as adjacency lists instead of a dense matrix. Algorithms give the same results.
pub type SparseGraph<L> = Graph<L, AdjacencyLists>;
