use thiserror::Error;

use crate::Weight;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// No vertex carries the given label. The label is rendered with `Debug`.
    #[error("start vertex not found: {0}")]
    VertexNotFound(String),

    #[error("vertex index {index} out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { index: usize, vertex_count: usize },

    /// The spanning tree could only reach `reached` of the `total` vertices.
    #[error("graph is disconnected: spanning tree reached {reached} of {total} vertices")]
    Disconnected { reached: usize, total: usize },

    #[error("invalid weight range {min}..={max}")]
    InvalidWeightRange { min: Weight, max: Weight },
}

pub type Result<T> = std::result::Result<T, GraphError>;

/// Checks that `index` names a vertex of a graph with `vertex_count` vertices.
pub(crate) fn check_vertex(index: usize, vertex_count: usize) -> Result<()> {
    if index < vertex_count {
        Ok(())
    } else {
        Err(GraphError::VertexOutOfRange {
            index,
            vertex_count,
        })
    }
}
