use thiserror::Error;

/// Failures reported by the strict (`try_*`) graph API.
///
/// The default graph operations never produce these: out-of-range indices
/// are ignored there, the way the benchmark drivers expect.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Vertex index {index} out of range for a graph with {vertex_count} vertices")]
    InvalidVertexIndex { index: usize, vertex_count: usize },

    #[error("Self-loop on vertex {0} is not supported")]
    SelfLoop(usize),

    #[error("Edge weight {0} is negative")]
    InvalidWeight(String),

    #[error("Negative vertex count {0}")]
    NegativeVertexCount(i64),

    #[error("Matrix row {row} has {len} cells, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("Undirected matrix is not symmetric at ({0}, {1})")]
    AsymmetricMatrix(usize, usize),

    #[error("Powerset of {vertex_count} vertices does not fit a {max}-bit mask")]
    TooManyVertices { vertex_count: usize, max: usize },

    #[error("A {vertex_count}-vertex matrix overflows; at most {max} vertices are supported")]
    MatrixTooLarge { vertex_count: usize, max: usize },

    #[error("Edge probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
}
