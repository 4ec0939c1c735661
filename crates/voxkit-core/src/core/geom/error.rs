use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Arithmetic error: {0}")]
    Arithmetic(&'static str),

    #[error("Degenerate input: {0}")]
    DegenerateInput(&'static str),

    #[error("Matrix is singular (determinant {determinant:e})")]
    SingularMatrix { determinant: f64 },

    #[error("Parallel configuration: {0}")]
    Parallel(&'static str),
}
