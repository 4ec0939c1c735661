use super::domain::Variant;
use super::value::ValueType;
use crate::core::geom::GeometryError;
use crate::core::lattice::{Extent, ExtentError, Point};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Point {point} lies outside extent {extent}")]
    OutOfBounds { point: Point, extent: Extent },

    #[error("Algorithm '{algorithm}' does not support {variant} data")]
    UnsupportedVariant { algorithm: String, variant: Variant },

    #[error("Value type mismatch: expected {expected}, found {found}")]
    ValueTypeMismatch {
        expected: ValueType,
        found: ValueType,
    },

    #[error("Buffer holds {found} samples but the extent needs {expected}")]
    BufferLength { expected: usize, found: usize },

    #[error("Invalid algorithm parameter: {0}")]
    InvalidParameter(String),

    #[error("Image data has already been destroyed")]
    DataDestroyed,

    #[error("Image data is borrowed by an operation in progress")]
    Busy,

    #[error("Observer is already handling a notification")]
    ObserverBusy,

    #[error("Observer rejected the update: {0}")]
    Observer(String),

    #[error("Extent error: {source}")]
    Extent {
        #[from]
        source: ExtentError,
    },

    #[error("Geometry error: {source}")]
    Geometry {
        #[from]
        source: GeometryError,
    },
}

impl ImageError {
    pub fn unsupported(algorithm: &str, variant: Variant) -> Self {
        Self::UnsupportedVariant {
            algorithm: algorithm.to_string(),
            variant,
        }
    }
}
