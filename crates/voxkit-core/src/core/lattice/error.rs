use super::point::Point;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtentError {
    #[error("Invalid size {width}x{height}x{depth}: every axis needs at least one sample")]
    InvalidSize {
        width: usize,
        height: usize,
        depth: usize,
    },

    #[error("Invalid extent from {start} with size {size:?}: {reason}")]
    InvalidExtent {
        start: Point,
        size: [usize; 3],
        reason: &'static str,
    },
}
