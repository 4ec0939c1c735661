//! Integer index space of image data: points, sizes, extents, their
//! deterministic scan order, and the half-frequency storage mapping.

pub mod error;
pub mod extent;
pub mod half;
pub mod iter;
pub mod point;
pub mod size;

pub use error::ExtentError;
pub use extent::Extent;
pub use half::{HalfFrequencyLayout, HalfIndex};
pub use iter::ExtentIterator;
pub use point::{AxisMask, Point};
pub use size::Size;
