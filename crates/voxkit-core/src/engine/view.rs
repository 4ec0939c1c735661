use super::algorithm::ConstAlgorithm;
use super::dispatch;
use crate::core::lattice::{Extent, ExtentIterator, Point, Size};
use crate::image::{
    Complex, Domain, ImageError, ImageState, PixelSampling, Value, ValueType, Variant,
};

/// Read-only access to an image's state, borrowed for the duration of one
/// observer callback.
///
/// A view cannot write samples, change the extent or yield an
/// [`ImageHandle`](super::ImageHandle), so observers can neither mutate the
/// image nor keep it alive.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a> {
    state: &'a ImageState,
}

impl<'a> ImageView<'a> {
    pub(crate) fn new(state: &'a ImageState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &'a ImageState {
        self.state
    }

    pub fn variant(&self) -> Variant {
        self.state.variant()
    }

    pub fn value_type(&self) -> ValueType {
        self.state.value_type()
    }

    pub fn domain(&self) -> Domain {
        self.state.domain()
    }

    pub fn extent(&self) -> Extent {
        self.state.extent()
    }

    pub fn size(&self) -> Size {
        self.state.size()
    }

    pub fn sampling(&self) -> PixelSampling {
        self.state.sampling()
    }

    pub fn points(&self) -> ExtentIterator {
        self.state.points()
    }

    pub fn get_value(&self, p: Point) -> Result<Value, ImageError> {
        self.state.get_value(p)
    }

    pub fn get_real(&self, p: Point) -> Result<f64, ImageError> {
        match self.get_value(p)? {
            Value::Real(v) => Ok(v),
            Value::Complex(_) => Err(ImageError::ValueTypeMismatch {
                expected: ValueType::Real,
                found: ValueType::Complex,
            }),
        }
    }

    pub fn get_complex(&self, p: Point) -> Result<Complex<f64>, ImageError> {
        match self.get_value(p)? {
            Value::Complex(c) => Ok(c),
            Value::Real(_) => Err(ImageError::ValueTypeMismatch {
                expected: ValueType::Complex,
                found: ValueType::Real,
            }),
        }
    }

    /// Runs a read-only algorithm over the viewed state.
    pub fn apply_const<A: ConstAlgorithm>(&self, algorithm: &mut A) -> Result<(), ImageError> {
        dispatch::apply_const(self.state, algorithm)
    }
}
