use super::domain::{Domain, DomainKind, Frequency, HalfFrequency, Spatial, Variant};
use super::error::ImageError;
use super::sampling::PixelSampling;
use super::state::TypedState;
use super::value::{Complex, Sample, Value, ValueType};
use crate::core::lattice::{Extent, ExtentIterator, Point, Size};
use std::any::Any;

/// Runs `$body` with `$s` bound to the concrete [`TypedState`] inside an
/// [`ImageState`]. Every arm is monomorphised, so the match is the only
/// runtime branch.
macro_rules! visit_state {
    ($state:expr, $s:ident => $body:expr) => {
        match $state {
            $crate::image::ImageState::RealSpatial($s) => $body,
            $crate::image::ImageState::ComplexSpatial($s) => $body,
            $crate::image::ImageState::RealFrequency($s) => $body,
            $crate::image::ImageState::ComplexFrequency($s) => $body,
            $crate::image::ImageState::RealHalfFrequency($s) => $body,
            $crate::image::ImageState::ComplexHalfFrequency($s) => $body,
        }
    };
}
pub(crate) use visit_state;

/// A typed image buffer whose `(value type, domain)` is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageState {
    RealSpatial(TypedState<f64, Spatial>),
    ComplexSpatial(TypedState<Complex<f64>, Spatial>),
    RealFrequency(TypedState<f64, Frequency>),
    ComplexFrequency(TypedState<Complex<f64>, Frequency>),
    RealHalfFrequency(TypedState<f64, HalfFrequency>),
    ComplexHalfFrequency(TypedState<Complex<f64>, HalfFrequency>),
}

impl ImageState {
    pub fn new(
        extent: Extent,
        value_type: ValueType,
        domain: Domain,
        sampling: PixelSampling,
    ) -> Result<Self, ImageError> {
        Ok(match (value_type, domain) {
            (ValueType::Real, Domain::Spatial) => {
                Self::RealSpatial(TypedState::new(extent, sampling)?)
            }
            (ValueType::Complex, Domain::Spatial) => {
                Self::ComplexSpatial(TypedState::new(extent, sampling)?)
            }
            (ValueType::Real, Domain::Frequency) => {
                Self::RealFrequency(TypedState::new(extent, sampling)?)
            }
            (ValueType::Complex, Domain::Frequency) => {
                Self::ComplexFrequency(TypedState::new(extent, sampling)?)
            }
            (ValueType::Real, Domain::HalfFrequency) => {
                Self::RealHalfFrequency(TypedState::new(extent, sampling)?)
            }
            (ValueType::Complex, Domain::HalfFrequency) => {
                Self::ComplexHalfFrequency(TypedState::new(extent, sampling)?)
            }
        })
    }

    pub fn variant(&self) -> Variant {
        visit_state!(self, s => s.variant())
    }

    pub fn value_type(&self) -> ValueType {
        self.variant().value_type
    }

    pub fn domain(&self) -> Domain {
        self.variant().domain
    }

    /// Extent of addressable points.
    pub fn extent(&self) -> Extent {
        visit_state!(self, s => s.logical_extent())
    }

    /// Extent of the stored samples; differs from [`extent`](Self::extent)
    /// only for half-frequency data.
    pub fn storage_extent(&self) -> Extent {
        visit_state!(self, s => s.extent())
    }

    pub fn size(&self) -> Size {
        self.extent().size()
    }

    pub fn sampling(&self) -> PixelSampling {
        visit_state!(self, s => s.sampling())
    }

    pub fn spatial_origin(&self) -> Point {
        visit_state!(self, s => s.spatial_origin())
    }

    /// Number of stored samples.
    pub fn len(&self) -> usize {
        visit_state!(self, s => s.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn points(&self) -> ExtentIterator {
        self.extent().iter()
    }

    pub fn get_value(&self, p: Point) -> Result<Value, ImageError> {
        visit_state!(self, s => s.value(p).map(Sample::into_value))
    }

    /// Writes one sample. The value must have the state's value type.
    pub fn set_value(&mut self, p: Point, value: Value) -> Result<(), ImageError> {
        let expected = self.value_type();
        if value.value_type() != expected {
            return Err(ImageError::ValueTypeMismatch {
                expected,
                found: value.value_type(),
            });
        }
        visit_state!(self, s => set_typed(s, p, value))
    }

    pub fn resize(&mut self, extent: Extent) -> Result<(), ImageError> {
        visit_state!(self, s => s.resize(extent))
    }

    pub fn extract(&self, region: Extent) -> Result<Self, ImageError> {
        visit_state!(self, s => s.extract(region).map(Self::from))
    }

    pub fn downcast_ref<T: Sample, D: DomainKind>(&self) -> Option<&TypedState<T, D>> {
        visit_state!(self, s => (s as &dyn Any).downcast_ref())
    }

    pub fn downcast_mut<T: Sample, D: DomainKind>(&mut self) -> Option<&mut TypedState<T, D>> {
        visit_state!(self, s => (s as &mut dyn Any).downcast_mut())
    }
}

fn set_typed<T: Sample, D: DomainKind>(
    state: &mut TypedState<T, D>,
    p: Point,
    value: Value,
) -> Result<(), ImageError> {
    let v = T::from_value(value).ok_or(ImageError::ValueTypeMismatch {
        expected: T::VALUE_TYPE,
        found: value.value_type(),
    })?;
    state.set_value(p, v)
}

impl<T: Sample, D: DomainKind> From<TypedState<T, D>> for ImageState {
    fn from(state: TypedState<T, D>) -> Self {
        T::wrap(state)
    }
}
