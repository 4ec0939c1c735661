use crate::engine::{Algorithm, OutOfPlaceAlgorithm};
use crate::image::{
    Complex, Domain, DomainKind, ImageError, ImageState, Sample, TypedState, Variant,
};

fn convert<T, U, D, F>(state: &TypedState<T, D>, f: F) -> Result<ImageState, ImageError>
where
    T: Sample,
    U: Sample,
    D: DomainKind,
    F: Fn(T) -> U,
{
    let data = state.data().iter().map(|v| f(*v)).collect();
    let mut out = TypedState::<U, D>::from_data(state.logical_extent(), state.sampling(), data)?;
    out.set_spatial_origin(state.spatial_origin());
    Ok(out.into())
}

/// Widens samples to complex values, keeping the domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToComplex;

impl Algorithm for ToComplex {
    fn name(&self) -> &str {
        "to_complex"
    }
}

impl OutOfPlaceAlgorithm for ToComplex {
    fn visit_into<T: Sample, D: DomainKind>(
        &mut self,
        state: &TypedState<T, D>,
    ) -> Result<ImageState, ImageError> {
        convert(state, T::to_complex)
    }
}

/// Component of a complex sample kept by [`ToReal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexPart {
    Real,
    Imaginary,
    Amplitude,
    Phase,
}

impl ComplexPart {
    pub fn extract(self, c: Complex<f64>) -> f64 {
        match self {
            Self::Real => c.re,
            Self::Imaginary => c.im,
            Self::Amplitude => c.norm(),
            Self::Phase => c.arg(),
        }
    }

    /// Whether the part of a Hermitian spectrum is itself symmetric, and so
    /// can be stored as real half-frequency data.
    fn is_even(self) -> bool {
        matches!(self, Self::Real | Self::Amplitude)
    }
}

/// Reduces samples to one real component, keeping the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToReal {
    pub part: ComplexPart,
}

impl ToReal {
    pub fn new(part: ComplexPart) -> Self {
        Self { part }
    }
}

impl Algorithm for ToReal {
    fn name(&self) -> &str {
        "to_real"
    }

    fn supports(&self, variant: Variant) -> bool {
        variant.domain != Domain::HalfFrequency || self.part.is_even()
    }
}

impl OutOfPlaceAlgorithm for ToReal {
    fn visit_into<T: Sample, D: DomainKind>(
        &mut self,
        state: &TypedState<T, D>,
    ) -> Result<ImageState, ImageError> {
        let part = self.part;
        convert(state, |v: T| part.extract(v.to_complex()))
    }
}
