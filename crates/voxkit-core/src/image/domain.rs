use super::state::TypedState;
use super::value::{Complex, ValueType};
use super::variant::ImageState;
use std::fmt;
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Spatial,
    /// Full frequency spectrum.
    Frequency,
    /// Hermitian-symmetric spectrum stored as one half.
    HalfFrequency,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Spatial => "spatial",
                Self::Frequency => "frequency",
                Self::HalfFrequency => "half-frequency",
            }
        )
    }
}

/// The runtime `(value type, domain)` tag of an image state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variant {
    pub value_type: ValueType,
    pub domain: Domain,
}

impl Variant {
    pub const fn new(value_type: ValueType, domain: Domain) -> Self {
        Self { value_type, domain }
    }

    /// Every variant an [`ImageState`] can hold.
    pub const ALL: [Variant; 6] = [
        Variant::new(ValueType::Real, Domain::Spatial),
        Variant::new(ValueType::Complex, Domain::Spatial),
        Variant::new(ValueType::Real, Domain::Frequency),
        Variant::new(ValueType::Complex, Domain::Frequency),
        Variant::new(ValueType::Real, Domain::HalfFrequency),
        Variant::new(ValueType::Complex, Domain::HalfFrequency),
    ];

    pub fn is_spatial(&self) -> bool {
        self.domain == Domain::Spatial
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value_type, self.domain)
    }
}

/// Compile-time domain marker for [`TypedState`].
pub trait DomainKind: Debug + Clone + Copy + Default + Send + Sync + 'static {
    const DOMAIN: Domain;

    fn wrap_real(state: TypedState<f64, Self>) -> ImageState;

    fn wrap_complex(state: TypedState<Complex<f64>, Self>) -> ImageState;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spatial;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frequency;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HalfFrequency;

impl DomainKind for Spatial {
    const DOMAIN: Domain = Domain::Spatial;

    fn wrap_real(state: TypedState<f64, Self>) -> ImageState {
        ImageState::RealSpatial(state)
    }

    fn wrap_complex(state: TypedState<Complex<f64>, Self>) -> ImageState {
        ImageState::ComplexSpatial(state)
    }
}

impl DomainKind for Frequency {
    const DOMAIN: Domain = Domain::Frequency;

    fn wrap_real(state: TypedState<f64, Self>) -> ImageState {
        ImageState::RealFrequency(state)
    }

    fn wrap_complex(state: TypedState<Complex<f64>, Self>) -> ImageState {
        ImageState::ComplexFrequency(state)
    }
}

impl DomainKind for HalfFrequency {
    const DOMAIN: Domain = Domain::HalfFrequency;

    fn wrap_real(state: TypedState<f64, Self>) -> ImageState {
        ImageState::RealHalfFrequency(state)
    }

    fn wrap_complex(state: TypedState<Complex<f64>, Self>) -> ImageState {
        ImageState::ComplexHalfFrequency(state)
    }
}
