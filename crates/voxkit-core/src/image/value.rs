use super::domain::DomainKind;
use super::state::TypedState;
use super::variant::ImageState;
pub use nalgebra::Complex;
use std::fmt;
use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Real,
    Complex,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Real => "real",
                Self::Complex => "complex",
            }
        )
    }
}

/// A single sample, tagged with its value type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Real(f64),
    Complex(Complex<f64>),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Real(_) => ValueType::Real,
            Self::Complex(_) => ValueType::Complex,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(v) => Some(*v),
            Self::Complex(_) => None,
        }
    }

    pub fn as_complex(&self) -> Option<Complex<f64>> {
        match self {
            Self::Real(_) => None,
            Self::Complex(c) => Some(*c),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<Complex<f64>> for Value {
    fn from(c: Complex<f64>) -> Self {
        Self::Complex(c)
    }
}

/// Scalar stored in a typed image buffer.
///
/// Implemented for `f64` (real) and `Complex<f64>`. The associated functions
/// let generic algorithms stay free of per-sample type checks.
pub trait Sample:
    Copy
    + Default
    + PartialEq
    + Debug
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
{
    const VALUE_TYPE: ValueType;

    /// Converts a value of the same or a narrower type. Complex values never
    /// convert to real samples.
    fn from_value(value: Value) -> Option<Self>;

    fn into_value(self) -> Value;

    fn from_real(v: f64) -> Self;

    /// Real samples keep only the real part.
    fn from_complex(c: Complex<f64>) -> Self;

    fn to_complex(self) -> Complex<f64>;

    fn conj(self) -> Self;

    fn amplitude(self) -> f64;

    /// The sample itself for real data, its amplitude for complex data.
    fn magnitude(self) -> f64;

    fn wrap<D: DomainKind>(state: TypedState<Self, D>) -> ImageState;
}

impl Sample for f64 {
    const VALUE_TYPE: ValueType = ValueType::Real;

    #[inline]
    fn from_value(value: Value) -> Option<Self> {
        value.as_real()
    }

    #[inline]
    fn into_value(self) -> Value {
        Value::Real(self)
    }

    #[inline]
    fn from_real(v: f64) -> Self {
        v
    }

    #[inline]
    fn from_complex(c: Complex<f64>) -> Self {
        c.re
    }

    #[inline]
    fn to_complex(self) -> Complex<f64> {
        Complex::new(self, 0.0)
    }

    #[inline]
    fn conj(self) -> Self {
        self
    }

    #[inline]
    fn amplitude(self) -> f64 {
        self.abs()
    }

    #[inline]
    fn magnitude(self) -> f64 {
        self
    }

    fn wrap<D: DomainKind>(state: TypedState<Self, D>) -> ImageState {
        D::wrap_real(state)
    }
}

impl Sample for Complex<f64> {
    const VALUE_TYPE: ValueType = ValueType::Complex;

    #[inline]
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Real(v) => Some(Complex::new(v, 0.0)),
            Value::Complex(c) => Some(c),
        }
    }

    #[inline]
    fn into_value(self) -> Value {
        Value::Complex(self)
    }

    #[inline]
    fn from_real(v: f64) -> Self {
        Complex::new(v, 0.0)
    }

    #[inline]
    fn from_complex(c: Complex<f64>) -> Self {
        c
    }

    #[inline]
    fn to_complex(self) -> Complex<f64> {
        self
    }

    #[inline]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }

    #[inline]
    fn amplitude(self) -> f64 {
        self.norm()
    }

    #[inline]
    fn magnitude(self) -> f64 {
        self.norm()
    }

    fn wrap<D: DomainKind>(state: TypedState<Self, D>) -> ImageState {
        D::wrap_complex(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complex_values_never_narrow_to_real() {
        assert_eq!(f64::from_value(Value::Real(2.0)), Some(2.0));
        assert_eq!(f64::from_value(Value::Complex(Complex::new(2.0, 0.0))), None);
    }

    #[test]
    fn real_values_widen_to_complex() {
        assert_eq!(
            Complex::<f64>::from_value(Value::Real(1.5)),
            Some(Complex::new(1.5, 0.0))
        );
    }

    #[test]
    fn conjugate_and_amplitude() {
        let c = Complex::new(3.0, -4.0);
        assert_eq!(Sample::conj(c), Complex::new(3.0, 4.0));
        assert_eq!(Sample::amplitude(c), 5.0);
        assert_eq!(Sample::conj(-2.0f64), -2.0);
        assert_eq!(Sample::amplitude(-2.0f64), 2.0);
    }

    #[test]
    fn value_reports_its_type() {
        assert_eq!(Value::from(1.0).value_type(), ValueType::Real);
        assert_eq!(
            Value::from(Complex::new(0.0, 1.0)).value_type(),
            ValueType::Complex
        );
        assert_eq!(ValueType::Complex.to_string(), "complex");
    }
}
