use crate::engine::{Algorithm, InPlaceAlgorithm};
use crate::image::{DomainKind, ImageError, Sample, TypedState, Value, ValueType, Variant};

/// Multiplies every sample by a real factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub factor: f64,
}

impl Scale {
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }
}

impl Algorithm for Scale {
    fn name(&self) -> &str {
        "scale"
    }
}

impl InPlaceAlgorithm for Scale {
    fn visit_mut<T: Sample, D: DomainKind>(
        &mut self,
        state: &mut TypedState<T, D>,
    ) -> Result<(), ImageError> {
        let factor = self.factor;
        state.map_in_place(|v| v * factor);
        Ok(())
    }
}

/// Adds a constant to every stored sample.
///
/// On half-frequency data the mirrored half sees the conjugate of the
/// constant, since only the stored half is shifted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub value: Value,
}

impl Offset {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Algorithm for Offset {
    fn name(&self) -> &str {
        "offset"
    }

    fn supports(&self, variant: Variant) -> bool {
        self.value.value_type() == ValueType::Real || variant.value_type == ValueType::Complex
    }
}

impl InPlaceAlgorithm for Offset {
    fn visit_mut<T: Sample, D: DomainKind>(
        &mut self,
        state: &mut TypedState<T, D>,
    ) -> Result<(), ImageError> {
        let offset = T::from_value(self.value).ok_or(ImageError::ValueTypeMismatch {
            expected: T::VALUE_TYPE,
            found: self.value.value_type(),
        })?;
        state.map_in_place(|v| v + offset);
        Ok(())
    }
}
