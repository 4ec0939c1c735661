use crate::engine::{Algorithm, InPlaceAlgorithm};
use crate::image::{DomainKind, ImageError, Sample, TypedState, Value, ValueType, Variant};

/// Sets every stored sample to one value.
///
/// A complex value can only fill complex data; a real value fills either.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub value: Value,
}

impl Fill {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Algorithm for Fill {
    fn name(&self) -> &str {
        "fill"
    }

    fn supports(&self, variant: Variant) -> bool {
        self.value.value_type() == ValueType::Real || variant.value_type == ValueType::Complex
    }
}

impl InPlaceAlgorithm for Fill {
    fn visit_mut<T: Sample, D: DomainKind>(
        &mut self,
        state: &mut TypedState<T, D>,
    ) -> Result<(), ImageError> {
        let v = T::from_value(self.value).ok_or(ImageError::ValueTypeMismatch {
            expected: T::VALUE_TYPE,
            found: self.value.value_type(),
        })?;
        state.map_in_place(|_| v);
        Ok(())
    }
}
