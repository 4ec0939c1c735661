use crate::engine::{Algorithm, InPlaceAlgorithm};
use crate::image::{DomainKind, ImageError, Sample, TypedState, Variant};

/// Zeroes every spatial sample whose magnitude lies below `level`.
///
/// Real samples compare their signed value, complex samples their amplitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub level: f64,
}

impl Threshold {
    pub fn new(level: f64) -> Self {
        Self { level }
    }
}

impl Algorithm for Threshold {
    fn name(&self) -> &str {
        "threshold"
    }

    fn supports(&self, variant: Variant) -> bool {
        variant.is_spatial()
    }
}

impl InPlaceAlgorithm for Threshold {
    fn visit_mut<T: Sample, D: DomainKind>(
        &mut self,
        state: &mut TypedState<T, D>,
    ) -> Result<(), ImageError> {
        let level = self.level;
        state.map_in_place(|v| if v.magnitude() < level { T::default() } else { v });
        Ok(())
    }
}
