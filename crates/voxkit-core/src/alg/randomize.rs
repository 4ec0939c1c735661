use crate::engine::{Algorithm, InPlaceAlgorithm};
use crate::image::{Complex, DomainKind, ImageError, Sample, TypedState, ValueType};
use rand::distributions::Uniform;
use rand::prelude::*;
use tracing::trace;

/// Fills samples with uniform values in `[low, high]` from a seeded generator.
///
/// Samples are drawn in scan order, so the same seed reproduces the same image.
/// Complex samples draw the real part first, then the imaginary part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Randomize {
    pub seed: u64,
    pub low: f64,
    pub high: f64,
}

impl Randomize {
    pub fn new(seed: u64, low: f64, high: f64) -> Self {
        Self { seed, low, high }
    }
}

impl Algorithm for Randomize {
    fn name(&self) -> &str {
        "randomize"
    }
}

impl InPlaceAlgorithm for Randomize {
    fn visit_mut<T: Sample, D: DomainKind>(
        &mut self,
        state: &mut TypedState<T, D>,
    ) -> Result<(), ImageError> {
        if !(self.low.is_finite() && self.high.is_finite() && self.low <= self.high) {
            return Err(ImageError::InvalidParameter(format!(
                "random range [{}, {}] is empty or not finite",
                self.low, self.high
            )));
        }
        // `Uniform` scales the span by 1 / (1 - EPSILON) and panics on overflow.
        if !((self.high - self.low) / (1.0 - f64::EPSILON)).is_finite() {
            return Err(ImageError::InvalidParameter(format!(
                "random range [{}, {}] is too wide",
                self.low, self.high
            )));
        }
        trace!(seed = self.seed, samples = state.len(), "Drawing random samples.");
        let mut rng = StdRng::seed_from_u64(self.seed);
        let dist = Uniform::new_inclusive(self.low, self.high);
        for v in state.data_mut() {
            let re = dist.sample(&mut rng);
            let im = match T::VALUE_TYPE {
                ValueType::Real => 0.0,
                ValueType::Complex => dist.sample(&mut rng),
            };
            *v = T::from_complex(Complex::new(re, im));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lattice::{Extent, Size};
    use crate::engine::dispatch::apply_in_place;
    use crate::image::{Domain, ImageState, PixelSampling, Spatial};

    fn state(value_type: ValueType) -> ImageState {
        let extent = Extent::centered(Size::new(5, 4, 3).unwrap()).unwrap();
        ImageState::new(extent, value_type, Domain::Spatial, PixelSampling::default()).unwrap()
    }

    #[test]
    fn same_seed_reproduces_the_image() {
        let mut a = state(ValueType::Real);
        let mut b = state(ValueType::Real);
        apply_in_place(&mut a, &mut Randomize::new(42, -1.0, 1.0)).unwrap();
        apply_in_place(&mut b, &mut Randomize::new(42, -1.0, 1.0)).unwrap();
        assert_eq!(a, b);

        let mut c = state(ValueType::Real);
        apply_in_place(&mut c, &mut Randomize::new(43, -1.0, 1.0)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn values_stay_in_range() {
        let mut s = state(ValueType::Complex);
        apply_in_place(&mut s, &mut Randomize::new(7, 2.0, 3.0)).unwrap();
        let typed = s.downcast_ref::<Complex<f64>, Spatial>().unwrap();
        for c in typed.data() {
            assert!((2.0..=3.0).contains(&c.re));
            assert!((2.0..=3.0).contains(&c.im));
        }
    }

    #[test]
    fn degenerate_range_fills_constant_and_reversed_range_fails() {
        let mut s = state(ValueType::Real);
        apply_in_place(&mut s, &mut Randomize::new(1, 4.0, 4.0)).unwrap();
        let typed = s.downcast_ref::<f64, Spatial>().unwrap();
        assert!(typed.data().iter().all(|v| *v == 4.0));

        assert!(matches!(
            apply_in_place(&mut s, &mut Randomize::new(1, 1.0, 0.0)),
            Err(ImageError::InvalidParameter(_))
        ));
    }

    #[test]
    fn overflowing_range_is_rejected_and_data_kept() {
        let mut s = state(ValueType::Real);
        apply_in_place(&mut s, &mut Randomize::new(3, 1.0, 1.0)).unwrap();
        for (low, high) in [(-f64::MAX, f64::MAX), (-f64::MAX, f64::MAX / 2.0)] {
            assert!(matches!(
                apply_in_place(&mut s, &mut Randomize::new(1, low, high)),
                Err(ImageError::InvalidParameter(_))
            ));
        }
        let typed = s.downcast_ref::<f64, Spatial>().unwrap();
        assert!(typed.data().iter().all(|v| *v == 1.0));

        let mut wide = state(ValueType::Real);
        apply_in_place(&mut wide, &mut Randomize::new(1, 0.0, f64::MAX / 2.0)).unwrap();
    }
}
