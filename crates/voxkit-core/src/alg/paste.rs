use crate::engine::{Algorithm, InPlaceAlgorithm};
use crate::image::{
    Domain, DomainKind, ImageError, ImageState, Sample, TypedState, ValueType, Variant,
    visit_state,
};

/// Copies the samples of `source` into the visited image wherever both
/// extents overlap.
///
/// Both images must share a domain other than half-frequency. Real samples
/// widen into complex targets; complex samples never narrow.
#[derive(Debug, Clone, Copy)]
pub struct Paste<'a> {
    source: &'a ImageState,
}

impl<'a> Paste<'a> {
    pub fn new(source: &'a ImageState) -> Self {
        Self { source }
    }
}

impl Algorithm for Paste<'_> {
    fn name(&self) -> &str {
        "paste"
    }

    fn supports(&self, variant: Variant) -> bool {
        let source = self.source.variant();
        variant.domain == source.domain
            && variant.domain != Domain::HalfFrequency
            && (variant.value_type == ValueType::Complex || source.value_type == ValueType::Real)
    }
}

impl InPlaceAlgorithm for Paste<'_> {
    fn visit_mut<T: Sample, D: DomainKind>(
        &mut self,
        target: &mut TypedState<T, D>,
    ) -> Result<(), ImageError> {
        visit_state!(self.source, source => paste_into(source, target))
    }
}

fn paste_into<S, T, D, E>(
    source: &TypedState<S, E>,
    target: &mut TypedState<T, D>,
) -> Result<(), ImageError>
where
    S: Sample,
    T: Sample,
    D: DomainKind,
    E: DomainKind,
{
    let Some(overlap) = source.extent().intersection(&target.extent()) else {
        return Ok(());
    };
    for p in overlap.iter() {
        let v = source.value(p)?.into_value();
        let v = T::from_value(v).ok_or(ImageError::ValueTypeMismatch {
            expected: T::VALUE_TYPE,
            found: S::VALUE_TYPE,
        })?;
        target.set_value(p, v)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lattice::{Extent, Point, Size};
    use crate::engine::dispatch::apply_in_place;
    use crate::image::{Complex, PixelSampling, Value};

    fn state(start: Point, value_type: ValueType, domain: Domain) -> ImageState {
        let extent = Extent::from_size(start, Size::new(3, 3, 1).unwrap()).unwrap();
        ImageState::new(extent, value_type, domain, PixelSampling::default()).unwrap()
    }

    #[test]
    fn copies_only_the_overlap() {
        let mut source = state(Point::new(2, 2, 0), ValueType::Real, Domain::Spatial);
        for p in source.points() {
            source.set_value(p, Value::Real(1.0)).unwrap();
        }
        let mut target = state(Point::ORIGIN, ValueType::Real, Domain::Spatial);
        apply_in_place(&mut target, &mut Paste::new(&source)).unwrap();

        let ones: Vec<_> = target
            .points()
            .filter(|p| target.get_value(*p).unwrap() == Value::Real(1.0))
            .collect();
        assert_eq!(ones, vec![Point::new(2, 2, 0)]);
    }

    #[test]
    fn real_source_widens_into_complex_target() {
        let mut source = state(Point::ORIGIN, ValueType::Real, Domain::Frequency);
        source.set_value(Point::new(1, 1, 0), Value::Real(2.0)).unwrap();
        let mut target = state(Point::ORIGIN, ValueType::Complex, Domain::Frequency);
        apply_in_place(&mut target, &mut Paste::new(&source)).unwrap();
        assert_eq!(
            target.get_value(Point::new(1, 1, 0)).unwrap(),
            Value::Complex(Complex::new(2.0, 0.0))
        );
    }

    #[test]
    fn mismatched_domain_or_narrowing_is_unsupported() {
        let source = state(Point::ORIGIN, ValueType::Complex, Domain::Spatial);
        let mut real = state(Point::ORIGIN, ValueType::Real, Domain::Spatial);
        let mut freq = state(Point::ORIGIN, ValueType::Complex, Domain::Frequency);
        for target in [&mut real, &mut freq] {
            assert!(matches!(
                apply_in_place(target, &mut Paste::new(&source)),
                Err(ImageError::UnsupportedVariant { .. })
            ));
        }
    }
}
