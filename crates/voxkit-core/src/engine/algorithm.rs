use crate::image::{DomainKind, ImageError, ImageState, Sample, TypedState, Variant};

/// Capabilities shared by every algorithm the engine can dispatch.
pub trait Algorithm {
    fn name(&self) -> &str;

    /// Whether the algorithm is defined for data of `variant`. Dispatch checks
    /// this before any buffer is touched.
    fn supports(&self, _variant: Variant) -> bool {
        true
    }
}

/// Mutates a concrete buffer in place.
pub trait InPlaceAlgorithm: Algorithm {
    fn visit_mut<T: Sample, D: DomainKind>(
        &mut self,
        state: &mut TypedState<T, D>,
    ) -> Result<(), ImageError>;
}

/// Reads a concrete buffer, accumulating results in the algorithm itself.
pub trait ConstAlgorithm: Algorithm {
    fn visit<T: Sample, D: DomainKind>(&mut self, state: &TypedState<T, D>)
    -> Result<(), ImageError>;
}

/// Produces a new state from a concrete buffer, leaving the input untouched.
pub trait OutOfPlaceAlgorithm: Algorithm {
    fn visit_into<T: Sample, D: DomainKind>(
        &mut self,
        state: &TypedState<T, D>,
    ) -> Result<ImageState, ImageError>;
}

/// An in-place algorithm that leaves every sample unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Algorithm for Identity {
    fn name(&self) -> &str {
        "identity"
    }
}

impl InPlaceAlgorithm for Identity {
    fn visit_mut<T: Sample, D: DomainKind>(
        &mut self,
        _state: &mut TypedState<T, D>,
    ) -> Result<(), ImageError> {
        Ok(())
    }
}
