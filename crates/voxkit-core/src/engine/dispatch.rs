use super::algorithm::{Algorithm, ConstAlgorithm, InPlaceAlgorithm, OutOfPlaceAlgorithm};
use crate::image::{ImageError, ImageState, visit_state};
use tracing::debug;

fn check_support<A: Algorithm>(algorithm: &A, state: &ImageState) -> Result<(), ImageError> {
    let variant = state.variant();
    if algorithm.supports(variant) {
        debug!(algorithm = algorithm.name(), %variant, "Dispatching algorithm.");
        Ok(())
    } else {
        debug!(algorithm = algorithm.name(), %variant, "Variant not supported by algorithm.");
        Err(ImageError::unsupported(algorithm.name(), variant))
    }
}

/// Resolves the concrete buffer once and hands it to `algorithm` for mutation.
pub fn apply_in_place<A: InPlaceAlgorithm>(
    state: &mut ImageState,
    algorithm: &mut A,
) -> Result<(), ImageError> {
    check_support(algorithm, state)?;
    visit_state!(state, s => algorithm.visit_mut(s))
}

pub fn apply_const<A: ConstAlgorithm>(
    state: &ImageState,
    algorithm: &mut A,
) -> Result<(), ImageError> {
    check_support(algorithm, state)?;
    visit_state!(state, s => algorithm.visit(s))
}

/// Resolves the concrete buffer once and returns the state `algorithm` builds
/// from it.
pub fn apply<A: OutOfPlaceAlgorithm>(
    state: &ImageState,
    algorithm: &mut A,
) -> Result<ImageState, ImageError> {
    check_support(algorithm, state)?;
    let result = visit_state!(state, s => algorithm.visit_into(s))?;
    debug!(
        algorithm = algorithm.name(),
        result = %result.variant(),
        extent = %result.extent(),
        "Out-of-place algorithm produced a new state."
    );
    Ok(result)
}
