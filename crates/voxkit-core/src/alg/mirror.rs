use crate::core::lattice::AxisMask;
use crate::engine::{Algorithm, OutOfPlaceAlgorithm};
use crate::image::{Domain, DomainKind, ImageError, ImageState, Sample, TypedState};

/// Mirrors an image about the origin along the selected axes.
///
/// Spatial data is mirrored onto the negated extent, so `out(-p) == in(p)` on
/// every mirrored axis. Frequency data keeps its extent and wraps mirrored
/// indices periodically inside it. Half-frequency data is mirrored through its
/// logical extent and stays Hermitian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mirror {
    pub axes: AxisMask,
}

impl Mirror {
    pub fn new(axes: AxisMask) -> Self {
        Self { axes }
    }
}

impl Algorithm for Mirror {
    fn name(&self) -> &str {
        "mirror"
    }
}

impl OutOfPlaceAlgorithm for Mirror {
    fn visit_into<T: Sample, D: DomainKind>(
        &mut self,
        state: &TypedState<T, D>,
    ) -> Result<ImageState, ImageError> {
        let logical = state.logical_extent();
        let out = match D::DOMAIN {
            Domain::Spatial => {
                let target = logical.mirror(self.axes)?;
                let mut out = TypedState::<T, D>::new(target, state.sampling())?;
                for (p, v) in state.iter() {
                    let q = p.checked_mirror(self.axes).ok_or(ImageError::OutOfBounds {
                        point: p,
                        extent: target,
                    })?;
                    out.set_value(q, *v)?;
                }
                out
            }
            Domain::Frequency | Domain::HalfFrequency => {
                let mut out = TypedState::<T, D>::new(logical, state.sampling())?;
                out.set_spatial_origin(state.spatial_origin());
                let storage = out.extent();
                for (q, slot) in storage.iter().zip(out.data_mut()) {
                    *slot = if logical.contains(q) {
                        state.value(logical.mirror_point(q, self.axes))?
                    } else {
                        // Stored Nyquist plane: the conjugate of its logical mirror.
                        let p = logical.mirror_point(q, AxisMask::ALL);
                        state.value(logical.mirror_point(p, self.axes))?.conj()
                    };
                }
                out
            }
        };
        Ok(out.into())
    }
}
