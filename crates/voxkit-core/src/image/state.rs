use super::domain::{Domain, DomainKind, Variant};
use super::error::ImageError;
use super::sampling::PixelSampling;
use super::value::Sample;
use crate::core::lattice::{Extent, ExtentError, HalfFrequencyLayout, HalfIndex, Point, Size};
use std::marker::PhantomData;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Dense sample buffer of one concrete `(T, D)` combination.
///
/// Samples are laid out in the scan order of the storage extent (`z` fastest),
/// so algorithms can walk [`data`](Self::data) directly. For half-frequency
/// data the storage extent is the stored half and [`value`](Self::value)
/// reconstructs the other half by conjugate mirroring.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedState<T, D> {
    extent: Extent,
    half: Option<HalfFrequencyLayout>,
    sampling: PixelSampling,
    spatial_origin: Point,
    data: Vec<T>,
    _domain: PhantomData<D>,
}

impl<T: Sample, D: DomainKind> TypedState<T, D> {
    /// Allocates a zero-filled state.
    ///
    /// `extent` is the logical extent; half-frequency data requires the
    /// centered extent of its size and stores only the half described by
    /// [`HalfFrequencyLayout`].
    pub fn new(extent: Extent, sampling: PixelSampling) -> Result<Self, ImageError> {
        let (storage, half) = storage_for::<D>(extent)?;
        let len = checked_len(storage)?;
        Ok(Self {
            extent: storage,
            half,
            sampling,
            spatial_origin: extent.start(),
            data: vec![T::default(); len],
            _domain: PhantomData,
        })
    }

    /// Wraps an existing buffer laid out in scan order of the storage extent.
    pub fn from_data(
        extent: Extent,
        sampling: PixelSampling,
        data: Vec<T>,
    ) -> Result<Self, ImageError> {
        let (storage, half) = storage_for::<D>(extent)?;
        let expected = checked_len(storage)?;
        if data.len() != expected {
            return Err(ImageError::BufferLength {
                expected,
                found: data.len(),
            });
        }
        Ok(Self {
            extent: storage,
            half,
            sampling,
            spatial_origin: extent.start(),
            data,
            _domain: PhantomData,
        })
    }

    pub fn variant(&self) -> Variant {
        Variant::new(T::VALUE_TYPE, D::DOMAIN)
    }

    /// Extent of the stored samples.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Extent of addressable points; larger than the storage extent only for
    /// half-frequency data.
    pub fn logical_extent(&self) -> Extent {
        self.half.map_or(self.extent, |h| h.logical())
    }

    pub fn logical_size(&self) -> Size {
        self.logical_extent().size()
    }

    pub fn half_layout(&self) -> Option<&HalfFrequencyLayout> {
        self.half.as_ref()
    }

    pub fn sampling(&self) -> PixelSampling {
        self.sampling
    }

    /// Start of the spatial extent this data belongs to. Frequency data keeps
    /// the origin of the spatial data it was transformed from.
    pub fn spatial_origin(&self) -> Point {
        self.spatial_origin
    }

    pub fn set_spatial_origin(&mut self, origin: Point) {
        self.spatial_origin = origin;
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Buffer offset of a stored point.
    pub fn index(&self, p: Point) -> Result<usize, ImageError> {
        self.extent.index_of(p).ok_or(ImageError::OutOfBounds {
            point: p,
            extent: self.extent,
        })
    }

    /// Sample at a logical point, with conjugate mirroring for half-frequency data.
    pub fn value(&self, p: Point) -> Result<T, ImageError> {
        match self.resolve(p)? {
            HalfIndex::Stored(q) => Ok(self.data[self.index(q)?]),
            HalfIndex::Mirrored(q) => Ok(self.data[self.index(q)?].conj()),
        }
    }

    pub fn set_value(&mut self, p: Point, v: T) -> Result<(), ImageError> {
        let (q, v) = match self.resolve(p)? {
            HalfIndex::Stored(q) => (q, v),
            HalfIndex::Mirrored(q) => (q, v.conj()),
        };
        let i = self.index(q)?;
        self.data[i] = v;
        Ok(())
    }

    fn resolve(&self, p: Point) -> Result<HalfIndex, ImageError> {
        let resolved = match &self.half {
            Some(layout) => layout.resolve(p),
            None => self.extent.contains(p).then_some(HalfIndex::Stored(p)),
        };
        resolved.ok_or(ImageError::OutOfBounds {
            point: p,
            extent: self.logical_extent(),
        })
    }

    /// Stored points paired with their samples, in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.extent.iter().zip(self.data.iter())
    }

    /// Applies `f` to every stored sample. The order is unspecified when the
    /// `parallel` feature is enabled, so `f` must not depend on it.
    pub fn map_in_place<F>(&mut self, f: F)
    where
        F: Fn(T) -> T + Send + Sync,
    {
        #[cfg(feature = "parallel")]
        self.data.par_iter_mut().for_each(|v| *v = f(*v));

        #[cfg(not(feature = "parallel"))]
        self.data.iter_mut().for_each(|v| *v = f(*v));
    }

    /// Reallocates to a new logical extent, keeping samples in the overlap and
    /// zero-filling the rest.
    pub fn resize(&mut self, extent: Extent) -> Result<(), ImageError> {
        let mut resized = Self::new(extent, self.sampling)?;
        if D::DOMAIN != Domain::Spatial {
            resized.spatial_origin = self.spatial_origin;
        }
        if let Some(overlap) = self.extent.intersection(&resized.extent) {
            for p in overlap.iter() {
                let v = self.data[self.index(p)?];
                let i = resized.index(p)?;
                resized.data[i] = v;
            }
        }
        *self = resized;
        Ok(())
    }

    /// Copies the samples of `region` into a new state of the same type.
    ///
    /// Half-frequency data cannot be cut into sub-regions.
    pub fn extract(&self, region: Extent) -> Result<Self, ImageError> {
        if self.half.is_some() {
            return Err(ImageError::unsupported("extract", self.variant()));
        }
        if !self.extent.contains_extent(&region) {
            let point = if self.extent.contains(region.start()) {
                region.end()
            } else {
                region.start()
            };
            return Err(ImageError::OutOfBounds {
                point,
                extent: self.extent,
            });
        }
        let data = region
            .iter()
            .map(|p| self.index(p).map(|i| self.data[i]))
            .collect::<Result<Vec<_>, _>>()?;
        let mut out = Self::from_data(region, self.sampling, data)?;
        if D::DOMAIN != Domain::Spatial {
            out.spatial_origin = self.spatial_origin;
        }
        Ok(out)
    }
}

fn storage_for<D: DomainKind>(
    extent: Extent,
) -> Result<(Extent, Option<HalfFrequencyLayout>), ExtentError> {
    match D::DOMAIN {
        Domain::HalfFrequency => {
            let layout = HalfFrequencyLayout::from_logical(extent)?;
            Ok((layout.stored(), Some(layout)))
        }
        Domain::Spatial | Domain::Frequency => Ok((extent, None)),
    }
}

fn checked_len(storage: Extent) -> Result<usize, ExtentError> {
    let size = storage.size();
    size.checked_volume().ok_or(ExtentError::InvalidExtent {
        start: storage.start(),
        size: size.to_array(),
        reason: "sample count overflows",
    })
}
