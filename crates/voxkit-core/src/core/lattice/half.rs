use super::error::ExtentError;
use super::extent::Extent;
use super::point::{AxisMask, Point};
use super::size::Size;

/// Where a logical frequency index lives in half-frequency storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalfIndex {
    /// The point is stored as is.
    Stored(Point),
    /// The point is the Hermitian mirror of this stored point; its value is the
    /// conjugate of the stored one.
    Mirrored(Point),
}

/// Index mapping for a Hermitian-symmetric spectrum kept as one half.
///
/// The logical extent is the centered extent of the full spectrum. The *half
/// axis* is the highest axis holding more than one sample (x for a single
/// sample). Storage keeps the full centered range on the other axes and
/// `[0, n/2]` on the half axis, so for even `n` the Nyquist plane is stored at
/// `+n/2`.
///
/// A logical point `p` with `p_h < 0` resolves to `q` with `q_h = -p_h` and all
/// other coordinates mirrored with periodic wrap inside the logical extent.
/// Only logical points resolve: the stored Nyquist plane at `+n/2` is reached
/// through its mirror at `-n/2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfFrequencyLayout {
    logical: Extent,
    stored: Extent,
    half_axis: usize,
}

impl HalfFrequencyLayout {
    pub fn new(logical_size: Size) -> Result<Self, ExtentError> {
        let logical = Extent::centered(logical_size)?;
        let half_axis = Self::half_axis_for(logical_size);
        let n = logical_size.axis(half_axis);
        let stored_end = i32::try_from(n / 2).map_err(|_| ExtentError::InvalidExtent {
            start: logical.start(),
            size: logical_size.to_array(),
            reason: "half axis too large",
        })?;
        let stored = Extent::new(
            logical.start().with_axis(half_axis, 0),
            logical.end().with_axis(half_axis, stored_end),
        );
        Ok(Self {
            logical,
            stored,
            half_axis,
        })
    }

    /// Rebuilds the layout from a logical extent, which must be centered.
    pub fn from_logical(logical: Extent) -> Result<Self, ExtentError> {
        let size = logical.size();
        if Extent::centered(size)? != logical {
            return Err(ExtentError::InvalidExtent {
                start: logical.start(),
                size: size.to_array(),
                reason: "half-frequency data needs a centered extent",
            });
        }
        Self::new(size)
    }

    pub fn half_axis_for(size: Size) -> usize {
        (0..3).rev().find(|&axis| size.axis(axis) > 1).unwrap_or(0)
    }

    pub fn logical(&self) -> Extent {
        self.logical
    }

    pub fn stored(&self) -> Extent {
        self.stored
    }

    pub fn half_axis(&self) -> usize {
        self.half_axis
    }

    pub fn resolve(&self, p: Point) -> Option<HalfIndex> {
        if !self.logical.contains(p) {
            return None;
        }
        if self.stored.contains(p) {
            return Some(HalfIndex::Stored(p));
        }
        let h = self.half_axis;
        let q = self
            .logical
            .mirror_point(p, AxisMask::ALL.without(h))
            .with_axis(h, -p[h]);
        Some(HalfIndex::Mirrored(q))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(w: usize, h: usize, d: usize) -> HalfFrequencyLayout {
        HalfFrequencyLayout::new(Size::new(w, h, d).unwrap()).unwrap()
    }

    #[test]
    fn half_axis_is_highest_non_trivial_axis() {
        assert_eq!(layout(8, 8, 8).half_axis(), 2);
        assert_eq!(layout(8, 6, 1).half_axis(), 1);
        assert_eq!(layout(8, 1, 1).half_axis(), 0);
        assert_eq!(layout(1, 1, 1).half_axis(), 0);
    }

    #[test]
    fn stored_extent_keeps_nyquist_plane() {
        let l = layout(4, 4, 1);
        assert_eq!(l.logical(), Extent::new(Point::new(-2, -2, 0), Point::new(1, 1, 0)));
        assert_eq!(l.stored(), Extent::new(Point::new(-2, 0, 0), Point::new(1, 2, 0)));

        let odd = layout(5, 5, 1);
        assert_eq!(odd.stored(), Extent::new(Point::new(-2, 0, 0), Point::new(2, 2, 0)));
    }

    #[test]
    fn negative_half_axis_resolves_to_wrapped_mirror() {
        let l = layout(4, 4, 1);
        assert_eq!(
            l.resolve(Point::new(1, -1, 0)),
            Some(HalfIndex::Mirrored(Point::new(-1, 1, 0)))
        );
        // x = -2 is the Nyquist index and mirrors onto itself.
        assert_eq!(
            l.resolve(Point::new(-2, -1, 0)),
            Some(HalfIndex::Mirrored(Point::new(-2, 1, 0)))
        );
        // y = -2 lands on the stored Nyquist plane at +2.
        assert_eq!(
            l.resolve(Point::new(1, -2, 0)),
            Some(HalfIndex::Mirrored(Point::new(-1, 2, 0)))
        );
        assert_eq!(
            l.resolve(Point::new(1, 1, 0)),
            Some(HalfIndex::Stored(Point::new(1, 1, 0)))
        );
    }

    #[test]
    fn stored_nyquist_plane_is_not_a_logical_point() {
        let l = layout(4, 4, 1);
        assert!(l.stored().contains(Point::new(0, 2, 0)));
        assert_eq!(l.resolve(Point::new(0, 2, 0)), None);
        assert_eq!(
            l.resolve(Point::new(0, -2, 0)),
            Some(HalfIndex::Mirrored(Point::new(0, 2, 0)))
        );

        let odd = layout(5, 5, 1);
        assert_eq!(
            odd.resolve(Point::new(0, 2, 0)),
            Some(HalfIndex::Stored(Point::new(0, 2, 0)))
        );
    }

    #[test]
    fn every_logical_point_resolves_into_storage() {
        for (w, h) in [(4, 4), (5, 4), (4, 5), (3, 3), (1, 6)] {
            let l = layout(w, h, 1);
            for p in l.logical().iter() {
                let q = match l.resolve(p) {
                    Some(HalfIndex::Stored(q)) | Some(HalfIndex::Mirrored(q)) => q,
                    None => panic!("{p} did not resolve"),
                };
                assert!(l.stored().contains(q), "{p} -> {q} outside storage");
            }
        }
    }

    #[test]
    fn points_outside_both_extents_do_not_resolve() {
        let l = layout(4, 4, 1);
        assert_eq!(l.resolve(Point::new(0, 3, 0)), None);
        assert_eq!(l.resolve(Point::new(0, -3, 0)), None);
        assert_eq!(l.resolve(Point::new(2, -1, 0)), None);
    }

    #[test]
    fn from_logical_requires_centered_extent() {
        let size = Size::new(4, 4, 1).unwrap();
        assert!(HalfFrequencyLayout::from_logical(Extent::centered(size).unwrap()).is_ok());
        let shifted = Extent::with_size(size).unwrap();
        assert!(HalfFrequencyLayout::from_logical(shifted).is_err());
    }
}
