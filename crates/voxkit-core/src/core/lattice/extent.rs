use super::error::ExtentError;
use super::iter::ExtentIterator;
use super::point::{AxisMask, Point};
use super::size::Size;
use std::fmt;

/// Axis-aligned box of sample indices with inclusive corners.
///
/// Construction always normalizes the corners so that `start <= end` on every
/// axis; an `Extent` therefore contains at least one point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent {
    start: Point,
    end: Point,
}

impl Extent {
    /// Extent spanned by two corners given in any order.
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            start: Point::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            end: Point::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    pub fn from_size(start: Point, size: Size) -> Result<Self, ExtentError> {
        let mut end = [0i32; 3];
        for (axis, slot) in end.iter_mut().enumerate() {
            let last = start[axis] as i64 + size.axis(axis) as i64 - 1;
            *slot = i32::try_from(last).map_err(|_| ExtentError::InvalidExtent {
                start,
                size: size.to_array(),
                reason: "end corner exceeds the index range",
            })?;
        }
        Ok(Self {
            start,
            end: Point::from_array(end),
        })
    }

    /// Extent of `size` starting at the origin.
    pub fn with_size(size: Size) -> Result<Self, ExtentError> {
        Self::from_size(Point::ORIGIN, size)
    }

    /// Frequency-style extent: an axis of size `n` covers `[-(n/2), n - 1 - n/2]`.
    pub fn centered(size: Size) -> Result<Self, ExtentError> {
        let mut start = [0i32; 3];
        for (axis, slot) in start.iter_mut().enumerate() {
            let half = i32::try_from(size.axis(axis) / 2).map_err(|_| {
                ExtentError::InvalidExtent {
                    start: Point::ORIGIN,
                    size: size.to_array(),
                    reason: "axis too large for centered indexing",
                }
            })?;
            *slot = -half;
        }
        Self::from_size(Point::from_array(start), size)
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn size(&self) -> Size {
        let len = |axis: usize| (self.end[axis] as i64 - self.start[axis] as i64 + 1) as usize;
        Size::from_normalized(len(0), len(1), len(2))
    }

    pub fn volume(&self) -> usize {
        self.size().volume()
    }

    pub fn contains(&self, p: Point) -> bool {
        (0..3).all(|axis| p[axis] >= self.start[axis] && p[axis] <= self.end[axis])
    }

    pub fn contains_extent(&self, other: &Extent) -> bool {
        self.contains(other.start) && self.contains(other.end)
    }

    pub fn intersection(&self, other: &Extent) -> Option<Extent> {
        let start = Point::new(
            self.start.x.max(other.start.x),
            self.start.y.max(other.start.y),
            self.start.z.max(other.start.z),
        );
        let end = Point::new(
            self.end.x.min(other.end.x),
            self.end.y.min(other.end.y),
            self.end.z.min(other.end.z),
        );
        (0..3)
            .all(|axis| start[axis] <= end[axis])
            .then_some(Extent { start, end })
    }

    pub fn shift(&self, offset: Point) -> Result<Extent, ExtentError> {
        let start = checked_add(self.start, offset);
        let end = checked_add(self.end, offset);
        match (start, end) {
            (Some(start), Some(end)) => Ok(Extent { start, end }),
            _ => Err(ExtentError::InvalidExtent {
                start: self.start,
                size: self.size().to_array(),
                reason: "shift leaves the index range",
            }),
        }
    }

    /// Extent occupied by every point of `self` negated on the masked axes.
    pub fn mirror(&self, mask: AxisMask) -> Result<Extent, ExtentError> {
        match (self.start.checked_mirror(mask), self.end.checked_mirror(mask)) {
            (Some(start), Some(end)) => Ok(Extent::new(start, end)),
            _ => Err(ExtentError::InvalidExtent {
                start: self.start,
                size: self.size().to_array(),
                reason: "mirror leaves the index range",
            }),
        }
    }

    /// Wraps every coordinate of `p` periodically into this extent.
    pub fn wrap_point(&self, p: Point) -> Point {
        let mut coords = p.to_array();
        for (axis, c) in coords.iter_mut().enumerate() {
            let start = self.start[axis] as i64;
            let n = self.end[axis] as i64 - start + 1;
            *c = (start + (*c as i64 - start).rem_euclid(n)) as i32;
        }
        Point::from_array(coords)
    }

    /// Negates the masked coordinates of `p` and wraps them periodically into
    /// this extent: `c' = start + ((-c - start) mod n)`.
    ///
    /// The result always lies inside the extent, and the mapping is an
    /// involution for points inside it. On a centered axis of even size the
    /// Nyquist index `-(n/2)` maps onto itself.
    pub fn mirror_point(&self, p: Point, mask: AxisMask) -> Point {
        let mut coords = p.to_array();
        for (axis, c) in coords.iter_mut().enumerate() {
            if mask.contains(axis) {
                let start = self.start[axis] as i64;
                let n = self.end[axis] as i64 - start + 1;
                *c = (start + (-(*c as i64) - start).rem_euclid(n)) as i32;
            }
        }
        Point::from_array(coords)
    }

    /// Offset of `p` in the dense row-major buffer covering this extent.
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let size = self.size();
        let rel = p - self.start;
        Some(
            (rel.x as usize * size.height() + rel.y as usize) * size.depth() + rel.z as usize,
        )
    }

    pub fn point_at(&self, index: usize) -> Option<Point> {
        let size = self.size();
        if index >= size.volume() {
            return None;
        }
        let z = index % size.depth();
        let y = (index / size.depth()) % size.height();
        let x = index / (size.depth() * size.height());
        Some(self.start + Point::new(x as i32, y as i32, z as i32))
    }

    pub fn iter(&self) -> ExtentIterator {
        ExtentIterator::new(*self)
    }
}

fn checked_add(a: Point, b: Point) -> Option<Point> {
    Some(Point::new(
        a.x.checked_add(b.x)?,
        a.y.checked_add(b.y)?,
        a.z.checked_add(b.z)?,
    ))
}

impl IntoIterator for Extent {
    type Item = Point;
    type IntoIter = ExtentIterator;

    fn into_iter(self) -> ExtentIterator {
        ExtentIterator::new(self)
    }
}

impl IntoIterator for &Extent {
    type Item = Point;
    type IntoIter = ExtentIterator;

    fn into_iter(self) -> ExtentIterator {
        ExtentIterator::new(*self)
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.start, self.end)
    }
}
