use super::extent::Extent;
use super::point::Point;
use std::iter::FusedIterator;

/// Row-major walk over every point of an [`Extent`], `z` fastest.
///
/// The sequence is finite and deterministic. Once exhausted the iterator stays
/// at its end until [`reset`](Self::reset) rewinds it to the first point.
#[derive(Debug, Clone)]
pub struct ExtentIterator {
    extent: Extent,
    current: Point,
    remaining: usize,
}

impl ExtentIterator {
    pub fn new(extent: Extent) -> Self {
        Self {
            extent,
            current: extent.start(),
            remaining: extent.volume(),
        }
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn at_end(&self) -> bool {
        self.remaining == 0
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.extent);
    }

    // Only called while points remain, so `x` never steps past `end.x`.
    fn advance(&mut self) {
        let start = self.extent.start();
        let end = self.extent.end();
        if self.current.z < end.z {
            self.current.z += 1;
        } else if self.current.y < end.y {
            self.current.z = start.z;
            self.current.y += 1;
        } else {
            self.current.z = start.z;
            self.current.y = start.y;
            self.current.x += 1;
        }
    }
}

impl Iterator for ExtentIterator {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        let p = self.current;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ExtentIterator {}

impl FusedIterator for ExtentIterator {}
