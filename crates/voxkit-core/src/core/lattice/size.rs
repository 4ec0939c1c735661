use super::error::ExtentError;
use std::fmt;

/// Number of samples along each axis; every axis holds at least one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    width: usize,
    height: usize,
    depth: usize,
}

impl Size {
    pub fn new(width: usize, height: usize, depth: usize) -> Result<Self, ExtentError> {
        if width == 0 || height == 0 || depth == 0 {
            return Err(ExtentError::InvalidSize {
                width,
                height,
                depth,
            });
        }
        Ok(Self {
            width,
            height,
            depth,
        })
    }

    /// Size of an already normalized extent, whose axes are never empty.
    pub(super) const fn from_normalized(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn axis(&self, axis: usize) -> usize {
        match axis {
            0 => self.width,
            1 => self.height,
            2 => self.depth,
            _ => panic!("Size axis index out of range: {axis}"),
        }
    }

    pub fn to_array(self) -> [usize; 3] {
        [self.width, self.height, self.depth]
    }

    /// Total sample count, or `None` if it does not fit in `usize`.
    pub fn checked_volume(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)
            .and_then(|v| v.checked_mul(self.depth))
    }

    pub fn volume(&self) -> usize {
        self.width * self.height * self.depth
    }

    /// 3 if the depth exceeds one, else 2 if the height does, else 1.
    pub fn dimensionality(&self) -> usize {
        if self.depth > 1 {
            3
        } else if self.height > 1 {
            2
        } else {
            1
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_axis_is_rejected() {
        assert!(matches!(
            Size::new(4, 0, 1),
            Err(ExtentError::InvalidSize { height: 0, .. })
        ));
    }

    #[test]
    fn volume_and_dimensionality() {
        let s = Size::new(4, 3, 2).unwrap();
        assert_eq!(s.volume(), 24);
        assert_eq!(s.dimensionality(), 3);
        assert_eq!(Size::new(4, 3, 1).unwrap().dimensionality(), 2);
        assert_eq!(Size::new(7, 1, 1).unwrap().dimensionality(), 1);
        assert_eq!(s.to_string(), "4x3x2");
    }

    #[test]
    fn checked_volume_detects_overflow() {
        let s = Size::new(usize::MAX, 2, 1).unwrap();
        assert_eq!(s.checked_volume(), None);
    }
}
