use crate::core::geom::Vec3;
use std::fmt;
use std::ops::{Add, BitOr, Index, Neg, Sub};

/// Integer sample index in up to three dimensions.
///
/// Ordering is lexicographic over `(x, y, z)`, which is also the scan order of
/// [`ExtentIterator`](super::ExtentIterator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    pub fn from_array(coords: [i32; 3]) -> Self {
        Self::new(coords[0], coords[1], coords[2])
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f64, self.y as f64, self.z as f64)
    }

    pub fn with_axis(self, axis: usize, value: i32) -> Self {
        let mut coords = self.to_array();
        coords[axis] = value;
        Self::from_array(coords)
    }

    /// Negates the coordinates selected by `mask`, without any wraparound.
    /// Returns `None` when a masked coordinate is `i32::MIN`.
    ///
    /// For periodic (frequency) indexing use [`Extent::mirror_point`](super::Extent::mirror_point).
    pub fn checked_mirror(self, mask: AxisMask) -> Option<Self> {
        let mut coords = self.to_array();
        for (axis, c) in coords.iter_mut().enumerate() {
            if mask.contains(axis) {
                *c = c.checked_neg()?;
            }
        }
        Some(Self::from_array(coords))
    }
}

impl Index<usize> for Point {
    type Output = i32;

    fn index(&self, axis: usize) -> &i32 {
        match axis {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Point axis index out of range: {axis}"),
        }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<(i32, i32, i32)> for Point {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Set of axes, combined with `|`.
///
/// Mirroring about the YZ plane flips the x axis, so it uses [`AxisMask::X`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AxisMask(u8);

impl AxisMask {
    pub const NONE: AxisMask = AxisMask(0);
    pub const X: AxisMask = AxisMask(0b001);
    pub const Y: AxisMask = AxisMask(0b010);
    pub const Z: AxisMask = AxisMask(0b100);
    pub const ALL: AxisMask = AxisMask(0b111);

    pub fn axis(axis: usize) -> Self {
        debug_assert!(axis < 3);
        AxisMask(1 << axis)
    }

    pub fn contains(self, axis: usize) -> bool {
        axis < 3 && self.0 & (1 << axis) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn without(self, axis: usize) -> Self {
        AxisMask(self.0 & !(1 << axis))
    }
}

impl BitOr for AxisMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        AxisMask(self.0 | rhs.0)
    }
}
