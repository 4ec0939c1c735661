use super::error::GeometryError;
use super::quat::UnitQuat;
use super::vecmat::{Vec2, Vec3, try_normalize};
use itertools::iproduct;

/// Infinite line in the plane, stored as an origin and a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2 {
    origin: Vec2,
    direction: Vec2,
}

impl Line2 {
    pub fn new(from: Vec2, to: Vec2) -> Result<Self, GeometryError> {
        Ok(Self {
            origin: from,
            direction: try_normalize(&(to - from))?,
        })
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn at(&self, t: f64) -> Vec2 {
        self.origin + self.direction * t
    }
}

/// Infinite line in space, stored as an origin and a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3 {
    origin: Vec3,
    direction: Vec3,
}

impl Line3 {
    /// Line through two distinct points, directed from `from` to `to`.
    pub fn new(from: Vec3, to: Vec3) -> Result<Self, GeometryError> {
        Self::from_direction(from, to - from)
    }

    pub fn from_direction(origin: Vec3, direction: Vec3) -> Result<Self, GeometryError> {
        Ok(Self {
            origin,
            direction: try_normalize(&direction)?,
        })
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Parameter of the orthogonal projection of `point` onto the line.
    pub fn project(&self, point: &Vec3) -> f64 {
        (point - self.origin).dot(&self.direction)
    }

    pub fn distance_to(&self, point: &Vec3) -> f64 {
        (point - self.at(self.project(point))).norm()
    }
}

/// Plane `normal · x = offset` with a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vec3,
    offset: f64,
}

impl Plane {
    pub fn from_normal(point: Vec3, normal: Vec3) -> Result<Self, GeometryError> {
        let normal = try_normalize(&normal)?;
        Ok(Self {
            normal,
            offset: normal.dot(&point),
        })
    }

    /// Plane through three points; the normal follows the right-hand rule `a → b → c`.
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Result<Self, GeometryError> {
        let normal = (b - a).cross(&(c - a));
        if normal.norm() == 0.0 {
            return Err(GeometryError::DegenerateInput("plane points are collinear"));
        }
        Self::from_normal(a, normal)
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Point of the plane closest to the coordinate origin.
    pub fn origin(&self) -> Vec3 {
        self.normal * self.offset
    }

    /// Signed distance, positive on the side the normal points to.
    pub fn signed_distance(&self, point: &Vec3) -> f64 {
        self.normal.dot(point) - self.offset
    }

    pub fn contains(&self, point: &Vec3, epsilon: f64) -> bool {
        self.signed_distance(point).abs() <= epsilon
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn contains(&self, point: &Vec3) -> bool {
        (point - self.center).norm_squared() <= self.radius * self.radius
    }

    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * std::f64::consts::PI * self.radius.powi(3)
    }
}

/// Axis-aligned box given by two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignedCuboid {
    min: Vec3,
    max: Vec3,
}

impl AlignedCuboid {
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.inf(&b),
            max: a.sup(&b),
        }
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn volume(&self) -> f64 {
        self.size().product()
    }

    pub fn contains(&self, point: &Vec3) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }
}

/// Oriented box: a center, a rotation of the local frame and half side lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    pub center: Vec3,
    pub orientation: UnitQuat,
    pub half_extents: Vec3,
}

impl Cuboid {
    pub fn new(center: Vec3, orientation: UnitQuat, half_extents: Vec3) -> Result<Self, GeometryError> {
        if half_extents.iter().any(|h| *h < 0.0) {
            return Err(GeometryError::DegenerateInput("negative cuboid half extent"));
        }
        Ok(Self {
            center,
            orientation,
            half_extents,
        })
    }

    /// Unit vectors of the local frame expressed in world coordinates.
    pub fn axes(&self) -> [Vec3; 3] {
        [
            self.orientation * Vec3::x(),
            self.orientation * Vec3::y(),
            self.orientation * Vec3::z(),
        ]
    }

    pub fn volume(&self) -> f64 {
        8.0 * self.half_extents.product()
    }

    pub fn contains(&self, point: &Vec3) -> bool {
        let local = self.orientation.inverse() * (point - self.center);
        (0..3).all(|i| local[i].abs() <= self.half_extents[i])
    }

    pub fn corners(&self) -> Vec<Vec3> {
        let h = self.half_extents;
        iproduct!([-1.0, 1.0], [-1.0, 1.0], [-1.0, 1.0])
            .map(|(sx, sy, sz)| {
                self.center + self.orientation * Vec3::new(sx * h.x, sy * h.y, sz * h.z)
            })
            .collect()
    }
}
