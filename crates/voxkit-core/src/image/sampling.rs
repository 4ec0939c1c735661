use super::domain::Domain;
use crate::core::geom::{GeometryError, Vec3};
use crate::core::lattice::{Point, Size};

/// Physical size of one sample along each axis, in spatial units.
///
/// Frequency data derives its sampling from the spatial one: an axis of `n`
/// samples spaced `s` apart has frequency steps of `1 / (n * s)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelSampling {
    spatial: Vec3,
}

impl Default for PixelSampling {
    fn default() -> Self {
        Self {
            spatial: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl PixelSampling {
    pub fn new(spatial: Vec3) -> Result<Self, GeometryError> {
        if spatial.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(GeometryError::DegenerateInput(
                "pixel sampling must be positive and finite",
            ));
        }
        Ok(Self { spatial })
    }

    pub fn uniform(spacing: f64) -> Result<Self, GeometryError> {
        Self::new(Vec3::new(spacing, spacing, spacing))
    }

    pub fn spatial(&self) -> Vec3 {
        self.spatial
    }

    pub fn frequency(&self, size: Size) -> Vec3 {
        Vec3::new(
            1.0 / (size.width() as f64 * self.spatial.x),
            1.0 / (size.height() as f64 * self.spatial.y),
            1.0 / (size.depth() as f64 * self.spatial.z),
        )
    }

    /// Sampling in the units of `domain`, for data whose logical size is `size`.
    pub fn for_domain(&self, domain: Domain, size: Size) -> Vec3 {
        match domain {
            Domain::Spatial => self.spatial,
            Domain::Frequency | Domain::HalfFrequency => self.frequency(size),
        }
    }

    pub fn point_to_coord(&self, point: Point, domain: Domain, size: Size) -> Vec3 {
        point.to_vec3().component_mul(&self.for_domain(domain, size))
    }

    /// Nearest sample index to a physical coordinate.
    pub fn coord_to_point(&self, coord: &Vec3, domain: Domain, size: Size) -> Point {
        let idx = coord.component_div(&self.for_domain(domain, size));
        Point::new(
            idx.x.round() as i32,
            idx.y.round() as i32,
            idx.z.round() as i32,
        )
    }
}
