use super::error::GeometryError;
use super::primitives::{Line2, Line3, Plane};
use super::vecmat::{Vec2, Vec3};

/// Closest approach between two lines in space.
///
/// `point_a = line_a.at(param_a)` and `point_b = line_b.at(param_b)` are the two
/// mutually closest points; `distance` is their separation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineLineInteraction {
    pub point_a: Vec3,
    pub point_b: Vec3,
    pub param_a: f64,
    pub param_b: f64,
    pub distance: f64,
}

/// Computes the closest points of two 3D lines.
///
/// # Errors
///
/// Returns [`GeometryError::Parallel`] when `|d_a × d_b|² <= epsilon`; parallel
/// lines have no unique pair of closest points.
pub fn line_line_interaction(
    line_a: &Line3,
    line_b: &Line3,
    epsilon: f64,
) -> Result<LineLineInteraction, GeometryError> {
    let da = line_a.direction();
    let db = line_b.direction();
    let w = line_a.origin() - line_b.origin();

    // Directions are unit length, so |da|² = |db|² = 1.
    let b = da.dot(&db);
    let d = da.dot(&w);
    let e = db.dot(&w);
    let denom = 1.0 - b * b;
    if denom <= epsilon {
        return Err(GeometryError::Parallel("lines have parallel directions"));
    }

    let param_a = (b * e - d) / denom;
    let param_b = (e - b * d) / denom;
    let point_a = line_a.at(param_a);
    let point_b = line_b.at(param_b);

    Ok(LineLineInteraction {
        point_a,
        point_b,
        param_a,
        param_b,
        distance: (point_a - point_b).norm(),
    })
}

/// True when the lines meet within `epsilon`; parallel lines meet only if they coincide.
pub fn are_intersecting(line_a: &Line3, line_b: &Line3, epsilon: f64) -> bool {
    match line_line_interaction(line_a, line_b, epsilon) {
        Ok(interaction) => interaction.distance <= epsilon,
        Err(_) => line_b.distance_to(&line_a.origin()) <= epsilon,
    }
}

pub fn intersect_lines_2d(
    line_a: &Line2,
    line_b: &Line2,
    epsilon: f64,
) -> Result<Vec2, GeometryError> {
    let da = line_a.direction();
    let db = line_b.direction();
    let cross = da.perp(&db);
    if cross.abs() <= epsilon {
        return Err(GeometryError::Parallel("lines have parallel directions"));
    }
    let t = (line_b.origin() - line_a.origin()).perp(&db) / cross;
    Ok(line_a.at(t))
}

pub fn intersect_line_plane(
    line: &Line3,
    plane: &Plane,
    epsilon: f64,
) -> Result<Vec3, GeometryError> {
    let denom = plane.normal().dot(&line.direction());
    if denom.abs() <= epsilon {
        return Err(GeometryError::Parallel("line is parallel to plane"));
    }
    let t = -plane.signed_distance(&line.origin()) / denom;
    Ok(line.at(t))
}

/// Line shared by two planes.
pub fn intersect_planes(a: &Plane, b: &Plane, epsilon: f64) -> Result<Line3, GeometryError> {
    let n1 = a.normal();
    let n2 = b.normal();
    let direction = n1.cross(&n2);
    let len_sq = direction.norm_squared();
    if len_sq <= epsilon {
        return Err(GeometryError::Parallel("planes are parallel"));
    }
    // Point on both planes, expressed in the span of the two normals.
    let origin = (n2.cross(&direction) * a.offset() + direction.cross(&n1) * b.offset()) / len_sq;
    Line3::from_direction(origin, direction)
}
