use super::error::GeometryError;
use super::vecmat::{Mat3, Vec3};
use nalgebra::{Quaternion, Unit, UnitQuaternion};

pub type Quat = Quaternion<f64>;
pub type UnitQuat = UnitQuaternion<f64>;

pub fn try_normalize_quat(q: &Quat) -> Result<UnitQuat, GeometryError> {
    if q.norm() == 0.0 {
        return Err(GeometryError::DegenerateInput(
            "cannot normalize a zero quaternion",
        ));
    }
    Ok(UnitQuaternion::from_quaternion(*q))
}

pub fn quat_from_axis_angle(axis: &Vec3, angle_radians: f64) -> Result<UnitQuat, GeometryError> {
    let axis = Unit::try_new(*axis, 0.0).ok_or(GeometryError::DegenerateInput(
        "rotation axis has zero length",
    ))?;
    Ok(UnitQuaternion::from_axis_angle(&axis, angle_radians))
}

/// Spherical interpolation along the shorter arc between `from` and `to`.
pub fn try_slerp(
    from: &UnitQuat,
    to: &UnitQuat,
    t: f64,
    epsilon: f64,
) -> Result<UnitQuat, GeometryError> {
    from.try_slerp(to, t, epsilon)
        .ok_or(GeometryError::DegenerateInput("interpolation arc is undefined"))
}

pub fn rotation_matrix(q: &UnitQuat) -> Mat3 {
    q.to_rotation_matrix().into_inner()
}
