//! Fixed-size vectors, matrices, quaternions and composite primitives.
//!
//! Built on `nalgebra` value types. Every operation with an undefined result
//! (zero divisor, zero-length normalization, singular inversion, parallel
//! configurations) returns a [`GeometryError`] instead of producing NaN or
//! infinity. Tolerances are always chosen by the caller.

pub mod error;
pub mod intersect;
pub mod primitives;
pub mod quat;
pub mod vecmat;

pub use error::GeometryError;
pub use intersect::{
    LineLineInteraction, are_intersecting, intersect_line_plane, intersect_lines_2d,
    intersect_planes, line_line_interaction,
};
pub use primitives::{AlignedCuboid, Cuboid, Line2, Line3, Plane, Sphere};
pub use quat::{Quat, UnitQuat, quat_from_axis_angle, rotation_matrix, try_normalize_quat, try_slerp};
pub use vecmat::{
    DEFAULT_EPSILON, Mat2, Mat3, Mat4, TryInvert, Vec2, Vec3, Vec4, angle_between, checked_div,
    orthogonal_vector, try_invert, try_normalize,
};
