use super::error::GeometryError;
use nalgebra::{Matrix2, Matrix3, Matrix4, SVector, Vector2, Vector3, Vector4};

pub type Vec2 = Vector2<f64>;
pub type Vec3 = Vector3<f64>;
pub type Vec4 = Vector4<f64>;
pub type Mat2 = Matrix2<f64>;
pub type Mat3 = Matrix3<f64>;
pub type Mat4 = Matrix4<f64>;

/// Default tolerance for singularity and parallelism checks.
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// Divides every component of `v` by `divisor`.
///
/// Fails with [`GeometryError::Arithmetic`] for a zero divisor instead of
/// producing infinities.
pub fn checked_div<const D: usize>(
    v: &SVector<f64, D>,
    divisor: f64,
) -> Result<SVector<f64, D>, GeometryError> {
    if divisor == 0.0 {
        return Err(GeometryError::Arithmetic("division by zero scalar"));
    }
    Ok(v / divisor)
}

pub fn try_normalize<const D: usize>(
    v: &SVector<f64, D>,
) -> Result<SVector<f64, D>, GeometryError> {
    v.try_normalize(0.0)
        .ok_or(GeometryError::DegenerateInput("cannot normalize a zero-length vector"))
}

/// Square matrices that can be inverted under a caller-chosen tolerance.
pub trait TryInvert: Sized {
    /// Inverts `self` when the determinant magnitude exceeds `epsilon`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::SingularMatrix`] when `|det| <= epsilon` or when the
    /// decomposition itself fails.
    fn try_invert(&self, epsilon: f64) -> Result<Self, GeometryError>;
}

macro_rules! impl_try_invert {
    ($($mat:ty),*) => {
        $(
            impl TryInvert for $mat {
                fn try_invert(&self, epsilon: f64) -> Result<Self, GeometryError> {
                    let determinant = self.determinant();
                    if !determinant.is_finite() || determinant.abs() <= epsilon {
                        return Err(GeometryError::SingularMatrix { determinant });
                    }
                    self.try_inverse()
                        .ok_or(GeometryError::SingularMatrix { determinant })
                }
            }
        )*
    };
}

impl_try_invert!(Mat2, Mat3, Mat4);

pub fn try_invert<M: TryInvert>(m: &M, epsilon: f64) -> Result<M, GeometryError> {
    m.try_invert(epsilon)
}

/// Unsigned angle between two vectors, in radians.
pub fn angle_between<const D: usize>(
    a: &SVector<f64, D>,
    b: &SVector<f64, D>,
) -> Result<f64, GeometryError> {
    let na = a.norm();
    let nb = b.norm();
    if na == 0.0 || nb == 0.0 {
        return Err(GeometryError::DegenerateInput("angle with a zero-length vector"));
    }
    let cos = (a.dot(b) / (na * nb)).clamp(-1.0, 1.0);
    Ok(cos.acos())
}

/// Returns a unit vector perpendicular to `v`.
pub fn orthogonal_vector(v: &Vec3) -> Result<Vec3, GeometryError> {
    let n = try_normalize(v)?;
    // Cross with the axis least aligned with v.
    let helper = if n.x.abs() < 0.9 { Vec3::x() } else { Vec3::y() };
    try_normalize(&n.cross(&helper))
}
