mod direction;

pub use direction::*;

use crate::common::Angle;

/// 3-dimensional column vector.
pub type Vector3 = nalgebra::Vector3<f64>;
/// 3-dimensional unit vector.
pub type UnitVector3 = nalgebra::UnitVector3<f64>;
/// Dynamically sized matrix.
pub type Matrix = nalgebra::DMatrix<f64>;
/// Dynamically sized column vector.
pub type Vector = nalgebra::DVector<f64>;

/// Converts a direction given by azimuth and colatitude into a unit vector.
///
/// The colatitude is measured from +z, and the azimuth from +x toward +y:
/// `(cos(az) sin(col), sin(az) sin(col), cos(col))`.
#[must_use]
pub fn spher2cart(azimuth: Angle, colatitude: Angle) -> UnitVector3 {
    let (sin_az, cos_az) = azimuth.radian().sin_cos();
    let (sin_col, cos_col) = colatitude.radian().sin_cos();
    UnitVector3::new_unchecked(Vector3::new(cos_az * sin_col, sin_az * sin_col, cos_col))
}
