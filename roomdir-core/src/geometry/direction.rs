use getset::CopyGetters;

use super::{spher2cart, UnitVector3};
use crate::{
    common::{wrap_radians, rad, Angle, PI},
    error::DirectivityError,
};

/// A direction in 3D parameterized by azimuth and colatitude.
///
/// A [`DirectionVector`] cannot be modified after construction. To change the
/// orientation of a directivity, replace the whole vector with
/// [`Directivity::set_orientation`].
///
/// [`Directivity::set_orientation`]: crate::directivity::Directivity::set_orientation
#[derive(Clone, Copy, Debug, PartialEq, CopyGetters)]
pub struct DirectionVector {
    /// Azimuth in `(-π, π]`.
    #[getset(get_copy = "pub")]
    azimuth: Angle,
    /// Colatitude in `[0, π]`, measured from +z.
    #[getset(get_copy = "pub")]
    colatitude: Angle,
    /// The direction in cartesian coordinates.
    #[getset(get_copy = "pub")]
    unit_vector: UnitVector3,
}

impl DirectionVector {
    /// Creates a new [`DirectionVector`].
    ///
    /// If `colatitude` is `None`, the direction lies in the XY plane (colatitude π/2).
    /// The azimuth is wrapped into `(-π, π]`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectivityError::ColatitudeOutOfRange`] if the colatitude is not in `[0, π]`.
    pub fn new(azimuth: Angle, colatitude: Option<Angle>) -> Result<Self, DirectivityError> {
        let colatitude = colatitude.unwrap_or(Angle::FRAC_PI_2);
        if !(0.0..=PI).contains(&colatitude.radian()) {
            return Err(DirectivityError::ColatitudeOutOfRange(colatitude));
        }
        let azimuth = wrap_radians(azimuth.radian()) * rad;
        Ok(Self {
            azimuth,
            colatitude,
            unit_vector: spher2cart(azimuth, colatitude),
        })
    }

    /// Creates a new [`DirectionVector`] in the XY plane.
    #[must_use]
    pub fn horizontal(azimuth: Angle) -> Self {
        let azimuth = wrap_radians(azimuth.radian()) * rad;
        Self {
            azimuth,
            colatitude: Angle::FRAC_PI_2,
            unit_vector: spher2cart(azimuth, Angle::FRAC_PI_2),
        }
    }
}

impl Default for DirectionVector {
    fn default() -> Self {
        Self::horizontal(Angle::ZERO)
    }
}
