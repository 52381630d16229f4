/// \[°\]
#[allow(non_camel_case_types)]
pub struct deg;

/// \[rad\]
#[allow(non_camel_case_types)]
pub struct rad;

use derive_more::Debug;

/// Angle
///
/// The value is held in radian regardless of the unit it was created with.
/// NaN is a valid angle and is carried through unchanged.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
#[debug("{}rad", radian)]
pub struct Angle {
    radian: f64,
}

impl Angle {
    /// An angle of zero
    pub const ZERO: Self = Self { radian: 0.0 };

    /// An angle of π/2
    pub const FRAC_PI_2: Self = Self {
        radian: std::f64::consts::FRAC_PI_2,
    };

    /// An angle of π
    pub const PI: Self = Self {
        radian: std::f64::consts::PI,
    };

    /// Returns the angle in radian
    #[must_use]
    pub const fn radian(self) -> f64 {
        self.radian
    }

    /// Returns the angle in degree
    #[must_use]
    pub fn degree(self) -> f64 {
        self.radian.to_degrees()
    }

    /// Returns `true` if the angle is NaN.
    #[must_use]
    pub fn is_nan(self) -> bool {
        self.radian.is_nan()
    }
}

impl std::ops::Mul<deg> for f64 {
    type Output = Angle;

    fn mul(self, _rhs: deg) -> Self::Output {
        Self::Output {
            radian: self.to_radians(),
        }
    }
}

impl std::ops::Mul<rad> for f64 {
    type Output = Angle;

    fn mul(self, _rhs: rad) -> Self::Output {
        Self::Output { radian: self }
    }
}

impl std::ops::Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Self::Output {
        Self {
            radian: -self.radian,
        }
    }
}
