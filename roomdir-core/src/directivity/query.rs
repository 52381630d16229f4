use std::ops::Range;

use crate::{
    common::{Angle, Freq},
    error::DirectivityError,
    geometry::{spher2cart, Vector3},
};

/// A set of directions (and optionally a frequency or band) at which a
/// [`Directivity`] is evaluated.
///
/// Angles carry their own unit, so a query may mix degree and radian inputs.
///
/// [`Directivity`]: super::Directivity
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ResponseQuery {
    azimuth: Vec<Angle>,
    colatitude: Option<Vec<Angle>>,
    magnitude: Option<bool>,
    frequency: Option<Freq>,
    band: Option<Range<Freq>>,
}

impl ResponseQuery {
    /// Creates a new query at the given azimuths in the XY plane.
    #[must_use]
    pub fn new(azimuth: impl IntoIterator<Item = Angle>) -> Self {
        Self {
            azimuth: azimuth.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Sets the colatitudes. There must be as many colatitudes as azimuths.
    #[must_use]
    pub fn with_colatitude(self, colatitude: impl IntoIterator<Item = Angle>) -> Self {
        Self {
            colatitude: Some(colatitude.into_iter().collect()),
            ..self
        }
    }

    /// Requests the magnitude (`true`) or the signed response (`false`).
    ///
    /// If not set, each model applies its own default.
    #[must_use]
    pub fn with_magnitude(self, magnitude: bool) -> Self {
        Self {
            magnitude: Some(magnitude),
            ..self
        }
    }

    /// Sets the frequency at which the response is evaluated.
    #[must_use]
    pub fn with_frequency(self, frequency: Freq) -> Self {
        Self {
            frequency: Some(frequency),
            ..self
        }
    }

    /// Sets the frequency band `[low, high)` over which the response is averaged.
    ///
    /// A band takes precedence over [`with_frequency`](Self::with_frequency).
    #[must_use]
    pub fn with_band(self, band: Range<Freq>) -> Self {
        Self {
            band: Some(band),
            ..self
        }
    }

    /// Returns the azimuths.
    #[must_use]
    pub fn azimuth(&self) -> &[Angle] {
        &self.azimuth
    }

    /// Returns the colatitudes, if set.
    #[must_use]
    pub fn colatitude(&self) -> Option<&[Angle]> {
        self.colatitude.as_deref()
    }

    /// Returns the requested magnitude flag, if set.
    #[must_use]
    pub const fn magnitude(&self) -> Option<bool> {
        self.magnitude
    }

    /// Returns the frequency, if set.
    #[must_use]
    pub const fn frequency(&self) -> Option<Freq> {
        self.frequency
    }

    /// Returns the band, if set.
    #[must_use]
    pub fn band(&self) -> Option<Range<Freq>> {
        self.band.clone()
    }

    /// Returns the number of directions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.azimuth.len()
    }

    /// Returns `true` if the query has no direction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.azimuth.is_empty()
    }

    /// Checks that azimuths and colatitudes have the same length.
    ///
    /// # Errors
    ///
    /// Returns [`DirectivityError::LengthMismatch`] otherwise.
    pub fn validate(&self) -> Result<(), DirectivityError> {
        match &self.colatitude {
            Some(colatitude) if colatitude.len() != self.azimuth.len() => {
                Err(DirectivityError::LengthMismatch {
                    azimuth: self.azimuth.len(),
                    colatitude: colatitude.len(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Converts the queried directions into unit vectors.
    ///
    /// NaN angles produce NaN components.
    ///
    /// # Errors
    ///
    /// Returns [`DirectivityError::LengthMismatch`] if azimuths and colatitudes differ in length.
    pub fn directions(&self) -> Result<Vec<Vector3>, DirectivityError> {
        self.validate()?;
        Ok(match &self.colatitude {
            Some(colatitude) => self
                .azimuth
                .iter()
                .zip(colatitude.iter())
                .map(|(&az, &col)| spher2cart(az, col).into_inner())
                .collect(),
            None => self
                .azimuth
                .iter()
                .map(|&az| spher2cart(az, Angle::FRAC_PI_2).into_inner())
                .collect(),
        })
    }
}
