use std::{path::Path, sync::Arc};

use roomdir_core::{
    common::{wrap_degrees, Freq, Hz},
    directivity::{Directivity, ResponseQuery},
    error::DirectivityError,
    geometry::DirectionVector,
};

use crate::{error::SpeechDataError, table::SpeechDirectivityTable};

/// The frequency at which [`SpeechDirectivity`] is evaluated when a query has neither frequency nor band, in Hz.
pub const DEFAULT_FREQUENCY: f64 = 1000.0;

/// The option of [`SpeechDirectivity`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechDirectivityOption {
    /// The name of the pattern.
    pub pattern_name: String,
    /// The gain. It is kept for symmetry with other directivities and does not affect the response.
    pub gain: f64,
    /// The frequency used when a query specifies neither frequency nor band.
    pub default_frequency: Freq,
}

impl Default for SpeechDirectivityOption {
    fn default() -> Self {
        Self {
            pattern_name: "running_speech".to_owned(),
            gain: 1.0,
            default_frequency: DEFAULT_FREQUENCY * Hz,
        }
    }
}

/// Measured directivity of running speech.
///
/// The response is the linear amplitude `10^(g/20)`, where `g` is the gain in dB of
/// the table interpolated at the angle between the orientation and the queried
/// direction. The pattern is symmetric around the orientation.
///
/// Phase is not modeled: the magnitude is returned even if the query asks for the
/// signed response. A query without frequency is evaluated at
/// [`SpeechDirectivityOption::default_frequency`], and a band without any centre
/// frequency of the table yields NaN. These cases are reported with
/// [`tracing::warn!`] and do not fail.
///
/// The table is shared behind an [`Arc`] and never modified, so clones of the
/// model are cheap and can be queried from several threads.
#[derive(Clone, Debug)]
pub struct SpeechDirectivity {
    orientation: DirectionVector,
    table: Arc<SpeechDirectivityTable>,
    option: SpeechDirectivityOption,
}

impl SpeechDirectivity {
    /// Creates a new [`SpeechDirectivity`] from a loaded table.
    #[must_use]
    pub fn new(orientation: DirectionVector, table: impl Into<Arc<SpeechDirectivityTable>>) -> Self {
        Self {
            orientation,
            table: table.into(),
            option: SpeechDirectivityOption::default(),
        }
    }

    /// Creates a new [`SpeechDirectivity`] from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SpeechDataError`] if the file is missing or malformed.
    pub fn from_path(
        orientation: DirectionVector,
        path: impl AsRef<Path>,
    ) -> Result<Self, SpeechDataError> {
        Ok(Self::new(
            orientation,
            SpeechDirectivityTable::from_path(path)?,
        ))
    }

    /// Sets the option.
    #[must_use]
    pub fn with_option(self, option: SpeechDirectivityOption) -> Self {
        Self { option, ..self }
    }

    /// Returns the table.
    #[must_use]
    pub fn table(&self) -> &SpeechDirectivityTable {
        &self.table
    }

    /// Returns the option.
    #[must_use]
    pub const fn option(&self) -> &SpeechDirectivityOption {
        &self.option
    }

    fn gains_per_angle(&self, query: &ResponseQuery) -> Vec<f64> {
        if let Some(band) = query.band() {
            return self.table.band_gains(band.clone()).unwrap_or_else(|| {
                tracing::warn!(
                    "No centre frequency in [{:?}, {:?}), response is NaN.",
                    band.start,
                    band.end
                );
                vec![f64::NAN; self.table.pattern_angles().len()]
            });
        }
        let frequency = query.frequency().unwrap_or_else(|| {
            tracing::warn!(
                "SpeechDirectivity is frequency dependent, defaults to response at {:?}.",
                self.option.default_frequency
            );
            self.option.default_frequency
        });
        self.table.gains_at(frequency)
    }
}

impl Directivity for SpeechDirectivity {
    fn orientation(&self) -> &DirectionVector {
        &self.orientation
    }

    fn set_orientation(&mut self, orientation: DirectionVector) {
        self.orientation = orientation;
    }

    fn pattern_name(&self) -> &str {
        &self.option.pattern_name
    }

    fn response(&self, query: &ResponseQuery) -> Result<Vec<f64>, DirectivityError> {
        let directions = query.directions()?;
        if !query.magnitude().unwrap_or(true) {
            tracing::warn!("SpeechDirectivity does not return phase response, magnitude only.");
        }
        let gains_per_angle = self.gains_per_angle(query);

        let o = self.orientation.unit_vector();
        Ok(directions
            .iter()
            .map(|u| {
                // rounding can push the projection of parallel vectors past ±1
                let cos_theta = o.dot(u).clamp(-1.0, 1.0);
                // the pattern is mirrored, so only the magnitude of the angle matters
                let theta = wrap_degrees(cos_theta.acos().to_degrees()).abs();
                self.table
                    .interpolate(theta, &gains_per_angle)
                    .map_or(f64::NAN, |g| 10f64.powf(g / 20.0))
            })
            .collect())
    }
}
