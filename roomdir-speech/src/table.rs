use std::{
    fs::File,
    io::{BufReader, Read},
    ops::Range,
    path::Path,
};

use getset::Getters;
use nalgebra::DMatrix;
use serde::Deserialize;

use roomdir_core::common::Freq;

use crate::error::SpeechDataError;

#[derive(Deserialize)]
struct RawTable {
    centre_freqs: Vec<f64>,
    angles: Vec<f64>,
    data: Vec<Vec<f64>>,
}

/// Gains in dB of a directivity pattern, sampled over centre frequencies and angles.
///
/// The table is validated on construction and never modified afterwards.
#[derive(Clone, Debug, PartialEq, Getters)]
pub struct SpeechDirectivityTable {
    /// Centre frequencies in Hz, in ascending order.
    #[getset(get = "pub")]
    centre_freqs: Vec<f64>,
    /// Angles from the orientation in degree, in ascending order, covering \[0, 180\].
    #[getset(get = "pub")]
    pattern_angles: Vec<f64>,
    /// Gains in dB; one row per centre frequency, one column per angle.
    #[getset(get = "pub")]
    gains_db: DMatrix<f64>,
}

fn check_axis(name: &'static str, axis: &[f64]) -> Result<(), SpeechDataError> {
    if axis.is_empty() {
        return Err(SpeechDataError::EmptyAxis(name));
    }
    if axis.iter().any(|v| !v.is_finite()) {
        return Err(SpeechDataError::NonFinite(name));
    }
    if axis.windows(2).any(|w| w[0] >= w[1]) {
        return Err(SpeechDataError::Unsorted(name));
    }
    Ok(())
}

impl SpeechDirectivityTable {
    /// Creates a new [`SpeechDirectivityTable`].
    ///
    /// # Errors
    ///
    /// Returns [`SpeechDataError`] if an axis is empty, unsorted or non-finite, if
    /// the angles do not cover \[0, 180\], or if `gains_db` is not
    /// `centre_freqs.len() × pattern_angles.len()`.
    pub fn new(
        centre_freqs: Vec<f64>,
        pattern_angles: Vec<f64>,
        gains_db: DMatrix<f64>,
    ) -> Result<Self, SpeechDataError> {
        check_axis("centre_freqs", &centre_freqs)?;
        check_axis("angles", &pattern_angles)?;
        let first = pattern_angles[0];
        let last = pattern_angles[pattern_angles.len() - 1];
        if first > 0.0 || last < 180.0 {
            return Err(SpeechDataError::AngleCoverage(first, last));
        }
        let expected = (centre_freqs.len(), pattern_angles.len());
        if gains_db.shape() != expected {
            return Err(SpeechDataError::Shape {
                expected,
                actual: gains_db.shape(),
            });
        }
        if gains_db.iter().any(|v| !v.is_finite()) {
            return Err(SpeechDataError::NonFinite("data"));
        }
        Ok(Self {
            centre_freqs,
            pattern_angles,
            gains_db,
        })
    }

    /// Reads a table from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SpeechDataError`] if the JSON is malformed or the table is invalid.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SpeechDataError> {
        let raw: RawTable = serde_json::from_reader(reader)?;
        let expected = (raw.centre_freqs.len(), raw.angles.len());
        if let Some(row) = raw.data.iter().find(|row| row.len() != expected.1) {
            return Err(SpeechDataError::Shape {
                expected,
                actual: (raw.data.len(), row.len()),
            });
        }
        if raw.data.len() != expected.0 {
            return Err(SpeechDataError::Shape {
                expected,
                actual: (raw.data.len(), expected.1),
            });
        }
        let gains_db = DMatrix::from_fn(expected.0, expected.1, |i, j| raw.data[i][j]);
        Self::new(raw.centre_freqs, raw.angles, gains_db)
    }

    /// Reads a table from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SpeechDataError`] if the file cannot be read or the table is invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SpeechDataError> {
        Self::read_file(path.as_ref())
    }

    #[tracing::instrument]
    fn read_file(path: &Path) -> Result<Self, SpeechDataError> {
        let table = Self::from_reader(BufReader::new(File::open(path)?))?;
        tracing::debug!(
            "Loaded {} centre frequencies × {} angles.",
            table.centre_freqs.len(),
            table.pattern_angles.len()
        );
        Ok(table)
    }

    /// Returns the index of the centre frequency closest to `frequency`.
    ///
    /// Ties resolve to the lower index.
    #[must_use]
    pub fn nearest_index(&self, frequency: Freq) -> usize {
        let f = frequency.hz();
        self.centre_freqs
            .iter()
            .enumerate()
            .fold((0, f64::INFINITY), |(best, min), (i, c)| {
                let d = (f - c).abs();
                if d < min {
                    (i, d)
                } else {
                    (best, min)
                }
            })
            .0
    }

    /// Returns the gains in dB per angle at the centre frequency closest to `frequency`.
    #[must_use]
    pub fn gains_at(&self, frequency: Freq) -> Vec<f64> {
        self.gains_db
            .row(self.nearest_index(frequency))
            .iter()
            .copied()
            .collect()
    }

    /// Returns the gains in dB per angle averaged in power over the centre
    /// frequencies in `band` (lower bound inclusive, upper bound exclusive).
    ///
    /// Returns `None` if no centre frequency lies in `band`.
    #[must_use]
    pub fn band_gains(&self, band: Range<Freq>) -> Option<Vec<f64>> {
        let rows: Vec<_> = self
            .centre_freqs
            .iter()
            .enumerate()
            .filter(|&(_, &c)| band.start.hz() <= c && c < band.end.hz())
            .map(|(i, _)| i)
            .collect();
        if rows.is_empty() {
            return None;
        }
        Some(
            self.gains_db
                .column_iter()
                .map(|col| {
                    let power = rows
                        .iter()
                        .map(|&i| 10f64.powf(col[i] / 10.0))
                        .sum::<f64>()
                        / rows.len() as f64;
                    10.0 * power.log10()
                })
                .collect(),
        )
    }

    /// Linearly interpolates `gains_db` (one value per pattern angle) at `angle` in degree.
    ///
    /// Angles outside the table take the value at the nearest end, and NaN yields NaN.
    /// Returns `None` if `gains_db` does not have one value per pattern angle.
    #[must_use]
    pub fn interpolate(&self, angle: f64, gains_db: &[f64]) -> Option<f64> {
        let xp = &self.pattern_angles;
        if gains_db.len() != xp.len() {
            return None;
        }
        if angle.is_nan() {
            return Some(f64::NAN);
        }
        if angle <= xp[0] {
            return Some(gains_db[0]);
        }
        if angle >= xp[xp.len() - 1] {
            return Some(gains_db[xp.len() - 1]);
        }
        let i = xp.partition_point(|&x| x <= angle);
        let t = (angle - xp[i - 1]) / (xp[i] - xp[i - 1]);
        Some(gains_db[i - 1] + t * (gains_db[i] - gains_db[i - 1]))
    }
}
