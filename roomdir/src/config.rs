//! Declarative construction of directivity models.
//!
//! ```
//! use roomdir::prelude::*;
//!
//! # fn main() -> Result<(), RoomDirError> {
//! let config = DirectivityConfig::from_json_str(
//!     r#"{ "type": "cardioid", "azimuth_deg": 90, "pattern": "HYPERCARDIOID" }"#,
//! )?;
//! let mic = config.build()?;
//! assert_eq!("HYPERCARDIOID", mic.pattern_name());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use roomdir_core::{
    common::{deg, Hz},
    directivity::{CardioidFamily, Directivity, DirectivityPattern},
    geometry::DirectionVector,
};
use roomdir_speech::{SpeechDirectivity, SpeechDirectivityOption};
use serde::{Deserialize, Serialize};

use crate::error::RoomDirError;

const fn unit_gain() -> f64 {
    1.0
}

/// Configuration of a directivity model.
///
/// Angles are in degree. The colatitude defaults to the horizontal plane.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DirectivityConfig {
    /// [`CardioidFamily`]
    Cardioid {
        /// Azimuth of the orientation.
        azimuth_deg: f64,
        /// Colatitude of the orientation.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        colatitude_deg: Option<f64>,
        /// Pattern.
        pattern: DirectivityPattern,
        /// Gain.
        #[serde(default = "unit_gain")]
        gain: f64,
    },
    /// [`SpeechDirectivity`]
    Speech {
        /// Azimuth of the orientation.
        azimuth_deg: f64,
        /// Colatitude of the orientation.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        colatitude_deg: Option<f64>,
        /// Path to the JSON table of the pattern.
        data: PathBuf,
        /// Name of the pattern.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pattern_name: Option<String>,
        /// Frequency used for queries without frequency, in Hz.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_frequency_hz: Option<f64>,
    },
}

impl DirectivityConfig {
    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RoomDirError::Config`] if `json` is not a valid configuration.
    pub fn from_json_str(json: &str) -> Result<Self, RoomDirError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RoomDirError::Config`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, RoomDirError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Builds the configured model.
    ///
    /// # Errors
    ///
    /// Returns [`RoomDirError`] if the orientation is invalid or the speech data cannot be loaded.
    pub fn build(&self) -> Result<Box<dyn Directivity>, RoomDirError> {
        let directivity: Box<dyn Directivity> = match self {
            Self::Cardioid {
                azimuth_deg,
                colatitude_deg,
                pattern,
                gain,
            } => Box::new(
                CardioidFamily::new(orientation(*azimuth_deg, *colatitude_deg)?, *pattern)
                    .with_gain(*gain),
            ),
            Self::Speech {
                azimuth_deg,
                colatitude_deg,
                data,
                pattern_name,
                default_frequency_hz,
            } => {
                let default = SpeechDirectivityOption::default();
                let option = SpeechDirectivityOption {
                    pattern_name: pattern_name.clone().unwrap_or(default.pattern_name),
                    default_frequency: default_frequency_hz
                        .map_or(default.default_frequency, |f| f * Hz),
                    gain: default.gain,
                };
                Box::new(
                    SpeechDirectivity::from_path(orientation(*azimuth_deg, *colatitude_deg)?, data)?
                        .with_option(option),
                )
            }
        };
        tracing::debug!(
            "Built {} directivity oriented to {:?}.",
            directivity.pattern_name(),
            directivity.orientation()
        );
        Ok(directivity)
    }
}

fn orientation(
    azimuth_deg: f64,
    colatitude_deg: Option<f64>,
) -> Result<DirectionVector, RoomDirError> {
    Ok(DirectionVector::new(
        azimuth_deg * deg,
        colatitude_deg.map(|c| c * deg),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use roomdir_core::{
        common::{kHz, Angle},
        directivity::ResponseQuery,
        error::DirectivityError,
    };

    const SPEECH_TABLE: &str = r#"{
        "centre_freqs": [500, 1000],
        "angles": [0, 90, 180],
        "data": [[0, -6, -12], [0, -10, -20]]
    }"#;

    fn speech_table() -> anyhow::Result<tempfile::NamedTempFile> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(SPEECH_TABLE.as_bytes())?;
        Ok(file)
    }

    #[test]
    fn cardioid() -> anyhow::Result<()> {
        let config = DirectivityConfig::from_json_str(
            r#"{ "type": "cardioid", "azimuth_deg": 180, "pattern": "CARDIOID", "gain": 2 }"#,
        )?;
        assert_eq!(
            DirectivityConfig::Cardioid {
                azimuth_deg: 180.,
                colatitude_deg: None,
                pattern: DirectivityPattern::Cardioid,
                gain: 2.,
            },
            config
        );

        let mic = config.build()?;
        approx::assert_abs_diff_eq!(180., mic.azimuth().degree(), epsilon = 1e-12);
        approx::assert_abs_diff_eq!(90., mic.colatitude().degree(), epsilon = 1e-12);
        let r = mic.response(&ResponseQuery::new([180. * deg, 90. * deg]))?;
        approx::assert_abs_diff_eq!(1.5, r[0], epsilon = 1e-12);
        approx::assert_abs_diff_eq!(1.0, r[1], epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn default_gain() -> anyhow::Result<()> {
        let config = DirectivityConfig::from_json_str(
            r#"{ "type": "cardioid", "azimuth_deg": 0, "colatitude_deg": 0, "pattern": "OMNI" }"#,
        )?;
        assert!(matches!(
            config,
            DirectivityConfig::Cardioid {
                colatitude_deg: Some(_),
                gain,
                ..
            } if gain == 1.0
        ));
        Ok(())
    }

    #[test]
    fn speech() -> anyhow::Result<()> {
        let file = speech_table()?;
        let config = DirectivityConfig::Speech {
            azimuth_deg: 0.,
            colatitude_deg: None,
            data: file.path().to_path_buf(),
            pattern_name: None,
            default_frequency_hz: Some(500.),
        };
        let talker = DirectivityConfig::from_json_str(&config.to_json_string()?)?.build()?;
        assert_eq!("running_speech", talker.pattern_name());

        let r = talker.response(&ResponseQuery::new([90. * deg]))?;
        approx::assert_abs_diff_eq!(10f64.powf(-6. / 20.), r[0], epsilon = 1e-12);
        let r = talker.response(&ResponseQuery::new([90. * deg]).with_frequency(1. * kHz))?;
        approx::assert_abs_diff_eq!(10f64.powf(-10. / 20.), r[0], epsilon = 1e-12);
        Ok(())
    }

    #[rstest::rstest]
    #[case(r#"{ "type": "cardioid", "azimuth_deg": 0, "pattern": "SUPERCARDIOID" }"#)]
    #[case(r#"{ "type": "hologram", "azimuth_deg": 0 }"#)]
    #[case(r#"{ "type": "speech", "azimuth_deg": 0 }"#)]
    fn malformed(#[case] json: &str) {
        assert!(matches!(
            DirectivityConfig::from_json_str(json),
            Err(RoomDirError::Config(_))
        ));
    }

    #[test]
    fn invalid_colatitude() {
        let config = DirectivityConfig::Cardioid {
            azimuth_deg: 0.,
            colatitude_deg: Some(270.),
            pattern: DirectivityPattern::Cardioid,
            gain: 1.,
        };
        assert!(matches!(
            config.build(),
            Err(RoomDirError::Directivity(
                DirectivityError::ColatitudeOutOfRange(c)
            )) if c == 270. * deg
        ));
    }

    #[test]
    fn missing_data() {
        let config = DirectivityConfig::Speech {
            azimuth_deg: 0.,
            colatitude_deg: Some(Angle::FRAC_PI_2.degree()),
            data: PathBuf::from("not_exists.json"),
            pattern_name: Some("singing".to_owned()),
            default_frequency_hz: None,
        };
        assert!(matches!(
            config.build(),
            Err(RoomDirError::SpeechData(_))
        ));
    }
}
