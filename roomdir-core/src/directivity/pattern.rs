use std::str::FromStr;

use derive_more::Display;

/// Common patterns of the cardioid family and their coefficient `a` for
///
/// `r = a + (1 - a) cos θ`
///
/// where `r` is the gain at angle `θ` from the orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum DirectivityPattern {
    /// `a = 0`
    #[display("FIGURE_EIGHT")]
    FigureEight,
    /// `a = 0.25`
    #[display("HYPERCARDIOID")]
    Hypercardioid,
    /// `a = 0.5`
    #[display("CARDIOID")]
    Cardioid,
    /// `a = 0.75`
    #[display("SUBCARDIOID")]
    Subcardioid,
    /// `a = 1`
    #[display("OMNI")]
    Omni,
}

impl DirectivityPattern {
    /// All patterns, from the most to the least directional.
    pub const ALL: [Self; 5] = [
        Self::FigureEight,
        Self::Hypercardioid,
        Self::Cardioid,
        Self::Subcardioid,
        Self::Omni,
    ];

    /// Returns the coefficient of the pattern.
    #[must_use]
    pub const fn coefficient(self) -> f64 {
        match self {
            Self::FigureEight => 0.0,
            Self::Hypercardioid => 0.25,
            Self::Cardioid => 0.5,
            Self::Subcardioid => 0.75,
            Self::Omni => 1.0,
        }
    }
}

/// The error returned when a name does not match any [`DirectivityPattern`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown directivity pattern: {0}")]
pub struct UnknownPatternError(pub String);

impl FromStr for DirectivityPattern {
    type Err = UnknownPatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPatternError(s.to_owned()))
    }
}
