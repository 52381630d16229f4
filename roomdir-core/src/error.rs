use thiserror::Error;

use crate::common::Angle;

/// An error produced by directivity models and image-source geometry.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DirectivityError {
    /// Colatitude must be in \[0, π\].
    #[error("Colatitude ({0:?}) is out of range ([0, π])")]
    ColatitudeOutOfRange(Angle),
    /// Cardioid coefficient must be in \[0, 1\].
    #[error("Cardioid coefficient ({0}) is out of range ([0, 1])")]
    CoefficientOutOfRange(f64),
    /// The number of colatitudes differs from the number of azimuths.
    #[error("The number of colatitudes ({colatitude}) does not match the number of azimuths ({azimuth})")]
    LengthMismatch {
        /// The number of azimuths.
        azimuth: usize,
        /// The number of colatitudes.
        colatitude: usize,
    },
    /// An input does not have the shape of the image-source matrix.
    #[error("{name} has shape {actual:?}, but {expected:?} is expected")]
    DimensionMismatch {
        /// The name of the input.
        name: &'static str,
        /// The expected shape.
        expected: (usize, usize),
        /// The actual shape.
        actual: (usize, usize),
    },
    /// Only 2- and 3-dimensional rooms are supported.
    #[error("{0}-dimensional room is not supported")]
    UnsupportedDimension(usize),
}
