use roomdir_core::error::DirectivityError;
use roomdir_speech::SpeechDataError;
use thiserror::Error;

/// An error of this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RoomDirError {
    /// Error in the directivity models.
    #[error("{0}")]
    Directivity(#[from] DirectivityError),
    /// Error in loading speech directivity data.
    #[error("{0}")]
    SpeechData(#[from] SpeechDataError),
    /// Malformed configuration.
    #[error("{0}")]
    Config(#[from] serde_json::Error),
}
