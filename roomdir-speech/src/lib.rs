#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! This crate provides [`SpeechDirectivity`], the measured directivity of running speech.
//!
//! The pattern is read from a JSON resource of the form
//!
//! ```json
//! {
//!     "centre_freqs": [250, 500, 1000],
//!     "angles": [0, 90, 180],
//!     "data": [[0, -2, -5], [0, -3, -8], [0, -4, -12]]
//! }
//! ```
//!
//! where `data[i][j]` is the gain in dB at `centre_freqs[i]` Hz and `angles[j]` degree.

mod error;
mod speech;
mod table;

pub use error::SpeechDataError;
pub use speech::{SpeechDirectivity, SpeechDirectivityOption, DEFAULT_FREQUENCY};
pub use table::SpeechDirectivityTable;
