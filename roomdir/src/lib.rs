#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Directivity patterns of sources and microphones for room acoustics simulation.
//!
//! ```
//! use roomdir::prelude::*;
//!
//! # fn main() -> Result<(), RoomDirError> {
//! let mic = CardioidFamily::new(DirectionVector::horizontal(0. * deg), DirectivityPattern::Cardioid);
//! let r = mic.response(&ResponseQuery::new([0. * deg, 90. * deg, 180. * deg]))?;
//! assert!((r[1] - 0.5).abs() < 1e-12);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod prelude;

pub use roomdir_core as core;
pub use roomdir_speech as speech;
