#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Core types for transducer directivity in room-acoustics simulation.
//!
//! # Example
//!
//! ```
//! use roomdir_core::{
//!     common::deg,
//!     directivity::{CardioidFamily, Directivity, DirectivityPattern, ResponseQuery},
//!     geometry::DirectionVector,
//! };
//!
//! # fn main() -> Result<(), roomdir_core::error::DirectivityError> {
//! let mic = CardioidFamily::new(
//!     DirectionVector::new(0. * deg, Some(90. * deg))?,
//!     DirectivityPattern::Cardioid,
//! );
//! let query = ResponseQuery::new([0., 90., 180.].map(|a| a * deg))
//!     .with_colatitude([90., 90., 90.].map(|a| a * deg));
//! let response = mic.response(&query)?;
//! assert!((response[0] - 1.0).abs() < 1e-12);
//! assert!((response[1] - 0.5).abs() < 1e-12);
//! assert!(response[2].abs() < 1e-12);
//! # Ok(())
//! # }
//! ```

/// Angle and frequency units, and angle wrapping.
pub mod common;
/// Directivity models.
pub mod directivity;
/// Errors.
pub mod error;
/// Geometry related modules.
pub mod geometry;
/// Image-source angles in rectangular rooms.
pub mod shoebox;
