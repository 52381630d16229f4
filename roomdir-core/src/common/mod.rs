mod angle;
mod freq;
mod wrap;

pub use std::f64::consts::PI;

pub use angle::*;
pub use freq::*;
pub use wrap::*;
