mod cardioid;
mod pattern;
mod query;

use crate::{common::Angle, error::DirectivityError, geometry::DirectionVector};

pub use cardioid::{cardioid_response, CardioidFamily, CardioidOption};
pub use pattern::{DirectivityPattern, UnknownPatternError};
pub use query::ResponseQuery;

/// A trait representing the directivity of an acoustic transducer.
///
/// Implementations hold their own orientation and answer queries through `&self`
/// only, so a model can be shared between threads once it has been fully
/// constructed (e.g. moved into an [`Arc`]). Replacing the orientation requires
/// `&mut self`; callers that need to re-orient a shared model must synchronize
/// externally or keep one model per thread.
///
/// [`Arc`]: std::sync::Arc
pub trait Directivity: Send + Sync {
    /// Returns the orientation of the pattern.
    #[must_use]
    fn orientation(&self) -> &DirectionVector;

    /// Replaces the orientation of the pattern.
    fn set_orientation(&mut self, orientation: DirectionVector);

    /// Returns the name of the pattern.
    #[must_use]
    fn pattern_name(&self) -> &str;

    /// Calculates the response at the directions given by `query`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectivityError`] if the query is malformed for this model.
    fn response(&self, query: &ResponseQuery) -> Result<Vec<f64>, DirectivityError>;

    /// Returns the azimuth of the orientation.
    #[must_use]
    fn azimuth(&self) -> Angle {
        self.orientation().azimuth()
    }

    /// Returns the colatitude of the orientation.
    #[must_use]
    fn colatitude(&self) -> Angle {
        self.orientation().colatitude()
    }
}
