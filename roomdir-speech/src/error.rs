use thiserror::Error;

/// An error produced while loading the speech directivity data.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SpeechDataError {
    /// The resource could not be read.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// The resource is not valid JSON or lacks a field.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    /// An axis of the table is empty.
    #[error("{0} must not be empty")]
    EmptyAxis(&'static str),
    /// An axis of the table is not sorted.
    #[error("{0} must be in ascending order")]
    Unsorted(&'static str),
    /// The angles do not cover \[0, 180\] degree.
    #[error("Angles must cover [0, 180] degree, but cover [{0}, {1}]")]
    AngleCoverage(f64, f64),
    /// The gain matrix does not have `(centre_freqs, angles)` shape.
    #[error("Data has shape {actual:?}, but {expected:?} is expected")]
    Shape {
        /// The expected shape.
        expected: (usize, usize),
        /// The actual shape.
        actual: (usize, usize),
    },
    /// A value of the table is NaN or infinite.
    #[error("{0} contains a non-finite value")]
    NonFinite(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::error::Error;

    #[test]
    fn io() {
        let e = SpeechDataError::Io(std::io::Error::other("test"));
        assert_eq!(e.to_string(), "test");
        assert_eq!(
            format!("{e:?}"),
            "Io(Custom { kind: Other, error: \"test\" })"
        );
    }

    #[test]
    fn json() {
        let e: SpeechDataError = serde_json::from_str::<Vec<f64>>("[1,")
            .unwrap_err()
            .into();
        assert!(matches!(e, SpeechDataError::Json(_)));
        assert!(e.source().is_some());
    }

    #[test]
    fn shape() {
        let e = SpeechDataError::Shape {
            expected: (2, 3),
            actual: (2, 2),
        };
        assert_eq!(
            "Data has shape (2, 2), but (2, 3) is expected",
            e.to_string()
        );
    }

    #[test]
    fn angle_coverage() {
        let e = SpeechDataError::AngleCoverage(0., 90.);
        assert_eq!(
            "Angles must cover [0, 180] degree, but cover [0, 90]",
            e.to_string()
        );
    }
}
