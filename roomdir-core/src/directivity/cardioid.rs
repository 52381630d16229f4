use getset::CopyGetters;

use super::{Directivity, DirectivityPattern, ResponseQuery};
use crate::{
    error::DirectivityError,
    geometry::{DirectionVector, Vector3},
};

/// Directivity of the [cardioid family](https://en.wikipedia.org/wiki/Microphone#Polar_patterns).
///
/// The response at direction `u` is `gain·a + (1 - a)·(o · u)`, where `o` is the
/// orientation and `a` the coefficient of the [`DirectivityPattern`].
/// [`DirectivityPattern::Omni`] always responds with `1`.
///
/// The cardioid family is frequency independent: the frequency and band of a
/// [`ResponseQuery`] are accepted and have no effect.
/// The signed response is returned unless the query requests the magnitude, so
/// the rear lobe of sub-omni patterns is negative.
#[derive(Clone, Debug, PartialEq, CopyGetters)]
pub struct CardioidFamily {
    orientation: DirectionVector,
    /// The pattern.
    #[getset(get_copy = "pub")]
    pattern: DirectivityPattern,
    /// The gain.
    #[getset(get_copy = "pub")]
    gain: f64,
}

impl CardioidFamily {
    /// Creates a new [`CardioidFamily`] with unit gain.
    #[must_use]
    pub const fn new(orientation: DirectionVector, pattern: DirectivityPattern) -> Self {
        Self {
            orientation,
            pattern,
            gain: 1.0,
        }
    }

    /// Sets the gain.
    #[must_use]
    pub const fn with_gain(self, gain: f64) -> Self {
        Self { gain, ..self }
    }
}

impl Directivity for CardioidFamily {
    fn orientation(&self) -> &DirectionVector {
        &self.orientation
    }

    fn set_orientation(&mut self, orientation: DirectionVector) {
        self.orientation = orientation;
    }

    fn pattern_name(&self) -> &str {
        match self.pattern {
            DirectivityPattern::FigureEight => "FIGURE_EIGHT",
            DirectivityPattern::Hypercardioid => "HYPERCARDIOID",
            DirectivityPattern::Cardioid => "CARDIOID",
            DirectivityPattern::Subcardioid => "SUBCARDIOID",
            DirectivityPattern::Omni => "OMNI",
        }
    }

    fn response(&self, query: &ResponseQuery) -> Result<Vec<f64>, DirectivityError> {
        query.validate()?;
        if query.frequency().is_some() || query.band().is_some() {
            tracing::trace!("Cardioid family is frequency independent, ignoring frequency.");
        }

        if self.pattern == DirectivityPattern::Omni {
            return Ok(vec![1.0; query.len()]);
        }

        let a = self.pattern.coefficient();
        let o = self.orientation.unit_vector();
        let magnitude = query.magnitude().unwrap_or(false);
        Ok(query
            .directions()?
            .iter()
            .map(|u| {
                let r = self.gain * a + (1.0 - a) * o.dot(u);
                if magnitude {
                    r.abs()
                } else {
                    r
                }
            })
            .collect())
    }
}

/// The option of [`cardioid_response`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardioidOption {
    /// The gain.
    pub gain: f64,
    /// Whether to normalize the points and the direction before projecting.
    pub normalize: bool,
    /// Whether to return the magnitude of the response.
    pub magnitude: bool,
}

impl Default for CardioidOption {
    fn default() -> Self {
        Self {
            gain: 1.0,
            normalize: true,
            magnitude: false,
        }
    }
}

/// Calculates the cardioid response `gain·(a + (1 - a)·(direction · x))` at each point `x`.
///
/// Unlike [`CardioidFamily`], the coefficient may be any value in `[0, 1]` and the
/// gain scales the whole response.
///
/// # Errors
///
/// Returns [`DirectivityError::CoefficientOutOfRange`] if `coefficient` is not in `[0, 1]`.
pub fn cardioid_response(
    points: &[Vector3],
    direction: &Vector3,
    coefficient: f64,
    option: CardioidOption,
) -> Result<Vec<f64>, DirectivityError> {
    if !(0.0..=1.0).contains(&coefficient) {
        return Err(DirectivityError::CoefficientOutOfRange(coefficient));
    }
    let direction = if option.normalize {
        direction.normalize()
    } else {
        *direction
    };
    Ok(points
        .iter()
        .map(|x| {
            let cos = if option.normalize {
                direction.dot(&x.normalize())
            } else {
                direction.dot(x)
            };
            let r = option.gain * (coefficient + (1.0 - coefficient) * cos);
            if option.magnitude {
                r.abs()
            } else {
                r
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::prelude::*;

    use crate::common::{deg, rad, Hz, PI};

    fn random_query(n: usize) -> ResponseQuery {
        let mut rng = rand::rng();
        let azimuth: Vec<_> = (0..n).map(|_| rng.random_range(-PI..PI) * rad).collect();
        let colatitude: Vec<_> = (0..n).map(|_| rng.random_range(0.0..=PI) * rad).collect();
        ResponseQuery::new(azimuth).with_colatitude(colatitude)
    }

    #[test]
    fn cardioid_horizontal() -> anyhow::Result<()> {
        let c = CardioidFamily::new(
            DirectionVector::new(0. * deg, Some(90. * deg))?,
            DirectivityPattern::Cardioid,
        );
        let r = c.response(
            &ResponseQuery::new([0. * deg, 90. * deg, 180. * deg])
                .with_colatitude([90. * deg, 90. * deg, 90. * deg]),
        )?;
        approx::assert_abs_diff_eq!([1.0, 0.5, 0.0].as_slice(), r.as_slice(), epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn omni_is_one_everywhere() -> anyhow::Result<()> {
        let orientation = DirectionVector::new(30. * deg, Some(45. * deg))?;
        let c = CardioidFamily::new(orientation, DirectivityPattern::Omni).with_gain(3.0);
        assert!(c.response(&random_query(100))?.iter().all(|&r| r == 1.0));

        let antiparallel =
            ResponseQuery::new([-150. * deg]).with_colatitude([135. * deg]);
        assert_eq!(vec![1.0], c.response(&antiparallel)?);
        Ok(())
    }

    #[test]
    fn figure_eight_is_dot_product() -> anyhow::Result<()> {
        let orientation = DirectionVector::new(-60. * deg, Some(120. * deg))?;
        let c = CardioidFamily::new(orientation, DirectivityPattern::FigureEight);
        let query = random_query(100);
        let r = c.response(&query)?;
        query
            .directions()?
            .iter()
            .zip(r)
            .for_each(|(u, r)| {
                approx::assert_abs_diff_eq!(orientation.unit_vector().dot(u), r, epsilon = 1e-12);
            });
        Ok(())
    }

    #[rstest::rstest]
    #[case(DirectivityPattern::FigureEight)]
    #[case(DirectivityPattern::Hypercardioid)]
    #[case(DirectivityPattern::Cardioid)]
    #[case(DirectivityPattern::Subcardioid)]
    #[case(DirectivityPattern::Omni)]
    fn maximum_at_orientation(#[case] pattern: DirectivityPattern) -> anyhow::Result<()> {
        let orientation = DirectionVector::new(75. * deg, Some(20. * deg))?;
        let c = CardioidFamily::new(orientation, pattern);
        let on_axis = c.response(
            &ResponseQuery::new([orientation.azimuth()])
                .with_colatitude([orientation.colatitude()]),
        )?;
        approx::assert_abs_diff_eq!(c.gain(), on_axis[0], epsilon = 1e-12);
        c.response(&random_query(100))?
            .into_iter()
            .for_each(|r| assert!(r <= on_axis[0] + 1e-12));
        Ok(())
    }

    #[rstest::rstest]
    #[case(-0.5, false)]
    #[case(0.5, true)]
    fn hypercardioid_rear(#[case] expected: f64, #[case] magnitude: bool) -> anyhow::Result<()> {
        let c = CardioidFamily::new(DirectionVector::default(), DirectivityPattern::Hypercardioid);
        let r = c.response(&ResponseQuery::new([180. * deg]).with_magnitude(magnitude))?;
        approx::assert_abs_diff_eq!(expected, r[0], epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn gain() -> anyhow::Result<()> {
        let c = CardioidFamily::new(DirectionVector::default(), DirectivityPattern::Subcardioid)
            .with_gain(2.0);
        assert_eq!(2.0, c.gain());
        let r = c.response(&ResponseQuery::new([0. * deg, 180. * deg]))?;
        approx::assert_abs_diff_eq!([1.75, 1.25].as_slice(), r.as_slice(), epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn frequency_has_no_effect() -> anyhow::Result<()> {
        let c = CardioidFamily::new(DirectionVector::default(), DirectivityPattern::Cardioid);
        let query = random_query(32);
        let expected = c.response(&query)?;
        assert_eq!(expected, c.response(&query.clone().with_frequency(125. * Hz))?);
        assert_eq!(
            expected,
            c.response(&query.with_band(100. * Hz..8000. * Hz))?
        );
        Ok(())
    }

    #[rstest::rstest]
    #[case(DirectivityPattern::Cardioid)]
    #[case(DirectivityPattern::Omni)]
    fn length_mismatch(#[case] pattern: DirectivityPattern) {
        let c = CardioidFamily::new(DirectionVector::default(), pattern);
        assert_eq!(
            Err(DirectivityError::LengthMismatch {
                azimuth: 2,
                colatitude: 3
            }),
            c.response(
                &ResponseQuery::new([0. * deg, 1. * deg])
                    .with_colatitude([0. * deg, 1. * deg, 2. * deg])
            )
        );
    }

    #[test]
    fn nan_is_propagated() -> anyhow::Result<()> {
        let c = CardioidFamily::new(DirectionVector::default(), DirectivityPattern::Cardioid);
        let r = c.response(&ResponseQuery::new([0. * deg, f64::NAN * deg]))?;
        approx::assert_abs_diff_eq!(1.0, r[0], epsilon = 1e-12);
        assert!(r[1].is_nan());
        Ok(())
    }

    #[test]
    fn pattern_name() {
        DirectivityPattern::ALL.into_iter().for_each(|p| {
            let c = CardioidFamily::new(DirectionVector::default(), p);
            assert_eq!(p.to_string(), c.pattern_name());
        });
    }

    #[rstest::rstest]
    #[case(vec![1.0, 0.5, 0.0], 0.5, CardioidOption::default())]
    #[case(vec![2.0, 1.0, 0.0], 0.5, CardioidOption { gain: 2.0, ..Default::default() })]
    #[case(vec![1.0, 0.0, -1.0], 0.0, CardioidOption::default())]
    #[case(vec![1.0, 0.0, 1.0], 0.0, CardioidOption { magnitude: true, ..Default::default() })]
    #[case(vec![1.0, 1.0, 1.0], 1.0, CardioidOption::default())]
    fn cardioid_response_normalized(
        #[case] expected: Vec<f64>,
        #[case] coefficient: f64,
        #[case] option: CardioidOption,
    ) -> anyhow::Result<()> {
        let points = [
            Vector3::new(3., 0., 0.),
            Vector3::new(0., 0., 0.5),
            Vector3::new(-2., 0., 0.),
        ];
        let r = cardioid_response(&points, &Vector3::new(5., 0., 0.), coefficient, option)?;
        approx::assert_abs_diff_eq!(expected.as_slice(), r.as_slice(), epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn cardioid_response_unnormalized() -> anyhow::Result<()> {
        let r = cardioid_response(
            &[Vector3::new(2., 0., 0.)],
            &Vector3::x(),
            0.5,
            CardioidOption {
                normalize: false,
                ..Default::default()
            },
        )?;
        approx::assert_abs_diff_eq!(1.5, r[0], epsilon = 1e-12);
        Ok(())
    }

    #[rstest::rstest]
    #[case(-0.1)]
    #[case(1.1)]
    #[case(f64::NAN)]
    fn cardioid_response_out_of_range(#[case] coefficient: f64) {
        assert!(matches!(
            cardioid_response(&[], &Vector3::x(), coefficient, CardioidOption::default()),
            Err(DirectivityError::CoefficientOutOfRange(_))
        ));
    }
}
