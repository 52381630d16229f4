use std::f64::consts::FRAC_PI_2;

use getset::Getters;
use nalgebra::DMatrix;

use crate::{
    common::{rad, Angle},
    directivity::{Directivity, ResponseQuery},
    error::DirectivityError,
    geometry::{Matrix, Vector},
};

/// The emission direction of each image source, paired with the image sources by index.
///
/// Each direction is the one in which the path of the image source leaves the real
/// source, so it is meant for the directivity of the source.
#[derive(Clone, Debug, PartialEq, Default, Getters)]
pub struct ImageSourceAngles {
    /// Emission azimuth of each image source.
    #[getset(get = "pub")]
    azimuth: Vec<Angle>,
    /// Emission colatitude of each image source.
    #[getset(get = "pub")]
    colatitude: Vec<Angle>,
}

impl ImageSourceAngles {
    /// Returns the number of image sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.azimuth.len()
    }

    /// Returns `true` if there is no image source.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.azimuth.is_empty()
    }

    /// Returns a [`ResponseQuery`] at the emission directions of the image sources.
    #[must_use]
    pub fn to_query(&self) -> ResponseQuery {
        ResponseQuery::new(self.azimuth.iter().copied())
            .with_colatitude(self.colatitude.iter().copied())
    }

    /// Evaluates the source `directivity` at the emission direction of each image source.
    ///
    /// To evaluate at a specific frequency or band, build the query with
    /// [`to_query`](Self::to_query) instead.
    ///
    /// # Errors
    ///
    /// Propagates the error of [`Directivity::response`].
    pub fn gains<D: Directivity + ?Sized>(
        &self,
        directivity: &D,
    ) -> Result<Vec<f64>, DirectivityError> {
        directivity.response(&self.to_query())
    }
}

#[inline]
fn flip_sign(flips: i32) -> f64 {
    // (-1)^(flips + 1)
    if flips.rem_euclid(2) == 0 {
        -1.0
    } else {
        1.0
    }
}

/// Calculates the angle at which the path of each image source leaves the source in a shoebox room.
///
/// `image_sources` is a `D×N` matrix of image-source positions, `wall_flips` the
/// `D×N` number of reflections along each axis that produced them, and `microphone`
/// the `D`-dimensional microphone position, with `D` either 2 or 3.
///
/// The vector from the microphone to each image source is mirrored with
/// `(-1)^(flips + 1)` per axis, which turns it into the direction in which the path
/// departs from the real source toward its first wall (or toward the microphone
/// for the direct path), following
/// <https://www2.ak.tu-berlin.de/~akgroup/ak_pub/2018/000458.pdf>. The azimuth is
/// `atan2(y, x)` of the mirrored vector, and the colatitude is `π/2` in 2D and
/// `π/2 - asin(z / d)` in 3D, where `d` is the distance to the image source.
///
/// # Errors
///
/// Returns [`DirectivityError::UnsupportedDimension`] if `D` is not 2 or 3, and
/// [`DirectivityError::DimensionMismatch`] if the shapes of the inputs disagree.
pub fn image_source_angles(
    image_sources: &Matrix,
    wall_flips: &DMatrix<i32>,
    microphone: &Vector,
) -> Result<ImageSourceAngles, DirectivityError> {
    let (dim, n) = image_sources.shape();
    if !(2..=3).contains(&dim) {
        return Err(DirectivityError::UnsupportedDimension(dim));
    }
    if wall_flips.shape() != (dim, n) {
        return Err(DirectivityError::DimensionMismatch {
            name: "wall_flips",
            expected: (dim, n),
            actual: wall_flips.shape(),
        });
    }
    if microphone.len() != dim {
        return Err(DirectivityError::DimensionMismatch {
            name: "microphone",
            expected: (dim, 1),
            actual: microphone.shape(),
        });
    }

    let (azimuth, colatitude) = (0..n)
        .map(|j| {
            let p = Vector::from_fn(dim, |k, _| {
                flip_sign(wall_flips[(k, j)]) * (image_sources[(k, j)] - microphone[k])
            });
            let azimuth = p[1].atan2(p[0]);
            let colatitude = if dim == 2 {
                FRAC_PI_2
            } else {
                FRAC_PI_2 - (p[2] / p.norm()).clamp(-1.0, 1.0).asin()
            };
            (azimuth * rad, colatitude * rad)
        })
        .unzip();
    tracing::trace!("Calculated angles of {} image sources.", n);

    Ok(ImageSourceAngles {
        azimuth,
        colatitude,
    })
}
