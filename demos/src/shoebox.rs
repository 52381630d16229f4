use anyhow::Result;

use nalgebra::{DMatrix, DVector};
use roomdir::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    // source at (1, 2, 1.5) in a 4 x 5 x 3 room, and its first-order images
    let sources = DMatrix::from_column_slice(
        3,
        7,
        &[
            1., 2., 1.5, //
            -1., 2., 1.5, //
            7., 2., 1.5, //
            1., -2., 1.5, //
            1., 8., 1.5, //
            1., 2., -1.5, //
            1., 2., 4.5,
        ],
    );
    let flips = DMatrix::from_column_slice(
        3,
        7,
        &[
            0, 0, 0, //
            1, 0, 0, //
            1, 0, 0, //
            0, 1, 0, //
            0, 1, 0, //
            0, 0, 1, //
            0, 0, 1,
        ],
    );
    let mic = DVector::from_vec(vec![3., 3., 1.2]);

    let angles = image_source_angles(&sources, &flips, &mic)?;

    // the talker faces the microphone in the horizontal plane
    let facing = (mic[1] - sources[(1, 0)]).atan2(mic[0] - sources[(0, 0)]);
    let talker = CardioidFamily::new(
        DirectionVector::horizontal(facing * rad),
        DirectivityPattern::Cardioid,
    );
    let gains = angles.gains(&talker)?;

    for (i, g) in gains.iter().enumerate() {
        println!(
            "image {i}: emission azimuth {:>7.2} deg, colatitude {:>6.2} deg, gain {:>6.3}",
            angles.azimuth()[i].degree(),
            angles.colatitude()[i].degree(),
            g
        );
    }

    Ok(())
}
