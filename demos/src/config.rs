use anyhow::{Context, Result};

use roomdir::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: config <path to directivity config json>")?;
    let config = DirectivityConfig::from_json_str(&std::fs::read_to_string(path)?)?;
    let directivity = config.build()?;

    let azimuth: Vec<_> = (0..8).map(|i| (i * 45) as f64 * deg).collect();
    let r = directivity.response(
        &ResponseQuery::new(azimuth.iter().copied()).with_frequency(1. * kHz),
    )?;
    println!("{}", directivity.pattern_name());
    azimuth.iter().zip(r.iter()).for_each(|(az, r)| {
        println!("{:>6.1} deg: {:>7.3}", az.degree(), r);
    });

    Ok(())
}
