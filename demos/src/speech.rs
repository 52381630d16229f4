use anyhow::{Context, Result};

use roomdir::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: speech <path to speech directivity json>")?;
    let talker = SpeechDirectivity::from_path(DirectionVector::horizontal(0. * deg), path)?;

    let azimuth: Vec<_> = (0..=12).map(|i| (i * 15) as f64 * deg).collect();
    let query = ResponseQuery::new(azimuth.iter().copied());

    print!("{:>10}", "freq [Hz]");
    azimuth.iter().for_each(|az| print!("{:>7.0}", az.degree()));
    println!();
    for &f in talker.table().centre_freqs() {
        let r = talker.response(&query.clone().with_frequency(f * Hz))?;
        print!("{f:>10.0}");
        r.iter().for_each(|r| print!("{:>7.3}", r));
        println!();
    }

    let (low, high) = (
        talker.table().centre_freqs()[0],
        talker.table().centre_freqs()[talker.table().centre_freqs().len() - 1],
    );
    let r = talker.response(&query.with_band(low * Hz..(high + 1.) * Hz))?;
    print!("{:>10}", "all");
    r.iter().for_each(|r| print!("{:>7.3}", r));
    println!();

    Ok(())
}
