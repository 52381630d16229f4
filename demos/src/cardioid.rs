use anyhow::Result;

use roomdir::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let pattern = match std::env::args().nth(1) {
        Some(name) => name.parse::<DirectivityPattern>()?,
        None => DirectivityPattern::Cardioid,
    };
    let mic = CardioidFamily::new(DirectionVector::horizontal(0. * deg), pattern);

    let azimuth: Vec<_> = (0..12).map(|i| (i * 30) as f64 * deg).collect();
    let r = mic.response(&ResponseQuery::new(azimuth.iter().copied()))?;

    println!("{} pattern", mic.pattern_name());
    azimuth.iter().zip(r.iter()).for_each(|(az, r)| {
        println!("{:>6.1} deg: {:>7.3}", az.degree(), r);
    });

    Ok(())
}
