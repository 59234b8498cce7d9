//! Converts positions given on the command line into all supported forms.
//!
//! Each argument may be a Maidenhead locator, an MGRS reference, a `lat,lon` decimal pair or a
//! `lat,lon` pair in degree-minute form.
//!
//! ```shell
//! cargo run --example convert -- CN87vm 10TET5020072748 47.6062,-122.3321 47-32.23N,122-14.33W
//! ```

use std::str::FromStr;

use anyhow::{anyhow, Result};
use gridpos::geo::{Coordinate, GeoPoint};
use gridpos::grid::{is_valid_maidenhead, Mgrs};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        return Err(anyhow!(
            "This example must be run with at least one position to convert"
        ));
    }

    let mut previous: Option<Coordinate> = None;
    for input in &inputs {
        let coordinate = match parse(input) {
            Ok(coordinate) => coordinate,
            Err(err) => {
                log::error!("Cannot read {input:?}: {err}");
                continue;
            }
        };

        println!("{input}");
        println!("  coordinate: {coordinate}");
        match coordinate.to_utm() {
            Ok(utm) => println!("  utm:        {utm}"),
            Err(err) => println!("  utm:        {err}"),
        }
        match coordinate.to_mgrs(5) {
            Ok(mgrs) => println!("  mgrs:       {mgrs}"),
            Err(err) => println!("  mgrs:       {err}"),
        }

        if let Some(previous) = &previous {
            println!(
                "  from {previous}: {} mi, bearing {}°",
                previous.distance_miles(&coordinate),
                previous.bearing_degrees(&coordinate)
            );
        }
        previous = Some(coordinate);
    }

    Ok(())
}

fn parse(input: &str) -> Result<Coordinate> {
    let input = input.trim();
    if is_valid_maidenhead(input) {
        return Ok(Coordinate::from_maidenhead(input)?);
    }

    if let Ok(mgrs) = Mgrs::from_str(input) {
        let point = mgrs.to_point()?;
        return Ok(Coordinate::new(point.lat(), point.lon()));
    }

    let (lat, lon) = input
        .split_once(',')
        .ok_or_else(|| anyhow!("expected a locator, an MGRS reference or a lat,lon pair"))?;

    let coordinate = Coordinate::from_text(lat, lon);
    let coordinate = if coordinate.lat().is_finite() && coordinate.lon().is_finite() {
        coordinate
    } else {
        Coordinate::from_degree_minutes(lat, lon)?
    };

    if !coordinate.is_valid() {
        return Err(anyhow!("{input:?} is outside the valid range"));
    }

    Ok(coordinate)
}
