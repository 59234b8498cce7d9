//! Military Grid Reference System references built on top of [`Utm`].
//!
//! A reference consists of the UTM zone, the latitude band letter, two letters naming the
//! 100 km square and an even number (0 to 10) of digits locating the position inside the
//! square, e.g. `10TET5020072748`. Five digits per axis locate a 1 m cell, zero digits the
//! whole 100 km square. Decoding gives the south-west corner of the cell.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{GridposError, Result};
use crate::geo::impls::point::GeoPoint2d;
use crate::geo::impls::projection::utm::{Hemisphere, Utm, UtmCoord};
use crate::geo::traits::point::GeoPoint;

const BANDS: &[u8; 20] = b"CDEFGHJKLMNPQRSTUVWX";
const COLUMN_LETTERS: [&[u8; 8]; 3] = [b"ABCDEFGH", b"JKLMNPQR", b"STUVWXYZ"];
const ROW_LETTERS: [&[u8; 20]; 2] = [b"ABCDEFGHJKLMNPQRSTUV", b"FGHJKLMNPQRSTUVABCDE"];

const BAND_HEIGHT: f64 = 8.0;
const SQUARE_SIZE: f64 = 100_000.0;
const ROW_CYCLE: f64 = 2_000_000.0;

/// Largest number of digits per axis (1 m resolution).
pub const MAX_DIGITS: u8 = 5;

lazy_static! {
    static ref REFERENCE: Regex = Regex::new(r"^([0-9]{1,2})([A-Z])([A-Z])([A-Z])([0-9]*)$")
        .expect("Must be a valid MGRS pattern");
}

/// MGRS grid reference.
///
/// ```
/// use gridpos::grid::mgrs::Mgrs;
/// use gridpos::latlon;
///
/// let reference = Mgrs::from_point(&latlon!(47.6062, -122.3321), 5).unwrap();
/// assert_eq!(reference.to_string(), "10TET5020072748");
///
/// let parsed: Mgrs = "10T ET 50200 72748".parse().unwrap();
/// assert_eq!(parsed, reference);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Mgrs {
    zone: u8,
    band: u8,
    column: u8,
    row: u8,
    easting: String,
    northing: String,
}

impl Mgrs {
    /// Encodes a point with `digits` (0 to 5) digits per axis.
    pub fn from_point(point: &impl GeoPoint<Num = f64>, digits: u8) -> Result<Self> {
        check_digits(digits)?;
        let utm = Utm::default().forward(point.lat(), point.lon())?;
        Ok(Self::encode(&utm, point.lat(), digits))
    }

    /// Encodes a UTM coordinate with `digits` (0 to 5) digits per axis.
    pub fn from_utm(utm: &UtmCoord, digits: u8) -> Result<Self> {
        check_digits(digits)?;
        let lat = Utm::default().inverse(utm)?.lat();
        Ok(Self::encode(utm, lat, digits))
    }

    /// UTM zone, `1..=60`.
    pub fn zone(&self) -> u8 {
        self.zone
    }

    /// Latitude band letter.
    pub fn band(&self) -> char {
        char::from(self.band)
    }

    /// Letters of the 100 km square (column, row).
    pub fn square(&self) -> (char, char) {
        (char::from(self.column), char::from(self.row))
    }

    /// Number of digits per axis.
    pub fn precision(&self) -> u8 {
        self.easting.len() as u8
    }

    /// UTM coordinate of the south-west corner of the referenced cell.
    pub fn to_utm(&self) -> Result<UtmCoord> {
        let utm = Utm::default();
        let column = letter_index(column_letters(self.zone), self.column)?;
        let row = letter_index(row_letters(self.zone), self.row)?;
        let band = letter_index(BANDS, self.band)?;

        let scale = 10f64.powi(i32::from(MAX_DIGITS - self.precision()));
        let easting = (column as f64 + 1.0) * SQUARE_SIZE + parse_offset(&self.easting)? * scale;
        let mut northing = row as f64 * SQUARE_SIZE + parse_offset(&self.northing)? * scale;

        // Row letters repeat every 2000 km. The band tells which repetition is meant: take
        // the first one at or above the square row holding the band's southern edge. The
        // edge is lowest on the central meridian in the north and on the zone boundary in
        // the south.
        let band_south = -80.0 + BAND_HEIGHT * band as f64;
        let central_meridian = Utm::central_meridian(self.zone);
        let min_northing = utm
            .forward_in_zone(band_south, central_meridian, self.zone)?
            .northing()
            .min(
                utm.forward_in_zone(band_south, central_meridian - 3.0, self.zone)?
                    .northing(),
            );
        let min_northing = (min_northing / SQUARE_SIZE).floor() * SQUARE_SIZE;

        let mut cycles = 0;
        while northing < min_northing {
            northing += ROW_CYCLE;
            cycles += 1;
        }
        log::debug!("MGRS {self}: row letter {} resolved after {cycles} cycles", self.row as char);

        let hemisphere = if self.band >= b'N' {
            Hemisphere::North
        } else {
            Hemisphere::South
        };

        UtmCoord::new(self.zone, hemisphere, easting, northing)
    }

    /// South-west corner of the referenced cell.
    pub fn to_point(&self) -> Result<GeoPoint2d> {
        Utm::default().inverse(&self.to_utm()?)
    }

    fn encode(utm: &UtmCoord, lat: f64, digits: u8) -> Self {
        // Sub-centimeter projection round-off must not move a point into the neighbouring
        // 1 m cell, otherwise decoded corners would not encode back to the same reference.
        let easting = snap(utm.easting());
        let northing = snap(utm.northing());

        let band = ((lat + 80.0) / BAND_HEIGHT).floor().clamp(0.0, 19.0) as usize;
        let square_column = (easting / SQUARE_SIZE).floor();
        let square_row = (northing / SQUARE_SIZE).floor();
        let column = (square_column as i64 - 1).clamp(0, 7) as usize;
        let row = (square_row as i64).rem_euclid(20) as usize;

        let scale = 10f64.powi(i32::from(MAX_DIGITS - digits));
        let render = |residual: f64| {
            if digits == 0 {
                String::new()
            } else {
                format!(
                    "{:0width$}",
                    (residual / scale).floor() as u64,
                    width = usize::from(digits)
                )
            }
        };

        Self {
            zone: utm.zone(),
            band: BANDS[band],
            column: column_letters(utm.zone())[column],
            row: row_letters(utm.zone())[row],
            easting: render(easting - square_column * SQUARE_SIZE),
            northing: render(northing - square_row * SQUARE_SIZE),
        }
    }
}

impl FromStr for Mgrs {
    type Err = GridposError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let captures = REFERENCE
            .captures(&normalized)
            .ok_or_else(|| GridposError::Format(format!("{s:?} is not an MGRS reference")))?;

        let zone: u8 = captures[1]
            .parse()
            .map_err(|_| GridposError::Format(format!("{s:?} has no zone number")))?;
        if !(1..=60).contains(&zone) {
            return Err(GridposError::Range(format!("UTM zone {zone} is not in 1..=60")));
        }

        let band = captures[2].as_bytes()[0];
        let column = captures[3].as_bytes()[0];
        let row = captures[4].as_bytes()[0];
        letter_index(BANDS, band)?;
        letter_index(column_letters(zone), column)?;
        letter_index(row_letters(zone), row)?;

        let numbers = &captures[5];
        if numbers.len() % 2 != 0 || numbers.len() > 2 * usize::from(MAX_DIGITS) {
            return Err(GridposError::Format(format!(
                "{s:?} must have an even number of up to 10 digits, found {}",
                numbers.len()
            )));
        }
        let (easting, northing) = numbers.split_at(numbers.len() / 2);

        Ok(Self {
            zone,
            band,
            column,
            row,
            easting: easting.to_string(),
            northing: northing.to_string(),
        })
    }
}

impl TryFrom<String> for Mgrs {
    type Error = GridposError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Mgrs> for String {
    fn from(value: Mgrs) -> Self {
        value.to_string()
    }
}

impl Display for Mgrs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}{}{}",
            self.zone,
            char::from(self.band),
            char::from(self.column),
            char::from(self.row),
            self.easting,
            self.northing
        )
    }
}

fn column_letters(zone: u8) -> &'static [u8] {
    COLUMN_LETTERS[usize::from((zone - 1) % 3)]
}

fn row_letters(zone: u8) -> &'static [u8] {
    ROW_LETTERS[usize::from((zone - 1) % 2)]
}

fn letter_index(letters: &[u8], letter: u8) -> Result<usize> {
    letters.iter().position(|&l| l == letter).ok_or_else(|| {
        GridposError::Format(format!(
            "unrecognized grid letter '{}', expected one of {}",
            char::from(letter),
            String::from_utf8_lossy(letters)
        ))
    })
}

fn parse_offset(digits: &str) -> Result<f64> {
    if digits.is_empty() {
        return Ok(0.0);
    }

    digits
        .parse::<u32>()
        .map(f64::from)
        .map_err(|err| GridposError::Format(format!("invalid grid digits {digits:?}: {err}")))
}

fn check_digits(digits: u8) -> Result<()> {
    if digits > MAX_DIGITS {
        Err(GridposError::Range(format!(
            "MGRS precision {digits} is not in 0..={MAX_DIGITS}"
        )))
    } else {
        Ok(())
    }
}

fn snap(meters: f64) -> f64 {
    (meters * 100.0).round() / 100.0
}
