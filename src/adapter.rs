use std::{ fmt, str::FromStr };

use thiserror::Error;
use tracing::debug;

use crate::{ parse_composite_fields, to_composite_string, ParseError };

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid composite literal {literal:?}: {source}")]
    Parse {
        #[source]
        source: ParseError,
        literal: String,
    },
    #[error("Expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("Invalid field {index} ({value:?}): {reason}")]
    InvalidField {
        index: usize,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// A typed value stored as a composite literal.
///
/// Implementors split themselves into raw fields and rebuild themselves from
/// the raw fields returned by [`parse_composite_fields`]. Field order is
/// positional.
pub trait Composite: Sized {
    fn to_fields(&self) -> Vec<String>;

    fn from_fields(fields: Vec<String>) -> Result<Self>;
}

/// Composes the composite literal for a typed value.
///
/// ```rust
/// # use composite_literal::{ to_composite, GeoPoint };
/// let point = GeoPoint::new(52.52, 13.405).unwrap();
/// assert_eq!(to_composite(&point), "(52.52,13.405)");
/// ```
pub fn to_composite<T: Composite>(value: &T) -> String {
    to_composite_string(value.to_fields())
}

/// Parses a composite literal into a typed value.
///
/// Decoder errors are wrapped together with the offending literal.
///
/// ```rust
/// # use composite_literal::{ from_composite, PhoneNumber };
/// let phone: PhoneNumber = from_composite("(44,2079460000)").unwrap();
/// assert_eq!(phone.country_code, 44);
/// assert_eq!(phone.number, "2079460000");
/// ```
pub fn from_composite<T: Composite>(src: &str) -> Result<T> {
    let fields = parse_composite_fields(src).map_err(|source| Error::Parse {
        source,
        literal: src.to_string(),
    })?;
    T::from_fields(fields)
}

/// Checks that a decoded literal has exactly `expected` fields.
pub fn expect_fields(fields: &[String], expected: usize) -> Result<()> {
    if fields.len() != expected {
        debug!(expected, found = fields.len(), "composite field count mismatch");
        return Err(Error::FieldCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

/// Parses the raw field at `index` with [`FromStr`].
pub fn parse_field<T>(index: usize, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| invalid_field(index, value, err))
}

/// Decodes a field written in the `bytea` hex form (`\x0102...`).
///
/// ```rust
/// # use composite_literal::{ bytes_field, parse_composite_fields, to_composite_string };
/// let literal = to_composite_string([vec![1u8, 2, 255]]);
/// let fields = parse_composite_fields(&literal).unwrap();
/// assert_eq!(bytes_field(0, &fields[0]).unwrap(), vec![1, 2, 255]);
/// ```
pub fn bytes_field(index: usize, value: &str) -> Result<Vec<u8>> {
    let digits = value
        .strip_prefix("\\x")
        .ok_or_else(|| invalid_field(index, value, "missing \\x prefix"))?;
    hex::decode(digits).map_err(|err| invalid_field(index, value, err))
}

fn invalid_field(index: usize, value: &str, reason: impl fmt::Display) -> Error {
    let reason = reason.to_string();
    debug!(index, value, reason = %reason, "rejected composite field");
    Error::InvalidField {
        index,
        value: value.to_string(),
        reason,
    }
}

/// A WGS 84 coordinate, stored as `(latitude,longitude)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(invalid_field(0, &latitude.to_string(), "latitude out of range"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid_field(1, &longitude.to_string(), "longitude out of range"));
        }
        Ok(Self { latitude, longitude })
    }
}

impl Composite for GeoPoint {
    fn to_fields(&self) -> Vec<String> {
        vec![self.latitude.to_string(), self.longitude.to_string()]
    }

    fn from_fields(fields: Vec<String>) -> Result<Self> {
        expect_fields(&fields, 2)?;
        let latitude = parse_field(0, &fields[0])?;
        let longitude = parse_field(1, &fields[1])?;
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_composite(self))
    }
}

impl FromStr for GeoPoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> { from_composite(s) }
}

/// A phone number split into its country calling code and national number,
/// stored as `(country_code,number)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    pub country_code: u16,
    pub number: String,
}

impl PhoneNumber {
    pub fn new(country_code: u16, number: impl Into<String>) -> Result<Self> {
        let number = number.into();
        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid_field(1, &number, "expected ASCII digits"));
        }
        Ok(Self { country_code, number })
    }
}

impl Composite for PhoneNumber {
    fn to_fields(&self) -> Vec<String> {
        vec![self.country_code.to_string(), self.number.clone()]
    }

    fn from_fields(fields: Vec<String>) -> Result<Self> {
        expect_fields(&fields, 2)?;
        let country_code = parse_field(0, &fields[0])?;
        let mut fields = fields.into_iter();
        let number = fields.nth(1).unwrap_or_default();
        Self::new(country_code, number)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_composite(self))
    }
}

impl FromStr for PhoneNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> { from_composite(s) }
}
