use crate::error::Result;
use crate::models::{Axis, Coordinate, Format, Token};
use crate::parsers::{classify_coordinate, extract};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Formatted output for one coordinate pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatLong {
    pub lat: String,
    pub long: String,
}

impl LatLong {
    pub fn new(lat: impl Into<String>, long: impl Into<String>) -> Self {
        Self {
            lat: lat.into(),
            long: long.into(),
        }
    }
}

impl fmt::Display for LatLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.long)
    }
}

/// A latitude and longitude validated together
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoordinatePair {
    lat: Coordinate,
    long: Coordinate,
}

impl CoordinatePair {
    /// Extract, classify and range-check both members.
    ///
    /// Both tokens are extracted before either is range-checked, and latitude
    /// is checked before longitude.
    ///
    /// # Examples
    /// ```
    /// use coords_converter::models::{CoordinatePair, Format};
    ///
    /// let pair = CoordinatePair::new("S43°38'19.39", "W116°14'28.86\"").unwrap();
    /// assert_eq!(pair.lat().format(), Format::Dms);
    /// assert!(pair.long().signed);
    /// ```
    pub fn new(lat: impl Into<Token>, long: impl Into<Token>) -> Result<Self> {
        let lat = lat.into();
        let long = long.into();

        let lat_fields = extract(&lat)?;
        let long_fields = extract(&long)?;

        let lat = classify_coordinate(Axis::Lat, lat_fields, &lat)?;
        let long = classify_coordinate(Axis::Long, long_fields, &long)?;

        debug!(
            lat = %lat.input,
            lat_format = %lat.format(),
            long = %long.input,
            long_format = %long.format(),
            "Constructed coordinate pair"
        );

        Ok(Self { lat, long })
    }

    pub fn lat(&self) -> &Coordinate {
        &self.lat
    }

    pub fn long(&self) -> &Coordinate {
        &self.long
    }

    /// The shared notation of both members, if they agree
    pub fn common_format(&self) -> Option<Format> {
        let format = self.lat.format();
        (format == self.long.format()).then_some(format)
    }
}
