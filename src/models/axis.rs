use crate::utils::constants::{LAT_MAX_MAGNITUDE, LONG_MAX_MAGNITUDE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which half of a coordinate pair a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Lat,
    Long,
}

impl Axis {
    /// Largest degree magnitude accepted for this axis
    pub fn max_magnitude(&self) -> f64 {
        match self {
            Axis::Lat => LAT_MAX_MAGNITUDE,
            Axis::Long => LONG_MAX_MAGNITUDE,
        }
    }

    /// Closed range check on an unsigned degree magnitude
    pub fn contains(&self, magnitude: f64) -> bool {
        (0.0..=self.max_magnitude()).contains(&magnitude)
    }

    /// Cardinal letter for a value on this axis
    pub fn cardinal(&self, signed: bool) -> char {
        match (self, signed) {
            (Axis::Lat, false) => 'N',
            (Axis::Lat, true) => 'S',
            (Axis::Long, false) => 'E',
            (Axis::Long, true) => 'W',
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Lat => write!(f, "Lat"),
            Axis::Long => write!(f, "Long"),
        }
    }
}

/// Coordinate notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Decimal degrees
    Dec,
    /// Degrees and decimal minutes
    Ddm,
    /// Degrees, minutes and seconds
    Dms,
}

impl Format {
    /// Map the number of extracted fields to a notation
    pub fn from_field_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(Format::Dec),
            2 => Some(Format::Ddm),
            3 => Some(Format::Dms),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Dec => "DEC",
            Format::Ddm => "DDM",
            Format::Dms => "DMS",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEC" => Ok(Format::Dec),
            "DDM" => Ok(Format::Ddm),
            "DMS" => Ok(Format::Dms),
            other => Err(format!("Unknown coordinate format: '{}'", other)),
        }
    }
}
