use crate::models::{Axis, Format};
use serde::Serialize;

/// Magnitudes pulled out of a token before classification
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSet {
    pub fields: Vec<f64>,
    pub signed: bool,
}

/// Classified magnitudes, one variant per notation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "format", content = "value", rename_all = "UPPERCASE")]
pub enum CoordinateValue {
    Dec(f64),
    Ddm(f64, f64),
    Dms(f64, f64, f64),
}

impl CoordinateValue {
    pub fn format(&self) -> Format {
        match self {
            CoordinateValue::Dec(_) => Format::Dec,
            CoordinateValue::Ddm(..) => Format::Ddm,
            CoordinateValue::Dms(..) => Format::Dms,
        }
    }

    pub fn degrees(&self) -> f64 {
        match *self {
            CoordinateValue::Dec(deg) | CoordinateValue::Ddm(deg, _) | CoordinateValue::Dms(deg, _, _) => deg,
        }
    }

    /// Unsigned decimal-degree value
    pub fn decimal_degrees(&self) -> f64 {
        match *self {
            CoordinateValue::Dec(deg) => deg,
            CoordinateValue::Ddm(deg, min) => deg + min / 60.0,
            CoordinateValue::Dms(deg, min, sec) => deg + min / 60.0 + sec / 3600.0,
        }
    }
}

/// A validated, axis-tagged coordinate. Magnitudes are unsigned; the sign lives in `signed`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coordinate {
    pub axis: Axis,
    pub value: CoordinateValue,
    pub signed: bool,
    pub input: String,
}

impl Coordinate {
    pub fn format(&self) -> Format {
        self.value.format()
    }

    pub fn cardinal(&self) -> char {
        self.axis.cardinal(self.signed)
    }
}
