use crate::error::{CoordinateError, Result};
use crate::models::{Axis, Coordinate, CoordinateValue, FieldSet, Format, Token};
use tracing::debug;

/// Notation implied by the number of extracted fields
pub fn classify(fields: &FieldSet) -> Result<Format> {
    Format::from_field_count(fields.fields.len())
        .ok_or(CoordinateError::UnexpectedFieldCount(fields.fields.len()))
}

/// True when an unsigned degree magnitude lies inside the closed axis range
pub fn validate_range(magnitude: f64, axis: Axis) -> bool {
    axis.contains(magnitude)
}

/// Turn extracted fields into a fixed-shape value for the detected notation
pub fn to_value(fields: &FieldSet) -> Result<CoordinateValue> {
    match (classify(fields)?, fields.fields.as_slice()) {
        (Format::Dec, &[deg]) => Ok(CoordinateValue::Dec(deg)),
        (Format::Ddm, &[deg, min]) => Ok(CoordinateValue::Ddm(deg, min)),
        (Format::Dms, &[deg, min, sec]) => Ok(CoordinateValue::Dms(deg, min, sec)),
        _ => Err(CoordinateError::UnexpectedFieldCount(fields.fields.len())),
    }
}

/// Classify and range-check one member of a pair
pub fn classify_coordinate(axis: Axis, fields: FieldSet, token: &Token) -> Result<Coordinate> {
    let value = to_value(&fields)?;
    let magnitude = value.degrees();

    if !validate_range(magnitude, axis) {
        return Err(CoordinateError::OutOfRange { axis, magnitude });
    }

    debug!(%axis, format = %value.format(), "Classified coordinate");

    Ok(Coordinate {
        axis,
        value,
        signed: fields.signed,
        input: token.to_string(),
    })
}
