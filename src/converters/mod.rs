//! Conversions between DEC, DDM and DMS for a validated [`CoordinatePair`].
//!
//! [`CoordinatePair`]: crate::models::CoordinatePair

pub mod converter;
