//! Parse free-form geographic coordinates and convert them between decimal
//! degrees (DEC), degrees-decimal-minutes (DDM) and degrees-minutes-seconds (DMS).
//!
//! ```
//! use coords_converter::models::CoordinatePair;
//!
//! let pair = CoordinatePair::new("32° 18.385' N", "122° 36.875' W").unwrap();
//! assert_eq!(pair.to_dec(5).unwrap().long, "-122.61458");
//! assert_eq!(pair.to_dms().lat, "N32°18'23.1\"");
//! ```

pub mod cli;
pub mod config;
pub mod converters;
pub mod error;
pub mod models;
pub mod parsers;
pub mod processors;
pub mod readers;
pub mod utils;

pub use crate::config::{ConversionMode, ConverterConfig};
pub use error::{CoordinateError, Result};
pub use models::{Axis, CoordinatePair, Format, LatLong, Token};
pub use processors::{batch_convert, BatchConverter};
