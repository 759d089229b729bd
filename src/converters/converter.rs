use crate::config::{ConversionMode, ConverterConfig};
use crate::error::{CoordinateError, Result};
use crate::models::{Coordinate, CoordinatePair, CoordinateValue, Format, LatLong};
use crate::utils::constants::{
    MAX_PRECISION, MINUTES_DECIMAL_PLACES, MINUTES_PER_DEGREE, MIN_PRECISION,
    SECONDS_DECIMAL_PLACES, SECONDS_PER_DEGREE, SECONDS_PER_MINUTE,
};
use crate::utils::numeric::{display_number, fraction_digits, round_to, to_fixed};

impl CoordinatePair {
    /// Decimal degrees with `precision` digits, using legacy rounding.
    ///
    /// Both members must already share a notation.
    ///
    /// # Examples
    /// ```
    /// use coords_converter::models::CoordinatePair;
    ///
    /// let pair = CoordinatePair::new(-43.63872, -116.24135).unwrap();
    /// let result = pair.to_dec(2).unwrap();
    /// assert_eq!(result.lat, "-43.64");
    /// assert_eq!(result.long, "-116.24");
    /// ```
    pub fn to_dec(&self, precision: usize) -> Result<LatLong> {
        self.to_dec_with(precision, ConversionMode::Legacy)
    }

    pub fn to_dec_with(&self, precision: usize, mode: ConversionMode) -> Result<LatLong> {
        check_precision(precision)?;

        if self.common_format().is_none() {
            return Err(CoordinateError::FormatMismatch {
                lat: self.lat().format(),
                long: self.long().format(),
            });
        }

        Ok(LatLong::new(
            dec_string(self.lat(), precision, mode),
            dec_string(self.long(), precision, mode),
        ))
    }

    /// Degrees, minutes and seconds with cardinal letters
    pub fn to_dms(&self) -> LatLong {
        self.to_dms_with(ConversionMode::Legacy)
    }

    pub fn to_dms_with(&self, mode: ConversionMode) -> LatLong {
        LatLong::new(dms_string(self.lat(), mode), dms_string(self.long(), mode))
    }

    /// Degrees and decimal minutes with cardinal letters
    pub fn to_ddm(&self) -> LatLong {
        self.to_ddm_with(ConversionMode::Legacy)
    }

    pub fn to_ddm_with(&self, mode: ConversionMode) -> LatLong {
        LatLong::new(ddm_string(self.lat(), mode), ddm_string(self.long(), mode))
    }

    /// Convert to any notation using the configured precision and mode
    pub fn convert(&self, format: Format, config: &ConverterConfig) -> Result<LatLong> {
        match format {
            Format::Dec => self.to_dec_with(config.precision, config.mode),
            Format::Dms => Ok(self.to_dms_with(config.mode)),
            Format::Ddm => Ok(self.to_ddm_with(config.mode)),
        }
    }
}

/// DEC output supports 1 to 15 digits
pub fn check_precision(precision: usize) -> Result<()> {
    if (MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        Ok(())
    } else {
        Err(CoordinateError::InvalidPrecision {
            precision,
            min: MIN_PRECISION,
            max: MAX_PRECISION,
        })
    }
}

fn sign_prefix(coordinate: &Coordinate) -> &'static str {
    if coordinate.signed {
        "-"
    } else {
        ""
    }
}

fn dec_string(coordinate: &Coordinate, precision: usize, mode: ConversionMode) -> String {
    let sign = sign_prefix(coordinate);

    match (mode, coordinate.value) {
        (_, CoordinateValue::Dec(deg)) => format!("{}{}", sign, to_fixed(deg, precision)),
        (ConversionMode::Exact, value) => {
            format!("{}{}", sign, to_fixed(value.decimal_degrees(), precision))
        }
        // Precision counts significant digits of the remainder, not of the whole value
        (ConversionMode::Legacy, CoordinateValue::Ddm(deg, min)) => format!(
            "{}{}.{}",
            sign,
            display_number(deg),
            fraction_digits(min / MINUTES_PER_DEGREE, precision)
        ),
        (ConversionMode::Legacy, CoordinateValue::Dms(deg, min, sec)) => format!(
            "{}{}.{}",
            sign,
            display_number(deg),
            fraction_digits(min / MINUTES_PER_DEGREE + sec / SECONDS_PER_DEGREE, precision)
        ),
    }
}

fn dms_string(coordinate: &Coordinate, mode: ConversionMode) -> String {
    let (deg, min, sec) = match coordinate.value {
        CoordinateValue::Dms(deg, min, sec) => (deg, min, sec),
        CoordinateValue::Ddm(deg, minutes) => {
            let min = minutes.trunc();
            let sec = round_to((minutes - min) * SECONDS_PER_MINUTE, SECONDS_DECIMAL_PLACES);
            carry(deg.trunc(), min, sec, mode)
        }
        CoordinateValue::Dec(decimal) => dec_to_dms_parts(decimal, mode),
    };

    format!(
        "{}{}°{}'{}\"",
        coordinate.cardinal(),
        display_number(deg),
        display_number(min),
        display_number(sec)
    )
}

fn dec_to_dms_parts(decimal: f64, mode: ConversionMode) -> (f64, f64, f64) {
    let deg = decimal.trunc();
    let fraction = decimal - deg;

    match mode {
        ConversionMode::Legacy => {
            // Minutes round to nearest, so the residual can go negative; only its magnitude is printed
            let min = (fraction * MINUTES_PER_DEGREE).round();
            let sec = round_to(
                (fraction - min / MINUTES_PER_DEGREE) * SECONDS_PER_DEGREE,
                SECONDS_DECIMAL_PLACES,
            );
            (deg, min, sec.abs())
        }
        ConversionMode::Exact => {
            let minutes = fraction * MINUTES_PER_DEGREE;
            let min = minutes.floor();
            let sec = round_to((minutes - min) * SECONDS_PER_MINUTE, SECONDS_DECIMAL_PLACES);
            carry(deg, min, sec, mode)
        }
    }
}

/// Push a rounded 60 seconds or 60 minutes into the next unit
fn carry(deg: f64, min: f64, sec: f64, mode: ConversionMode) -> (f64, f64, f64) {
    if mode == ConversionMode::Legacy {
        return (deg, min, sec);
    }

    let (min, sec) = if sec >= SECONDS_PER_MINUTE {
        (min + 1.0, sec - SECONDS_PER_MINUTE)
    } else {
        (min, sec)
    };

    if min >= MINUTES_PER_DEGREE {
        (deg + 1.0, min - MINUTES_PER_DEGREE, sec)
    } else {
        (deg, min, sec)
    }
}

fn ddm_string(coordinate: &Coordinate, mode: ConversionMode) -> String {
    let (deg, min) = match coordinate.value {
        CoordinateValue::Ddm(deg, min) => (deg, min),
        CoordinateValue::Dms(deg, min, sec) => (deg.trunc(), min + sec / SECONDS_PER_MINUTE),
        CoordinateValue::Dec(decimal) => {
            let deg = decimal.trunc();
            let min = round_to((decimal - deg) * MINUTES_PER_DEGREE, MINUTES_DECIMAL_PLACES);
            if mode == ConversionMode::Exact && min >= MINUTES_PER_DEGREE {
                (deg + 1.0, min - MINUTES_PER_DEGREE)
            } else {
                (deg, min)
            }
        }
    };

    format!(
        "{}{}°{}'",
        coordinate.cardinal(),
        display_number(deg),
        display_number(min)
    )
}
