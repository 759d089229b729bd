/// Round half away from zero at a number of decimal places (negative places round left of the point)
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Fixed-point rendering with half-up rounding
///
/// # Examples
/// ```
/// use coords_converter::utils::numeric::to_fixed;
///
/// assert_eq!(to_fixed(43.63872, 2), "43.64");
/// assert_eq!(to_fixed(0.125, 2), "0.13");
/// ```
pub fn to_fixed(value: f64, places: usize) -> String {
    format!("{:.*}", places, round_to(value, places as i32))
}

/// Render with a number of significant digits, in positional notation
pub fn to_precision(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if value == 0.0 {
        return format!("{:.*}", precision - 1, 0.0);
    }

    let exponent = decimal_exponent(value);
    let mut places = precision as i32 - 1 - exponent;
    let rounded = round_to(value, places);
    // 0.99999 -> 1.0000 gains a digit left of the point
    if decimal_exponent(rounded) > exponent {
        places -= 1;
    }

    format!("{:.*}", places.max(0) as usize, rounded)
}

/// Digits after the decimal point of `to_precision`, or "0" when there are none
pub fn fraction_digits(value: f64, precision: usize) -> String {
    to_precision(value, precision)
        .split_once('.')
        .map(|(_, fraction)| fraction.to_string())
        .filter(|fraction| !fraction.is_empty())
        .unwrap_or_else(|| "0".to_string())
}

/// Shortest representation that reads back to the same value
pub fn display_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

fn decimal_exponent(value: f64) -> i32 {
    format!("{:e}", value.abs())
        .split_once('e')
        .and_then(|(_, exponent)| exponent.parse().ok())
        .unwrap_or(0)
}
