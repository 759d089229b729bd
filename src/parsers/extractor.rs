use crate::error::{CoordinateError, Result};
use crate::models::{FieldSet, Token};
use crate::utils::constants::{
    DEGREE_MARKS, MAX_FIELDS, MINUTE_MARKS, NEGATIVE_CARDINALS, POSITIVE_CARDINALS, SECOND_MARKS,
};
use tracing::debug;

/// Pull the degree/minute/second magnitudes and the sign out of a token.
///
/// A cardinal letter decides the sign when present; otherwise a leading `-` does.
///
/// # Examples
/// ```
/// use coords_converter::models::Token;
/// use coords_converter::parsers::extract;
///
/// let fields = extract(&Token::from("S43°38'19.39")).unwrap();
/// assert_eq!(fields.fields, vec![43.0, 38.0, 19.39]);
/// assert!(fields.signed);
/// ```
pub fn extract(token: &Token) -> Result<FieldSet> {
    match token {
        Token::Number(value) => extract_number(*value),
        Token::Text(text) => extract_str(text),
    }
}

/// A bare number is already decimal degrees
pub fn extract_number(value: f64) -> Result<FieldSet> {
    if !value.is_finite() {
        return Err(CoordinateError::invalid_format(
            &value.to_string(),
            "number is not finite",
        ));
    }

    Ok(FieldSet {
        fields: vec![value.abs()],
        signed: value < 0.0,
    })
}

pub fn extract_str(input: &str) -> Result<FieldSet> {
    let mut fields = Vec::with_capacity(MAX_FIELDS);
    let mut negative: Option<bool> = None;
    let mut cardinal: Option<char> = None;
    let mut after_number = false;

    let mut chars = input.char_indices().peekable();
    while let Some((start, c)) = chars.next() {
        let follows_number = after_number;
        after_number = false;

        match c {
            '0'..='9' | '.' => {
                let mut end = start + c.len_utf8();
                while let Some(&(i, next)) = chars.peek() {
                    if !(next.is_ascii_digit() || next == '.') {
                        break;
                    }
                    end = i + next.len_utf8();
                    chars.next();
                }

                let literal = &input[start..end];
                let value = literal.parse::<f64>().map_err(|_| {
                    CoordinateError::invalid_format(input, format!("malformed number '{}'", literal))
                })?;

                if fields.len() == MAX_FIELDS {
                    return Err(CoordinateError::invalid_format(
                        input,
                        "more than three numeric fields",
                    ));
                }
                fields.push(value);
                after_number = true;
            }
            '+' | '-' => {
                if !fields.is_empty() || negative.is_some() {
                    return Err(CoordinateError::invalid_format(
                        input,
                        format!("unexpected sign '{}'", c),
                    ));
                }
                negative = Some(c == '-');
            }
            c if is_separator(c) => {}
            c if is_cardinal(c) => {
                // "1e5" is an exponent, not degrees and minutes east
                let precedes_number = matches!(
                    chars.peek(),
                    Some(&(_, next)) if next.is_ascii_digit() || next == '.'
                );
                if follows_number && precedes_number {
                    return Err(CoordinateError::invalid_format(
                        input,
                        format!("letter '{}' inside a number", c),
                    ));
                }
                if cardinal.is_some() {
                    return Err(CoordinateError::invalid_format(
                        input,
                        "more than one cardinal letter",
                    ));
                }
                cardinal = Some(c.to_ascii_uppercase());
            }
            other => {
                return Err(CoordinateError::invalid_format(
                    input,
                    format!("unexpected character '{}'", other),
                ));
            }
        }
    }

    if fields.is_empty() {
        return Err(CoordinateError::invalid_format(
            input,
            "no numeric degree component",
        ));
    }

    let signed = match cardinal {
        Some(letter) => NEGATIVE_CARDINALS.contains(&letter),
        None => negative.unwrap_or(false),
    };

    debug!(input, ?fields, signed, "Extracted coordinate fields");

    Ok(FieldSet { fields, signed })
}

fn is_separator(c: char) -> bool {
    c.is_whitespace()
        || DEGREE_MARKS.contains(&c)
        || MINUTE_MARKS.contains(&c)
        || SECOND_MARKS.contains(&c)
}

fn is_cardinal(c: char) -> bool {
    let upper = c.to_ascii_uppercase();
    POSITIVE_CARDINALS.contains(&upper) || NEGATIVE_CARDINALS.contains(&upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(input: &str) -> (Vec<f64>, bool) {
        let set = extract_str(input).unwrap();
        (set.fields, set.signed)
    }

    #[test]
    fn test_dms_with_leading_cardinal() {
        assert_eq!(fields("S43°38'19.39"), (vec![43.0, 38.0, 19.39], true));
        assert_eq!(fields("W116°14'28.86\""), (vec![116.0, 14.0, 28.86], true));
    }

    #[test]
    fn test_decimal_with_degree_mark() {
        assert_eq!(fields("N38.959390°"), (vec![38.95939], false));
        assert_eq!(fields("-95.265483°"), (vec![95.265483], true));
        assert_eq!(fields("+12.5"), (vec![12.5], false));
    }

    #[test]
    fn test_trailing_cardinal_and_spacing() {
        assert_eq!(fields("32° 18.385' N"), (vec![32.0, 18.385], false));
        assert_eq!(fields("122° 36.875' W"), (vec![122.0, 36.875], true));
        assert_eq!(fields("N 32 °18 23.1\""), (vec![32.0, 18.0, 23.1], false));
        assert_eq!(fields("W 122° 36'52.5"), (vec![122.0, 36.0, 52.5], true));
    }

    #[test]
    fn test_lowercase_cardinals() {
        assert_eq!(fields("s43.5"), (vec![43.5], true));
        assert_eq!(fields("43.5e"), (vec![43.5], false));
    }

    #[test]
    fn test_rejects_letter_between_digits() {
        for input in ["1e5", "1E5", "12.5e3", "43N38", "43s.5"] {
            assert!(
                matches!(extract_str(input), Err(CoordinateError::InvalidFormat { .. })),
                "'{}' should be rejected",
                input
            );
        }

        assert_eq!(fields("1 e5"), (vec![1.0, 5.0], false));
        assert_eq!(fields("43°N 38'"), (vec![43.0, 38.0], false));
    }

    #[test]
    fn test_unicode_marks() {
        assert_eq!(fields("43º38′19.39″ S"), (vec![43.0, 38.0, 19.39], true));
        assert_eq!(fields("43˚38’19.39” S"), (vec![43.0, 38.0, 19.39], true));
    }

    #[test]
    fn test_cardinal_overrides_explicit_sign() {
        assert_eq!(fields("-43°N"), (vec![43.0], false));
        assert_eq!(fields("+43 S"), (vec![43.0], true));
    }

    #[test]
    fn test_degrees_only_with_cardinal() {
        assert_eq!(fields("W116"), (vec![116.0], true));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            extract_str("invalid"),
            Err(CoordinateError::InvalidFormat { .. })
        ));
        assert!(extract_str("").is_err());
        assert!(extract_str("N").is_err());
        assert!(extract_str("°'\"").is_err());
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        assert!(extract_str("1.2.3").is_err());
        assert!(extract_str(".").is_err());
        assert!(extract_str("1 2 3 4").is_err());
        assert!(extract_str("43-12").is_err());
        assert!(extract_str("--43").is_err());
        assert!(extract_str("N43 S").is_err());
        assert!(extract_str("43,5").is_err());
    }

    #[test]
    fn test_number_tokens() {
        let set = extract(&Token::Number(-43.63872)).unwrap();
        assert_eq!(set.fields, vec![43.63872]);
        assert!(set.signed);

        let set = extract(&Token::Number(53.47872)).unwrap();
        assert!(!set.signed);

        assert!(extract(&Token::Number(f64::NAN)).is_err());
        assert!(extract(&Token::Number(f64::INFINITY)).is_err());
    }
}
