//! Engineering-notation value parsing.

use crate::error::{Error, Result};

/// Parse a value with an optional engineering suffix.
///
/// The suffix starts at the first alphabetic character that is not an
/// uppercase `E`, which stays available for exponents (`1E3` parses as
/// 1000, while `1e3` is rejected because `e3` is not a known suffix).
/// Suffixes are case-sensitive:
///
/// - f (femto, 1e-15)
/// - p (pico, 1e-12)
/// - n (nano, 1e-9)
/// - u (micro, 1e-6)
/// - m (milli, 1e-3)
/// - k (kilo, 1e3)
/// - meg (mega, 1e6)
/// - g (giga, 1e9)
/// - t (tera, 1e12)
pub fn parse_value(token: &str) -> Result<f64> {
    let token = token.trim();

    let suffix_start = token
        .find(|c: char| c.is_alphabetic() && c != 'E')
        .unwrap_or(token.len());
    let (number, suffix) = token.split_at(suffix_start);

    let base: f64 = number
        .parse()
        .map_err(|_| Error::InvalidValue(token.to_string()))?;

    let scale = match suffix {
        "" => 1.0,
        "f" => 1e-15,
        "p" => 1e-12,
        "n" => 1e-9,
        "u" => 1e-6,
        "m" => 1e-3,
        "k" => 1e3,
        "meg" => 1e6,
        "g" => 1e9,
        "t" => 1e12,
        _ => return Err(Error::UnknownSuffix(token.to_string())),
    };

    Ok(base * scale)
}
