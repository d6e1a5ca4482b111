//! Utility functions for interpreting literal tokens.

/// Parses the longest leading prefix of `literal` that forms a decimal
/// floating-point number.
///
/// Accepted prefix: optional sign, then either `Infinity` or digits with an
/// optional fractional part (at least one digit overall) and an optional
/// exponent. An exponent marker without digits is not part of the prefix.
/// Leading whitespace is skipped, anything after the prefix is ignored.
///
/// # Arguments
/// * `literal` - The token to interpret
///
/// # Returns
/// * `Some(value)` - The value of the numeric prefix
/// * `None` - If `literal` has no numeric prefix
///
/// # Examples
/// ```
/// # use branchset::parser::utils::parse_float_prefix;
/// assert_eq!(parse_float_prefix("0.5"), Some(0.5));
/// assert_eq!(parse_float_prefix("1.5e-3"), Some(0.0015));
/// assert_eq!(parse_float_prefix("2.5kya"), Some(2.5));
/// assert_eq!(parse_float_prefix("3e"), Some(3.0));
/// assert_eq!(parse_float_prefix(".25"), Some(0.25));
/// assert_eq!(parse_float_prefix("-Infinity"), Some(f64::NEG_INFINITY));
/// assert_eq!(parse_float_prefix("kya"), None);
/// assert_eq!(parse_float_prefix("-."), None);
/// ```
pub fn parse_float_prefix(literal: &str) -> Option<f64> {
    let text = literal.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        end += "Infinity".len();
        return text[..end].parse().ok();
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    // Exponent only counts if followed by at least one digit
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_float_prefix("0"), Some(0.0));
        assert_eq!(parse_float_prefix("42"), Some(42.0));
        assert_eq!(parse_float_prefix("-0.75"), Some(-0.75));
        assert_eq!(parse_float_prefix("+1.25"), Some(1.25));
        assert_eq!(parse_float_prefix("7."), Some(7.0));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(parse_float_prefix("1e-5"), Some(1e-5));
        assert_eq!(parse_float_prefix("2.5E+3"), Some(2500.0));
        assert_eq!(parse_float_prefix("3.14E-10"), Some(3.14e-10));
        // Dangling exponent markers are not part of the prefix
        assert_eq!(parse_float_prefix("4e+"), Some(4.0));
        assert_eq!(parse_float_prefix("4E-x"), Some(4.0));
    }

    #[test]
    fn test_trailing_content_ignored() {
        assert_eq!(parse_float_prefix("0.1abc"), Some(0.1));
        assert_eq!(parse_float_prefix("12 34"), Some(12.0));
        assert_eq!(parse_float_prefix("1.2.3"), Some(1.2));
        assert_eq!(parse_float_prefix("  6.5"), Some(6.5));
    }

    #[test]
    fn test_infinity() {
        assert_eq!(parse_float_prefix("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float_prefix("+Infinityyy"), Some(f64::INFINITY));
        assert_eq!(parse_float_prefix("inf"), None);
    }

    #[test]
    fn test_no_prefix() {
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("-"), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("e5"), None);
        assert_eq!(parse_float_prefix("NaN"), None);
        assert_eq!(parse_float_prefix("x1"), None);
    }
}
