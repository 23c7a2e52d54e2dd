//! Display formatting for real values
//!
//! Values print with a trailing `.0` when integral, switch to `E` notation
//! outside `[1e-3, 1e7)`, and spell out non-finite values.

/// Render a value for the console
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if value == 0.0 || (1e-3..1e7).contains(&magnitude) {
        // Debug keeps the `.0` on integral values
        return format!("{:?}", value);
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => scientific,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values() {
        assert_eq!(format_value(5.0), "5.0");
        assert_eq!(format_value(-2.0), "-2.0");
        assert_eq!(format_value(3.5), "3.5");
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(-0.0), "-0.0");
        assert_eq!(format_value(0.25), "0.25");
        assert_eq!(format_value(1024.0), "1024.0");
    }

    #[test]
    fn test_scientific_values() {
        assert_eq!(format_value(1e10), "1.0E10");
        assert_eq!(format_value(1.5e-5), "1.5E-5");
        assert_eq!(format_value(-2.5e7), "-2.5E7");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(format_value(f64::INFINITY), "Infinity");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_value(f64::NAN), "NaN");
    }

    #[quickcheck_macros::quickcheck]
    fn prop_finite_values_parse_back(value: f64) -> bool {
        if !value.is_finite() {
            return true;
        }
        format_value(value).parse::<f64>() == Ok(value)
    }
}
