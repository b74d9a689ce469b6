//! FILENAME: core/engine/src/number_format.rs
//! Display formatting for amounts and percentages.
//!
//! The dashboard's numeric strings are fixed: amounts use two decimals with
//! a comma thousands separator ("1,234.56"), percentages use two decimals
//! with a trailing percent sign ("25.00%"). Summary lines and the export
//! document are compared against these strings verbatim, so the formatting
//! here must not drift.

/// Formats an amount with two decimals and thousands separators.
pub fn format_amount(value: f64) -> String {
    add_thousands_separator(&format!("{:.2}", value))
}

/// Formats a percentage with two decimals and a trailing "%".
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Adds thousands separators to a plain numeric string.
fn add_thousands_separator(s: &str) -> String {
    let parts: Vec<&str> = s.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    let negative = integer_part.starts_with('-');
    let digits: String = integer_part.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut result = String::new();
    let len = digits.len();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if negative {
        result = format!("-{}", result);
    }

    if let Some(decimal) = decimal_part {
        result.push('.');
        result.push_str(decimal);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(400.0), "400.00");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-9876.5), "-9,876.50");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(25.0), "25.00%");
        assert_eq!(format_percent(33.333), "33.33%");
        assert_eq!(format_percent(100.0), "100.00%");
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(add_thousands_separator("1234567"), "1,234,567");
        assert_eq!(add_thousands_separator("123"), "123");
        assert_eq!(add_thousands_separator("-1234.56"), "-1,234.56");
    }
}
