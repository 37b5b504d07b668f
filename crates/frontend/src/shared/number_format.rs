//! Number formatting for money, quantities and counts

/// Formats with a thousands separator and the given number of decimals.
///
/// NaN prices accepted by the lenient product form render as "NaN".
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "NaN".to_string();
    }
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let mut formatted_integer: String = result.chars().rev().collect();
    if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        formatted_integer.insert(0, '-');
    }

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// "$1,234.50"
pub fn format_money(value: f64, currency: &str) -> String {
    let number = format_number_with_decimals(value, 2);
    match number.strip_prefix('-') {
        Some(abs) => format!("-{}{}", currency, abs),
        None => format!("{}{}", currency, number),
    }
}

pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(89.99, "$"), "$89.99");
        assert_eq!(format_money(24650.0, "$"), "$24,650.00");
        assert_eq!(format_money(-1234.5, "$"), "-$1,234.50");
        assert_eq!(format_money(f64::NAN, "$"), "$NaN");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1250.0), "1,250");
        assert_eq!(format_number_int(45.0), "45");
        assert_eq!(format_number_int(1234567.0), "1,234,567");
        assert_eq!(format_number_int(0.0), "0");
    }
}
