//! Currency formatting for displayed prices.

/// Formats an amount as Tunisian Dinar with two decimals and comma
/// thousands separators, e.g. `152,340.25 TND`.
pub fn format_tnd(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed
        .split_once('.')
        .unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i).is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part} TND")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts_are_not_grouped() {
        assert_eq!(format_tnd(0.0), "0.00 TND");
        assert_eq!(format_tnd(950.0), "950.00 TND");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_tnd(15000.0), "15,000.00 TND");
        assert_eq!(format_tnd(1234567.891), "1,234,567.89 TND");
    }

    #[test]
    fn test_negative_amounts_keep_sign() {
        assert_eq!(format_tnd(-1234.5), "-1,234.50 TND");
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        assert_eq!(format_tnd(999.995), "1,000.00 TND");
    }
}
