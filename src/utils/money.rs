// Monetary amount formatting for list display

/// Format an amount with thousands separators and two decimals
/// (e.g., "1,200.50", "-45.00")
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = format!("{:.2}", value.abs());
    let (int_part, dec_part) = rounded.split_once('.').unwrap_or((&rounded, "00"));

    let mut grouped = String::new();
    let digits: Vec<char> = int_part.chars().collect();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, dec_part)
}

/// Format an optional amount with its currency code
/// (e.g., "1,200.50 USD"); empty when the amount is absent
pub fn format_money(value: Option<f64>, currency: Option<&str>) -> String {
    match (value, currency) {
        (Some(v), Some(c)) => format!("{} {}", format_amount(v), c),
        (Some(v), None) => format_amount(v),
        (None, _) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(45.5), "45.50");
        assert_eq!(format_amount(1200.5), "1,200.50");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-45.0), "-45.00");
        assert_eq!(format_amount(-1200.5), "-1,200.50");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Some(1200.5), Some("USD")), "1,200.50 USD");
        assert_eq!(format_money(Some(1200.5), None), "1,200.50");
        assert_eq!(format_money(None, Some("USD")), "");
        assert_eq!(format_money(None, None), "");
    }
}
