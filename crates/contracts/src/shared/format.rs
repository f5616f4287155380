/// Группирует разряды целого числа указанным разделителем
///
/// # Примеры
/// ```
/// use contracts::shared::format::group_thousands;
/// assert_eq!(group_thousands(1234567, ','), "1,234,567");
/// assert_eq!(group_thousands(42, '.'), "42");
/// ```
pub fn group_thousands(n: u64, separator: char) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Dollar amount with comma-grouped thousands: `$69,160`, `$1,234.50`.
///
/// Whole amounts are printed without cents.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let dollars = group_thousands(cents / 100, ',');
    match cents % 100 {
        0 => format!("{}${}", sign, dollars),
        rest => format!("{}${}.{:02}", sign, dollars, rest),
    }
}

/// Short axis label: 24000 -> "$24k"
pub fn format_axis_thousands(value: f64) -> String {
    let thousands = value / 1000.0;
    if thousands.fract() == 0.0 {
        format!("${}k", thousands as i64)
    } else {
        format!("${:.1}k", thousands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0, ','), "0");
        assert_eq!(group_thousands(999, ','), "999");
        assert_eq!(group_thousands(1000, ','), "1,000");
        assert_eq!(group_thousands(1234567890, '.'), "1.234.567.890");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(69160.0), "$69,160");
        assert_eq!(format_currency(23053.0), "$23,053");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(-1500.0), "-$1,500");
    }

    #[test]
    fn test_format_axis_thousands() {
        assert_eq!(format_axis_thousands(24000.0), "$24k");
        assert_eq!(format_axis_thousands(0.0), "$0k");
        assert_eq!(format_axis_thousands(12500.0), "$12.5k");
    }
}
