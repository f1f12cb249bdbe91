/// Renders a monetary amount as `BRL 1,234.56`: two decimal places, comma
/// thousands grouping, currency-code prefix.
///
/// Non-finite input falls back to the value's plain string form instead of
/// failing. Display code never aborts over a bad number.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let fixed = format!("{:.2}", amount);
    match fixed.split_once('.') {
        Some((int_part, frac_part)) => format!("BRL {}.{}", group_thousands(int_part), frac_part),
        None => format!("BRL {}", group_thousands(&fixed)),
    }
}

/// Renders an integer count with the same thousands grouping used for
/// currency (`12345` becomes `12,345`).
pub fn format_count(count: u64) -> String {
    group_thousands(&count.to_string())
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", sign, grouped)
}
