//! Display formatting for numbers, money and long text.

/// Format an amount as money with thousands separators and two decimals,
/// e.g. `format_currency(1234.5, "$") == "$1,234.50"`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{}{}.{:02}", sign, symbol, group_thousands(whole), fraction)
}

/// Insert `,` every three digits
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Round to whole cents
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Truncate to `max_chars` characters, appending `…` when shortened.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}
