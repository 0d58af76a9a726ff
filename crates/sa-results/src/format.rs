//! Number rendering with `,` thousands separators and no decimals.

/// Insert `,` every three digits of an unsigned decimal string.
pub fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render `value` rounded to an integer with thousands separators
/// (`152340.6` -> `152,341`). Non-finite values are rendered as-is.
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{value:.0}");
    match rounded.strip_prefix('-') {
        Some(digits) => format!("-{}", group_digits(digits)),
        None => group_digits(&rounded),
    }
}
