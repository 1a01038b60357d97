//! Currency display formatting.

/// Formats an amount for display, keeping the sign ahead of the symbol.
///
/// Internal arithmetic stays in full precision; rounding to two decimals
/// happens only here, at render time.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${:.2}", value.abs())
}
