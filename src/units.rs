//! Number formatting for emitted code.

/// Formats a number the way it should appear in generated CSS.
///
/// Values are rounded to four decimals so float noise such as
/// `0.30000000000000004` never reaches the output, and integral values
/// print without a fractional part (`15`, not `15.0`).
pub fn css_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let scaled = value * 10_000.0;
    // Past ~1e304 the scaled value overflows; such magnitudes have no
    // fractional part worth rounding anyway.
    let rounded = if scaled.is_finite() { scaled.round() / 10_000.0 } else { value };
    if rounded == 0.0 {
        // Avoids "-0"
        return "0".to_string();
    }
    format!("{rounded}")
}

/// `15` -> `15px`
pub fn px(value: f64) -> String {
    format!("{}px", css_number(value))
}

/// `0.3` -> `0.3s`
pub fn seconds(value: f64) -> String {
    format!("{}s", css_number(value))
}

/// `180` -> `180%`
pub fn percent(value: f64) -> String {
    format!("{}%", css_number(value))
}
