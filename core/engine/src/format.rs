//! FILENAME: core/engine/src/format.rs
//! PURPOSE: Display formatting for calculator results.
//! CONTEXT: Whole numbers print without a decimal part. Everything else
//! prints with up to 10 significant digits, switching to exponent notation
//! for very large or very small magnitudes (like C's "%.10g").

const SIGNIFICANT_DIGITS: i32 = 10;

/// Formats a result for display: 14 -> "14", 0.1+0.2 -> "0.3", 1e-7 -> "1e-07".
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // Format without unnecessary decimal places
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }

    let exponent = value.abs().log10().floor() as i32;
    if (-4..SIGNIFICANT_DIGITS).contains(&exponent) {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent).max(0) as usize;
        trim_fraction(format!("{:.*}", decimals, value))
    } else {
        format_exponent(value)
    }
}

fn format_exponent(value: f64) -> String {
    let formatted = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((&formatted, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!(
        "{}e{}{:02}",
        trim_fraction(mantissa.to_string()),
        sign,
        exponent.abs()
    )
}

/// Drops trailing zeros after the decimal point, and the point itself.
fn trim_fraction(mut text: String) -> String {
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    text
}
