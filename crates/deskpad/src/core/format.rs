//! Conversions between display text and numbers
//!
//! Results are written the way a browser's `String(number)` writes them:
//! shortest round-trip digits, exponent form outside `[1e-6, 1e21)`,
//! `Infinity` for overflow.

/// Parses display text as an operand.
///
/// Empty text and non-finite values are not operands, so an overflowed
/// `Infinity` result cannot feed another operation.
#[must_use]
pub fn parse_operand(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Formats a result for the display, optionally rounded to `precision`
/// fractional digits.
#[must_use]
pub fn format_number(value: f64, precision: Option<u32>) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let value = precision.map_or(value, |digits| round_to(value, digits));
    if value == 0.0 {
        // also folds -0
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        format!("{value}")
    } else {
        exponent_form(value)
    }
}

/// `1e+21`, `-1.5e-7`: the exponent always carries its sign
fn exponent_form(value: f64) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits.min(i32::MAX as u32) as i32);
    let scaled = (value * factor).round() / factor;
    if scaled.is_finite() {
        scaled
    } else {
        value
    }
}
