//! Shared formatting utilities for size and delta display
//!
//! Every renderer goes through these functions so the strings in a terminal table,
//! a PR comment and the JSON report are identical for the same comparison.

use console::Emoji;

/// Chart emoji for report headers
pub const CHART: Emoji = Emoji("📊 ", "");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅ ", "[OK] ");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️  ", "! ");

/// Sentinel rendered for a metric that did not change
pub const NO_CHANGE: &str = "--";

/// Glyph prefixed to a size increase
pub const INCREASE_GLYPH: &str = "▲";

/// Glyph prefixed to a size reduction
pub const DECREASE_GLYPH: &str = "▼";

/// Decimal byte units, one per power of 1000
const UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];

/// Fractional digits requested from the float formatter; enough to print the exact
/// binary value of any size ratio we round.
const EXACT_DIGITS: usize = 80;

/// Markers appended to a percentage depending on its direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentMarkers<'a> {
    /// Appended when the change is a reduction or rounds to zero
    pub good: &'a str,
    /// Appended when the change is an increase
    pub bad: &'a str,
}

impl PercentMarkers<'static> {
    /// No markers; the sign alone carries the direction
    pub const PLAIN: Self = Self { good: "", bad: "" };

    /// GitHub emoji shortcode flagging increases
    pub const GITHUB: Self = Self {
        good: "",
        bad: ":small_red_triangle:",
    };
}

/// Format bytes as a human-readable size string
///
/// Uses decimal units and three significant digits. Numbers are never grouped, so
/// 999 500 bytes render as `1000 kB` where pretty-bytes prints `1,000 kB`.
///
/// # Examples
///
/// ```
/// use size_comparison::fmt::format_size;
///
/// assert_eq!(format_size(512), "512 B");
/// assert_eq!(format_size(1500), "1.5 kB");
/// assert_eq!(format_size(1_234_567), "1.23 MB");
/// assert_eq!(format_size(999_500), "1000 kB");
/// ```
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    scaled(bytes)
}

/// Format a signed byte difference, always carrying an explicit sign
///
/// A zero difference renders as `" 0 B"` so it lines up with signed values.
///
/// # Examples
///
/// ```
/// use size_comparison::fmt::format_size_signed;
///
/// assert_eq!(format_size_signed(1000), "+1 kB");
/// assert_eq!(format_size_signed(-500), "-500 B");
/// ```
pub fn format_size_signed(bytes: i64) -> String {
    if bytes == 0 {
        return " 0 B".to_string();
    }
    let prefix = if bytes < 0 { '-' } else { '+' };
    format!("{}{}", prefix, scaled(bytes.unsigned_abs()))
}

fn scaled(bytes: u64) -> String {
    let mut exponent = 0;
    let mut next_unit: u64 = 1000;
    while exponent < UNITS.len() - 1 && bytes >= next_unit {
        exponent += 1;
        next_unit = next_unit.saturating_mul(1000);
    }

    let value = bytes as f64 / 1000f64.powi(exponent as i32);
    format!("{} {}", round_significant(value, 3), UNITS[exponent])
}

/// Round to `digits` significant digits, ties away from zero, on the exact binary value
fn round_significant(value: f64, digits: usize) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }

    let expansion = format!("{:.*e}", EXACT_DIGITS, value.abs());
    let Some((mantissa, exponent)) = expansion.split_once('e') else {
        return value;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value;
    };

    let mantissa: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let mut kept = mantissa
        .iter()
        .take(digits)
        .fold(0u64, |acc, d| acc * 10 + u64::from(d - b'0'));
    if mantissa.get(digits).is_some_and(|d| *d >= b'5') {
        kept += 1;
    }

    let shift = exponent - (digits as i32 - 1);
    let magnitude = if shift >= 0 {
        kept as f64 * 10f64.powi(shift)
    } else {
        kept as f64 / 10f64.powi(-shift)
    };
    magnitude.copysign(value)
}

/// Render `value` with exactly `fraction_digits` decimals
///
/// Rounds ties away from zero on the exact binary value, keeps the sign of tiny
/// negatives (`-0.00`) and spells out non-finite values (`Infinity`, `-Infinity`,
/// `NaN`).
///
/// # Examples
///
/// ```
/// use size_comparison::fmt::to_fixed;
///
/// assert_eq!(to_fixed(0.125, 2), "0.13");
/// assert_eq!(to_fixed(-0.001, 2), "-0.00");
/// assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
/// ```
pub fn to_fixed(value: f64, fraction_digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let expansion = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (integer, fraction) = expansion
        .split_once('.')
        .unwrap_or((expansion.as_str(), ""));

    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(fraction_digits))
        .collect();

    if fraction
        .as_bytes()
        .get(fraction_digits)
        .is_some_and(|d| *d >= b'5')
    {
        let mut carried = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carried = false;
                break;
            }
        }
        if carried {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - fraction_digits;
    let (integer, fraction) = digits.split_at(split);
    let integer = String::from_utf8_lossy(integer);
    if fraction_digits == 0 {
        format!("{}{}", sign, integer)
    } else {
        format!("{}{}.{}", sign, integer, String::from_utf8_lossy(fraction))
    }
}

/// Format a relative change as a signed percentage with two decimals
///
/// A change whose text is negative, or exactly zero after rounding, counts as a
/// reduction and gets the good marker; anything else is prefixed with `+` and gets the
/// bad marker.
///
/// An empty marker adds nothing, so the result has no trailing space (`-33.33%`).
/// Dashboards that always append `" " + marker` print `-33.33% ` instead.
///
/// # Examples
///
/// ```
/// use size_comparison::fmt::{format_percent, PercentMarkers};
///
/// assert_eq!(format_percent(-0.5, PercentMarkers::PLAIN), "-50.00%");
/// assert_eq!(
///     format_percent(0.25, PercentMarkers::GITHUB),
///     "+25.00% :small_red_triangle:"
/// );
/// ```
pub fn format_percent(change: f64, markers: PercentMarkers<'_>) -> String {
    let formatted = to_fixed(change * 100.0, 2);
    let (text, marker) = if is_reduction(&formatted) {
        (format!("{}%", formatted), markers.good)
    } else {
        (format!("+{}%", formatted), markers.bad)
    };

    if marker.is_empty() {
        text
    } else {
        format!("{} {}", text, marker)
    }
}

fn is_reduction(formatted: &str) -> bool {
    formatted.starts_with('-')
        || formatted
            .strip_prefix("0.")
            .is_some_and(|fraction| !fraction.is_empty() && fraction.bytes().all(|b| b == b'0'))
}

/// Format one metric's change, e.g. `▼ -500 B (-33.33%)`
///
/// Returns [`NO_CHANGE`] whenever `absolute_diff` is zero, regardless of the ratio.
///
/// # Examples
///
/// ```
/// use size_comparison::fmt::format_diff;
///
/// assert_eq!(format_diff(0, f64::NAN), "--");
/// assert_eq!(format_diff(1000, f64::INFINITY), "▲ +1 kB (+Infinity%)");
/// assert_eq!(format_diff(-1000, -1.0), "▼ -1 kB (-100.00%)");
/// ```
pub fn format_diff(absolute_diff: i64, relative_diff: f64) -> String {
    format_diff_with(absolute_diff, relative_diff, PercentMarkers::PLAIN)
}

/// Same as [`format_diff`] with custom percentage markers
pub fn format_diff_with(
    absolute_diff: i64,
    relative_diff: f64,
    markers: PercentMarkers<'_>,
) -> String {
    if absolute_diff == 0 {
        return NO_CHANGE.to_string();
    }

    let glyph = if absolute_diff < 0 {
        DECREASE_GLYPH
    } else {
        INCREASE_GLYPH
    };

    format!(
        "{} {} ({})",
        glyph,
        format_size_signed(absolute_diff),
        format_percent(relative_diff, markers)
    )
}
