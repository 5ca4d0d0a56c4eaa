//! Unit conversion between inches, points, percentages, degrees and the
//! internal PowerPoint units.
//!
//! Lengths are expressed in EMU (English Metric Units, 914400 per inch).
//! Rotations are expressed in 60000ths of a degree.

use crate::types::{Axis, Dimension, Layout};
use regex::Regex;
use std::sync::LazyLock;

/// EMU in one inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// EMU in one typographic point.
pub const EMU_PER_POINT: i64 = 12_700;

/// Rotation units in one degree.
pub const ROTATION_UNITS_PER_DEGREE: i64 = 60_000;

/// Numeric values at or above this are taken to be EMU already.
///
/// A shape genuinely 100 inches or wider cannot be expressed in inches.
/// Callers must pass those sizes pre-converted.
pub const EMU_PASSTHROUGH_THRESHOLD: f64 = 100.0;

/// Trailing unit suffix on an inch string, e.g. `"2.5in"`.
static UNIT_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[a-z\s]+$").unwrap());

/// Leading numeric prefix, mirroring how `"50%"` or `"12.5 %"` are read.
static NUMERIC_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").unwrap()
});

/// Round half toward positive infinity. NaN and infinities collapse to 0.
pub fn round_half_up(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    (value + 0.5).floor() as i64
}

/// Parse a string the way a loose numeric coercion would, `None` if it is not a number.
fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok()
}

/// Parse the numeric prefix of a string, ignoring whatever follows it.
fn parse_numeric_prefix(text: &str) -> Option<f64> {
    NUMERIC_PREFIX_REGEX
        .find(text)
        .and_then(|m| m.as_str().trim().parse::<f64>().ok())
}

/// Convert inches to EMU.
///
/// Values of 100 or more are assumed to be EMU already and pass through
/// unchanged. Strings may carry a unit suffix (`"1.5in"`); a string that is
/// not numeric converts to 0.
pub fn inches_to_emu(value: impl Into<Dimension>) -> i64 {
    let inches = match value.into() {
        Dimension::Number(n) => n,
        Dimension::Text(text) => {
            let stripped = UNIT_SUFFIX_REGEX.replace(&text, "");
            parse_number(&stripped).unwrap_or(f64::NAN)
        }
    };

    if inches >= EMU_PASSTHROUGH_THRESHOLD {
        return round_half_up(inches);
    }

    round_half_up(inches * EMU_PER_INCH as f64)
}

/// Convert points to EMU. Anything non-numeric counts as 0.
pub fn points_to_emu(value: impl Into<Dimension>) -> i64 {
    let points = match value.into() {
        Dimension::Number(n) => n,
        Dimension::Text(text) => parse_number(&text).unwrap_or(0.0),
    };

    round_half_up(points * EMU_PER_POINT as f64)
}

/// Convert EMU back to inches.
pub fn emu_to_inches(emu: i64) -> f64 {
    emu as f64 / EMU_PER_INCH as f64
}

/// Resolve a position or size to EMU.
///
/// - numbers (or numeric strings) below 100 are inches
/// - numbers of 100 or more are EMU and pass through
/// - percentage strings are a share of the layout width, or of the height
///   for [`Axis::Vertical`]
///
/// Anything else resolves to 0.
pub fn resolve_dimension(size: &Dimension, axis: Option<Axis>, layout: &Layout) -> i64 {
    let number = match size {
        Dimension::Number(n) => Some(*n),
        Dimension::Text(text) => parse_number(text),
    };

    if let Some(n) = number {
        if n < EMU_PASSTHROUGH_THRESHOLD {
            return inches_to_emu(n);
        }
        if n >= EMU_PASSTHROUGH_THRESHOLD {
            return round_half_up(n);
        }
        return 0;
    }

    match size {
        Dimension::Text(text) if text.contains('%') => {
            let Some(percent) = parse_numeric_prefix(text) else {
                return 0;
            };
            let reference = match axis {
                Some(Axis::Vertical) => layout.height,
                Some(Axis::Horizontal) | None => layout.width,
            };
            round_half_up(percent / 100.0 * reference as f64)
        }
        _ => 0,
    }
}

/// Convert degrees to rotation units.
///
/// A value above 360 has 360 subtracted once; no further wrapping is applied.
pub fn degrees_to_rotation(degrees: f64) -> i64 {
    let degrees = if degrees.is_nan() { 0.0 } else { degrees };
    let degrees = if degrees > 360.0 {
        degrees - 360.0
    } else {
        degrees
    };

    round_half_up(degrees * ROTATION_UNITS_PER_DEGREE as f64)
}

/// Format RGB channels as an uppercase 6-digit hex string, e.g. `"FF8000"`.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("{:02X}{:02X}{:02X}", r, g, b)
}
