use crate::error::{NormalizeError, NormalizeErrorKind};
use crate::value::Value;

/// Strategy turning a loosely typed value into an integer.
///
/// Any `Fn(&Value) -> Result<i128, NormalizeError>` closure qualifies, so
/// hosts can swap in their own rules without a named type.
pub trait NormalizeInt {
    /// Normalize `value` into an integer.
    ///
    /// # Errors
    ///
    /// Returns `NormalizeError` when the value is not a whole number.
    fn normalize_int(&self, value: &Value) -> Result<i128, NormalizeError>;
}

impl<F> NormalizeInt for F
where
    F: Fn(&Value) -> Result<i128, NormalizeError>,
{
    fn normalize_int(&self, value: &Value) -> Result<i128, NormalizeError> {
        self(value)
    }
}

/// The default normalizer, see [`normalize_int`].
#[derive(Debug, Default, Clone, Copy)]
pub struct WholeNumber;

impl NormalizeInt for WholeNumber {
    fn normalize_int(&self, value: &Value) -> Result<i128, NormalizeError> {
        normalize_int(value)
    }
}

/// Normalize a value into an integer.
///
/// Accepts integers, floats without a fractional part, and strings
/// holding a decimal number that is whole (`"42"`, `" 7 "`, `"4.0"`,
/// `"1e3"`). A stringable value is normalized through its rendering.
/// The result is an `i128` so every `i64` and `u64` input fits.
///
/// # Errors
///
/// Returns `NormalizeError` for non-numeric strings, non-finite or
/// fractional numbers, whole numbers outside the `i128` range, and
/// non-scalar values.
pub fn normalize_int(value: &Value) -> Result<i128, NormalizeError> {
    match value {
        Value::Int(n) => Ok(i128::from(*n)),
        Value::UInt(n) => Ok(i128::from(*n)),
        Value::Float(x) => whole_float(*x, || x.to_string()),
        Value::Str(s) => normalize_str(s),
        Value::Stringable(s) => normalize_str(&s.to_string()),
        other => Err(NormalizeError::new(
            NormalizeErrorKind::Unsupported,
            other.type_name(),
        )),
    }
}

fn normalize_str(s: &str) -> Result<i128, NormalizeError> {
    let trimmed = s.trim();
    if let Ok(n) = trimmed.parse::<i128>() {
        return Ok(n);
    }
    if !is_decimal_literal(trimmed) {
        return Err(NormalizeError::new(NormalizeErrorKind::NotNumeric, s));
    }
    trimmed.parse::<f64>().map_or_else(
        |_| Err(NormalizeError::new(NormalizeErrorKind::NotNumeric, s)),
        |x| whole_float(x, || s.to_string()),
    )
}

/// Digits with optional sign, decimal point, and exponent. Rejects the
/// `inf` and `nan` spellings that `f64::from_str` would take.
fn is_decimal_literal(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_digit())
        && s
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn whole_float(x: f64, input: impl FnOnce() -> String) -> Result<i128, NormalizeError> {
    // 2^127 is exactly representable; anything at or above it overflows.
    const LIMIT: f64 = i128::MAX as f64;

    if !x.is_finite() {
        return Err(NormalizeError::new(NormalizeErrorKind::NotNumeric, input()));
    }
    if !(-LIMIT..LIMIT).contains(&x) {
        return Err(NormalizeError::new(
            NormalizeErrorKind::OutOfBounds,
            input(),
        ));
    }
    if x.fract() != 0.0 {
        return Err(NormalizeError::new(NormalizeErrorKind::Fractional, input()));
    }
    Ok(x as i128)
}
