use crate::error::{HolderError, NormalizeErrorKind};
use crate::holder::{Holder, Validate};
use crate::support::Support;
use crate::value::Value;

/// Validation rule for a 1-based line number.
#[derive(Debug)]
pub enum LineNumber {}

/// Validation rule for a 1-based column number.
#[derive(Debug)]
pub enum ColumnNumber {}

/// Holds an optional 1-based line number.
pub type LineHolder = Holder<LineNumber>;

/// Holds an optional 1-based column number.
pub type ColumnHolder = Holder<ColumnNumber>;

impl Validate for LineNumber {
    type Output = usize;
    const NAME: &'static str = "line_number";

    fn validate(support: &Support, value: Value) -> Result<usize, HolderError> {
        positive(
            support,
            value,
            "Invalid line number",
            "Line number must be positive",
            "Line number is too large",
        )
    }
}

impl Validate for ColumnNumber {
    type Output = usize;
    const NAME: &'static str = "column_number";

    fn validate(support: &Support, value: Value) -> Result<usize, HolderError> {
        positive(
            support,
            value,
            "Invalid column number",
            "Column number must be positive",
            "Column number is too large",
        )
    }
}

fn positive(
    support: &Support,
    value: Value,
    invalid: &str,
    not_positive: &str,
    too_large: &str,
) -> Result<usize, HolderError> {
    let number = match support.normalize_int(&value) {
        Ok(n) => n,
        // A well-formed number, just too wide to represent.
        Err(cause) if cause.kind == NormalizeErrorKind::OutOfBounds => {
            return Err(
                HolderError::out_of_range(support.translate(too_large, &[]), value)
                    .caused_by(cause),
            );
        }
        Err(cause) => {
            return Err(
                HolderError::invalid_input(support.translate(invalid, &[]), value)
                    .caused_by(cause),
            );
        }
    };

    if number < 1 {
        return Err(HolderError::out_of_range(
            support.translate(not_positive, &[]),
            value,
        ));
    }

    // Positive but wider than the platform's usize.
    usize::try_from(number)
        .map_err(|_| HolderError::out_of_range(support.translate(too_large, &[]), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HolderErrorKind;

    #[test]
    fn line_and_column_messages_differ() {
        let mut line = LineHolder::new();
        let mut column = ColumnHolder::new();
        assert_eq!(
            line.set(-1).unwrap_err().message,
            "Line number must be positive"
        );
        assert_eq!(
            column.set("x").unwrap_err().message,
            "Invalid column number"
        );
    }

    #[test]
    fn rejected_value_is_carried() {
        let mut line = LineHolder::new();
        let err = line.set(0).unwrap_err();
        assert_eq!(err.kind, HolderErrorKind::OutOfRange);
        assert_eq!(err.argument, Value::Int(0));
        assert!(err.cause.is_none());
    }
}
