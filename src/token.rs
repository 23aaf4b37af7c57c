use std::fmt;
use std::rc::Rc;

use crate::error::HolderError;
use crate::holder::{Holder, Validate};
use crate::support::Support;
use crate::value::Value;

/// A single lexical unit: a key (its type), a value, and optionally
/// where it came from.
pub trait Token: fmt::Debug {
    fn key(&self) -> &str;

    fn value(&self) -> &str;

    /// 1-based line the token starts on, if known.
    fn line_number(&self) -> Option<usize> {
        None
    }

    /// 1-based column the token starts at, if known.
    fn column_number(&self) -> Option<usize> {
        None
    }
}

/// Source location of a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub file: Option<String>,
    pub line: usize,
    pub column: usize,
}

/// A plain owned token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicToken {
    pub key: String,
    pub value: String,
    pub span: Option<Span>,
}

impl BasicToken {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            span: None,
        }
    }

    #[must_use]
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.span = Some(Span {
            file: None,
            line,
            column,
        });
        self
    }

    /// Wrap as a shared token reference.
    #[must_use]
    pub fn shared(self) -> Rc<dyn Token> {
        Rc::new(self)
    }
}

impl Token for BasicToken {
    fn key(&self) -> &str {
        &self.key
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn line_number(&self) -> Option<usize> {
        self.span.as_ref().map(|s| s.line)
    }

    fn column_number(&self) -> Option<usize> {
        self.span.as_ref().map(|s| s.column)
    }
}

/// Validation rule for a token reference.
#[derive(Debug)]
pub enum TokenRef {}

/// Holds an optional shared reference to a token.
pub type TokenHolder = Holder<TokenRef>;

impl Validate for TokenRef {
    type Output = Rc<dyn Token>;
    const NAME: &'static str = "token";

    fn validate(support: &Support, value: Value) -> Result<Rc<dyn Token>, HolderError> {
        match value {
            Value::Token(token) => Ok(token),
            other => Err(HolderError::invalid_input(
                support.translate("Invalid token", &[]),
                other,
            )),
        }
    }
}
