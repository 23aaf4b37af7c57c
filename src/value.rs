use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::token::Token;
use crate::tokenizer::Tokenizer;

/// An object that stands for a string, such as a number wrapper or a
/// source fragment.
pub trait Stringable: fmt::Display + fmt::Debug {}

impl<T: fmt::Display + fmt::Debug + ?Sized> Stringable for T {}

/// A loosely typed value handed to a holder's setter.
///
/// Holders accept anything convertible into a `Value` and decide for
/// themselves which variants they can store.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The unset marker. Always accepted; clears the holder.
    #[default]
    Null,
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    /// An object rendered to a string before use.
    Stringable(Rc<dyn Stringable>),
    Token(Rc<dyn Token>),
    Tokenizer(Rc<dyn Tokenizer>),
    /// Any other object, satisfying neither capability.
    Object(Rc<dyn Any>),
}

impl Value {
    /// Wrap an arbitrary object.
    #[must_use]
    pub fn object(object: impl Any) -> Self {
        Self::Object(Rc::new(object))
    }

    /// Wrap an object that represents a string.
    #[must_use]
    pub fn stringable(object: impl Stringable + 'static) -> Self {
        Self::Stringable(Rc::new(object))
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Name of the variant, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Int(_) | Self::UInt(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Stringable(_) => "stringable",
            Self::Token(_) => "token",
            Self::Tokenizer(_) => "tokenizer",
            Self::Object(_) => "object",
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Stringable(a), Self::Stringable(b)) => Rc::ptr_eq(a, b),
            (Self::Token(a), Self::Token(b)) => Rc::ptr_eq(a, b),
            (Self::Tokenizer(a), Self::Tokenizer(b)) => Rc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Stringable(s) => write!(f, "\"{s}\""),
            Self::Token(t) => write!(f, "token {}", t.key()),
            Self::Tokenizer(_) | Self::Object(_) => write!(f, "{}", self.type_name()),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::UInt(n)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        // usize is at most 64 bits on every supported target.
        u64::try_from(n).map_or_else(|_| Self::Str(n.to_string()), Self::UInt)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Rc<dyn Token>> for Value {
    fn from(token: Rc<dyn Token>) -> Self {
        Self::Token(token)
    }
}

impl From<Rc<dyn Tokenizer>> for Value {
    fn from(tokenizer: Rc<dyn Tokenizer>) -> Self {
        Self::Tokenizer(tokenizer)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
