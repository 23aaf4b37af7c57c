#![allow(dead_code)]

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tokenizer_aware::{
    BasicToken, NormalizeError, NormalizeErrorKind, Support, Token, TokenList, Tokenizer, Value,
};

/// A token with a line and column attached.
pub fn token(key: &str, value: &str) -> Rc<dyn Token> {
    BasicToken::new(key, value).at(1, 1).shared()
}

/// A three-token tokenizer.
pub fn tokenizer() -> Rc<dyn Tokenizer> {
    TokenList::new()
        .token(BasicToken::new("word", "example.com").at(1, 1))
        .token(BasicToken::new("open_brace", "{").at(1, 13))
        .token(BasicToken::new("close_brace", "}").at(2, 1))
        .shared()
}

/// Support whose normalizer always fails, whatever the input.
pub fn failing_support() -> Support {
    Support::new().normalizer(|v: &Value| -> Result<i128, NormalizeError> {
        Err(NormalizeError::new(
            NormalizeErrorKind::NotNumeric,
            v.to_string(),
        ))
    })
}

/// Support whose normalizer counts its calls.
pub fn counting_support(calls: Rc<Cell<usize>>) -> Support {
    Support::new().normalizer(move |v: &Value| -> Result<i128, NormalizeError> {
        calls.set(calls.get() + 1);
        tokenizer_aware::normalize_int(v)
    })
}

/// Translator that tags every message, so tests can see it was used.
pub fn tagging_translator(template: &str, args: &[&dyn fmt::Display]) -> String {
    format!("[t] {}", tokenizer_aware::substitute(template, args))
}

/// A type satisfying neither the token nor the tokenizer capability.
#[derive(Debug)]
pub struct Opaque;
