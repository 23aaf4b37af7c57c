use std::fmt;
use std::rc::Rc;

use crate::error::HolderError;
use crate::holder::{Holder, Validate};
use crate::support::Support;
use crate::token::Token;
use crate::value::Value;

/// A lazy, restartable token source.
///
/// Each call to [`tokens`](Self::tokens) starts a fresh pass from the
/// first token.
pub trait Tokenizer: fmt::Debug {
    fn tokens(&self) -> Box<dyn Iterator<Item = Rc<dyn Token>> + '_>;
}

/// Cursor-style walk over a tokenizer: `current`, `key`, `valid`,
/// `advance`, `rewind`.
pub struct TokenCursor<'a> {
    tokenizer: &'a dyn Tokenizer,
    iter: Box<dyn Iterator<Item = Rc<dyn Token>> + 'a>,
    current: Option<Rc<dyn Token>>,
    key: usize,
}

impl<'a> TokenCursor<'a> {
    /// Position a new cursor on the first token.
    #[must_use]
    pub fn new(tokenizer: &'a dyn Tokenizer) -> Self {
        let mut iter = tokenizer.tokens();
        let current = iter.next();
        Self {
            tokenizer,
            iter,
            current,
            key: 0,
        }
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Rc<dyn Token>> {
        self.current.as_ref()
    }

    /// Zero-based index of the current token.
    #[must_use]
    pub const fn key(&self) -> Option<usize> {
        match self.current {
            Some(_) => Some(self.key),
            None => None,
        }
    }

    #[must_use]
    pub const fn valid(&self) -> bool {
        self.current.is_some()
    }

    /// Move to the next token. No-op once exhausted.
    pub fn advance(&mut self) {
        if self.current.is_some() {
            self.current = self.iter.next();
            self.key += 1;
        }
    }

    /// Start over from the first token.
    pub fn rewind(&mut self) {
        self.iter = self.tokenizer.tokens();
        self.current = self.iter.next();
        self.key = 0;
    }
}

impl fmt::Debug for TokenCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCursor")
            .field("current", &self.current)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// A tokenizer over an already materialized list of tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenList {
    tokens: Vec<Rc<dyn Token>>,
}

impl TokenList {
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    #[must_use]
    pub fn token(mut self, token: impl Token + 'static) -> Self {
        self.tokens.push(Rc::new(token));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Wrap as a shared tokenizer reference.
    #[must_use]
    pub fn shared(self) -> Rc<dyn Tokenizer> {
        Rc::new(self)
    }
}

impl FromIterator<Rc<dyn Token>> for TokenList {
    fn from_iter<I: IntoIterator<Item = Rc<dyn Token>>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl Tokenizer for TokenList {
    fn tokens(&self) -> Box<dyn Iterator<Item = Rc<dyn Token>> + '_> {
        Box::new(self.tokens.iter().cloned())
    }
}

/// Validation rule for a tokenizer reference.
#[derive(Debug)]
pub enum TokenizerRef {}

/// Holds an optional shared reference to a tokenizer.
pub type TokenizerHolder = Holder<TokenizerRef>;

impl Validate for TokenizerRef {
    type Output = Rc<dyn Tokenizer>;
    const NAME: &'static str = "tokenizer";

    fn validate(support: &Support, value: Value) -> Result<Rc<dyn Tokenizer>, HolderError> {
        match value {
            Value::Tokenizer(tokenizer) => Ok(tokenizer),
            other => Err(HolderError::invalid_input(
                support.translate("Invalid tokenizer", &[]),
                other,
            )),
        }
    }
}
