//! Validated line, column, token, and tokenizer holders.
//!
//! Each holder stores one optional field and checks every assignment:
//! line and column numbers must normalize to a whole number of at least
//! 1, token and tokenizer holders only accept values carrying that
//! capability. Host types compose holders as plain fields.
//!
//! # Quick start
//!
//! ## Line and column numbers
//!
//! ```
//! use tokenizer_aware::{ColumnHolder, HolderErrorKind, LineHolder, Value};
//!
//! let mut line = LineHolder::new();
//! line.set("42").unwrap();
//! assert_eq!(line.get(), Some(42));
//!
//! let err = line.set(0).unwrap_err();
//! assert_eq!(err.kind, HolderErrorKind::OutOfRange);
//! assert_eq!(line.get(), Some(42));
//!
//! line.set(Value::Null).unwrap();
//! assert_eq!(line.get(), None);
//!
//! let mut column = ColumnHolder::new();
//! let err = column.set("abc").unwrap_err();
//! assert_eq!(err.kind, HolderErrorKind::InvalidInput);
//! ```
//!
//! ## Tokens and tokenizers
//!
//! ```
//! use std::rc::Rc;
//! use tokenizer_aware::{BasicToken, TokenCursor, TokenHolder, TokenList, TokenizerHolder};
//!
//! let token = BasicToken::new("word", "reverse_proxy").at(3, 5).shared();
//! let mut holder = TokenHolder::new();
//! holder.set(Rc::clone(&token)).unwrap();
//! assert!(Rc::ptr_eq(&holder.get().unwrap(), &token));
//!
//! let mut tokenizer = TokenizerHolder::new();
//! tokenizer
//!     .set(TokenList::new().token(BasicToken::new("word", "log")).shared())
//!     .unwrap();
//! let source = tokenizer.get().unwrap();
//! let cursor = TokenCursor::new(&*source);
//! assert_eq!(cursor.current().map(|t| t.value().to_string()), Some("log".into()));
//! ```
//!
//! ## Composing into a host type
//!
//! ```
//! use tokenizer_aware::{ColumnHolder, HolderError, LineHolder};
//!
//! #[derive(Default)]
//! struct Diagnostic {
//!     line: LineHolder,
//!     column: ColumnHolder,
//! }
//!
//! impl Diagnostic {
//!     fn locate(&mut self, line: usize, column: usize) -> Result<(), HolderError> {
//!         self.line.set(line)?;
//!         self.column.set(column)
//!     }
//! }
//!
//! let mut d = Diagnostic::default();
//! d.locate(7, 1).unwrap();
//! assert_eq!((d.line.get(), d.column.get()), (Some(7), Some(1)));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod error;
pub mod holder;
pub mod normalize;
pub mod position;
pub mod support;
pub mod token;
pub mod tokenizer;
pub mod translate;
pub mod value;

pub use error::{HolderError, HolderErrorKind, NormalizeError, NormalizeErrorKind};
pub use holder::{Holder, Validate};
pub use normalize::{NormalizeInt, WholeNumber, normalize_int};
pub use position::{ColumnHolder, ColumnNumber, LineHolder, LineNumber};
pub use support::Support;
pub use token::{BasicToken, Span, Token, TokenHolder, TokenRef};
pub use tokenizer::{TokenCursor, TokenList, Tokenizer, TokenizerHolder, TokenizerRef};
pub use translate::{Translate, Untranslated, substitute};
pub use value::{Stringable, Value};
