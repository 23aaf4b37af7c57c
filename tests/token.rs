//! Token holder and the token capability.

mod common;

use std::rc::Rc;

use common::{Opaque, tagging_translator, token, tokenizer};
use tokenizer_aware::{BasicToken, HolderErrorKind, Span, Support, Token, TokenHolder, Value};

#[test]
fn starts_unset() {
    let holder = TokenHolder::new();
    assert!(holder.get().is_none());
}

#[test]
fn set_get_is_identity() {
    let t = token("word", "example.com");
    let mut holder = TokenHolder::new();
    holder.set(Rc::clone(&t)).expect("set");
    let got = holder.get().expect("token");
    assert!(Rc::ptr_eq(&got, &t));
}

#[test]
fn equal_but_distinct_token_is_not_identical() {
    let a = token("word", "log");
    let b = token("word", "log");
    let mut holder = TokenHolder::new();
    holder.set(Rc::clone(&a)).expect("set");
    assert!(!Rc::ptr_eq(&holder.get().expect("token"), &b));
}

#[test]
fn set_null_clears() {
    let mut holder = TokenHolder::new();
    holder.set(token("word", "a")).expect("set");
    holder.set(Value::Null).expect("null");
    assert!(holder.get().is_none());
}

#[test]
fn set_none_clears() {
    let mut holder = TokenHolder::new();
    holder.set(token("word", "a")).expect("set");
    holder.set(None::<Rc<dyn Token>>).expect("none");
    assert!(!holder.is_set());
}

#[test]
fn object_is_invalid() {
    let mut holder = TokenHolder::new();
    let err = holder.set(Value::object(Opaque)).expect_err("object");
    assert_eq!(err.kind, HolderErrorKind::InvalidInput);
    assert_eq!(err.message, "Invalid token");
    assert!(err.cause.is_none());
}

#[test]
fn tokenizer_is_not_a_token() {
    let mut holder = TokenHolder::new();
    let err = holder.set(tokenizer()).expect_err("tokenizer");
    assert_eq!(err.kind, HolderErrorKind::InvalidInput);
}

#[test]
fn scalars_are_invalid() {
    let mut holder = TokenHolder::new();
    for value in [Value::Int(1), Value::Float(1.0), Value::Str("word".into())] {
        let err = holder.set(value.clone()).expect_err("scalar");
        assert_eq!(err.kind, HolderErrorKind::InvalidInput);
        assert_eq!(err.argument, value);
    }
}

#[test]
fn failed_set_keeps_previous_token() {
    let t = token("word", "keep");
    let mut holder = TokenHolder::new();
    holder.set(Rc::clone(&t)).expect("set");
    holder.set("replace").expect_err("string");
    assert!(Rc::ptr_eq(&holder.get().expect("token"), &t));
}

#[test]
fn translator_shapes_message() {
    let mut holder = TokenHolder::with_support(Support::new().translator(tagging_translator));
    let err = holder.set(3).expect_err("int");
    assert_eq!(err.message, "[t] Invalid token");
}

// -----------------------------------------------------------
// BasicToken.
// -----------------------------------------------------------

#[test]
fn basic_token_without_span() {
    let t = BasicToken::new("comment", "# hi");
    assert_eq!(t.key(), "comment");
    assert_eq!(t.value(), "# hi");
    assert_eq!(t.line_number(), None);
    assert_eq!(t.column_number(), None);
}

#[test]
fn basic_token_with_span() {
    let t = BasicToken::new("word", "log").at(4, 9);
    assert_eq!(t.line_number(), Some(4));
    assert_eq!(t.column_number(), Some(9));
    assert_eq!(
        t.span,
        Some(Span {
            file: None,
            line: 4,
            column: 9
        })
    );
}

#[test]
fn stored_token_keeps_its_fields() {
    let mut holder = TokenHolder::new();
    holder
        .set(BasicToken::new("word", "respond").at(2, 3).shared())
        .expect("set");
    let t = holder.get().expect("token");
    assert_eq!(t.key(), "word");
    assert_eq!(t.value(), "respond");
    assert_eq!((t.line_number(), t.column_number()), (Some(2), Some(3)));
}

#[test]
fn custom_token_type_is_accepted() {
    #[derive(Debug)]
    struct Eof;

    impl Token for Eof {
        fn key(&self) -> &'static str {
            "eof"
        }

        fn value(&self) -> &'static str {
            ""
        }
    }

    let eof: Rc<dyn Token> = Rc::new(Eof);
    let mut holder = TokenHolder::new();
    holder.set(Rc::clone(&eof)).expect("set");
    assert_eq!(holder.get().expect("token").key(), "eof");
    assert_eq!(eof.line_number(), None);
}
