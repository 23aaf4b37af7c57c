use std::fmt;
use std::rc::Rc;

use crate::error::NormalizeError;
use crate::normalize::{NormalizeInt, WholeNumber};
use crate::translate::{Translate, Untranslated};
use crate::value::Value;

/// Collaborators a holder relies on: the integer normalizer and the
/// message translator.
///
/// Cloning is cheap; clones share the same collaborators.
///
/// ```
/// use tokenizer_aware::{LineHolder, Support};
///
/// let support = Support::new().translator(|t: &str, _: &[&dyn std::fmt::Display]| {
///     format!("[line] {t}")
/// });
/// let mut line = LineHolder::with_support(support);
/// let err = line.set(0).unwrap_err();
/// assert_eq!(err.message, "[line] Line number must be positive");
/// ```
#[derive(Clone)]
pub struct Support {
    normalizer: Rc<dyn NormalizeInt>,
    translator: Rc<dyn Translate>,
}

impl Support {
    /// Default collaborators: [`WholeNumber`] and [`Untranslated`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            normalizer: Rc::new(WholeNumber),
            translator: Rc::new(Untranslated),
        }
    }

    /// Replace the integer normalizer.
    #[must_use]
    pub fn normalizer(mut self, normalizer: impl NormalizeInt + 'static) -> Self {
        self.normalizer = Rc::new(normalizer);
        self
    }

    /// Replace the message translator.
    #[must_use]
    pub fn translator(mut self, translator: impl Translate + 'static) -> Self {
        self.translator = Rc::new(translator);
        self
    }

    pub fn normalize_int(&self, value: &Value) -> Result<i128, NormalizeError> {
        self.normalizer.normalize_int(value)
    }

    #[must_use]
    pub fn translate(&self, template: &str, args: &[&dyn fmt::Display]) -> String {
        self.translator.translate(template, args)
    }
}

impl Default for Support {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Support {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Support").finish_non_exhaustive()
    }
}
