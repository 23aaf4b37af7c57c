use std::fmt;

use crate::error::HolderError;
use crate::support::Support;
use crate::value::Value;

/// Validation rule for one kind of holder.
///
/// Implemented by uninhabited marker types such as
/// [`LineNumber`](crate::LineNumber); the holder itself stays generic.
pub trait Validate {
    /// What the holder stores and hands back.
    type Output: Clone;

    /// Short name used in log events.
    const NAME: &'static str;

    /// Check a non-null value and convert it to the stored form.
    fn validate(support: &Support, value: Value) -> Result<Self::Output, HolderError>;
}

/// One optional, validated field.
///
/// Starts unset. [`set`](Self::set) either stores the validated value or
/// returns the error and leaves the previous value in place. Setting
/// [`Value::Null`] always clears the field.
pub struct Holder<V: Validate> {
    value: Option<V::Output>,
    support: Support,
}

impl<V: Validate> Holder<V> {
    /// An unset holder using the default [`Support`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_support(Support::new())
    }

    /// An unset holder using the given collaborators.
    #[must_use]
    pub const fn with_support(support: Support) -> Self {
        Self {
            value: None,
            support,
        }
    }

    /// The stored value, or `None` when unset.
    #[must_use]
    pub fn get(&self) -> Option<V::Output> {
        self.value.clone()
    }

    pub fn set(&mut self, value: impl Into<Value>) -> Result<(), HolderError> {
        let value = value.into();
        if value.is_null() {
            tracing::trace!(holder = V::NAME, "cleared");
            self.value = None;
            return Ok(());
        }

        match V::validate(&self.support, value) {
            Ok(stored) => {
                tracing::trace!(holder = V::NAME, "stored");
                self.value = Some(stored);
                Ok(())
            }
            Err(err) => {
                tracing::debug!(
                    holder = V::NAME,
                    kind = %err.kind,
                    argument = %err.argument,
                    "rejected: {err}"
                );
                Err(err)
            }
        }
    }

    /// Reset to unset.
    pub fn clear(&mut self) {
        self.value = None;
    }

    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.value.is_some()
    }

    #[must_use]
    pub const fn support(&self) -> &Support {
        &self.support
    }
}

impl<V: Validate> Default for Holder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Validate> Clone for Holder<V> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            support: self.support.clone(),
        }
    }
}

impl<V> fmt::Debug for Holder<V>
where
    V: Validate,
    V::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Holder")
            .field("name", &V::NAME)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
