//! Per-execution-context current-locale state.
//!
//! Each thread or task owns its own [`LocaleContext`] and threads it through
//! translation calls, so there is no hidden global state and no way for one
//! caller's locale switch to leak into another's. The type is deliberately
//! not `Sync`: a context belongs to exactly one execution context.

use std::cell::RefCell;

/// The current-locale cell for one execution context.
///
/// The cell starts unset and is filled with the process default locale on
/// first read (see [`Translator::current_locale`]); once filled, it only
/// changes through an explicit, validated set.
///
/// [`Translator::current_locale`]: crate::Translator::current_locale
#[derive(Debug, Default)]
pub struct LocaleContext {
    current: RefCell<Option<String>>,
}

impl LocaleContext {
    /// Create a context with no locale resolved yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the current locale, filling the cell with `default` on first
    /// read.
    pub(crate) fn get_or_init(&self, default: &str) -> String {
        self.current
            .borrow_mut()
            .get_or_insert_with(|| default.to_string())
            .clone()
    }

    /// Overwrite the cell. Callers are responsible for validating the name
    /// first.
    pub(crate) fn set(&self, locale: String) {
        *self.current.borrow_mut() = Some(locale);
    }
}
