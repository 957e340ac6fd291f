//! Per-call lookup options.

use crate::tree::Node;

/// Options for a single [`Translator::translate`] call.
///
/// Recognized fields are the per-call locale override, the dot-separated
/// scope prefix, and the default value returned when resolution fails;
/// everything else a caller wants to pass rides along as a named
/// interpolation variable.
///
/// [`Translator::translate`]: crate::Translator::translate
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Locale override for this call only.
    pub locale: Option<String>,
    /// Dot-separated key prefix prepended to the lookup path.
    pub scope: Option<String>,
    /// Value returned when resolution yields nothing.
    pub default: Option<Node>,
    /// Named interpolation variables, in insertion order.
    pub vars: Vec<(String, String)>,
}

impl Options {
    /// Create empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the locale for this call.
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Namespace the lookup under a dot-separated prefix.
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Value to return when resolution fails.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Node>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Add a named interpolation variable.
    #[must_use]
    pub fn var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.push((name.into(), value.into()));
        self
    }
}
