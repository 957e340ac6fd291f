#![forbid(unsafe_code)]

//! Locale registry and key resolution.
//!
//! # Invariants
//!
//! 1. **Absence is a value**: no lookup ever raises. Missing keys, unknown
//!    locales, and malformed scopes all resolve to `None` (or the per-call
//!    default), never to an error.
//!
//! 2. **Fail-soft locale switching**: setting the default or current locale
//!    to a name outside the available set is silently ignored; the prior
//!    value is retained.
//!
//! 3. **Narrow fallback trigger**: the default-locale retry fires only when
//!    fallback is enabled *and* the first lookup produced a present but
//!    empty value. A plain miss never triggers fallback.
//!
//! 4. **Context isolation**: the current locale lives in the caller-owned
//!    [`LocaleContext`]; two contexts never observe each other's switches.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Empty key | `translate("", …)` | Returns `None`, no lookup |
//! | Empty catalog | Nothing loaded | Returns `None`, no lookup |
//! | Unknown locale override | `options.locale` not available | Current locale used |
//! | Miss | Key absent under the locale | `options.default`, else `None` |
//! | Leaf mid-path | Scope/key deeper than the tree | Treated as a miss |

use smallvec::SmallVec;

use crate::catalog::Catalog;
use crate::context::LocaleContext;
use crate::interpolate::{has_placeholder, interpolate};
use crate::options::Options;
use crate::tree::Node;

/// Built-in default locale, used until a caller sets another.
pub const DEFAULT_LOCALE: &str = "en";

/// Key path separator. Literal dots in key segments cannot be escaped.
const SEPARATOR: char = '.';

/// Translation catalog with locale registry and key resolution.
///
/// Loading and configuration take `&mut self`; resolution takes `&self`, so
/// a translator shared across threads after loading is read-only and
/// `Send + Sync` by construction. The current locale is never stored here —
/// callers thread their own [`LocaleContext`] through resolution calls.
///
/// # Example
///
/// ```
/// use polyglot::{LocaleContext, Node, Options, Translator};
///
/// let mut i18n = Translator::new();
/// i18n.load(
///     "en",
///     Node::from_iter([("greetings", Node::from_iter([("hello", "Hello %{name}")]))]),
/// );
///
/// let ctx = LocaleContext::new();
/// let hello = i18n.translate(&ctx, "greetings.hello", &Options::new().var("name", "Ada"));
/// assert_eq!(hello.and_then(Node::into_string).as_deref(), Some("Hello Ada"));
///
/// // Scope composes with the key.
/// let scoped = i18n.t(&ctx, "hello", &Options::new().scope("greetings").var("name", "Ada"));
/// assert_eq!(scoped.and_then(Node::into_string).as_deref(), Some("Hello Ada"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Translator {
    catalog: Catalog,
    default_locale: Option<String>,
    available: Option<Vec<String>>,
    fallback: bool,
}

impl Translator {
    /// Create a translator with an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the assembled catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Load a catalog fragment for `locale`, deep-merging into any tree
    /// already loaded for it.
    ///
    /// While the available set is derived from the catalog, a new locale
    /// becomes available simply by being loaded; an explicitly overridden
    /// set is never touched by loading.
    pub fn load(&mut self, locale: impl Into<String>, tree: impl Into<Node>) {
        self.catalog.load(locale, tree.into());
    }

    // ── Locale registry ─────────────────────────────────────────────────

    /// The process-wide default locale.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        self.default_locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }

    /// Change the default locale.
    ///
    /// Ignored unless `locale` is available; callers relying on
    /// "attempt to set, ignore if invalid" get exactly that.
    pub fn set_default_locale(&mut self, locale: &str) {
        if self.is_available(locale) {
            self.default_locale = Some(locale.to_string());
        } else {
            tracing::debug!(locale, "ignoring default-locale change to unavailable locale");
        }
    }

    /// The available locale names, sorted.
    ///
    /// Until [`set_available_locales`](Self::set_available_locales) is
    /// called this is derived from the catalog; afterwards it is the
    /// explicit set, which may reserve names not yet loaded.
    #[must_use]
    pub fn available_locales(&self) -> Vec<String> {
        let mut names: Vec<String> = match &self.available {
            Some(set) => set.clone(),
            None => self
                .catalog
                .locale_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        };
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Replace the available set with an explicit list of names.
    ///
    /// From this point on membership tests consult only the given set.
    pub fn set_available_locales<I, S>(&mut self, locales: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.available = Some(locales.into_iter().map(Into::into).collect());
    }

    /// Whether `locale` is in the available set.
    #[must_use]
    pub fn is_available(&self, locale: &str) -> bool {
        match &self.available {
            Some(set) => set.iter().any(|name| name == locale),
            None => self.catalog.contains_locale(locale),
        }
    }

    /// Whether the default-locale fallback is enabled.
    #[must_use]
    pub fn fallback_enabled(&self) -> bool {
        self.fallback
    }

    /// Enable or disable the default-locale fallback. Off by default.
    pub fn set_fallback(&mut self, enabled: bool) {
        self.fallback = enabled;
    }

    /// The calling context's current locale, lazily initialized to the
    /// default locale on first read in that context.
    #[must_use]
    pub fn current_locale(&self, ctx: &LocaleContext) -> String {
        ctx.get_or_init(self.default_locale())
    }

    /// Change the calling context's current locale.
    ///
    /// Ignored unless `locale` is available. Returns the (possibly
    /// unchanged) current locale. Other contexts are unaffected.
    pub fn set_current_locale(&self, ctx: &LocaleContext, locale: &str) -> String {
        if self.is_available(locale) {
            ctx.set(locale.to_string());
        } else {
            tracing::debug!(locale, "ignoring current-locale change to unavailable locale");
        }
        self.current_locale(ctx)
    }

    // ── Resolution ──────────────────────────────────────────────────────

    /// Resolve `key` for the calling context.
    ///
    /// The lookup path is the effective locale, then the dot-split scope
    /// (when present), then the dot-split key. When fallback is enabled and
    /// the result is present but empty, the lookup is retried once with the
    /// default locale substituted for the effective one, and the retry's
    /// outcome — present or absent — replaces the first result. A leaf
    /// containing `%{name}` placeholders is interpolated from the options'
    /// variables; a subtree is returned as-is.
    ///
    /// Returns the resolved value, else `options.default`, else `None`.
    #[must_use]
    pub fn translate(&self, ctx: &LocaleContext, key: &str, options: &Options) -> Option<Node> {
        if key.is_empty() || self.catalog.is_empty() {
            return None;
        }

        let effective: String = match options.locale.as_deref() {
            Some(locale) if self.is_available(locale) => locale.to_string(),
            _ => self.current_locale(ctx),
        };

        let mut path: SmallVec<[&str; 8]> = SmallVec::new();
        path.push(effective.as_str());
        if let Some(scope) = options.scope.as_deref() {
            if !scope.is_empty() {
                path.extend(scope.split(SEPARATOR));
            }
        }
        path.extend(key.split(SEPARATOR));

        let mut result = self.catalog.lookup(&path);

        if self.fallback && result.is_some_and(Node::is_empty) {
            tracing::trace!(
                locale = %effective,
                key,
                "empty result, retrying under the default locale"
            );
            let mut retry = path.clone();
            if let Some(segment) = retry.iter_mut().find(|segment| **segment == effective) {
                *segment = self.default_locale();
            }
            result = self.catalog.lookup(&retry);
        }

        match result {
            Some(Node::Leaf(text)) if has_placeholder(text) => {
                Some(Node::Leaf(interpolate(text, &options.vars)))
            }
            Some(node) => Some(node.clone()),
            None => options.default.clone(),
        }
    }

    /// Short alias for [`translate`](Self::translate).
    #[must_use]
    pub fn t(&self, ctx: &LocaleContext, key: &str, options: &Options) -> Option<Node> {
        self.translate(ctx, key, options)
    }
}
