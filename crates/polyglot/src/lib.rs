#![forbid(unsafe_code)]

//! Translation catalog and resolution engine.
//!
//! Polyglot assembles a multi-locale catalog from incrementally loaded key
//! trees and resolves dotted keys against it with locale fallback and
//! `%{name}` interpolation. The design keeps "current locale" out of global
//! state: each execution context owns a [`LocaleContext`] and threads it
//! through resolution calls, so concurrent callers in different locales
//! never interfere.
//!
//! This crate performs no I/O and never suspends — every operation is a
//! synchronous computation over already-loaded data. File discovery and
//! YAML decoding live in the companion `polyglot-yaml` crate.
//!
//! # Example
//!
//! ```
//! use polyglot::{LocaleContext, Node, Options, Translator};
//!
//! let mut i18n = Translator::new();
//! i18n.load(
//!     "en",
//!     Node::from_iter([("greetings", Node::from_iter([("hello", "Hello %{name}")]))]),
//! );
//! i18n.load(
//!     "fr",
//!     Node::from_iter([("greetings", Node::from_iter([("hello", "Bonjour %{name}")]))]),
//! );
//!
//! let ctx = LocaleContext::new();
//! i18n.set_current_locale(&ctx, "fr");
//!
//! let hello = i18n.translate(&ctx, "greetings.hello", &Options::new().var("name", "Ada"));
//! assert_eq!(hello.and_then(Node::into_string).as_deref(), Some("Bonjour Ada"));
//! ```

/// Catalog of translation trees keyed by locale.
pub mod catalog;
/// Per-execution-context current-locale state.
pub mod context;
/// `%{name}` placeholder interpolation.
pub mod interpolate;
/// Per-call lookup options.
pub mod options;
/// Locale registry and key resolution.
pub mod translator;
/// Nested key trees and deep merge.
pub mod tree;

pub use catalog::Catalog;
pub use context::LocaleContext;
pub use interpolate::{has_placeholder, interpolate};
pub use options::Options;
pub use translator::{DEFAULT_LOCALE, Translator};
pub use tree::{KeyTree, Node};
