//! Catalog of translation trees keyed by locale.
//!
//! The catalog owns every loaded tree and is the single mutation point:
//! fragments enter through [`Catalog::load`], which deep-merges repeated
//! loads for the same locale, and everything else is read-only lookup.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown locale | First path segment not loaded | Returns `None` |
//! | Missing key | A segment not present at its depth | Returns `None` |
//! | Leaf mid-path | Tree shallower than the path | Returns `None` |
//! | Empty path | No segments supplied | Returns `None` |

use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

use crate::tree::Node;

/// All loaded translations, keyed by locale name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    locales: FxHashMap<String, Node>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no locale has been loaded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Number of loaded locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Whether a tree has been loaded for `locale`.
    #[must_use]
    pub fn contains_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Loaded locale names, sorted for deterministic output.
    #[must_use]
    pub fn locale_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Load a fragment for `locale`.
    ///
    /// The first fragment for a locale is inserted as-is; later fragments
    /// are deep-merged into the existing tree, with the incoming values
    /// taking precedence on conflict.
    pub fn load(&mut self, locale: impl Into<String>, tree: Node) {
        let locale = locale.into();
        tracing::debug!(locale = %locale, "load translation fragment");
        match self.locales.entry(locale) {
            Entry::Occupied(mut slot) => slot.get_mut().deep_merge(tree),
            Entry::Vacant(slot) => {
                slot.insert(tree);
            }
        }
    }

    /// Look up a value by path.
    ///
    /// The first segment names the locale; the rest descend through that
    /// locale's tree. Every kind of miss is `None`.
    #[must_use]
    pub fn lookup(&self, path: &[&str]) -> Option<&Node> {
        let (locale, rest) = path.split_first()?;
        self.locales.get(*locale)?.dig(rest)
    }
}
