#![forbid(unsafe_code)]

//! YAML fragment loading for the polyglot translation catalog.
//!
//! A fragment file is a YAML document whose top level maps locale names to
//! nested key trees:
//!
//! ```yaml
//! en:
//!   greetings:
//!     hello: "Hello %{name}"
//! fr:
//!   greetings:
//!     hello: "Bonjour %{name}"
//! ```
//!
//! Files can be loaded one at a time or discovered with a glob pattern;
//! repeated loads deep-merge into the catalog in load order. Scalars other
//! than strings (numbers, booleans) are rendered to their display form;
//! nulls become empty strings. Sequences have no counterpart in a key tree
//! and are rejected.
//!
//! Unlike the core crate, where absence is a value, loading has real
//! failure modes — unreadable files, malformed YAML, unsupported shapes —
//! and reports them through [`LoadError`].
//!
//! # Example
//!
//! ```
//! use polyglot::{LocaleContext, Options, Translator};
//!
//! let mut i18n = Translator::new();
//! polyglot_yaml::load_str(&mut i18n, "en:\n  hello: Hi\n").unwrap();
//!
//! let ctx = LocaleContext::new();
//! let hello = i18n.translate(&ctx, "hello", &Options::new());
//! assert_eq!(hello.and_then(|n| n.into_string()).as_deref(), Some("Hi"));
//! ```

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use polyglot::{KeyTree, Node, Translator};

/// Errors from loading YAML translation fragments.
#[derive(Debug)]
pub enum LoadError {
    /// A file could not be read.
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A document could not be parsed as YAML.
    Parse {
        /// Path of the offending file, when loading from disk.
        path: Option<PathBuf>,
        /// Underlying parse error.
        source: serde_yaml::Error,
    },
    /// A glob pattern was malformed.
    Pattern(glob::PatternError),
    /// The document's top level is not a locale-keyed mapping.
    NotAMapping {
        /// Path of the offending file, when loading from disk.
        path: Option<PathBuf>,
    },
    /// A value has no key-tree counterpart (e.g. a sequence).
    UnsupportedValue {
        /// Dotted path of the offending value, starting at the locale.
        at: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            }
            Self::Parse { path: Some(path), source } => {
                write!(f, "invalid YAML in {}: {source}", path.display())
            }
            Self::Parse { path: None, source } => write!(f, "invalid YAML: {source}"),
            Self::Pattern(source) => write!(f, "invalid glob pattern: {source}"),
            Self::NotAMapping { path: Some(path) } => {
                write!(f, "{}: top level must map locales to key trees", path.display())
            }
            Self::NotAMapping { path: None } => {
                write!(f, "top level must map locales to key trees")
            }
            Self::UnsupportedValue { at } => {
                write!(f, "unsupported value at '{at}': expected string or mapping")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Pattern(source) => Some(source),
            Self::NotAMapping { .. } | Self::UnsupportedValue { .. } => None,
        }
    }
}

impl From<glob::PatternError> for LoadError {
    fn from(source: glob::PatternError) -> Self {
        Self::Pattern(source)
    }
}

/// Load every fragment in a single YAML document.
///
/// The document's top level must be a mapping of locale name to key tree.
pub fn load_str(translator: &mut Translator, yaml: &str) -> Result<(), LoadError> {
    for (locale, tree) in parse_document(yaml, None)? {
        translator.load(locale, tree);
    }
    Ok(())
}

/// Load every fragment in a YAML file.
pub fn load_file(translator: &mut Translator, path: impl AsRef<Path>) -> Result<(), LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let fragments = parse_document(&text, Some(path))?;
    tracing::debug!(
        path = %path.display(),
        fragments = fragments.len(),
        "loaded translation file"
    );
    for (locale, tree) in fragments {
        translator.load(locale, tree);
    }
    Ok(())
}

/// Load every file matching a glob pattern, in sorted path order.
///
/// Entries that cannot be stat-ed during expansion are skipped, matching
/// shell glob behavior; files that match but fail to read or parse are
/// errors.
pub fn load_glob(translator: &mut Translator, pattern: &str) -> Result<(), LoadError> {
    let mut paths: Vec<PathBuf> = glob::glob(pattern)?.filter_map(Result::ok).collect();
    paths.sort();
    for path in paths {
        load_file(translator, &path)?;
    }
    Ok(())
}

/// Parse one document into `(locale, tree)` fragments.
fn parse_document(
    yaml: &str,
    file: Option<&Path>,
) -> Result<Vec<(String, Node)>, LoadError> {
    let document: serde_yaml::Value =
        serde_yaml::from_str(yaml).map_err(|source| LoadError::Parse {
            path: file.map(Path::to_path_buf),
            source,
        })?;
    let serde_yaml::Value::Mapping(mapping) = document else {
        return Err(LoadError::NotAMapping {
            path: file.map(Path::to_path_buf),
        });
    };

    let mut fragments = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let locale = scalar_key(&key, "")?;
        let tree = value_to_node(value, &locale)?;
        fragments.push((locale, tree));
    }
    Ok(fragments)
}

/// Convert a decoded YAML value into a key-tree node.
fn value_to_node(value: serde_yaml::Value, at: &str) -> Result<Node, LoadError> {
    match value {
        serde_yaml::Value::Null => Ok(Node::from("")),
        serde_yaml::Value::Bool(b) => Ok(Node::from(b.to_string())),
        serde_yaml::Value::Number(n) => Ok(Node::from(n.to_string())),
        serde_yaml::Value::String(s) => Ok(Node::Leaf(s)),
        serde_yaml::Value::Mapping(mapping) => {
            let mut tree = KeyTree::default();
            for (key, child) in mapping {
                let segment = scalar_key(&key, at)?;
                let child_at = format!("{at}.{segment}");
                tree.insert(segment, value_to_node(child, &child_at)?);
            }
            Ok(Node::Tree(tree))
        }
        serde_yaml::Value::Sequence(_) | serde_yaml::Value::Tagged(_) => {
            Err(LoadError::UnsupportedValue { at: at.to_string() })
        }
    }
}

/// Render a mapping key to a string segment. YAML allows scalar keys of any
/// type; only string-renderable scalars make sense as key segments.
fn scalar_key(key: &serde_yaml::Value, at: &str) -> Result<String, LoadError> {
    match key {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        _ => Err(LoadError::UnsupportedValue { at: at.to_string() }),
    }
}
