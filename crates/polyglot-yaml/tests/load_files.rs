//! Filesystem loading: single files and glob discovery.

use std::fs;

use polyglot::{LocaleContext, Node, Options, Translator};
use polyglot_yaml::{LoadError, load_file, load_glob};

fn resolve(i18n: &Translator, key: &str, locale: &str) -> Option<String> {
    let ctx = LocaleContext::new();
    i18n.translate(&ctx, key, &Options::new().locale(locale))
        .and_then(Node::into_string)
}

#[test]
fn loads_single_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("en.yml");
    fs::write(&path, "en:\n  greetings:\n    hello: Hi\n").unwrap();

    let mut i18n = Translator::new();
    load_file(&mut i18n, &path).unwrap();
    assert_eq!(resolve(&i18n, "greetings.hello", "en"), Some("Hi".to_string()));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut i18n = Translator::new();
    let err = load_file(&mut i18n, dir.path().join("absent.yml")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn glob_loads_every_match() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("en.yml"), "en:\n  hello: Hi\n").unwrap();
    fs::write(dir.path().join("fr.yml"), "fr:\n  hello: Salut\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "not yaml, not matched").unwrap();

    let mut i18n = Translator::new();
    let pattern = dir.path().join("*.yml");
    load_glob(&mut i18n, pattern.to_str().unwrap()).unwrap();

    assert_eq!(i18n.available_locales(), vec!["en", "fr"]);
    assert_eq!(resolve(&i18n, "hello", "en"), Some("Hi".to_string()));
    assert_eq!(resolve(&i18n, "hello", "fr"), Some("Salut".to_string()));
}

#[test]
fn glob_merges_in_sorted_path_order() {
    let dir = tempfile::tempdir().unwrap();
    // b.yml overrides a.yml because paths load in sorted order.
    fs::write(dir.path().join("a.yml"), "en:\n  msg: first\n  only_a: kept\n").unwrap();
    fs::write(dir.path().join("b.yml"), "en:\n  msg: second\n").unwrap();

    let mut i18n = Translator::new();
    let pattern = dir.path().join("*.yml");
    load_glob(&mut i18n, pattern.to_str().unwrap()).unwrap();

    assert_eq!(resolve(&i18n, "msg", "en"), Some("second".to_string()));
    assert_eq!(resolve(&i18n, "only_a", "en"), Some("kept".to_string()));
}

#[test]
fn bad_pattern_is_a_pattern_error() {
    let mut i18n = Translator::new();
    let err = load_glob(&mut i18n, "[").unwrap_err();
    assert!(matches!(err, LoadError::Pattern(_)));
}

#[test]
fn glob_with_no_matches_loads_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut i18n = Translator::new();
    let pattern = dir.path().join("*.yml");
    load_glob(&mut i18n, pattern.to_str().unwrap()).unwrap();
    assert!(i18n.catalog().is_empty());
}
