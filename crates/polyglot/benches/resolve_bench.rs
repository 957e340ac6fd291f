//! Benchmarks for the key-resolution hot path.
//!
//! Run with: `cargo bench --package polyglot --bench resolve_bench`
//!
//! Covers the three shapes a resolver call takes in practice: a plain hit,
//! a miss that falls through to the per-call default, and a hit whose leaf
//! needs interpolation.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use polyglot::{LocaleContext, Node, Options, Translator};

fn catalog_fixture() -> Translator {
    let mut i18n = Translator::new();
    for locale in ["en", "fr", "de"] {
        let mut sections = Vec::new();
        for section in 0..20 {
            let leaves: Node = (0..25)
                .map(|leaf| (format!("key{leaf}"), format!("value {section}.{leaf}")))
                .collect();
            sections.push((format!("section{section}"), leaves));
        }
        sections.push((
            "welcome".to_string(),
            Node::from("Hello %{name}, you have %{count} messages"),
        ));
        i18n.load(locale, sections.into_iter().collect::<Node>());
    }
    i18n
}

fn bench_resolve(c: &mut Criterion) {
    let i18n = catalog_fixture();
    let ctx = LocaleContext::new();
    let plain = Options::new();
    let scoped = Options::new().scope("section10");
    let defaulted = Options::new().default_value("missing");
    let vars = Options::new().var("name", "Ada").var("count", "3");

    c.bench_function("resolve/hit", |b| {
        b.iter(|| i18n.translate(&ctx, black_box("section10.key7"), &plain));
    });

    c.bench_function("resolve/scoped_hit", |b| {
        b.iter(|| i18n.translate(&ctx, black_box("key7"), &scoped));
    });

    c.bench_function("resolve/miss_with_default", |b| {
        b.iter(|| i18n.translate(&ctx, black_box("section10.absent"), &defaulted));
    });

    c.bench_function("resolve/interpolated", |b| {
        b.iter(|| i18n.translate(&ctx, black_box("welcome"), &vars));
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
