//! Benchmarks for sentence matching and the filter drivers

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use genfilt_core::classifier::{DictionaryClassifier, GenderDict, SuffixClassifier};
use genfilt_core::filter::source_gender;
use genfilt_core::{FilterConfig, Gender, GenderLabel, GenderMatcher, TargetFilter};
use std::hint::black_box;
use std::io::{sink, Cursor};

/// Generate a corpus of the given number of lines
fn generate_lines(lines: usize, sentences: &[&str]) -> String {
    let mut corpus = String::new();
    for i in 0..lines {
        corpus.push_str(sentences[i % sentences.len()]);
        corpus.push('\n');
    }
    corpus
}

fn german_dict() -> GenderDict {
    GenderDict::from_entries([
        ("frau", GenderLabel::Feminine),
        ("lehrerin", GenderLabel::Feminine),
        ("mann", GenderLabel::Masculine),
        ("haus", GenderLabel::Masculine),
    ])
}

/// Per-sentence matching cost for each word-lookup strategy
fn bench_matches_gender(c: &mut Criterion) {
    let mut group = c.benchmark_group("matches_gender");

    let german = GenderMatcher::new(DictionaryClassifier::new(german_dict()));
    let hebrew = GenderMatcher::new(SuffixClassifier::hebrew());
    let cases = [
        ("dictionary", "Die Lehrerin liest dem Kind im Garten ein langes Buch vor."),
        ("dictionary_veto", "Der Mann und die Frau gehen nach Hause."),
    ];

    for (name, sentence) in cases {
        group.bench_with_input(BenchmarkId::new(name, sentence.len()), &sentence, |b, s| {
            b.iter(|| german.matches_gender(black_box(s), Gender::Feminine));
        });
    }

    let sentence = "המורה החדשה לימדה את התלמידים שיעור ארוך";
    group.bench_function("suffix", |b| {
        b.iter(|| hebrew.matches_gender(black_box(sentence), Gender::Feminine));
    });

    group.finish();
}

/// Throughput of the target driver over in-memory streams
fn bench_target_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("target_filter");
    let filter = TargetFilter::new(
        DictionaryClassifier::new(german_dict()),
        FilterConfig::default(),
    );

    for lines in [1_000, 10_000] {
        let source = generate_lines(lines, &["the woman walks home", "the man reads"]);
        let target = generate_lines(lines, &["die Frau geht nach Hause", "der Mann liest"]);
        group.throughput(Throughput::Bytes(target.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, _| {
            b.iter(|| {
                filter
                    .filter(
                        Cursor::new(source.as_bytes()),
                        Cursor::new(target.as_bytes()),
                        &mut sink(),
                        &mut sink(),
                        Gender::Feminine,
                        "bench",
                    )
                    .expect("in-memory filtering")
            });
        });
    }

    group.finish();
}

/// Source-side wordlist classification
fn bench_source_gender(c: &mut Criterion) {
    let mut group = c.benchmark_group("source_gender");
    let lines = [
        "She told her mother about the trip.",
        "He met the King of Spain yesterday.",
        "They went to the market together.",
    ];

    for line in lines {
        group.bench_with_input(BenchmarkId::from_parameter(line.len()), &line, |b, l| {
            b.iter(|| source_gender(black_box(l)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_matches_gender,
    bench_target_filter,
    bench_source_gender
);
criterion_main!(benches);
