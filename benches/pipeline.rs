//! Benchmarks for the chatcorpus pipeline stages.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench pipeline -- normalize`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatcorpus::Message;
use chatcorpus::config::CorpusConfig;
use chatcorpus::core::output::{to_jsonl, to_text};
use chatcorpus::core::{
    FilterConfig, Normalizer, OutputConfig, Roster, build_corpus, build_groups, extract_pairs,
    link_replies, segment_threads,
};
use chatcorpus::parser::Parser;
use chatcorpus::parsers::DiscordParser;

use chrono::{Duration, TimeZone, Utc};

// =============================================================================
// Test Data Generators
// =============================================================================

const SAMPLES: &[&str] = &[
    "Ahoj @Alice, jak se máš?",
    "Příliš žluťoučký kůň úpěl ďábelské ódy!",
    "koukni https://example.com/a/b?c=d 🤔",
    ":OMEGALUL: lol",
    "> citace",
    ".play something",
    "ok 👌👌",
    "@everyone večer hrajem?",
];

fn generate_messages(count: usize) -> Vec<Message> {
    let base_time = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let (id, name) = if i % 3 == 0 { ("1", "Alice") } else { ("2", "Bob") };
            // Every 7th message follows a long silence
            let minutes = i as i64 * 2 + (i as i64 / 7) * 45;
            Message::new(
                i as u64,
                base_time + Duration::minutes(minutes),
                id,
                SAMPLES[i % SAMPLES.len()],
            )
            .with_author_name(name)
        })
        .collect()
}

fn generate_discord_json(count: usize) -> String {
    let records: Vec<String> = generate_messages(count)
        .iter()
        .map(|m| {
            serde_json::json!({
                "id": m.id.to_string(),
                "timestamp": m.timestamp.to_rfc3339(),
                "content": m.content,
                "author": { "id": m.author_id, "name": m.author_name, "isBot": false },
            })
            .to_string()
        })
        .collect();
    format!(r#"{{"messages": [{}]}}"#, records.join(",\n"))
}

// =============================================================================
// Stage Benchmarks
// =============================================================================

fn bench_discord_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("discord_parsing");
    let parser = DiscordParser::new();

    for size in [1_000_usize, 10_000, 50_000] {
        let json = generate_discord_json(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &json, |b, json| {
            b.iter(|| {
                let messages = parser.parse_str(black_box(json)).unwrap();
                black_box(messages)
            });
        });
    }
    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [1_000_usize, 10_000, 100_000] {
        let messages = generate_messages(size);
        let roster = Roster::from_messages(&messages);
        let normalizer = Normalizer::new(&CorpusConfig::default(), &roster).unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &messages,
            |b, messages| {
                b.iter(|| black_box(normalizer.normalize_all(black_box(messages))));
            },
        );
    }
    group.finish();
}

fn bench_segment_group_link(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_group_link");
    let config = CorpusConfig::default();
    let separator = config.boundary_separator();

    for size in [1_000_usize, 10_000, 100_000] {
        let messages = generate_messages(size);
        let normalizer = Normalizer::new(&config, &Roster::from_messages(&messages)).unwrap();
        let (normalized, _) = normalizer.normalize_all(&messages);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &normalized,
            |b, normalized| {
                b.iter(|| {
                    let segmentation =
                        segment_threads(black_box(normalized.clone()), config.thread_gap());
                    let groups = link_replies(build_groups(&segmentation.messages, &separator));
                    black_box(extract_pairs(&groups))
                });
            },
        );
    }
    group.finish();
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let messages = generate_messages(10_000);
    let corpus = build_corpus(&messages, &CorpusConfig::default(), &FilterConfig::new()).unwrap();
    let config = OutputConfig::new().with_ids();

    group.throughput(Throughput::Elements(corpus.pairs.len() as u64));
    group.bench_function("text", |b| {
        b.iter(|| black_box(to_text(black_box(&corpus.pairs))));
    });
    group.bench_function("jsonl", |b| {
        b.iter(|| black_box(to_jsonl(black_box(&corpus.pairs), &config).unwrap()));
    });
    group.finish();
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let parser = DiscordParser::new();
    let config = CorpusConfig::default();
    let filter = FilterConfig::new();

    for size in [1_000_usize, 10_000, 50_000] {
        let json = generate_discord_json(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &json, |b, json| {
            b.iter(|| {
                // Full pipeline: parse -> corpus -> text
                let messages = parser.parse_str(black_box(json)).unwrap();
                let corpus = build_corpus(&messages, &config, &filter).unwrap();
                black_box(to_text(&corpus.pairs))
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_discord_parsing,
    bench_normalize,
    bench_segment_group_link,
    bench_output,
    bench_full_pipeline,
);

criterion_main!(benches);
