//! Benchmarks for message parsing and reconstruction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use banter_irc::Message;

/// Simple PING message
const SIMPLE_MESSAGE: &str = "PING :irc.example.com";

/// Message with prefix
const PREFIX_MESSAGE: &str = ":nick!user@host PRIVMSG #channel :Hello, world!";

/// Numeric response
const NUMERIC_RESPONSE: &str =
    ":irc.server.net 001 nickname :Welcome to the IRC Network nickname!user@host";

/// NAMES reply with several middle parameters and a long trailing list
const NAMES_REPLY: &str =
    ":irc.server.net 353 nickname = #long-channel-name :alice @bob +carol dave erin frank";

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Message Parsing");

    group.bench_function("simple_ping", |b| {
        b.iter(|| {
            let msg = Message::parse(black_box(SIMPLE_MESSAGE)).unwrap();
            black_box(msg)
        })
    });

    group.bench_function("with_prefix", |b| {
        b.iter(|| {
            let msg = Message::parse(black_box(PREFIX_MESSAGE)).unwrap();
            black_box(msg)
        })
    });

    group.bench_function("numeric_response", |b| {
        b.iter(|| {
            let msg = Message::parse(black_box(NUMERIC_RESPONSE)).unwrap();
            black_box(msg)
        })
    });

    group.bench_function("names_reply", |b| {
        b.iter(|| {
            let msg = Message::parse(black_box(NAMES_REPLY)).unwrap();
            black_box(msg)
        })
    });

    group.finish();
}

fn benchmark_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("Message Serialization");

    let simple = Message::parse(SIMPLE_MESSAGE).unwrap();
    let with_prefix = Message::parse(PREFIX_MESSAGE).unwrap();
    let numeric = Message::parse(NUMERIC_RESPONSE).unwrap();

    group.bench_function("simple_ping", |b| {
        b.iter(|| {
            let s = black_box(&simple).to_string();
            black_box(s)
        })
    });

    group.bench_function("with_prefix", |b| {
        b.iter(|| {
            let s = black_box(&with_prefix).to_string();
            black_box(s)
        })
    });

    group.bench_function("numeric_response", |b| {
        b.iter(|| {
            let s = black_box(&numeric).to_string();
            black_box(s)
        })
    });

    group.finish();
}

fn benchmark_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("Round Trip");

    let messages = vec![
        ("simple", SIMPLE_MESSAGE),
        ("prefix", PREFIX_MESSAGE),
        ("numeric", NUMERIC_RESPONSE),
        ("names", NAMES_REPLY),
    ];

    for (name, line) in messages {
        group.bench_with_input(BenchmarkId::new("parse_serialize", name), line, |b, s| {
            b.iter(|| {
                let msg = Message::parse(black_box(s)).unwrap();
                let serialized = msg.to_string();
                black_box(serialized)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parsing,
    benchmark_serialization,
    benchmark_round_trip,
);

criterion_main!(benches);
