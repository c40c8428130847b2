//! Benchmark harness for the decomment pipeline.
//!
//! Uses criterion for reliable benchmarking.
//! Run with: cargo bench -p decomment_driver

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use decomment_driver::rewrite_source;
use decomment_normalizer::normalize_lines;
use decomment_scanner::strip_comments;

const SMALL_SOURCE: &str = r#"
// A tiny translation unit.
#include <stdio.h>

int main(void) {
    printf("hello, world\n"); /* greet */
    return 0;
}
"#;

const MEDIUM_SOURCE: &str = r#"
/*
 * ring.c - fixed-size ring buffer
 *
 * Single producer, single consumer.
 */
#include <stddef.h>
#include <string.h>

#define RING_CAP 256 // must be a power of two

typedef struct {
    unsigned char data[RING_CAP];
    size_t head; /* next write */
    size_t tail; /* next read */
} ring_t;

static const char *NAME = "ring://buffer/*v1*/";
static const char SEP = '/';

/* Reset the ring to empty. */
void ring_init(ring_t *r) {
    memset(r, 0, sizeof(*r));
}

// Number of bytes waiting to be read.
size_t ring_len(const ring_t *r) {
    return (r->head - r->tail) & (RING_CAP - 1);
}

int ring_push(ring_t *r, unsigned char byte) {
    if (ring_len(r) == RING_CAP - 1) {
        return -1; // full
    }
    r->data[r->head] = byte;
    r->head = (r->head + 1) & (RING_CAP - 1);
    return 0;
}

int ring_pop(ring_t *r, unsigned char *out) {
    if (r->head == r->tail) {
        return -1; /* empty */
    }
    *out = r->data[r->tail];
    r->tail = (r->tail + 1) & (RING_CAP - 1);
    return 0;
}

const char *ring_describe(void) {
    return "ring \"buffer\" // not a comment";
}
"#;

/// Build a large source by repeating the medium one, alternating line endings.
fn generate_large_source(copies: usize) -> String {
    let mut out = String::with_capacity(MEDIUM_SOURCE.len() * copies * 2);
    for i in 0..copies {
        if i % 2 == 0 {
            out.push_str(MEDIUM_SOURCE);
        } else {
            out.push_str(&MEDIUM_SOURCE.replace('\n', "\r\n"));
        }
    }
    out
}

fn bench_scanner(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");

    group.bench_function("small", |b| {
        b.iter(|| strip_comments(black_box(SMALL_SOURCE)));
    });

    group.bench_function("medium", |b| {
        b.iter(|| strip_comments(black_box(MEDIUM_SOURCE)));
    });

    let large = generate_large_source(100);
    group.bench_function("large", |b| {
        b.iter(|| strip_comments(black_box(&large)));
    });

    group.finish();
}

fn bench_normalizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalizer");

    let stripped = strip_comments(MEDIUM_SOURCE);
    group.bench_function("medium", |b| {
        b.iter(|| normalize_lines(black_box(&stripped)));
    });

    let large = strip_comments(&generate_large_source(100));
    group.bench_function("large", |b| {
        b.iter(|| normalize_lines(black_box(&large)));
    });

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");

    group.bench_function("small", |b| {
        b.iter(|| rewrite_source(black_box(SMALL_SOURCE)));
    });

    group.bench_function("medium", |b| {
        b.iter(|| rewrite_source(black_box(MEDIUM_SOURCE)));
    });

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for copies in [1, 10, 100, 1000] {
        let source = generate_large_source(copies);
        group.bench_with_input(
            BenchmarkId::new("rewrite_source", copies),
            &source,
            |b, source| {
                b.iter(|| rewrite_source(black_box(source)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_scanner,
    bench_normalizer,
    bench_full_pipeline,
    bench_scaling,
);
criterion_main!(benches);
