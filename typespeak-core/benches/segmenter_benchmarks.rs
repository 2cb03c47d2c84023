//! Benchmarks for statistics counting and the segmentation loop

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use std::io::{self, Cursor};
use std::thread;
use typespeak_core::{signal_channel, Segmenter, SegmenterConfig, Statistics};

/// Generate test text of roughly `size_kb` kilobytes
fn generate_test_text(size_kb: usize) -> String {
    let base_text = "This is a test sentence, typed live. Does it end here? It does! ";
    base_text.repeat(size_kb * 1024 / base_text.len())
}

fn benchmark_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    for size_kb in [1, 64] {
        let text = generate_test_text(size_kb);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("{size_kb}KB"), |b| {
            b.iter(|| Statistics::count(black_box(&text)));
        });
    }

    group.finish();
}

fn benchmark_segmenter(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmenter");

    let text = generate_test_text(16);
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("16KB", |b| {
        b.iter(|| {
            let (tx, rx) = signal_channel();
            let drain = thread::spawn(move || rx.iter().count());
            let mut segmenter = Segmenter::new(
                Cursor::new(black_box(text.as_bytes())),
                tx,
                SegmenterConfig::default(),
            );
            segmenter.copy_to(&mut io::sink()).unwrap();
            drop(segmenter);
            drain.join().unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_statistics, benchmark_segmenter);
criterion_main!(benches);
