use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tagsieve::{sanitize, Sanitizer, SanitizerConfig};
use tagsieve_benches::{document_of_size, nested_document, rich_text_config, SAMPLE_DOCUMENTS};

fn bench_sanitize_samples(c: &mut Criterion) {
    let config = rich_text_config();

    c.bench_function("sanitize_samples", |b| {
        b.iter(|| {
            for (_, input) in SAMPLE_DOCUMENTS {
                black_box(sanitize(input, &config));
            }
        })
    });
}

fn bench_sanitize_individual(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize_individual");
    let config = rich_text_config();

    for (name, input) in SAMPLE_DOCUMENTS {
        group.bench_function(*name, |b| {
            b.iter(|| black_box(sanitize(black_box(input), &config)))
        });
    }

    group.finish();
}

fn bench_sanitize_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize_input_sizes");
    let config = rich_text_config();

    for size in [100, 1_000, 10_000, 100_000] {
        let input = document_of_size(size);
        group.bench_function(format!("size_{}", size), |b| {
            b.iter(|| black_box(sanitize(black_box(&input), &config)))
        });
    }

    group.finish();
}

fn bench_reused_sanitizer(c: &mut Criterion) {
    let input = document_of_size(10_000);
    let mut sanitizer = Sanitizer::new(rich_text_config());

    c.bench_function("sanitize_reset_reuse", |b| {
        b.iter(|| {
            sanitizer.reset();
            sanitizer.sanitize(black_box(&input));
            black_box(sanitizer.result().len())
        })
    });
}

fn bench_deep_suppression(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize_nesting_depth");
    let config = SanitizerConfig::default().with_allowed_tags(["p"]);

    for depth in [10, 100, 1_000] {
        let input = nested_document(depth);
        group.bench_function(format!("depth_{}", depth), |b| {
            b.iter(|| black_box(sanitize(black_box(&input), &config)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sanitize_samples,
    bench_sanitize_individual,
    bench_sanitize_sizes,
    bench_reused_sanitizer,
    bench_deep_suppression
);
criterion_main!(benches);
