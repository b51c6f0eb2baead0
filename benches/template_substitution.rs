//! Benchmarks for template substitution
//!
//! Tests performance of placeholder substitution in command templates.

use clipforge_av::CommandBindings;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Template with no placeholders (baseline)
const TEMPLATE_NO_VARS: &str = "ffmpeg -i in.mp4 -c:v copy -c:a copy out.mp4";

/// Simple template with two placeholders
const TEMPLATE_SIMPLE: &str = "ffmpeg -i {input1} -c copy {output}";

/// Concat-style template using every binding
const TEMPLATE_CONCAT: &str = "ffmpeg {inputs} -filter_complex \
    \"[0:v][1:v]concat=n=2:v=1:a=0[outv]\" -map \"[outv]\" \
    -c:v libx264 -crf 18 -preset veryfast {output} && echo {input1} {input2}";

fn create_bindings() -> CommandBindings {
    CommandBindings::new()
        .bind("input1", "\"/media/clips/first clip.mp4\"")
        .bind("input2", "\"/media/clips/second clip.mp4\"")
        .bind(
            "inputs",
            "-i \"/media/clips/first clip.mp4\" -i \"/media/clips/second clip.mp4\"",
        )
        .bind("output", "\"/media/clips/joined.mp4\"")
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    let bindings = create_bindings();

    for (name, template) in [
        ("no_vars", TEMPLATE_NO_VARS),
        ("simple", TEMPLATE_SIMPLE),
        ("concat", TEMPLATE_CONCAT),
    ] {
        group.throughput(Throughput::Bytes(template.len() as u64));
        group.bench_with_input(BenchmarkId::new("template", name), &template, |b, template| {
            b.iter(|| bindings.resolve(black_box(template)));
        });
    }

    group.finish();
}

fn bench_bindings_creation(c: &mut Criterion) {
    c.bench_function("bindings_creation", |b| {
        b.iter(create_bindings);
    });
}

criterion_group!(benches, bench_resolve, bench_bindings_creation);
criterion_main!(benches);
