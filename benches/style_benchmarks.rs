use bladestyle_core::{analyze, lexer::tokenize, parse, parser::Parser, serialize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// ============================================================================
// Test Data: Varying Complexity and Size
// ============================================================================

const TINY_STYLE: &str = "StylePtr<Blue>()";

const SMALL_STYLE: &str = "StyleNormalPtr<AudioFlicker<Blue,DodgerBlue>,White,300,800>()";

const MEDIUM_STYLE: &str = "StylePtr<Layers<Blue,AudioFlickerL<DodgerBlue>,\
    BlastL<White>,SimpleClashL<Red>,LocalizedClashL<White>,\
    AlphaL<Red,Bump<Int<16384>>>>>()";

const LARGE_STYLE: &str = "StylePtr<Layers<\
    Mix<Sin<Int<20>>,Rgb<0,0,128>,Rgb<0,0,255>>,\
    AlphaL<AudioFlickerL<DodgerBlue>,SwingSpeed<400>>,\
    AlphaL<Red,IntSelect<Variation,Int<0>,Int<16384>,Int<32768>>>,\
    BlastL<White,200,100,400,EFFECT_BLAST>,\
    SimpleClashL<White,40,EFFECT_CLASH>,\
    LocalizedClashL<Yellow,80,30,EFFECT_STAB>,\
    AlphaMixL<Scale<SwingSpeed<600>,Int<0>,Int<32768>>,Black,Orange,Red>,\
    BlinkingL<Cyan,Int<1000>,Int<500>>,\
    BrownNoiseFlickerL<Pink,Int<300>>>>()";

// Generate a deep style for stress testing
fn generate_nested_style(depth: usize) -> String {
    let mut style = "Int<1>".to_string();
    for _ in 0..depth {
        style = format!("Sum<{style},Int<2>>");
    }
    format!("StylePtr<Mix<{style},Black,White>>()")
}

// ============================================================================
// Tokenizer Benchmarks
// ============================================================================

fn bench_tokenizer_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizer_by_size");

    for (name, source) in [
        ("tiny", TINY_STYLE),
        ("small", SMALL_STYLE),
        ("medium", MEDIUM_STYLE),
        ("large", LARGE_STYLE),
    ] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), source, |b, src| {
            b.iter(|| tokenize(black_box(src)))
        });
    }

    group.finish();
}

// ============================================================================
// Parser Benchmarks
// ============================================================================

fn bench_parser_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_by_size");

    for (name, source) in [
        ("tiny", TINY_STYLE),
        ("small", SMALL_STYLE),
        ("medium", MEDIUM_STYLE),
        ("large", LARGE_STYLE),
    ] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), source, |b, src| {
            b.iter(|| Parser::new(black_box(src)).parse_style())
        });
    }

    group.finish();
}

fn bench_parser_nesting(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_nesting");

    for depth in [4, 16, 32, 60] {
        let source = generate_nested_style(depth);
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &source, |b, src| {
            b.iter(|| parse(black_box(src)))
        });
    }

    group.finish();
}

// ============================================================================
// Serializer and End-to-End Benchmarks
// ============================================================================

fn bench_serializer(c: &mut Criterion) {
    let tree = parse(LARGE_STYLE).unwrap();
    c.bench_function("serialize_large", |b| b.iter(|| serialize(black_box(&tree))));
}

fn bench_e2e_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("e2e_round_trip");

    for (name, source) in [("small", SMALL_STYLE), ("large", LARGE_STYLE)] {
        group.bench_with_input(BenchmarkId::from_parameter(name), source, |b, src| {
            b.iter(|| {
                let parsed = analyze(black_box(src), "bench.style").unwrap();
                parsed.to_style_string()
            })
        });
    }

    group.finish();
}

fn bench_json_export(c: &mut Criterion) {
    let parsed = analyze(LARGE_STYLE, "bench.style").unwrap();
    c.bench_function("to_json_large", |b| b.iter(|| black_box(&parsed).to_json()));
}

criterion_group!(
    benches,
    bench_tokenizer_sizes,
    bench_parser_sizes,
    bench_parser_nesting,
    bench_serializer,
    bench_e2e_round_trip,
    bench_json_export,
);

criterion_main!(benches);
