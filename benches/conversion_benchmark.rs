use coords_converter::models::{CoordinatePair, Format, Token};
use coords_converter::parsers::extract_str;
use coords_converter::processors::batch_convert;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// Alternating lat/long tokens in every notation
fn create_test_tokens(pair_count: usize) -> Vec<Token> {
    let samples = [
        ("S43°38'19.39", "W116°14'28.86\""),
        ("32° 18.385' N", "122° 36.875' W"),
        ("N38.959390°", "-95.265483°"),
    ];

    (0..pair_count)
        .flat_map(|i| {
            let (lat, long) = samples[i % samples.len()];
            [Token::from(lat), Token::from(long)]
        })
        .collect()
}

fn benchmark_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    for input in ["S43°38'19.39", "32° 18.385' N", "-95.265483°"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| extract_str(black_box(input)).unwrap())
        });
    }

    group.finish();
}

fn benchmark_pair_conversion(c: &mut Criterion) {
    let pair = CoordinatePair::new("S43°38'19.39", "W116°14'28.86\"").unwrap();
    let decimal = CoordinatePair::new(53.47872, -113.4613).unwrap();

    c.bench_function("dms_to_dec", |b| b.iter(|| black_box(&pair).to_dec(5).unwrap()));
    c.bench_function("dms_to_ddm", |b| b.iter(|| black_box(&pair).to_ddm()));
    c.bench_function("dec_to_dms", |b| b.iter(|| black_box(&decimal).to_dms()));
}

fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_convert");

    for pair_count in [10, 100, 1000] {
        let tokens = create_test_tokens(pair_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(pair_count),
            &tokens,
            |b, tokens| b.iter(|| batch_convert(black_box(tokens), Format::Dms).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_extraction,
    benchmark_pair_conversion,
    benchmark_batch
);
criterion_main!(benches);
