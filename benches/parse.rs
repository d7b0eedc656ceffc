use criterion::{black_box, criterion_group, criterion_main, Criterion};

const NUMBERS: &[&str] = &[
    "0",
    "-0.0",
    "42",
    "3.1416",
    "-1.5e3",
    "1.234E-10",
    "1.7976931348623157e308",
];

const LITERALS: &[&str] = &["true", "false", "null", "  null  "];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.bench_function("numbers", |b| {
        b.iter(|| {
            for input in NUMBERS {
                let value = jsonatom::parse(black_box(input)).expect("parse failed");
                black_box(value);
            }
        });
    });
    group.bench_function("literals", |b| {
        b.iter(|| {
            for input in LITERALS {
                let value = jsonatom::parse(black_box(input)).expect("parse failed");
                black_box(value);
            }
        });
    });
    group.bench_function("reject_invalid", |b| {
        b.iter(|| {
            for input in ["01", "1e", "truex", ""] {
                let result = jsonatom::parse(black_box(input));
                black_box(result.is_err());
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
