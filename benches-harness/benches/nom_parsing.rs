use criterion::{Criterion, black_box, criterion_group, criterion_main};

use nmea_scan::{Fixed, Scanner, Value, parse_rmc, scan};
use nom::{Parser as _, character::complete::char, combinator::opt, number::complete::float};

static RMC_SENTENCE: &str =
    "$GPRMC,225446.33,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E,A*2B";
static FLOAT_FIELDS: &str = "4916.45,12311.12,000.5,054.7,020.3";

fn directive_benchmark(c: &mut Criterion) {
    /*
    Compares decoding a sentence through the chained `Scanner` methods with
    interpreting the same directive string at runtime.
     */
    let mut bench_group = c.benchmark_group("RMC decoding");

    bench_group.bench_function("parse_rmc", |b| {
        b.iter(|| black_box(parse_rmc(black_box(RMC_SENTENCE)).unwrap()))
    });

    bench_group.bench_function("scan(\"tTcfdfdffDfd;c\")", |b| {
        b.iter(|| {
            let values = scan(black_box(RMC_SENTENCE), "tTcfdfdffDfd;c").unwrap();
            assert!(matches!(values[3], Value::Float(Some(_))));
            black_box(values)
        })
    });
}

fn float_benchmark(c: &mut Criterion) {
    /*
    Fixed-point fields against nom's `f32` parser on the same input.
     */
    let mut bench_group = c.benchmark_group("decimal fields");

    bench_group.bench_function("Scanner::float -> Fixed", |b| {
        b.iter(|| {
            let mut scanner = Scanner::new(black_box(FLOAT_FIELDS));
            let mut sum = Fixed::default();
            while scanner.has_fields() {
                let value = scanner.float().unwrap().unwrap_or_default();
                sum.value = sum.value.wrapping_add(value.value);
            }
            black_box(sum)
        })
    });

    bench_group.bench_function("nom float -> f32", |b| {
        b.iter(|| {
            let mut i = black_box(FLOAT_FIELDS);
            let mut sum = 0.0f32;
            loop {
                let (rest, value) = opt(float::<_, ()>).parse(i).unwrap();
                sum += value.unwrap_or_default();
                match char::<_, ()>(',').parse(rest) {
                    Ok((next, _)) => i = next,
                    Err(_) => break,
                }
            }
            black_box(sum)
        })
    });
}

criterion_group!(benches, directive_benchmark, float_benchmark);
criterion_main!(benches);
