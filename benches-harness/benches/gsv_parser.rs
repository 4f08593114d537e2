use criterion::{Criterion, black_box, criterion_group, criterion_main};

use nmea_scan::{ParseResult, parse_gsv, parse_str};

static GSV_SENTENCES: [&str; 6] = [
    "$GPGSV,3,1,12,01,49,196,41,03,71,278,32,06,02,323,27,11,21,196,39*72",
    "$GPGSV,3,2,12,14,39,063,33,17,21,292,30,19,20,310,31,22,82,181,36*73",
    "$GPGSV,3,3,12,23,34,232,42,25,11,045,33,31,45,092,38,32,14,061,39*75",
    "$GLGSV,3,1,10,74,40,078,43,66,23,275,31,82,10,347,36,73,15,015,38*6B",
    "$GLGSV,3,2,10,75,19,135,36,65,76,333,31,88,32,233,33,81,40,302,38*6A",
    "$GLGSV,3,3,10,72,40,075,43,87,00,000,*6F",
];

fn gsv_benchmark(c: &mut Criterion) {
    let mut bench_group = c.benchmark_group("GSV");

    bench_group.bench_function("parse_str (validate + classify + decode)", |b| {
        b.iter(|| {
            for line in &GSV_SENTENCES {
                let result = black_box(parse_str(black_box(line)).unwrap());
                assert!(matches!(result, ParseResult::GSV(_)));
            }
        })
    });

    bench_group.bench_function("parse_gsv (decode only)", |b| {
        b.iter(|| {
            for line in &GSV_SENTENCES {
                black_box(parse_gsv(black_box(line)).unwrap());
            }
        })
    });
}

criterion_group!(benches, gsv_benchmark);
criterion_main!(benches);
