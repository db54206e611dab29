use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

fn bench_write_report(c: &mut Criterion) {
    c.bench_function("write_report_30", |b| {
        let mut buf = Vec::with_capacity(256);
        b.iter(|| {
            buf.clear();
            let _ = addrof_lib::report::write_report(&mut buf, black_box(30));
        })
    });
}

fn bench_cube(c: &mut Criterion) {
    c.bench_function("cube_f64", |b| {
        b.iter(|| addrof_lib::arith::cube(black_box(1.5f64)))
    });
}

criterion_group!(benches, bench_write_report, bench_cube);
criterion_main!(benches);
