use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quatcalc_core::{CalculatorState, Operation, Quaternion};

fn bench_arithmetic(c: &mut Criterion) {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(4.0, 3.0, 2.0, 1.0);

    let mut group = c.benchmark_group("quaternion_arithmetic");
    group.bench_function("add", |bench| {
        bench.iter(|| black_box(a) + black_box(b));
    });
    group.bench_function("hamilton_product", |bench| {
        bench.iter(|| black_box(a) * black_box(b));
    });
    group.bench_function("norm_sq", |bench| {
        bench.iter(|| black_box(a).norm_sq());
    });
    group.bench_function("inverse", |bench| {
        bench.iter(|| black_box(a).inverse());
    });
    group.bench_function("checked_div", |bench| {
        bench.iter(|| black_box(a).checked_div(black_box(b)));
    });
    group.finish();
}

fn bench_transition(c: &mut Criterion) {
    let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let b = Quaternion::new(4.0, 3.0, 2.0, 1.0);

    c.bench_function("calculator_divide_transition", |bench| {
        let mut state = CalculatorState::new();
        bench.iter(|| {
            state
                .set_operands(black_box(a), black_box(b), Operation::Divide)
                .unwrap();
            state.result_value()
        });
    });
}

criterion_group!(benches, bench_arithmetic, bench_transition);
criterion_main!(benches);
