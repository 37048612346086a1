use criterion::{black_box, criterion_group, criterion_main, Criterion};
use physics::{dynamics, Cart, Pole, SimParams};

fn bench_integrate(c: &mut Criterion) {
    let params = SimParams::default();
    let mut cart = Cart::new(10.0);
    let mut pole = Pole::new(1.0, 10.0, 10.0);
    pole.set_state(0.1, 0.0);

    c.bench_function("cartpole_integrate", |b| {
        b.iter(|| {
            if cart.position.abs() > 100.0 {
                cart.reset();
                pole.set_state(0.1, 0.0);
            }
            dynamics::integrate(&mut cart, &mut pole, black_box(400.0), &params).unwrap()
        });
    });
}

fn bench_solve(c: &mut Criterion) {
    let cart = Cart::new(10.0);
    let mut pole = Pole::new(1.0, 10.0, 10.0);
    pole.set_state(2.5, -3.0);

    c.bench_function("cartpole_solve", |b| {
        b.iter(|| dynamics::solve(black_box(&cart), black_box(&pole), 400.0, 9.8).unwrap());
    });
}

criterion_group!(benches, bench_integrate, bench_solve);
criterion_main!(benches);
