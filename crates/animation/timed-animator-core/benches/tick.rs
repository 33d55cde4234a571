use criterion::{black_box, criterion_group, criterion_main, Criterion};
use timed_animator_core::{AnimationTime, Animator, AnimatorType, CIRCLE, EASE_IN_OUT};

fn bench_tick(c: &mut Criterion) {
    let frame = AnimationTime::from_nanos(16_666_667);
    let total = AnimationTime::from_nanos(1_000_000_000);

    let mut plain = Animator::from_fn(|r| r)
        .to_timed(total, 0.0, AnimatorType::Restart)
        .unwrap();
    c.bench_function("tick_function", |b| b.iter(|| *plain.tick(black_box(frame))));

    let mut chained = Animator::from_fn(|r| r * 100.0)
        .to_timed(total, 0.0, AnimatorType::Restart)
        .unwrap()
        .add(&EASE_IN_OUT)
        .continue_with_fn(|r| 100.0 - r * 100.0)
        .when_finished(|_| {});
    c.bench_function("tick_chained", |b| b.iter(|| *chained.tick(black_box(frame))));

    let mut orbit = CIRCLE
        .add(&Animator::from_fn(|r| r * std::f64::consts::TAU))
        .to_timed(total, CIRCLE.animate(0.0), AnimatorType::Restart)
        .unwrap();
    c.bench_function("tick_circle", |b| b.iter(|| *orbit.tick(black_box(frame))));
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
