use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lilt_animation::{AnimationScheduler, SpringAnimation, SpringPreset};

fn bench_step(c: &mut Criterion) {
    c.bench_function("spring_step_600", |b| {
        b.iter(|| {
            let mut spring = SpringAnimation::from_preset(SpringPreset::Bouncy).with_target(1.0);
            for _ in 0..600 {
                black_box(spring.step());
            }
        })
    });
}

fn bench_scheduler(c: &mut Criterion) {
    c.bench_function("scheduler_100_springs_to_idle", |b| {
        b.iter(|| {
            let mut scheduler = AnimationScheduler::new();
            for i in 0..100 {
                SpringAnimation::from_preset(SpringPreset::ALL[i % 3])
                    .with_target(1.0)
                    .animate(&mut scheduler, |value| {
                        black_box(value);
                    });
            }
            scheduler.run_until_idle(600)
        })
    });
}

criterion_group!(benches, bench_step, bench_scheduler);
criterion_main!(benches);
