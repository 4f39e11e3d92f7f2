use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use snowfall::core::{FixedStepClock, FrameLoop};
use snowfall::particles::{ParticleBounds, ParticlePool, DEFAULT_PARTICLE_COUNT};
use snowfall::render::HeadlessRenderer;
use snowfall::window::HeadlessScheduler;
use snowfall::{build_camera, build_scene, SceneConfig};

/// Pool advance at several sizes, one 60 Hz step per iteration
fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_advance");

    for count in [1_000, 5_000, DEFAULT_PARTICLE_COUNT, 100_000] {
        let mut rng = StdRng::seed_from_u64(0);
        let mut pool = ParticlePool::spawn(count, ParticleBounds::default(), &mut rng)
            .expect("default bounds are valid");

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| black_box(pool.advance(black_box(1.0 / 60.0), &mut rng)))
        });
    }

    group.finish();
}

/// Worst case: every particle falls through the floor in one step
fn bench_full_recycle(c: &mut Criterion) {
    let positions = vec![Vec3::new(0.0, -199.0, 0.0); DEFAULT_PARTICLE_COUNT];
    let mut rng = StdRng::seed_from_u64(1);

    c.bench_function("particle_full_recycle", |b| {
        b.iter_batched(
            || ParticlePool::from_positions(positions.clone(), ParticleBounds::default())
                .expect("non-empty pool"),
            |mut pool| black_box(pool.advance(1.0, &mut rng)),
            criterion::BatchSize::LargeInput,
        )
    });
}

/// Whole tick with the default scene and a headless renderer
fn bench_tick(c: &mut Criterion) {
    let config = SceneConfig::default();
    let mut rng = StdRng::seed_from_u64(2);
    let scene = build_scene(&config, &mut rng).expect("default config is valid");

    let mut frame_loop = FrameLoop::builder(FixedStepClock::sixty_hz())
        .camera(build_camera(&config, 800, 600))
        .scene(scene)
        .renderer(HeadlessRenderer::new())
        .scheduler(HeadlessScheduler::new())
        .rng(rng)
        .build()
        .expect("complete frame loop");

    c.bench_function("frame_loop_tick_20k", |b| {
        b.iter(|| black_box(frame_loop.tick().expect("headless render cannot fail")))
    });
}

criterion_group!(benches, bench_advance, bench_full_recycle, bench_tick);
criterion_main!(benches);
