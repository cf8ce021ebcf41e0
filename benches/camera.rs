//! Benchmarks for flingy camera and physics updates.

use criterion::{criterion_group, criterion_main, Criterion};
use flingy::*;

fn bench_fling_decay(c: &mut Criterion) {
    c.bench_function("fling_decay_600_ticks", |b| {
        b.iter(|| {
            let mut camera = VelocityCamera::zoom_camera(0.0f32, 0.0, 800.0, 480.0, 0.99);
            camera.fling(4000.0, -2500.0);
            for _ in 0..600 {
                camera.on_update(1.0 / 60.0);
            }
            camera.center()
        });
    });
}

fn bench_controller_swipe(c: &mut Criterion) {
    c.bench_function("controller_swipe_and_fling", |b| {
        b.iter(|| {
            let mut controller = FlingController::for_screen(
                800.0f32, 480.0, FlingConfig::new(), ControllerConfig::new(),
            ).expect("valid screen");
            controller.on_touch(&TouchEvent::down(0.0, 0.0, 0));
            for i in 1..=30u64 {
                controller.on_touch(&TouchEvent::moved(i as f32 * 12.0, i as f32 * 4.0, i * 8));
            }
            controller.on_touch(&TouchEvent::up(360.0, 120.0, 248));
            for _ in 0..120 {
                controller.on_update(1.0 / 60.0);
            }
            controller.camera().center()
        });
    });
}

fn bench_simple_physics(c: &mut Criterion) {
    c.bench_function("simple_physics_300_steps", |b| {
        b.iter(|| {
            let mut demo = SimplePhysics::<f32>::new().expect("valid scene");
            demo.on_accelerometer_changed(&AccelerometerData::new(4.0, 8.0, 0.0));
            for _ in 0..300 {
                demo.on_update(1.0 / 60.0, &mut NoOpStepObserver).expect("connected shape exists");
            }
            demo.sprite_position()
        });
    });
}

criterion_group!(benches, bench_fling_decay, bench_controller_swipe, bench_simple_physics);
criterion_main!(benches);
