use flingy::{Camera, DecayMode, FlingConfig, Vec2, VelocityCamera, ZoomCamera};

fn camera_at(x: f32, y: f32, config: FlingConfig<f32>) -> VelocityCamera<ZoomCamera<f32>> {
    let mut camera = VelocityCamera::with_config(ZoomCamera::new(0.0, 0.0, 800.0, 480.0), config);
    camera.set_center(x, y);
    camera
}

#[test]
fn set_center_always_cancels_fling() {
    for &(vx, vy) in &[(0.0f32, 0.0f32), (50.0, 0.0), (-3.0, 7.5), (1e6, -1e6)] {
        for &active in &[false, true] {
            let mut camera = camera_at(0.0, 0.0, FlingConfig::new());
            camera.fling(vx, vy);
            if !active {
                camera.stop_fling();
            }
            camera.set_center(10.0, 20.0);
            assert!(!camera.is_flinging(), "fling survived set_center for ({}, {})", vx, vy);
            assert_eq!(camera.center(), Vec2::new(10.0, 20.0));
        }
    }
}

#[test]
fn fling_overwrites_velocity() {
    let mut camera = camera_at(0.0, 0.0, FlingConfig::new());
    camera.fling(100.0, 100.0);
    camera.fling(-2.5, 0.125);
    assert!(camera.is_flinging());
    assert_eq!(camera.velocity(), Vec2::new(-2.5, 0.125));
}

#[test]
fn velocity_decays_geometrically() {
    let d = 0.95f32;
    let mut camera = camera_at(0.0, 0.0, FlingConfig::new().with_deceleration(d));
    camera.fling(300.0, -120.0);

    let mut expected = Vec2::new(300.0f32, -120.0);
    for _ in 0..20 {
        camera.on_update(1.0 / 60.0);
        expected = Vec2::new(expected.x * d, expected.y * d);
        let v = camera.velocity();
        assert!((v.x - expected.x).abs() < 1e-3, "vx = {}, expected {}", v.x, expected.x);
        assert!((v.y - expected.y).abs() < 1e-3, "vy = {}, expected {}", v.y, expected.y);
    }
}

#[test]
fn movement_uses_decayed_velocity() {
    let mut camera = camera_at(100.0, 100.0, FlingConfig::new().with_deceleration(0.99));
    camera.fling(50.0, 0.0);
    camera.on_update(1.0);

    assert!((camera.velocity().x - 49.5).abs() < 1e-4);
    let center = camera.center();
    assert!((center.x - 50.5).abs() < 1e-4, "center.x = {}", center.x);
    assert!((center.y - 100.0).abs() < 1e-6);
}

#[test]
fn fling_stops_on_first_tick_below_threshold() {
    let config = FlingConfig::new().with_deceleration(0.9).with_min_velocity(1.0, 1.0);
    let mut camera = camera_at(0.0, 0.0, config);
    camera.fling(10.0, 0.0);

    let dt = 1.0 / 60.0;
    let mut ticks = 0;
    let mut travelled = 0.0f32;
    let mut v = 10.0f32;
    while camera.is_flinging() {
        camera.on_update(dt);
        v *= 0.9;
        travelled += v * dt;
        ticks += 1;
        assert!(ticks <= 100, "fling never stopped");
    }

    assert_eq!(ticks, 22);
    assert_eq!(camera.velocity(), Vec2::zero());
    // The stopping tick still moved the camera.
    assert!((camera.center().x + travelled).abs() < 1e-3, "center.x = {}", camera.center().x);
}

#[test]
fn stopping_tick_still_moves() {
    let config = FlingConfig::new().with_deceleration(0.5).with_min_velocity(10.0, 10.0);
    let mut camera = camera_at(0.0, 0.0, config);
    camera.fling(16.0, 0.0);
    camera.on_update(1.0);

    assert!(!camera.is_flinging());
    assert!((camera.center().x + 8.0).abs() < 1e-6);
}

#[test]
fn threshold_must_hold_on_both_axes() {
    let config = FlingConfig::new().with_deceleration(0.5).with_min_velocity(1.0, 1.0);
    let mut camera = camera_at(0.0, 0.0, config);
    camera.fling(0.5, 100.0);
    camera.on_update(1.0 / 60.0);
    assert!(camera.is_flinging());
}

#[test]
fn stop_fling_freezes_camera() {
    let mut camera = camera_at(200.0, 200.0, FlingConfig::new());
    camera.fling(500.0, -500.0);
    camera.stop_fling();
    camera.on_update(1.0 / 60.0);
    camera.on_update(1.0);
    assert_eq!(camera.center(), Vec2::new(200.0, 200.0));
}

#[test]
fn per_tick_decay_ignores_frame_length() {
    let mut fast = camera_at(0.0, 0.0, FlingConfig::new().with_deceleration(0.9));
    let mut slow = camera_at(0.0, 0.0, FlingConfig::new().with_deceleration(0.9));
    fast.fling(100.0, 0.0);
    slow.fling(100.0, 0.0);
    fast.on_update(1.0 / 120.0);
    slow.on_update(1.0 / 30.0);
    assert_eq!(fast.velocity(), slow.velocity());
}

#[test]
fn continuous_decay_matches_across_frame_rates() {
    let config = FlingConfig::new()
        .with_deceleration(0.5)
        .with_decay_mode(DecayMode::Continuous);
    let mut fine = camera_at(0.0, 0.0, config);
    let mut coarse = camera_at(0.0, 0.0, config);
    fine.fling(100.0, 0.0);
    coarse.fling(100.0, 0.0);
    for _ in 0..4 {
        fine.on_update(0.25);
    }
    coarse.on_update(1.0);
    assert!((fine.velocity().x - 50.0).abs() < 1e-3);
    assert!((coarse.velocity().x - 50.0).abs() < 1e-3);
}

#[test]
fn zoom_passes_through_to_inner_camera() {
    let mut camera = camera_at(0.0, 0.0, FlingConfig::new());
    camera.set_zoom_factor(2.5);
    assert_eq!(camera.zoom_factor(), 2.5);
    assert_eq!(camera.inner().zoom_factor(), 2.5);
    assert!((camera.inner().width() - 320.0).abs() < 1e-4);
}
