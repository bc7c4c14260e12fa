// Host-side tests for per-frame mascot motion.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::FRAC_PI_2;
use tars_web::core::constants::*;
use tars_web::core::*;

fn scene() -> Scene {
    let mut rng = StdRng::seed_from_u64(42);
    Scene::new(
        Mascot::compose(MascotLayout::default()),
        Environment::new(&mut rng),
    )
}

fn sample(time_sec: f64, scroll_y: f32, pointer: Vec2) -> FrameSample {
    FrameSample {
        time_sec,
        scroll_y,
        pointer,
    }
}

#[derive(Default)]
struct CountingRenderer {
    renders: usize,
}

impl SceneRenderer for CountingRenderer {
    fn render(&mut self, _scene: &Scene) -> anyhow::Result<()> {
        self.renders += 1;
        Ok(())
    }
}

struct FailingRenderer;

impl SceneRenderer for FailingRenderer {
    fn render(&mut self, _scene: &Scene) -> anyhow::Result<()> {
        anyhow::bail!("surface lost")
    }
}

#[test]
fn lerp_moves_a_fixed_fraction() {
    assert_eq!(lerp(0.0, 1.0, 0.05), 0.05);
    assert_eq!(lerp(2.0, 2.0, 0.5), 2.0);
    assert_eq!(lerp(1.0, -1.0, 1.0), -1.0);
}

#[test]
fn yaw_converges_toward_pointer_target() {
    let mut scene = scene();
    let mut driver = AnimationDriver::default();
    let s = sample(0.0, 0.0, Vec2::new(1.0, -1.0));
    for _ in 0..100 {
        driver.update(&mut scene, &s);
    }
    let expected = 0.4 * (1.0 - 0.95f32.powi(100));
    assert!((driver.yaw() - expected).abs() < 1e-4, "yaw {}", driver.yaw());
    assert!((driver.yaw() - 0.4).abs() / 0.4 < 0.01);
    assert!((driver.pitch() + 0.1).abs() / 0.1 < 0.01, "pitch {}", driver.pitch());
    assert_eq!(scene.mascot.transform.rotation.y, driver.yaw());
}

#[test]
fn rotation_approach_is_monotonic_without_overshoot() {
    let mut scene = scene();
    let mut driver = AnimationDriver::default();
    let s = sample(0.0, 0.0, Vec2::new(-1.0, 1.0));
    let (mut prev_yaw, mut prev_pitch) = (0.0f32, 0.0f32);
    for _ in 0..500 {
        driver.update(&mut scene, &s);
        assert!(driver.yaw() <= prev_yaw);
        assert!(driver.yaw() >= -YAW_GAIN);
        assert!(driver.pitch() >= prev_pitch);
        assert!(driver.pitch() <= PITCH_GAIN);
        prev_yaw = driver.yaw();
        prev_pitch = driver.pitch();
    }
    assert_eq!(scene.mascot.transform.rotation.x, driver.pitch());
}

#[test]
fn first_frame_moves_five_percent() {
    let mut scene = scene();
    let mut driver = AnimationDriver::default();
    driver.update(&mut scene, &sample(0.0, 0.0, Vec2::new(1.0, -1.0)));
    assert!((driver.yaw() - 0.02).abs() < 1e-7);
    assert!((driver.pitch() + 0.005).abs() < 1e-7);
}

#[test]
fn group_height_follows_scroll_without_smoothing() {
    let mut scene = scene();
    let mut driver = AnimationDriver::default();
    driver.update(&mut scene, &sample(0.0, 200.0, Vec2::ZERO));
    assert!((scene.mascot.transform.translation.y - (-2.0)).abs() < 1e-6);

    // jumping the scroll back is reflected on the very next frame
    driver.update(&mut scene, &sample(0.0, 0.0, Vec2::ZERO));
    assert!((scene.mascot.transform.translation.y - MASCOT_BASE_Y).abs() < 1e-6);
}

#[test]
fn group_height_bobs_with_time() {
    let driver = AnimationDriver::default();
    // sin(0.5 t) peaks at t = pi
    let peak = driver.group_y(std::f64::consts::PI, 0.0);
    assert!((peak - (MASCOT_BASE_Y + BOB_AMPLITUDE)).abs() < 1e-6);
    for i in 0..200 {
        let y = driver.group_y(i as f64 * 0.37, 0.0);
        assert!((y - MASCOT_BASE_Y).abs() <= BOB_AMPLITUDE + 1e-6);
    }
}

#[test]
fn sides_tilt_out_of_phase_and_center_stays_still() {
    let mut scene = scene();
    let mut driver = AnimationDriver::default();

    driver.update(&mut scene, &sample(0.0, 0.0, Vec2::ZERO));
    assert!(scene.mascot.left().transform.rotation.x.abs() < 1e-7);
    assert!((scene.mascot.right().transform.rotation.x - 0.05).abs() < 1e-7);

    driver.update(&mut scene, &sample(FRAC_PI_2, 0.0, Vec2::ZERO));
    assert!((scene.mascot.left().transform.rotation.x - 0.05).abs() < 1e-7);
    assert!(scene.mascot.right().transform.rotation.x.abs() < 1e-7);

    for i in 0..50 {
        driver.update(&mut scene, &sample(i as f64 * 0.1, 10.0, Vec2::ONE));
        assert_eq!(scene.mascot.center().transform.rotation, glam::Vec3::ZERO);
        for s in &scene.mascot.segments {
            assert!(s.transform.rotation.x.abs() <= SIDE_TILT_AMPLITUDE + 1e-7);
        }
    }
}

#[test]
fn stars_spin_a_constant_amount_per_frame() {
    let mut scene = scene();
    let mut driver = AnimationDriver::default();
    let start = scene.environment.stars.rotation_y();
    // irregular timestamps do not change the per-frame increment
    for t in [0.0, 0.016, 0.5, 0.51, 3.0] {
        driver.update(&mut scene, &sample(t, 0.0, Vec2::ZERO));
    }
    let spun = scene.environment.stars.rotation_y() - start;
    assert!((spun - 5.0 * STAR_SPIN_PER_FRAME).abs() < 1e-7);
    assert_eq!(driver.frames(), 5);
}

#[test]
fn each_tick_renders_exactly_once() {
    let mut scene = scene();
    let mut driver = AnimationDriver::default();
    let mut renderer = CountingRenderer::default();
    for i in 0..30 {
        driver
            .tick(&mut scene, &sample(i as f64 / 60.0, 0.0, Vec2::ZERO), &mut renderer)
            .expect("render");
    }
    assert_eq!(renderer.renders, 30);
    assert_eq!(driver.frames(), 30);
}

#[test]
fn render_errors_propagate_after_update() {
    let mut scene = scene();
    let mut driver = AnimationDriver::default();
    let result = driver.tick(&mut scene, &sample(0.0, 0.0, Vec2::X), &mut FailingRenderer);
    assert!(result.is_err());
    // the scene was still advanced
    assert_eq!(driver.frames(), 1);
    assert!(driver.yaw() > 0.0);
}

#[test]
fn custom_params_are_respected() {
    let mut scene = scene();
    let mut driver = AnimationDriver::new(MotionParams {
        smoothing: 1.0,
        ..MotionParams::default()
    });
    driver.update(&mut scene, &sample(0.0, 0.0, Vec2::new(0.5, 0.5)));
    assert!((driver.yaw() - 0.2).abs() < 1e-7);
    assert!((driver.pitch() - 0.05).abs() < 1e-7);
}
