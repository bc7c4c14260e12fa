//! Per-frame mascot animation.
//!
//! Motion is a function of absolute time and the current scroll offset, so a
//! dropped frame never accumulates drift. The only state carried between
//! frames is the smoothed yaw/pitch that eases toward the pointer.

use super::constants::*;
use super::scene::Scene;
use glam::Vec2;

/// External inputs for one frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameSample {
    /// Seconds since the clock origin.
    pub time_sec: f64,
    /// Vertical page scroll in CSS pixels.
    pub scroll_y: f32,
    /// Normalized pointer in [-1, 1]².
    pub pointer: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    pub base_y: f32,
    pub bob_frequency: f32,
    pub bob_amplitude: f32,
    pub scroll_factor: f32,
    pub tilt_amplitude: f32,
    pub yaw_gain: f32,
    pub pitch_gain: f32,
    pub smoothing: f32,
    pub star_spin: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            base_y: MASCOT_BASE_Y,
            bob_frequency: BOB_FREQUENCY,
            bob_amplitude: BOB_AMPLITUDE,
            scroll_factor: SCROLL_FACTOR,
            tilt_amplitude: SIDE_TILT_AMPLITUDE,
            yaw_gain: YAW_GAIN,
            pitch_gain: PITCH_GAIN,
            smoothing: ROTATION_SMOOTHING,
            star_spin: STAR_SPIN_PER_FRAME,
        }
    }
}

/// Anything that can put a scene on screen.
pub trait SceneRenderer {
    fn render(&mut self, scene: &Scene) -> anyhow::Result<()>;
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

pub struct AnimationDriver {
    pub params: MotionParams,
    yaw: f32,
    pitch: f32,
    frames: u64,
}

impl AnimationDriver {
    pub fn new(params: MotionParams) -> Self {
        Self {
            params,
            yaw: 0.0,
            pitch: 0.0,
            frames: 0,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Group height for a given time and scroll offset.
    pub fn group_y(&self, time_sec: f64, scroll_y: f32) -> f32 {
        let p = &self.params;
        let bob = (time_sec * p.bob_frequency as f64).sin() as f32 * p.bob_amplitude;
        p.base_y + bob + scroll_y * p.scroll_factor
    }

    /// Apply one frame of motion to the scene without rendering it.
    pub fn update(&mut self, scene: &mut Scene, sample: &FrameSample) {
        let p = self.params;
        let t = sample.time_sec;
        let mascot = &mut scene.mascot;

        mascot.transform.translation.y = self.group_y(t, sample.scroll_y);

        // sides rock a quarter period apart; the center never moves
        mascot.left_mut().transform.rotation.x = t.sin() as f32 * p.tilt_amplitude;
        mascot.right_mut().transform.rotation.x = t.cos() as f32 * p.tilt_amplitude;

        self.yaw = lerp(self.yaw, sample.pointer.x * p.yaw_gain, p.smoothing);
        self.pitch = lerp(self.pitch, sample.pointer.y * p.pitch_gain, p.smoothing);
        mascot.transform.rotation.y = self.yaw;
        mascot.transform.rotation.x = self.pitch;

        scene.environment.stars.spin(p.star_spin);
        self.frames += 1;
    }

    /// Update the scene and issue exactly one render.
    pub fn tick(
        &mut self,
        scene: &mut Scene,
        sample: &FrameSample,
        renderer: &mut dyn SceneRenderer,
    ) -> anyhow::Result<()> {
        self.update(scene, sample);
        renderer.render(scene)
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(MotionParams::default())
    }
}
