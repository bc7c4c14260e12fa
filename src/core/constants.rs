use glam::Vec3;

// Shared scene/animation tuning constants. Host-testable, no web APIs.

// Segment body
pub const SEG_W: f32 = 1.4; // side segment width
pub const SEG_H: f32 = 7.0;
pub const SEG_D: f32 = 1.5;
pub const SEG_GAP: f32 = 0.1;

// Face panels on the center segment
pub const SCREEN_WIDTH_RATIO: f32 = 0.7;
pub const SCREEN_HEIGHT: f32 = 0.6;
pub const SCREEN_Y: f32 = 2.5;
pub const INDICATOR_WIDTH_RATIO: f32 = 0.4;
pub const INDICATOR_HEIGHT: f32 = 0.1;
pub const INDICATOR_Y: f32 = 2.2;
pub const PANEL_DEPTH: f32 = 0.05;
pub const PANEL_SURFACE_OFFSET: f32 = 0.01; // keeps panels off the shell face

// Materials (sRGB hex)
pub const SHELL_COLOR: u32 = 0x1a1a1a;
pub const SHELL_METALNESS: f32 = 0.9;
pub const SHELL_ROUGHNESS: f32 = 1.0;
pub const EDGE_COLOR: u32 = 0x444444;
pub const PANEL_COLOR: u32 = 0xffffff;
pub const PANEL_EMISSIVE: u32 = 0x00ffff;
pub const PANEL_EMISSIVE_INTENSITY: f32 = 5.0;

// Edge extraction: faces meeting at more than this angle produce an outline edge
pub const EDGE_THRESHOLD_DEG: f32 = 1.0;

// Camera
pub const CAMERA_FOV_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 2.0, 16.0);

// Lighting
pub const AMBIENT_COLOR: u32 = 0xffffff;
pub const AMBIENT_INTENSITY: f32 = 1.2; // 0.4 base + 0.8 visibility boost
pub const KEY_LIGHT_POS: Vec3 = Vec3::new(5.0, 10.0, 7.0);
pub const KEY_LIGHT_INTENSITY: f32 = 1.5;
pub const RIM_LIGHT_COLOR: u32 = 0x007aff;
pub const RIM_LIGHT_POS: Vec3 = Vec3::new(-10.0, 5.0, -5.0);
pub const RIM_LIGHT_INTENSITY: f32 = 2.5;
pub const SPOT_LIGHT_INTENSITY: f32 = 2.0;
pub const FILL_LIGHT_POS: Vec3 = Vec3::new(0.0, 2.0, 5.0);
pub const FILL_LIGHT_INTENSITY: f32 = 1.5;
pub const FILL_LIGHT_RANGE: f32 = 30.0;

// Atmosphere
pub const BACKGROUND_COLOR: u32 = 0x050508;
pub const FOG_NEAR: f32 = 5.0;
pub const FOG_FAR: f32 = 50.0;

// Ground
pub const FLOOR_SIZE: f32 = 200.0;
pub const FLOOR_Y: f32 = -10.2;
pub const FLOOR_COLOR: u32 = 0x111115;

// Starfield
pub const STAR_COUNT: usize = 1500;
pub const STAR_EXTENT: f32 = 100.0; // side of the cube the stars fill
pub const STAR_SIZE: f32 = 0.08;
pub const STAR_OPACITY: f32 = 0.8;
pub const STAR_SPIN_PER_FRAME: f32 = 0.0003; // radians, frame-count driven

// Mascot motion
pub const MASCOT_BASE_Y: f32 = -3.0;
pub const BOB_FREQUENCY: f32 = 0.5;
pub const BOB_AMPLITUDE: f32 = 0.1;
pub const SCROLL_FACTOR: f32 = 0.005; // world units per scrolled pixel
pub const SIDE_TILT_AMPLITUDE: f32 = 0.05;
pub const YAW_GAIN: f32 = 0.4;
pub const PITCH_GAIN: f32 = 0.1;
pub const ROTATION_SMOOTHING: f32 = 0.05; // new = old + (target - old) * k

// Reveal / typewriter
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const TYPEWRITER_STEP_MS: i32 = 50;
