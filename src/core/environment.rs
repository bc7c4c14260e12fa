//! Static surroundings of the mascot: camera, lights, fog, floor and stars.
//!
//! Built once at startup. Only the camera aspect (on resize) and the star
//! rotation (per frame) change afterwards.

use super::constants::*;
use super::geometry::{plane_mesh, PointCloud};
use super::scene::{srgb_hex, Drawable, Geometry, Material};
use glam::{Mat4, Vec3};
use rand::Rng;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: CAMERA_EYE,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Match the viewport. Zero-sized viewports leave the aspect untouched.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }
}

#[derive(Clone, Copy, Debug)]
pub struct DirectionalLight {
    /// Light position; the light shines from here toward the origin.
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

impl DirectionalLight {
    #[inline]
    pub fn direction_to_light(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
    pub range: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct Fog {
    pub color: Vec3,
    pub near: f32,
    pub far: f32,
}

impl Fog {
    /// `[near, far, 0, 0]` as read by the shader's linear fog ramp.
    #[inline]
    pub fn shader_params(&self) -> [f32; 4] {
        [self.near, self.far, 0.0, 0.0]
    }
}

pub struct Starfield {
    pub drawable: Drawable,
}

impl Starfield {
    /// `count` points uniformly distributed in a cube of side `extent`
    /// centred on the origin.
    pub fn generate(count: usize, extent: f32, rng: &mut impl Rng) -> Self {
        let half = extent / 2.0;
        let positions = (0..count)
            .map(|_| {
                [
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                ]
            })
            .collect();
        Self {
            drawable: Drawable::new(
                "stars",
                Geometry::Points(PointCloud { positions }),
                Material::points(0xffffff, STAR_SIZE, STAR_OPACITY),
            ),
        }
    }

    pub fn len(&self) -> usize {
        match &self.drawable.geometry {
            Geometry::Points(p) => p.positions.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn rotation_y(&self) -> f32 {
        self.drawable.transform.rotation.y
    }

    #[inline]
    pub fn spin(&mut self, radians: f32) {
        self.drawable.transform.rotation.y += radians;
    }
}

pub struct Environment {
    pub camera: Camera,
    pub ambient: Vec3,
    pub directional: Vec<DirectionalLight>,
    pub point: PointLight,
    pub fog: Fog,
    pub clear_color: Vec3,
    pub floor: Drawable,
    pub stars: Starfield,
}

impl Environment {
    pub fn new(rng: &mut impl Rng) -> Self {
        let white = srgb_hex(0xffffff);
        let directional = vec![
            DirectionalLight {
                position: KEY_LIGHT_POS,
                color: white,
                intensity: KEY_LIGHT_INTENSITY,
            },
            DirectionalLight {
                position: RIM_LIGHT_POS,
                color: srgb_hex(RIM_LIGHT_COLOR),
                intensity: RIM_LIGHT_INTENSITY,
            },
            DirectionalLight {
                position: KEY_LIGHT_POS,
                color: white,
                intensity: SPOT_LIGHT_INTENSITY,
            },
        ];
        let mut floor = Drawable::new(
            "floor",
            Geometry::Triangles(plane_mesh(FLOOR_SIZE)),
            Material::standard(FLOOR_COLOR, 0.0, 1.0),
        );
        floor.transform.translation.y = FLOOR_Y;

        Self {
            camera: Camera::default(),
            ambient: srgb_hex(AMBIENT_COLOR) * AMBIENT_INTENSITY,
            directional,
            point: PointLight {
                position: FILL_LIGHT_POS,
                color: white,
                intensity: FILL_LIGHT_INTENSITY,
                range: FILL_LIGHT_RANGE,
            },
            fog: Fog {
                color: srgb_hex(BACKGROUND_COLOR),
                near: FOG_NEAR,
                far: FOG_FAR,
            },
            clear_color: srgb_hex(BACKGROUND_COLOR),
            floor,
            stars: Starfield::generate(STAR_COUNT, STAR_EXTENT, rng),
        }
    }
}
