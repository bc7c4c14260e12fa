//! Scene graph primitives: transforms, materials and drawables, plus the
//! `Scene` root that owns the mascot and its environment.

use super::environment::Environment;
use super::geometry::{LineSet, PointCloud, TriangleMesh};
use super::mascot::Mascot;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Convert an sRGB hex colour (0xRRGGBB) to linear RGB.
pub fn srgb_hex(hex: u32) -> Vec3 {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    Vec3::new(channel(16), channel(8), channel(0))
}

/// Translation + XYZ euler rotation + scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    pub fn matrix(&self) -> Mat4 {
        let q = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, q, self.translation)
    }
}

#[derive(Clone, Debug)]
pub enum Geometry {
    Triangles(TriangleMesh),
    Lines(LineSet),
    Points(PointCloud),
}

/// Surface description shared by all primitive kinds. Colours are linear.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub emissive: Vec3,
    pub emissive_intensity: f32,
    pub metalness: f32,
    pub roughness: f32,
    pub opacity: f32,
    pub point_size: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            emissive: Vec3::ZERO,
            emissive_intensity: 1.0,
            metalness: 0.0,
            roughness: 1.0,
            opacity: 1.0,
            point_size: 1.0,
        }
    }
}

impl Material {
    pub fn standard(color_hex: u32, metalness: f32, roughness: f32) -> Self {
        Self {
            color: srgb_hex(color_hex),
            metalness,
            roughness,
            ..Self::default()
        }
    }

    pub fn emissive(color_hex: u32, emissive_hex: u32, intensity: f32) -> Self {
        Self {
            color: srgb_hex(color_hex),
            emissive: srgb_hex(emissive_hex),
            emissive_intensity: intensity,
            ..Self::default()
        }
    }

    /// Unlit line colour.
    pub fn line(color_hex: u32) -> Self {
        Self {
            color: srgb_hex(color_hex),
            ..Self::default()
        }
    }

    pub fn points(color_hex: u32, size: f32, opacity: f32) -> Self {
        Self {
            color: srgb_hex(color_hex),
            point_size: size,
            opacity,
            ..Self::default()
        }
    }
}

/// A leaf of the scene graph: static geometry with a material and a local
/// transform relative to its parent.
#[derive(Clone, Debug)]
pub struct Drawable {
    pub label: &'static str,
    pub geometry: Geometry,
    pub material: Material,
    pub transform: Transform,
}

impl Drawable {
    pub fn new(label: &'static str, geometry: Geometry, material: Material) -> Self {
        Self {
            label,
            geometry,
            material,
            transform: Transform::default(),
        }
    }

    pub fn at(mut self, translation: Vec3) -> Self {
        self.transform.translation = translation;
        self
    }
}

/// Root of everything that gets rendered.
pub struct Scene {
    pub mascot: Mascot,
    pub environment: Environment,
}

impl Scene {
    pub fn new(mascot: Mascot, environment: Environment) -> Self {
        Self {
            mascot,
            environment,
        }
    }

    /// Visit every drawable with its world matrix.
    ///
    /// The order is fixed for the lifetime of the scene (floor, mascot
    /// segments left to right, stars last) so renderers can pair GPU
    /// resources with drawables by index.
    pub fn for_each_drawable(&self, mut f: impl FnMut(&Drawable, Mat4)) {
        let floor = &self.environment.floor;
        f(floor, floor.transform.matrix());

        let group = self.mascot.transform.matrix();
        for segment in &self.mascot.segments {
            let seg_world = group * segment.transform.matrix();
            for d in segment.drawables() {
                f(d, seg_world * d.transform.matrix());
            }
        }

        let stars = &self.environment.stars.drawable;
        f(stars, stars.transform.matrix());
    }

    pub fn drawable_count(&self) -> usize {
        let mut n = 0;
        self.for_each_drawable(|_, _| n += 1);
        n
    }
}
