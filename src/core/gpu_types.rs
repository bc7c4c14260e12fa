//! Uniform layouts shared with `shaders/scene.wgsl`, plus packing from scene
//! types. Kept free of wgpu so the packing can be checked on the host.

use super::environment::Environment;
use super::scene::Material;
use glam::{Mat4, Vec3};

pub const MAX_DIRECTIONAL_LIGHTS: usize = 4;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    pub ambient: [f32; 4],
    pub fog_color: [f32; 4],
    pub fog_params: [f32; 4],
    pub dir_dirs: [[f32; 4]; MAX_DIRECTIONAL_LIGHTS],
    pub dir_colors: [[f32; 4]; MAX_DIRECTIONAL_LIGHTS],
    pub point_pos: [f32; 4],
    pub point_color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniforms {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub emissive: [f32; 4],
    pub params: [f32; 4],
}

#[inline]
fn rgb_w(v: Vec3, w: f32) -> [f32; 4] {
    [v.x, v.y, v.z, w]
}

impl GlobalUniforms {
    /// Lights beyond `MAX_DIRECTIONAL_LIGHTS` are dropped.
    pub fn from_environment(env: &Environment) -> Self {
        let cam = &env.camera;
        let view = cam.view_matrix();
        let proj = cam.projection_matrix();
        let mut u = Self {
            view_proj: (proj * view).to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            camera_pos: rgb_w(cam.eye, 1.0),
            ambient: rgb_w(env.ambient, 1.0),
            fog_color: rgb_w(env.fog.color, 1.0),
            fog_params: env.fog.shader_params(),
            dir_dirs: [[0.0; 4]; MAX_DIRECTIONAL_LIGHTS],
            dir_colors: [[0.0; 4]; MAX_DIRECTIONAL_LIGHTS],
            point_pos: rgb_w(env.point.position, env.point.range),
            point_color: rgb_w(env.point.color * env.point.intensity, 1.0),
        };
        for (i, light) in env
            .directional
            .iter()
            .take(MAX_DIRECTIONAL_LIGHTS)
            .enumerate()
        {
            u.dir_dirs[i] = rgb_w(light.direction_to_light(), 0.0);
            u.dir_colors[i] = rgb_w(light.color * light.intensity, 1.0);
        }
        u
    }
}

impl ObjectUniforms {
    pub fn new(material: &Material, world: Mat4) -> Self {
        Self {
            model: world.to_cols_array_2d(),
            color: rgb_w(material.color, material.opacity),
            emissive: rgb_w(material.emissive * material.emissive_intensity, 0.0),
            params: [
                material.metalness,
                material.roughness,
                material.point_size,
                0.0,
            ],
        }
    }
}

/// Round `size` up to the next multiple of `alignment` (a power of two).
#[inline]
pub fn align_to(size: u64, alignment: u64) -> u64 {
    (size + alignment - 1) & !(alignment - 1)
}
