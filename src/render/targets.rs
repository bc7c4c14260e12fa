use super::helpers;
use wgpu;

/// Depth attachment sized to the surface; recreated on resize.
pub(crate) struct DepthTarget {
    // held so the view's texture outlives it
    _tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
}

impl DepthTarget {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (tex, view) = helpers::create_depth_texture(device, "depth_tex", width, height);
        Self { _tex: tex, view }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self._tex, self.view) = helpers::create_depth_texture(device, "depth_tex", width, height);
    }
}
