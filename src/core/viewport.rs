/// Size of the render surface for a given window.
///
/// The canvas always covers the window: its CSS size is the window's inner
/// size and its backing store is that times the capped pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    /// CSS pixels. Drives the camera aspect.
    pub css_width: u32,
    pub css_height: u32,
    /// Device pixels of the backing store, never zero.
    pub backing_width: u32,
    pub backing_height: u32,
}

pub fn surface_size(
    inner_width: f32,
    inner_height: f32,
    device_pixel_ratio: f64,
    max_pixel_ratio: f64,
) -> SurfaceSize {
    // NaN or non-positive ratios fall back to 1
    let ratio = if device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(max_pixel_ratio)
    } else {
        1.0
    };
    let css_width = inner_width.max(0.0).round() as u32;
    let css_height = inner_height.max(0.0).round() as u32;
    SurfaceSize {
        css_width,
        css_height,
        backing_width: ((css_width as f64 * ratio).round() as u32).max(1),
        backing_height: ((css_height as f64 * ratio).round() as u32).max(1),
    }
}
