use glam::Vec2;

/// Latest pointer position, normalized to [-1, 1] on both axes with +y
/// pointing down the page. Written only by the pointer-move handler.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct InputState {
    pub pointer: Vec2,
}

impl InputState {
    pub fn set_pointer_px(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.pointer = normalize_pointer(x, y, width, height);
    }
}

/// Map a viewport pixel position to [-1, 1]². A degenerate viewport maps to
/// the center.
#[inline]
pub fn normalize_pointer(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        ((x / width - 0.5) * 2.0).clamp(-1.0, 1.0),
        ((y / height - 0.5) * 2.0).clamp(-1.0, 1.0),
    )
}
