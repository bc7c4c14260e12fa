use super::constants::{MASCOT_BASE_Y, SEG_GAP, SEG_W};
use super::scene::Transform;
use super::segment::{create_segment, Segment, SegmentRole};
use glam::Vec3;

/// Horizontal layout of the three slabs.
///
/// The center slab is as wide as two side slabs plus one gap, and each side
/// slab sits exactly `gap` away from it, so resizing never makes them
/// overlap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MascotLayout {
    pub side_width: f32,
    pub gap: f32,
}

impl Default for MascotLayout {
    fn default() -> Self {
        Self {
            side_width: SEG_W,
            gap: SEG_GAP,
        }
    }
}

impl MascotLayout {
    #[inline]
    pub fn center_width(&self) -> f32 {
        self.side_width * 2.0 + self.gap
    }

    /// Distance from the group origin to each side slab's center.
    #[inline]
    pub fn side_offset(&self) -> f32 {
        self.center_width() / 2.0 + self.gap + self.side_width / 2.0
    }
}

pub struct Mascot {
    pub layout: MascotLayout,
    /// Always ordered left, center, right.
    pub segments: [Segment; 3],
    pub transform: Transform,
}

impl Mascot {
    pub fn compose(layout: MascotLayout) -> Self {
        let offset = layout.side_offset();
        let segments = [
            create_segment(SegmentRole::Left, layout.side_width, -offset, false),
            create_segment(SegmentRole::Center, layout.center_width(), 0.0, true),
            create_segment(SegmentRole::Right, layout.side_width, offset, false),
        ];
        Self {
            layout,
            segments,
            transform: Transform::from_translation(Vec3::new(0.0, MASCOT_BASE_Y, 0.0)),
        }
    }

    pub fn left(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn center(&self) -> &Segment {
        &self.segments[1]
    }

    pub fn right(&self) -> &Segment {
        &self.segments[2]
    }

    pub fn left_mut(&mut self) -> &mut Segment {
        &mut self.segments[0]
    }

    pub fn right_mut(&mut self) -> &mut Segment {
        &mut self.segments[2]
    }
}
