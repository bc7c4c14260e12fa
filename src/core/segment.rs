use super::constants::*;
use super::geometry::{box_mesh, box_outline, Dimensions};
use super::scene::{Drawable, Geometry, Material, Transform};
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentRole {
    Left,
    Center,
    Right,
}

impl SegmentRole {
    pub fn name(self) -> &'static str {
        match self {
            SegmentRole::Left => "left",
            SegmentRole::Center => "center",
            SegmentRole::Right => "right",
        }
    }
}

/// One rigid slab of the mascot: shell, outline and optional face panels,
/// all expressed in the segment's local frame.
#[derive(Clone, Debug)]
pub struct Segment {
    pub role: SegmentRole,
    pub dimensions: Dimensions,
    pub shell: Drawable,
    pub outline: Drawable,
    pub panels: SmallVec<[Drawable; 2]>,
    pub transform: Transform,
}

impl Segment {
    pub fn has_face(&self) -> bool {
        !self.panels.is_empty()
    }

    pub fn drawables(&self) -> impl Iterator<Item = &Drawable> {
        [&self.shell, &self.outline]
            .into_iter()
            .chain(self.panels.iter())
    }
}

pub fn create_segment(role: SegmentRole, width: f32, x_offset: f32, has_face: bool) -> Segment {
    let dimensions = Dimensions::new(width, SEG_H, SEG_D);
    let mesh = box_mesh(dimensions);
    let lines = box_outline(&mesh);

    let shell = Drawable::new(
        "shell",
        Geometry::Triangles(mesh),
        Material::standard(SHELL_COLOR, SHELL_METALNESS, SHELL_ROUGHNESS),
    );
    let outline = Drawable::new("outline", Geometry::Lines(lines), Material::line(EDGE_COLOR));

    let mut panels = SmallVec::new();
    if has_face {
        let panel_material =
            Material::emissive(PANEL_COLOR, PANEL_EMISSIVE, PANEL_EMISSIVE_INTENSITY);
        let face_z = SEG_D / 2.0 + PANEL_SURFACE_OFFSET;
        panels.push(
            Drawable::new(
                "screen",
                Geometry::Triangles(box_mesh(Dimensions::new(
                    width * SCREEN_WIDTH_RATIO,
                    SCREEN_HEIGHT,
                    PANEL_DEPTH,
                ))),
                panel_material,
            )
            .at(Vec3::new(0.0, SCREEN_Y, face_z)),
        );
        panels.push(
            Drawable::new(
                "indicator",
                Geometry::Triangles(box_mesh(Dimensions::new(
                    width * INDICATOR_WIDTH_RATIO,
                    INDICATOR_HEIGHT,
                    PANEL_DEPTH,
                ))),
                panel_material,
            )
            .at(Vec3::new(0.0, INDICATOR_Y, face_z)),
        );
    }

    Segment {
        role,
        dimensions,
        shell,
        outline,
        panels,
        transform: Transform::from_translation(Vec3::new(x_offset, 0.0, 0.0)),
    }
}
