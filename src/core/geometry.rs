//! Primitive geometry: boxes, planes, edge outlines and point clouds.
//!
//! Everything here is pure and allocation-only. Outlines are always derived
//! from the triangle mesh they belong to, so the rendered edges can never
//! drift away from the solid's silhouette.

use fnv::FnvHashMap;
use glam::Vec3;

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Axis-aligned extents of a box, centred on its local origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Dimensions {
    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth) * 0.5
    }
}

/// Indexed triangle list.
#[derive(Clone, Debug, Default)]
pub struct TriangleMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    fn push_quad(&mut self, corners: [Vec3; 4], normal: Vec3) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(corners.iter().map(|c| Vertex {
            position: c.to_array(),
            normal: normal.to_array(),
        }));
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Line segments stored as pairs of endpoints.
#[derive(Clone, Debug, Default)]
pub struct LineSet {
    pub positions: Vec<[f32; 3]>,
}

impl LineSet {
    pub fn segment_count(&self) -> usize {
        self.positions.len() / 2
    }

    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.positions
            .chunks_exact(2)
            .map(|p| (Vec3::from_array(p[0]), Vec3::from_array(p[1])))
    }
}

/// Unconnected points.
#[derive(Clone, Debug, Default)]
pub struct PointCloud {
    pub positions: Vec<[f32; 3]>,
}

/// Box with per-face normals: 6 faces, 24 vertices, 36 indices.
pub fn box_mesh(dim: Dimensions) -> TriangleMesh {
    let h = dim.half_extents();
    let mut mesh = TriangleMesh {
        vertices: Vec::with_capacity(24),
        indices: Vec::with_capacity(36),
    };
    let c = |x: f32, y: f32, z: f32| Vec3::new(x * h.x, y * h.y, z * h.z);
    // counter-clockwise when viewed from outside
    mesh.push_quad(
        [c(1., -1., 1.), c(1., -1., -1.), c(1., 1., -1.), c(1., 1., 1.)],
        Vec3::X,
    );
    mesh.push_quad(
        [c(-1., -1., -1.), c(-1., -1., 1.), c(-1., 1., 1.), c(-1., 1., -1.)],
        Vec3::NEG_X,
    );
    mesh.push_quad(
        [c(-1., 1., 1.), c(1., 1., 1.), c(1., 1., -1.), c(-1., 1., -1.)],
        Vec3::Y,
    );
    mesh.push_quad(
        [c(-1., -1., -1.), c(1., -1., -1.), c(1., -1., 1.), c(-1., -1., 1.)],
        Vec3::NEG_Y,
    );
    mesh.push_quad(
        [c(-1., -1., 1.), c(1., -1., 1.), c(1., 1., 1.), c(-1., 1., 1.)],
        Vec3::Z,
    );
    mesh.push_quad(
        [c(1., -1., -1.), c(-1., -1., -1.), c(-1., 1., -1.), c(1., 1., -1.)],
        Vec3::NEG_Z,
    );
    mesh
}

/// Horizontal square facing +Y, centred on the origin.
pub fn plane_mesh(size: f32) -> TriangleMesh {
    let s = size * 0.5;
    let mut mesh = TriangleMesh::default();
    mesh.push_quad(
        [
            Vec3::new(-s, 0.0, s),
            Vec3::new(s, 0.0, s),
            Vec3::new(s, 0.0, -s),
            Vec3::new(-s, 0.0, -s),
        ],
        Vec3::Y,
    );
    mesh
}

// Quantized position key so coincident vertices of different faces merge.
type PosKey = [i32; 3];

#[inline]
fn pos_key(p: [f32; 3]) -> PosKey {
    const PRECISION: f32 = 1e4;
    [
        (p[0] * PRECISION).round() as i32,
        (p[1] * PRECISION).round() as i32,
        (p[2] * PRECISION).round() as i32,
    ]
}

/// Extract the feature edges of a mesh.
///
/// An edge is kept when only one triangle uses it or when the two triangles
/// sharing it meet at more than `threshold_deg`. Coplanar diagonals of a
/// quad are therefore dropped and a box yields exactly its 12 edges.
pub fn edges(mesh: &TriangleMesh, threshold_deg: f32) -> LineSet {
    let cos_threshold = threshold_deg.to_radians().cos();
    // edge (sorted keys) -> (first endpoint, second endpoint, first face normal, matched)
    let mut open: FnvHashMap<(PosKey, PosKey), ([f32; 3], [f32; 3], Vec3, bool)> =
        FnvHashMap::default();
    let mut order: Vec<(PosKey, PosKey)> = Vec::new();
    let mut out = LineSet::default();

    for tri in mesh.indices.chunks_exact(3) {
        let p = [
            mesh.vertices[tri[0] as usize].position,
            mesh.vertices[tri[1] as usize].position,
            mesh.vertices[tri[2] as usize].position,
        ];
        let a = Vec3::from_array(p[0]);
        let b = Vec3::from_array(p[1]);
        let c = Vec3::from_array(p[2]);
        let normal = (b - a).cross(c - a).normalize_or_zero();
        for j in 0..3 {
            let (v0, v1) = (p[j], p[(j + 1) % 3]);
            let (k0, k1) = (pos_key(v0), pos_key(v1));
            if k0 == k1 {
                continue;
            }
            let key = if k0 < k1 { (k0, k1) } else { (k1, k0) };
            match open.get_mut(&key) {
                Some(entry) if !entry.3 => {
                    entry.3 = true;
                    if entry.2.dot(normal) <= cos_threshold {
                        out.positions.push(entry.0);
                        out.positions.push(entry.1);
                    }
                }
                Some(_) => {}
                None => {
                    open.insert(key, (v0, v1, normal, false));
                    order.push(key);
                }
            }
        }
    }
    // boundary edges: used by a single triangle
    for key in order {
        if let Some((v0, v1, _, false)) = open.get(&key) {
            out.positions.push(*v0);
            out.positions.push(*v1);
        }
    }
    out
}

/// Box edges under the default crease threshold.
pub fn box_outline(mesh: &TriangleMesh) -> LineSet {
    edges(mesh, super::constants::EDGE_THRESHOLD_DEG)
}
