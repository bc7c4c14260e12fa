// Host-side tests for primitive geometry and edge extraction.

use glam::Vec3;
use tars_web::core::geometry::*;

fn key(v: Vec3) -> [i64; 3] {
    [
        (v.x * 1000.0).round() as i64,
        (v.y * 1000.0).round() as i64,
        (v.z * 1000.0).round() as i64,
    ]
}

fn edge_key(a: Vec3, b: Vec3) -> ([i64; 3], [i64; 3]) {
    let (ka, kb) = (key(a), key(b));
    if ka < kb {
        (ka, kb)
    } else {
        (kb, ka)
    }
}

/// The 12 edges of an axis-aligned box, built independently of the mesh.
fn expected_box_edges(dim: Dimensions) -> Vec<([i64; 3], [i64; 3])> {
    let h = dim.half_extents();
    let mut corners = Vec::new();
    for sx in [-1.0, 1.0] {
        for sy in [-1.0, 1.0] {
            for sz in [-1.0, 1.0] {
                corners.push(Vec3::new(sx * h.x, sy * h.y, sz * h.z));
            }
        }
    }
    let mut edges = Vec::new();
    for i in 0..corners.len() {
        for j in (i + 1)..corners.len() {
            let d = corners[i] - corners[j];
            let differing = [d.x, d.y, d.z].iter().filter(|c| c.abs() > 1e-6).count();
            if differing == 1 {
                edges.push(edge_key(corners[i], corners[j]));
            }
        }
    }
    edges.sort();
    edges
}

#[test]
fn box_mesh_has_six_quads() {
    let mesh = box_mesh(Dimensions::new(1.4, 7.0, 1.5));
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.indices.len(), 36);
    assert_eq!(mesh.triangle_count(), 12);
}

#[test]
fn box_mesh_spans_requested_extents() {
    let dim = Dimensions::new(2.9, 7.0, 1.5);
    let mesh = box_mesh(dim);
    let mut min = Vec3::splat(f32::MAX);
    let mut max = Vec3::splat(f32::MIN);
    for v in &mesh.vertices {
        let p = Vec3::from_array(v.position);
        min = min.min(p);
        max = max.max(p);
    }
    assert!((max - min - Vec3::new(2.9, 7.0, 1.5)).abs().max_element() < 1e-5);
    assert!((max + min).abs().max_element() < 1e-5, "box should be centred");
}

#[test]
fn box_faces_wind_outward() {
    let mesh = box_mesh(Dimensions::new(1.0, 2.0, 3.0));
    for tri in mesh.indices.chunks_exact(3) {
        let a = Vec3::from_array(mesh.vertices[tri[0] as usize].position);
        let b = Vec3::from_array(mesh.vertices[tri[1] as usize].position);
        let c = Vec3::from_array(mesh.vertices[tri[2] as usize].position);
        let n = Vec3::from_array(mesh.vertices[tri[0] as usize].normal);
        let geometric = (b - a).cross(c - a).normalize();
        assert!(geometric.dot(n) > 0.99, "triangle {tri:?} winds against its normal");
        // outward: normal points away from the centre
        assert!(((a + b + c) / 3.0).dot(n) > 0.0);
    }
}

#[test]
fn outline_matches_box_edges_exactly() {
    for dim in [
        Dimensions::new(1.4, 7.0, 1.5),
        Dimensions::new(2.9, 7.0, 1.5),
        Dimensions::new(2.03, 0.6, 0.05),
    ] {
        let outline = box_outline(&box_mesh(dim));
        assert_eq!(outline.segment_count(), 12);
        let mut got: Vec<_> = outline.segments().map(|(a, b)| edge_key(a, b)).collect();
        got.sort();
        assert_eq!(got, expected_box_edges(dim));
    }
}

#[test]
fn outline_vertices_are_shell_vertices() {
    let mesh = box_mesh(Dimensions::new(1.4, 7.0, 1.5));
    let shell: Vec<_> = mesh
        .vertices
        .iter()
        .map(|v| key(Vec3::from_array(v.position)))
        .collect();
    for p in &box_outline(&mesh).positions {
        assert!(shell.contains(&key(Vec3::from_array(*p))));
    }
}

#[test]
fn plane_outline_drops_the_diagonal() {
    let outline = edges(&plane_mesh(200.0), 1.0);
    assert_eq!(outline.segment_count(), 4);
    for (a, b) in outline.segments() {
        let d = (b - a).abs();
        // axis-aligned sides only
        assert!(d.x < 1e-4 || d.z < 1e-4);
    }
}

#[test]
fn large_threshold_hides_right_angles() {
    let outline = edges(&box_mesh(Dimensions::new(1.0, 1.0, 1.0)), 95.0);
    assert_eq!(outline.segment_count(), 0);
}

#[test]
fn plane_faces_up() {
    let mesh = plane_mesh(10.0);
    assert_eq!(mesh.triangle_count(), 2);
    assert!(mesh.vertices.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
    assert!(mesh.vertices.iter().all(|v| v.position[1] == 0.0));
}
