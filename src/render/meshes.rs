use crate::core::{Drawable, Geometry};
use wgpu::util::DeviceExt;

/// GPU copy of one drawable's static geometry.
pub(crate) enum GpuMesh {
    Triangles {
        vertices: wgpu::Buffer,
        indices: wgpu::Buffer,
        index_count: u32,
    },
    Lines {
        vertices: wgpu::Buffer,
        vertex_count: u32,
    },
    /// One instance per point; each expands to a 6-vertex billboard.
    Points {
        instances: wgpu::Buffer,
        count: u32,
    },
}

pub(crate) fn upload(device: &wgpu::Device, drawable: &Drawable) -> GpuMesh {
    let label = Some(drawable.label);
    match &drawable.geometry {
        Geometry::Triangles(mesh) => GpuMesh::Triangles {
            vertices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label,
                contents: bytemuck::cast_slice(&mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            }),
            indices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label,
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            }),
            index_count: mesh.indices.len() as u32,
        },
        Geometry::Lines(lines) => GpuMesh::Lines {
            vertices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label,
                contents: bytemuck::cast_slice(&lines.positions),
                usage: wgpu::BufferUsages::VERTEX,
            }),
            vertex_count: lines.positions.len() as u32,
        },
        Geometry::Points(points) => GpuMesh::Points {
            instances: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label,
                contents: bytemuck::cast_slice(&points.positions),
                usage: wgpu::BufferUsages::VERTEX,
            }),
            count: points.positions.len() as u32,
        },
    }
}
