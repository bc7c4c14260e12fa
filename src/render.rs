use crate::core::gpu_types::{align_to, GlobalUniforms, ObjectUniforms};
use crate::core::geometry::Vertex;
use crate::core::{Scene, SceneRenderer};
use web_sys as web;

mod helpers;
mod meshes;
mod targets;
use helpers::PipelineDesc;
use meshes::GpuMesh;
use targets::DepthTarget;

const LIT_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const POS_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

// ===================== WebGPU state =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    lit_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    points_pipeline: wgpu::RenderPipeline,

    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    objects_buffer: wgpu::Buffer,
    objects_bg: wgpu::BindGroup,
    object_stride: u64,
    object_staging: Vec<u8>,

    // Same order as `Scene::for_each_drawable`
    meshes: Vec<GpuMesh>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, scene: &Scene) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth = DepthTarget::new(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });

        // group(0): per-frame globals, group(1): per-object block at a dynamic offset
        let globals_size = std::mem::size_of::<GlobalUniforms>() as u64;
        let object_size = std::mem::size_of::<ObjectUniforms>() as u64;
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[helpers::uniform_layout_entry(false, globals_size)],
        });
        let objects_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("objects_bgl"),
            entries: &[helpers::uniform_layout_entry(true, object_size)],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&globals_bgl, &objects_bgl],
            push_constant_ranges: &[],
        });

        let lit_buffers = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &LIT_ATTRS,
        }];
        let line_buffers = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 3]>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &POS_ATTRS,
        }];
        let point_buffers = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 3]>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &POS_ATTRS,
        }];
        let lit_pipeline = helpers::make_scene_pipeline(
            &device,
            &pl,
            &shader,
            format,
            PipelineDesc {
                label: "lit_pipeline",
                vs_entry: "vs_lit",
                fs_entry: "fs_lit",
                buffers: &lit_buffers,
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                blend: None,
                depth_write: true,
            },
        );
        let line_pipeline = helpers::make_scene_pipeline(
            &device,
            &pl,
            &shader,
            format,
            PipelineDesc {
                label: "line_pipeline",
                vs_entry: "vs_line",
                fs_entry: "fs_flat",
                buffers: &line_buffers,
                topology: wgpu::PrimitiveTopology::LineList,
                cull_mode: None,
                blend: None,
                depth_write: true,
            },
        );
        let points_pipeline = helpers::make_scene_pipeline(
            &device,
            &pl,
            &shader,
            format,
            PipelineDesc {
                label: "points_pipeline",
                vs_entry: "vs_points",
                fs_entry: "fs_flat",
                buffers: &point_buffers,
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_write: false,
            },
        );

        let mut gpu_meshes = Vec::new();
        scene.for_each_drawable(|d, _| gpu_meshes.push(meshes::upload(&device, d)));

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals_uniforms"),
            size: globals_size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let object_stride = align_to(
            object_size,
            device.limits().min_uniform_buffer_offset_alignment as u64,
        );
        let objects_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("object_uniforms"),
            size: object_stride * gpu_meshes.len().max(1) as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let objects_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("objects_bg"),
            layout: &objects_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &objects_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(object_size),
                }),
            }],
        });
        log::info!(
            "[gpu] ready {}x{} format={:?} drawables={}",
            width,
            height,
            format,
            gpu_meshes.len()
        );

        let bg = scene.environment.clear_color;
        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            lit_pipeline,
            line_pipeline,
            points_pipeline,
            globals_buffer,
            globals_bg,
            object_staging: vec![0; (object_stride as usize) * gpu_meshes.len()],
            objects_buffer,
            objects_bg,
            object_stride,
            meshes: gpu_meshes,
            width,
            height,
            clear_color: wgpu::Color {
                r: bg.x as f64,
                g: bg.y as f64,
                b: bg.z as f64,
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    fn write_uniforms(&mut self, scene: &Scene) {
        let globals = GlobalUniforms::from_environment(&scene.environment);
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        let stride = self.object_stride as usize;
        let staging = &mut self.object_staging;
        let mut i = 0usize;
        scene.for_each_drawable(|d, world| {
            let u = ObjectUniforms::new(&d.material, world);
            let start = i * stride;
            if let Some(slot) = staging.get_mut(start..start + std::mem::size_of::<ObjectUniforms>())
            {
                slot.copy_from_slice(bytemuck::bytes_of(&u));
            }
            i += 1;
        });
        self.queue
            .write_buffer(&self.objects_buffer, 0, &self.object_staging);
    }

    pub fn draw(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        self.write_uniforms(scene);

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            for (i, mesh) in self.meshes.iter().enumerate() {
                let offset = (i as u64 * self.object_stride) as u32;
                rpass.set_bind_group(1, &self.objects_bg, &[offset]);
                match mesh {
                    GpuMesh::Triangles {
                        vertices,
                        indices,
                        index_count,
                    } => {
                        rpass.set_pipeline(&self.lit_pipeline);
                        rpass.set_vertex_buffer(0, vertices.slice(..));
                        rpass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint32);
                        rpass.draw_indexed(0..*index_count, 0, 0..1);
                    }
                    GpuMesh::Lines {
                        vertices,
                        vertex_count,
                    } => {
                        rpass.set_pipeline(&self.line_pipeline);
                        rpass.set_vertex_buffer(0, vertices.slice(..));
                        rpass.draw(0..*vertex_count, 0..1);
                    }
                    GpuMesh::Points { instances, count } => {
                        rpass.set_pipeline(&self.points_pipeline);
                        rpass.set_vertex_buffer(0, instances.slice(..));
                        rpass.draw(0..6, 0..*count);
                    }
                }
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl SceneRenderer for GpuState {
    fn render(&mut self, scene: &Scene) -> anyhow::Result<()> {
        self.draw(scene)
            .map_err(|e| anyhow::anyhow!("surface error: {:?}", e))
    }
}
