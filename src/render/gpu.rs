use std::sync::Arc;

use anyhow::{anyhow, Result};
use glam::Mat4;
use log::{debug, info};
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::error::RenderError;
use crate::geometry::{axes_lines, box_mesh, plane_mesh, MeshData};
use crate::math::Color;
use crate::scene::{Geometry, Mesh, Scene};
use crate::traits::{RenderFrame, SceneRenderer};
use crate::types::{
    GlobalsUniform, LineVertex, MeshVertex, ObjectUniform, MAX_POINT_LIGHTS,
};
use crate::ui::ControlPanel;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

const MESH_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const LINE_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const SNOW_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

/// Uniform buffer and bind group for one drawable
struct ObjectBinding {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    object: ObjectBinding,
}

struct GpuLines {
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    object: ObjectBinding,
}

struct GpuSnow {
    instance_buffer: wgpu::Buffer,
    capacity: u32,
    object: ObjectBinding,
}

/// egui state plus the panel it draws
struct Overlay {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
    panel: ControlPanel,
}

/// Forward renderer: lit meshes, axes lines, additive snow sprites, egui on top
pub struct GpuRenderer {
    window: Arc<Window>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    mesh_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    snow_pipeline: wgpu::RenderPipeline,
    tower: GpuMesh,
    ground: GpuMesh,
    axes: Option<GpuLines>,
    snow: GpuSnow,
    overlay: Option<Overlay>,
}

impl GpuRenderer {
    /// Build GPU resources for `scene`. Geometry is uploaded once; transforms,
    /// colors and particle positions are re-sent every frame.
    pub async fn new(window: Arc<Window>, scene: &Scene, panel: Option<ControlPanel>) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;
        let adapter = Self::request_adapter(&instance, &surface).await?;
        let (device, queue) = Self::request_device(&adapter).await?;
        info!("Using adapter: {}", adapter.get_info().name);

        let config = Self::create_surface_config(&surface, &adapter, size);
        surface.configure(&device, &config);
        let depth_view = create_depth_texture(&device, config.width, config.height);

        let globals_layout = uniform_layout(&device, "Globals Bind Group Layout");
        let object_layout = uniform_layout(&device, "Object Bind Group Layout");

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Globals Buffer"),
            size: std::mem::size_of::<GlobalsUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Globals Bind Group"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let (mesh_pipeline, line_pipeline, snow_pipeline) =
            Self::create_pipelines(&device, config.format, &globals_layout, &object_layout);

        let tower = GpuMesh::upload(&device, &object_layout, &scene.tower);
        let ground = GpuMesh::upload(&device, &object_layout, &scene.ground);
        let axes = scene.axes.map(|axes| {
            let vertices = axes_lines(axes.size);
            GpuLines {
                vertex_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Axes Vertex Buffer"),
                    contents: bytemuck::cast_slice(&vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
                vertex_count: vertices.len() as u32,
                object: ObjectBinding::new(&device, &object_layout, "axes"),
            }
        });

        let positions = scene.snow.particles.positions();
        let snow = GpuSnow {
            instance_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Snow Instance Buffer"),
                contents: bytemuck::cast_slice(positions),
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            }),
            capacity: positions.len() as u32,
            object: ObjectBinding::new(&device, &object_layout, "snow"),
        };

        let overlay = panel.map(|panel| {
            let ctx = egui::Context::default();
            let state = egui_winit::State::new(
                ctx.clone(),
                egui::ViewportId::ROOT,
                &window,
                Some(window.scale_factor() as f32),
                None,
                None,
            );
            let renderer = egui_wgpu::Renderer::new(
                &device,
                config.format,
                egui_wgpu::RendererOptions::default(),
            );
            Overlay {
                ctx,
                state,
                renderer,
                panel,
            }
        });

        info!(
            "Renderer initialized: {}x{}, {} snow sprites, overlay {}",
            config.width,
            config.height,
            snow.capacity,
            if overlay.is_some() { "on" } else { "off" }
        );

        Ok(Self {
            window,
            device,
            queue,
            surface,
            config,
            depth_view,
            globals_buffer,
            globals_bind_group,
            mesh_pipeline,
            line_pipeline,
            snow_pipeline,
            tower,
            ground,
            axes,
            snow,
            overlay,
        })
    }

    async fn request_adapter(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'_>,
    ) -> Result<wgpu::Adapter> {
        instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| anyhow!("Failed to find appropriate adapter: {e}"))
    }

    async fn request_device(adapter: &wgpu::Adapter) -> Result<(wgpu::Device, wgpu::Queue)> {
        adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Snowfall Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .map_err(|e| anyhow!("Failed to create device: {e}"))
    }

    fn create_surface_config(
        surface: &wgpu::Surface,
        adapter: &wgpu::Adapter,
        size: winit::dpi::PhysicalSize<u32>,
    ) -> wgpu::SurfaceConfiguration {
        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    fn create_pipelines(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        globals_layout: &wgpu::BindGroupLayout,
        object_layout: &wgpu::BindGroupLayout,
    ) -> (wgpu::RenderPipeline, wgpu::RenderPipeline, wgpu::RenderPipeline) {
        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("scene.wgsl").into()),
        });
        let snow_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Snow Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("snow.wgsl").into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[globals_layout, object_layout],
            push_constant_ranges: &[],
        });

        let mesh = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Mesh Pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &scene_shader,
                entry_point: Some("vs_mesh"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &MESH_ATTRIBUTES,
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &scene_shader,
                entry_point: Some("fs_mesh"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(depth_state(true)),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let line = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Line Pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &scene_shader,
                entry_point: Some("vs_line"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &LINE_ATTRIBUTES,
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &scene_shader,
                entry_point: Some("fs_line"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
            depth_stencil: Some(depth_state(true)),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let additive = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
        };

        let snow = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Snow Pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &snow_shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &SNOW_ATTRIBUTES,
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &snow_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(additive),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            // sprites are tested against meshes but never occlude each other
            depth_stencil: Some(depth_state(false)),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        (mesh, line, snow)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = create_depth_texture(&self.device, width, height);
        debug!("Surface resized to {}x{}", width, height);
    }

    /// Reconfigure at the window's current size after a lost/outdated surface
    pub fn reconfigure(&mut self) {
        let size = self.window.inner_size();
        self.resize(size.width, size.height);
    }

    /// Feed a window event to egui; true when the panel consumed it
    pub fn handle_event(&mut self, event: &winit::event::WindowEvent) -> bool {
        match &mut self.overlay {
            Some(overlay) => overlay.state.on_window_event(&self.window, event).consumed,
            None => false,
        }
    }

    fn write_uniforms(&self, frame: &RenderFrame<'_>) {
        let scene = frame.scene;
        let camera = frame.camera;

        let mut light_positions = [[0.0; 4]; MAX_POINT_LIGHTS];
        let mut light_colors = [[0.0; 4]; MAX_POINT_LIGHTS];
        let mut light_count = 0;
        for (i, (position, color)) in scene.point_lights().take(MAX_POINT_LIGHTS).enumerate() {
            light_positions[i] = position.extend(1.0).to_array();
            light_colors[i] = color.to_linear_vec4(1.0);
            light_count += 1;
        }
        let [ar, ag, ab] = scene.ambient_linear();

        let globals = GlobalsUniform {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_right: camera.right().extend(0.0).to_array(),
            camera_up: camera.up().extend(0.0).to_array(),
            ambient: [ar, ag, ab, 1.0],
            light_positions,
            light_colors,
            light_count,
            _pad: [0; 3],
        };
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        self.tower.object.write(
            &self.queue,
            scene.tower.transform.matrix(),
            scene.tower.material.color,
            0.0,
        );
        self.ground.object.write(
            &self.queue,
            scene.ground.transform.matrix(),
            scene.ground.material.color,
            0.0,
        );
        if let (Some(axes), Some(matrix)) = (&self.axes, scene.axes_matrix()) {
            axes.object.write(&self.queue, matrix, Color::WHITE, 0.0);
        }
        self.snow.object.write(
            &self.queue,
            scene.snow.transform.matrix(),
            scene.snow.color,
            scene.snow.size,
        );

        let positions = scene.snow.particles.positions();
        let count = positions.len().min(self.snow.capacity as usize);
        self.queue.write_buffer(
            &self.snow.instance_buffer,
            0,
            bytemuck::cast_slice(&positions[..count]),
        );
    }

    fn clear_color(&self, color: Color) -> wgpu::Color {
        let [r, g, b] = if self.config.format.is_srgb() {
            color.to_linear()
        } else {
            [color.r, color.g, color.b]
        };
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        }
    }
}

impl SceneRenderer for GpuRenderer {
    fn render(&mut self, frame: &RenderFrame<'_>) -> Result<(), RenderError> {
        let size = self.window.inner_size();
        if size.width == 0 || size.height == 0 {
            // minimized
            return Ok(());
        }

        self.write_uniforms(frame);

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Scene Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color(frame.scene.clear_color)),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_bind_group(0, &self.globals_bind_group, &[]);

            render_pass.set_pipeline(&self.mesh_pipeline);
            for mesh in [&self.ground, &self.tower] {
                render_pass.set_bind_group(1, &mesh.object.bind_group, &[]);
                render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
                render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }

            if let Some(axes) = &self.axes {
                render_pass.set_pipeline(&self.line_pipeline);
                render_pass.set_bind_group(1, &axes.object.bind_group, &[]);
                render_pass.set_vertex_buffer(0, axes.vertex_buffer.slice(..));
                render_pass.draw(0..axes.vertex_count, 0..1);
            }

            let sprites = (frame.scene.snow.particles.len() as u32).min(self.snow.capacity);
            render_pass.set_pipeline(&self.snow_pipeline);
            render_pass.set_bind_group(1, &self.snow.object.bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.snow.instance_buffer.slice(..));
            render_pass.draw(0..6, 0..sprites);
        }

        let mut command_buffers = Vec::new();
        if let Some(overlay) = &mut self.overlay {
            command_buffers = overlay.paint(
                &self.window,
                &self.device,
                &self.queue,
                &mut encoder,
                &view,
                [self.config.width, self.config.height],
                frame,
            );
        }

        command_buffers.push(encoder.finish());
        self.queue.submit(command_buffers);
        output.present();

        Ok(())
    }
}

impl Overlay {
    /// Run the panel and record its draw into `encoder`. Returns any extra
    /// command buffers egui needs submitted before the encoder.
    #[allow(clippy::too_many_arguments)]
    fn paint(
        &mut self,
        window: &Window,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        size_in_pixels: [u32; 2],
        frame: &RenderFrame<'_>,
    ) -> Vec<wgpu::CommandBuffer> {
        let raw_input = self.state.take_egui_input(window);
        let panel = &self.panel;
        let full_output = self
            .ctx
            .run(raw_input, |ctx| panel.show(ctx, frame.control, frame.fps));

        self.state
            .handle_platform_output(window, full_output.platform_output);

        let tris = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels,
            pixels_per_point: full_output.pixels_per_point,
        };

        let command_buffers =
            self.renderer
                .update_buffers(device, queue, encoder, &tris, &screen_descriptor);

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            self.renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }

        command_buffers
    }
}

impl ObjectBinding {
    fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, name: &str) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&format!("{name} Object Buffer")),
            size: std::mem::size_of::<ObjectUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{name} Object Bind Group")),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
        Self { buffer, bind_group }
    }

    fn write(&self, queue: &wgpu::Queue, model: Mat4, color: Color, size: f32) {
        let uniform = ObjectUniform {
            model: model.to_cols_array_2d(),
            color: color.to_linear_vec4(1.0),
            params: [size, 0.0, 0.0, 0.0],
        };
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(&uniform));
    }
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, mesh: &Mesh) -> Self {
        let data = mesh_data(&mesh.geometry);
        Self {
            vertex_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{} Vertex Buffer", mesh.name)),
                contents: bytemuck::cast_slice(&data.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            }),
            index_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{} Index Buffer", mesh.name)),
                contents: bytemuck::cast_slice(&data.indices),
                usage: wgpu::BufferUsages::INDEX,
            }),
            index_count: data.indices.len() as u32,
            object: ObjectBinding::new(device, layout, &mesh.name),
        }
    }
}

fn mesh_data(geometry: &Geometry) -> MeshData {
    match *geometry {
        Geometry::Box {
            width,
            height,
            depth,
        } => box_mesh(width, height, depth),
        Geometry::Plane { width, height } => plane_mesh(width, height),
    }
}

fn uniform_layout(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

fn depth_state(write: bool) -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: write,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
