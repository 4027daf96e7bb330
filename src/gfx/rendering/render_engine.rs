//! The wgpu render engine.
//!
//! Owns the surface, device and pipelines, and turns a [`Scene`] into one
//! rendered frame. The engine reads scene state and writes only to the GPU;
//! all game-state mutation happens before [`render_frame`] is called.
//!
//! [`render_frame`]: RenderEngine::render_frame

use std::sync::Arc;

use crate::gfx::{
    camera::CameraUniform,
    resources::{
        bindings::{transform_bind_group_layout, GlobalBindings},
        texture_resource::TextureResource,
    },
    scene::{scene::Scene, vertex},
};

use super::pipeline_manager::{PipelineConfig, PipelineManager};

/// Sky color behind the board.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.4,
    b: 0.6,
    a: 1.0,
};

pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    pipelines: PipelineManager,
    global_bindings: GlobalBindings,
    transform_layout: wgpu::BindGroupLayout,
    texture_layout: wgpu::BindGroupLayout,
}

impl RenderEngine {
    /// Creates a render engine for the given window.
    ///
    /// Initializes wgpu, the depth buffer, the shared bind group layouts and
    /// the two render pipelines (textured entities, translucent solids).
    ///
    /// # Panics
    /// Panics if no adapter or device is available, or if a pipeline fails
    /// to build. Rendering cannot proceed without them, so startup aborts
    /// with the diagnostic.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
    ) -> RenderEngine {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .expect("surface creation failed");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await
            .expect("no compatible graphics adapter");
        let info = adapter.get_info();
        log::info!("rendering on {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("causeway device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits {
                    max_texture_dimension_2d: 4096,
                    ..wgpu::Limits::downlevel_defaults()
                },
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .expect("device request failed");

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            // The frame wait lives here: present blocks on vertical sync.
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture = TextureResource::create_depth_texture(&device, &config, "depth");

        let global_bindings = GlobalBindings::new(&device);
        let transform_layout = transform_bind_group_layout(&device);
        let texture_layout = TextureResource::bind_group_layout(&device);

        let device: Arc<wgpu::Device> = device.into();
        let mut pipelines = PipelineManager::new(device.clone());
        pipelines.load_shader("textured", include_str!("textured.wgsl"));
        pipelines.load_shader("solid", include_str!("solid.wgsl"));

        pipelines
            .register_pipeline(
                "textured",
                PipelineConfig::default()
                    .with_label("Textured Pipeline")
                    .with_shader("textured")
                    .with_color_format(format)
                    .with_bind_group_layouts(vec![
                        global_bindings.layout().clone(),
                        transform_layout.clone(),
                        texture_layout.clone(),
                    ])
                    .with_vertex_layouts(vec![vertex::position_layout(), vertex::uv_layout()]),
            )
            .expect("textured pipeline is required to start");

        pipelines
            .register_pipeline(
                "solid",
                PipelineConfig::default()
                    .with_label("Solid Pipeline")
                    .with_shader("solid")
                    .with_color_format(format)
                    .with_blend(Some(wgpu::BlendState::ALPHA_BLENDING))
                    .with_bind_group_layouts(vec![
                        global_bindings.layout().clone(),
                        transform_layout.clone(),
                    ])
                    .with_vertex_layouts(vec![vertex::position_layout(), vertex::color_layout()]),
            )
            .expect("solid pipeline is required to start");

        RenderEngine {
            surface,
            device,
            queue: queue.into(),
            config,
            depth_texture,
            pipelines,
            global_bindings,
            transform_layout,
            texture_layout,
        }
    }

    /// Renders one frame: the alive board tiles in board order, then the
    /// player token, then the water panels. A frame whose surface texture
    /// cannot be acquired is skipped, never retried.
    pub fn render_frame(&mut self, scene: &Scene) {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(wgpu::SurfaceError::Timeout) => return,
            Err(err) => {
                log::error!("dropping frame: {err}");
                return;
            }
        };
        let target = frame.texture.create_view(&Default::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            pass.set_bind_group(0, self.global_bindings.bind_group(), &[]);

            if let Some(pipeline) = self.pipelines.pipeline("textured") {
                pass.set_pipeline(pipeline);

                for (drawable, transform) in scene.alive_tiles() {
                    pass.set_bind_group(1, transform.bind_group(), &[]);
                    drawable.draw(&mut pass);
                }

                let (drawable, transform) = scene.player();
                pass.set_bind_group(1, transform.bind_group(), &[]);
                drawable.draw(&mut pass);
            }

            // Water last: the panels blend over whatever the board left in
            // the frame.
            if let Some(pipeline) = self.pipelines.pipeline("solid") {
                pass.set_pipeline(pipeline);

                for (drawable, transform) in scene.water_panels() {
                    pass.set_bind_group(1, transform.bind_group(), &[]);
                    drawable.draw(&mut pass);
                }
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
    }

    /// Updates the camera uniform buffer. Called each frame with the scene's
    /// freshly computed camera data.
    pub fn update(&mut self, camera_uniform: CameraUniform) {
        self.global_bindings.write(&self.queue, camera_uniform);
    }

    /// Resizes the surface and recreates the depth buffer to match.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture = TextureResource::create_depth_texture(&self.device, &self.config, "depth");
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Layout for per-entity transform bind groups (group 1).
    pub fn transform_layout(&self) -> &wgpu::BindGroupLayout {
        &self.transform_layout
    }

    /// Layout for texture bind groups (group 2).
    pub fn texture_layout(&self) -> &wgpu::BindGroupLayout {
        &self.texture_layout
    }
}
