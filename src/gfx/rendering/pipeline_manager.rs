//! Render pipeline construction and lookup.
//!
//! Shaders are compiled and registered by name, then each pipeline is built
//! eagerly from a [`PipelineConfig`] at startup. A configuration that names
//! a shader nobody loaded is reported to the caller, which treats it as
//! fatal: nothing can be rendered without its pipeline.

use std::{collections::HashMap, sync::Arc};

use crate::gfx::resources::texture_resource::TextureResource;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("pipeline '{pipeline}' references unknown shader '{shader}'")]
    UnknownShader { pipeline: String, shader: String },
}

/// Everything needed to build one render pipeline. Built up through the
/// `with_` methods from a [`default`](Default::default) that covers the
/// common case: triangle list, back-face culling, depth test, no blending.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub label: String,
    pub shader: String,
    pub color_format: wgpu::TextureFormat,
    pub blend: Option<wgpu::BlendState>,
    pub bind_group_layouts: Vec<wgpu::BindGroupLayout>,
    pub vertex_layouts: Vec<wgpu::VertexBufferLayout<'static>>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            shader: String::new(),
            color_format: wgpu::TextureFormat::Bgra8Unorm,
            blend: None,
            bind_group_layouts: Vec::new(),
            vertex_layouts: Vec::new(),
        }
    }
}

impl PipelineConfig {
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_owned();
        self
    }

    pub fn with_shader(mut self, shader: &str) -> Self {
        self.shader = shader.to_owned();
        self
    }

    pub fn with_color_format(mut self, format: wgpu::TextureFormat) -> Self {
        self.color_format = format;
        self
    }

    /// Blend state for the single color target; the default `None` replaces.
    pub fn with_blend(mut self, blend: Option<wgpu::BlendState>) -> Self {
        self.blend = blend;
        self
    }

    pub fn with_bind_group_layouts(mut self, layouts: Vec<wgpu::BindGroupLayout>) -> Self {
        self.bind_group_layouts = layouts;
        self
    }

    pub fn with_vertex_layouts(mut self, layouts: Vec<wgpu::VertexBufferLayout<'static>>) -> Self {
        self.vertex_layouts = layouts;
        self
    }
}

/// Owns every shader module and render pipeline in the engine.
pub struct PipelineManager {
    device: Arc<wgpu::Device>,
    shaders: HashMap<String, wgpu::ShaderModule>,
    pipelines: HashMap<String, wgpu::RenderPipeline>,
}

impl PipelineManager {
    pub fn new(device: Arc<wgpu::Device>) -> Self {
        Self {
            device,
            shaders: HashMap::new(),
            pipelines: HashMap::new(),
        }
    }

    /// Compiles a WGSL source and stores it under `name` for pipeline
    /// configurations to reference. Both entry points (`vs_main`, `fs_main`)
    /// must live in the one module.
    pub fn load_shader(&mut self, name: &str, source: &str) {
        let module = self
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(name),
                source: wgpu::ShaderSource::Wgsl(source.into()),
            });
        self.shaders.insert(name.to_owned(), module);
    }

    /// Builds the pipeline described by `config` and stores it under `name`.
    pub fn register_pipeline(
        &mut self,
        name: &str,
        config: PipelineConfig,
    ) -> Result<(), PipelineError> {
        let shader = self
            .shaders
            .get(&config.shader)
            .ok_or_else(|| PipelineError::UnknownShader {
                pipeline: name.to_owned(),
                shader: config.shader.clone(),
            })?;

        let layout_refs: Vec<&wgpu::BindGroupLayout> = config.bind_group_layouts.iter().collect();
        let layout = self
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some(&format!("{} Layout", config.label)),
                bind_group_layouts: &layout_refs,
                push_constant_ranges: &[],
            });

        let pipeline = self
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(&config.label),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &config.vertex_layouts,
                },
                fragment: Some(wgpu::FragmentState {
                    module: shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: config.color_format,
                        blend: config.blend,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: Some(wgpu::Face::Back),
                    unclipped_depth: false,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    conservative: false,
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: TextureResource::DEPTH_FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::LessEqual,
                    stencil: Default::default(),
                    bias: Default::default(),
                }),
                multisample: Default::default(),
                multiview: None,
                cache: None,
            });

        self.pipelines.insert(name.to_owned(), pipeline);
        Ok(())
    }

    pub fn pipeline(&self, name: &str) -> Option<&wgpu::RenderPipeline> {
        self.pipelines.get(name)
    }
}
