//! Uniform bindings shared across pipelines.
//!
//! Bind group 0 carries the per-frame camera data for every pipeline; bind
//! group 1 carries the per-entity model transform. Both are plain uniform
//! buffers behind [`UniformBuffer`].

use cgmath::Matrix4;

use crate::gfx::camera::CameraUniform;
use crate::wgpu_utils::UniformBuffer;

/// The camera uniform buffer with its layout and bind group.
pub struct GlobalBindings {
    ubo: UniformBuffer<CameraUniform>,
    layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device) -> Self {
        let ubo = UniformBuffer::new_with_data(device, &CameraUniform::default());

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Camera Bind Group Layout"),
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
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.binding_resource(),
            }],
        });

        Self {
            ubo,
            layout,
            bind_group,
        }
    }

    /// Pushes the frame's camera data to the GPU. Called once per frame
    /// before any pass is recorded.
    pub fn write(&mut self, queue: &wgpu::Queue, camera: CameraUniform) {
        self.ubo.update_content(queue, camera);
    }

    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

/// Per-entity model matrix uniform. MUST match the Model struct in the
/// shaders.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
}

/// The bind group layout for [`TransformBinding`] (group 1 in both
/// pipelines).
pub fn transform_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Transform Bind Group Layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

/// One entity's model matrix on the GPU.
pub struct TransformBinding {
    ubo: UniformBuffer<ModelUniform>,
    bind_group: wgpu::BindGroup,
}

impl TransformBinding {
    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        transform: Matrix4<f32>,
    ) -> Self {
        let ubo = UniformBuffer::new_with_data(
            device,
            &ModelUniform {
                model: transform.into(),
            },
        );

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Transform Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.binding_resource(),
            }],
        });

        Self { ubo, bind_group }
    }

    pub fn set(&mut self, queue: &wgpu::Queue, transform: Matrix4<f32>) {
        self.ubo.update_content(
            queue,
            ModelUniform {
                model: transform.into(),
            },
        );
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}
