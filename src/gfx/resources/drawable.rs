//! The mesh-plus-material bundle behind every rendered entity.
//!
//! A [`DrawableResource`] owns the GPU buffers for one mesh: positions and
//! indices always, and then exactly one of a per-vertex color buffer or a
//! texture-coordinate buffer with its texture binding. Construction uploads
//! everything once; after that the resource is immutable and `draw` only
//! binds and issues the stored index count. Anything per-frame (the model
//! transform) lives outside the resource.

use wgpu::util::DeviceExt;

use super::texture_resource::TextureResource;
use crate::gfx::geometry::GeometryData;

/// The material half of a drawable: flat vertex colors or a sampled texture.
pub enum Shading {
    Solid { color_buffer: wgpu::Buffer },
    Textured {
        uv_buffer: wgpu::Buffer,
        bind_group: wgpu::BindGroup,
    },
}

pub struct DrawableResource {
    position_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    vertex_count: u32,
    index_count: u32,
    shading: Shading,
}

impl DrawableResource {
    /// Uploads a mesh with one color replicated across every vertex, for the
    /// alpha-blended solid pipeline.
    pub fn solid(
        device: &wgpu::Device,
        geometry: &GeometryData,
        color: [f32; 4],
        label: &str,
    ) -> Self {
        let colors = vec![color; geometry.vertex_count()];
        let color_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} colors")),
            contents: bytemuck::cast_slice(&colors),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self::upload(device, geometry, label, Shading::Solid { color_buffer })
    }

    /// Uploads a mesh with texture coordinates and a binding for `texture`,
    /// for the textured pipeline.
    pub fn textured(
        device: &wgpu::Device,
        geometry: &GeometryData,
        texture: &TextureResource,
        texture_layout: &wgpu::BindGroupLayout,
        label: &str,
    ) -> Self {
        assert_eq!(
            geometry.positions.len(),
            geometry.tex_coords.len(),
            "every buffer of one resource must share a vertex count"
        );

        let uv_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} uvs")),
            contents: bytemuck::cast_slice(&geometry.tex_coords),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let bind_group =
            texture.create_bind_group(device, texture_layout, &format!("{label} texture"));

        Self::upload(
            device,
            geometry,
            label,
            Shading::Textured {
                uv_buffer,
                bind_group,
            },
        )
    }

    fn upload(
        device: &wgpu::Device,
        geometry: &GeometryData,
        label: &str,
        shading: Shading,
    ) -> Self {
        let position_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} positions")),
            contents: bytemuck::cast_slice(&geometry.positions),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} indices")),
            contents: bytemuck::cast_slice(&geometry.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            position_buffer,
            index_buffer,
            vertex_count: geometry.vertex_count() as u32,
            index_count: geometry.indices.len() as u32,
            shading,
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Binds this resource's buffers (and texture, if any) and issues its
    /// draw call. The caller has already set the matching pipeline and the
    /// camera/transform bind groups; bindings do not persist past the pass.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_vertex_buffer(0, self.position_buffer.slice(..));
        match &self.shading {
            Shading::Solid { color_buffer } => {
                render_pass.set_vertex_buffer(1, color_buffer.slice(..));
            }
            Shading::Textured {
                uv_buffer,
                bind_group,
            } => {
                render_pass.set_vertex_buffer(1, uv_buffer.slice(..));
                render_pass.set_bind_group(2, bind_group, &[]);
            }
        }
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
