//! GPU-facing camera data.

use cgmath::{Matrix4, SquareMatrix};

/// wgpu clip space covers z in [0, 1] where OpenGL-convention projection
/// matrices produce [-1, 1]; this remaps the depth range.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.5,
    0.0, 0.0, 0.0, 1.0,
);

/// Per-frame camera data, shared by every pipeline at bind group 0.
///
/// The eye position carries a fourth component so the struct meets the
/// 16-byte uniform alignment rule.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_position: [f32; 4],
    pub view_proj: [[f32; 4]; 4],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_position: [0.0, 0.0, 0.0, 1.0],
            view_proj: Matrix4::identity().into(),
        }
    }
}
