//! Procedural geometry.
//!
//! Every mesh in the game -- board cubes, the player token, the water slabs
//! -- is a cuboid generated here; no model files are involved.

pub mod primitives;

pub use primitives::generate_cuboid;

/// Generated geometry ready for GPU upload.
#[derive(Debug, Clone, Default)]
pub struct GeometryData {
    /// Vertex positions (x, y, z).
    pub positions: Vec<[f32; 3]>,
    /// Texture coordinates (u, v), one per position.
    pub tex_coords: Vec<[f32; 2]>,
    /// Triangle indices, counter-clockwise winding.
    pub indices: Vec<u32>,
}

impl GeometryData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
