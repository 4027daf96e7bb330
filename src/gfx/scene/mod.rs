//! Scene management: the board's GPU pairing, the player token, the water
//! panels and the camera rig, plus the vertex layout contract shared with
//! the pipelines.

pub mod scene;
pub mod vertex;

// Re-export main types
pub use scene::Scene;
