//! # Graphics Module
//!
//! Everything GPU-facing: the camera system, procedural geometry, the
//! render engine and pipelines, GPU resources, and the scene that ties the
//! board state to its drawables.
//!
//! The split that matters here is update vs. render: camera and scene state
//! change only in the update phase, and the [`rendering`] side reads that
//! state to record one frame without mutating any of it.

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::{CameraController, CameraMode, CameraRig};
pub use rendering::render_engine::RenderEngine;
pub use scene::Scene;
