// src/lib.rs
//! Causeway
//!
//! An interactive 3D board-crossing game built on wgpu and winit. A 10x10
//! causeway of cubes is generated fresh each run, with holes and bobbing
//! cells between the start and the goal cube. The player token walks the
//! board under an orbit or chase camera.
//!
//! The crate splits into plain game state ([`board`]) that needs no GPU,
//! and the graphics stack ([`gfx`]) that pairs that state with wgpu
//! resources and renders it.

pub mod app;
pub mod board;
pub mod gfx;
pub mod wgpu_utils;

// Re-export main types
pub use app::CausewayApp;

/// Creates an application instance for the given board seed.
pub fn app(seed: u64) -> anyhow::Result<CausewayApp> {
    CausewayApp::new(seed)
}
