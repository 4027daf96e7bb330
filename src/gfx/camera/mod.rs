pub mod controller;
pub mod rig;
pub mod uniform;

// Re-export main types
pub use controller::CameraController;
pub use rig::{CameraMode, CameraRig};
pub use uniform::CameraUniform;
