// src/gfx/resources/mod.rs
//! GPU resource management
//!
//! Drawable mesh bundles, textures, and the uniform bindings shared by the
//! render pipelines.

pub mod bindings;
pub mod drawable;
pub mod texture_loader;
pub mod texture_resource;

// Re-export main types
pub use bindings::{GlobalBindings, TransformBinding};
pub use drawable::DrawableResource;
pub use texture_resource::TextureResource;
