//! Image-file texture loading with a non-fatal fallback.
//!
//! Board setup must never abort halfway because one texture file is missing;
//! a failed load is logged and the tile renders in a flat color instead.

use std::path::Path;

use super::texture_resource::TextureResource;

/// Loads `path` as an sRGB texture, or returns a 1x1 `fallback` colored
/// texture if the file cannot be read or decoded. Failure is a warning, not
/// an error.
pub fn load_or_fallback(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    path: impl AsRef<Path>,
    fallback: [u8; 4],
) -> TextureResource {
    let path = path.as_ref();
    let label = path.display().to_string();

    match image::open(path) {
        Ok(img) => {
            let rgba = img.to_rgba8();
            let (width, height) = rgba.dimensions();
            log::debug!("loaded texture {} ({}x{})", label, width, height);
            TextureResource::create_from_rgba_data(device, queue, &rgba, width, height, &label)
        }
        Err(err) => {
            log::warn!("texture {} unavailable ({err}), using a flat color", label);
            TextureResource::solid_color(device, queue, fallback, &label)
        }
    }
}
