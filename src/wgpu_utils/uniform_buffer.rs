//! Typed uniform buffers.

use std::marker::PhantomData;
use wgpu::util::DeviceExt;

/// A uniform buffer holding exactly one `Content` value.
///
/// The wrapper remembers the bytes of the last write, so per-frame callers
/// can push unconditionally and the queue write only happens when the value
/// actually changed.
pub struct UniformBuffer<Content> {
    buffer: wgpu::Buffer,
    last_written: Vec<u8>,
    _content: PhantomData<Content>,
}

impl<Content: bytemuck::Pod> UniformBuffer<Content> {
    // Bare type name for the buffer label, without the module path.
    fn short_name() -> &'static str {
        let full = std::any::type_name::<Content>();
        full.rsplit("::").next().unwrap_or(full)
    }

    pub fn new_with_data(device: &wgpu::Device, content: &Content) -> Self {
        let bytes = bytemuck::bytes_of(content);
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} uniform", Self::short_name())),
            contents: bytes,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            buffer,
            last_written: bytes.to_vec(),
            _content: PhantomData,
        }
    }

    /// Writes `content` to the GPU, skipping the write when the bytes match
    /// the previous one.
    pub fn update_content(&mut self, queue: &wgpu::Queue, content: Content) {
        let bytes = bytemuck::bytes_of(&content);
        if self.last_written == bytes {
            return;
        }
        queue.write_buffer(&self.buffer, 0, bytes);
        self.last_written.clear();
        self.last_written.extend_from_slice(bytes);
    }

    pub fn binding_resource(&self) -> wgpu::BindingResource<'_> {
        self.buffer.as_entire_binding()
    }
}
