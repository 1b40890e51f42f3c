//! Dynamic uniform buffer for batched GPU writes.
//!
//! Uniform entries are accumulated in CPU memory during a frame and written
//! to the GPU in a single `write_buffer` call. Each entry starts on the
//! device's minimum uniform offset alignment, so it can be selected with a
//! dynamic offset in a bind group.

use crate::context::Context;
use bytemuck::Pod;
use std::marker::PhantomData;
use std::mem;

/// Size of one `T` entry once padded to `alignment` bytes.
#[inline]
pub fn aligned_size_of<T>(alignment: u64) -> u64 {
    let unaligned = mem::size_of::<T>() as u64;
    unaligned.div_ceil(alignment.max(1)) * alignment.max(1)
}

/// A dynamic uniform buffer that batches writes.
///
/// # Usage
///
/// ```ignore
/// let mut buffer = DynamicUniformBuffer::<MyUniforms>::new(&ctxt, "my_uniforms");
///
/// // Each frame:
/// buffer.clear();
/// let offset = buffer.push(&uniforms);
/// buffer.flush(&ctxt); // single GPU write
/// render_pass.set_bind_group(1, &bind_group, &[offset]);
/// ```
pub struct DynamicUniformBuffer<T: Pod> {
    data: Vec<u8>,
    buffer: wgpu::Buffer,
    /// Capacity in bytes.
    capacity: u64,
    aligned_size: u64,
    count: usize,
    label: &'static str,
    _marker: PhantomData<T>,
}

impl<T: Pod> DynamicUniformBuffer<T> {
    /// Creates a buffer with room for 16 entries.
    pub fn new(ctxt: &Context, label: &'static str) -> Self {
        Self::with_capacity(ctxt, label, 16)
    }

    /// Creates a buffer with room for `initial_capacity` entries.
    pub fn with_capacity(ctxt: &Context, label: &'static str, initial_capacity: usize) -> Self {
        let aligned_size = aligned_size_of::<T>(ctxt.uniform_offset_alignment());
        let capacity = aligned_size * initial_capacity.max(1) as u64;
        let buffer = Self::allocate(ctxt, label, capacity);

        Self {
            data: Vec::with_capacity(capacity as usize),
            buffer,
            capacity,
            aligned_size,
            count: 0,
            label,
            _marker: PhantomData,
        }
    }

    fn allocate(ctxt: &Context, label: &'static str, size: u64) -> wgpu::Buffer {
        ctxt.create_buffer_simple(
            Some(label),
            size,
            wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        )
    }

    /// Size of the binding seen by the shader: one unpadded entry.
    #[inline]
    pub fn binding_size(&self) -> wgpu::BufferSize {
        // Pod types used as uniforms are never zero-sized.
        wgpu::BufferSize::new(mem::size_of::<T>() as u64).unwrap_or(wgpu::BufferSize::MIN)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Clears the buffer for the next frame, keeping its allocation.
    pub fn clear(&mut self) {
        self.data.clear();
        self.count = 0;
    }

    /// Pushes a uniform entry and returns its byte offset in the buffer.
    ///
    /// [`DynamicUniformBuffer::flush`] must be called after the last push and
    /// before rendering.
    pub fn push(&mut self, value: &T) -> u32 {
        let offset = (self.count as u64 * self.aligned_size) as u32;

        let bytes = bytemuck::bytes_of(value);
        self.data.extend_from_slice(bytes);
        let padding = self.aligned_size as usize - bytes.len();
        self.data.extend(std::iter::repeat_n(0u8, padding));

        self.count += 1;
        offset
    }

    /// Uploads the accumulated entries, growing the GPU buffer if needed.
    ///
    /// Returns `true` if the buffer was reallocated, in which case bind groups
    /// referring to it must be recreated.
    pub fn flush(&mut self, ctxt: &Context) -> bool {
        if self.data.is_empty() {
            return false;
        }

        let required = self.data.len() as u64;
        let reallocated = required > self.capacity;

        if reallocated {
            let mut capacity = self.capacity;
            while capacity < required {
                capacity *= 2;
            }
            self.buffer = Self::allocate(ctxt, self.label, capacity);
            self.capacity = capacity;
        }

        ctxt.write_buffer(&self.buffer, 0, &self.data);
        reallocated
    }

    #[inline]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_padded_to_alignment() {
        assert_eq!(aligned_size_of::<[f32; 36]>(256), 256);
        assert_eq!(aligned_size_of::<[f32; 36]>(64), 192);
        assert_eq!(aligned_size_of::<[f32; 4]>(16), 16);
        assert_eq!(aligned_size_of::<[f32; 80]>(256), 512);
    }
}
