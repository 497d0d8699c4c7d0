use std::sync::Arc;

use ::ash::vk;

use crate::{
    errors::BufferError,
    vulkan::{
        allocator::{Allocation, MemoryAllocator},
        render_device::RenderDevice,
    },
};

pub struct Buffer {
    pub raw: vk::Buffer,

    pub allocation: Allocation,

    pub size_in_bytes: u64,

    pub mapped_ptr: Option<*mut std::ffi::c_void>,

    pub vk_alloc: Arc<dyn MemoryAllocator>,

    pub vk_dev: Arc<RenderDevice>,
}

impl Buffer {
    pub fn new(
        vk_dev: Arc<RenderDevice>,
        vk_alloc: Arc<dyn MemoryAllocator>,
        buffer_usage_flags: vk::BufferUsageFlags,
        memory_property_flags: vk::MemoryPropertyFlags,
        size_in_bytes: u64,
    ) -> Result<Self, BufferError> {
        let create_info = vk::BufferCreateInfo {
            size: size_in_bytes,
            usage: buffer_usage_flags,
            sharing_mode: vk::SharingMode::EXCLUSIVE,
            ..Default::default()
        };
        let buffer_handle = unsafe {
            vk_dev.logical_device.create_buffer(&create_info, None).map_err(|err| {
                BufferError::UnableToCreateBuffer {
                    size: size_in_bytes,
                    usage: buffer_usage_flags,
                    source: err,
                }
            })?
        };
        let allocation = unsafe {
            let buffer_memory_requirements =
                vk_dev.logical_device.get_buffer_memory_requirements(buffer_handle);
            match vk_alloc.allocate_memory(buffer_memory_requirements, memory_property_flags) {
                Ok(allocation) => allocation,
                Err(err) => {
                    vk_dev.logical_device.destroy_buffer(buffer_handle, None);
                    return Err(err.into());
                }
            }
        };
        let bound = unsafe {
            vk_dev
                .logical_device
                .bind_buffer_memory(buffer_handle, allocation.memory, allocation.offset)
        };
        if let Err(err) = bound {
            unsafe {
                vk_dev.logical_device.destroy_buffer(buffer_handle, None);
                if let Err(free_err) = vk_alloc.free(&allocation) {
                    log::warn!("unable to free memory of unbound buffer: {}", free_err);
                }
            }
            return Err(BufferError::UnableToBindDeviceMemory(err));
        }

        Ok(Self {
            raw: buffer_handle,
            allocation,
            size_in_bytes,
            mapped_ptr: None,
            vk_alloc,
            vk_dev,
        })
    }

    /// A host visible, coherent buffer usable as the source or destination of
    /// transfers.
    pub fn new_staging(
        vk_dev: Arc<RenderDevice>,
        vk_alloc: Arc<dyn MemoryAllocator>,
        size_in_bytes: u64,
    ) -> Result<Self, BufferError> {
        Self::new(
            vk_dev,
            vk_alloc,
            vk::BufferUsageFlags::TRANSFER_SRC | vk::BufferUsageFlags::TRANSFER_DST,
            vk::MemoryPropertyFlags::HOST_VISIBLE | vk::MemoryPropertyFlags::HOST_COHERENT,
            size_in_bytes,
        )
    }

    pub fn size(&self) -> u64 {
        self.size_in_bytes
    }

    pub fn map(&mut self) -> Result<(), BufferError> {
        if self.mapped_ptr.is_some() {
            return Ok(());
        }
        let ptr = unsafe {
            self.vk_dev
                .logical_device
                .map_memory(
                    self.allocation.memory,
                    self.allocation.offset,
                    vk::WHOLE_SIZE,
                    vk::MemoryMapFlags::empty(),
                )
                .map_err(BufferError::UnableToMapDeviceMemory)?
        };
        self.mapped_ptr = Some(ptr);
        Ok(())
    }

    pub fn unmap(&mut self) {
        if self.mapped_ptr.take().is_some() {
            unsafe {
                self.vk_dev.logical_device.unmap_memory(self.allocation.memory);
            }
        }
    }

    /// Copies `data` to the start of the mapped buffer and makes the write
    /// visible to the device.
    pub fn write<Element: Copy>(&mut self, data: &[Element]) -> Result<(), BufferError> {
        let ptr = self.mapped_ptr.ok_or(BufferError::NoMappedPointerFound)?;
        let len = std::mem::size_of_val(data) as u64;
        if len > self.size_in_bytes {
            return Err(BufferError::WriteOutOfBounds { len, size: self.size_in_bytes });
        }
        unsafe {
            std::ptr::copy_nonoverlapping(
                data.as_ptr() as *const u8,
                ptr as *mut u8,
                len as usize,
            );
        }
        if !self.allocation.is_host_coherent() {
            let range = self.mapped_range();
            unsafe {
                self.vk_dev
                    .logical_device
                    .flush_mapped_memory_ranges(&[range])
                    .map_err(BufferError::UnableToFlushMappedMemory)?;
            }
        }
        Ok(())
    }

    /// Copies the whole mapped buffer out as `Element`s, invalidating host
    /// caches first when the memory is not coherent.
    pub fn read<Element: Copy>(&self) -> Result<Vec<Element>, BufferError> {
        let ptr = self.mapped_ptr.ok_or(BufferError::NoMappedPointerFound)?;
        let elements = element_count::<Element>(self.size_in_bytes)?;
        if !self.allocation.is_host_coherent() {
            let range = self.mapped_range();
            unsafe {
                self.vk_dev
                    .logical_device
                    .invalidate_mapped_memory_ranges(&[range])
                    .map_err(BufferError::UnableToInvalidateMappedMemory)?;
            }
        }
        let data = unsafe { std::slice::from_raw_parts(ptr as *const Element, elements) };
        Ok(data.to_vec())
    }

    fn mapped_range(&self) -> vk::MappedMemoryRange<'static> {
        vk::MappedMemoryRange {
            memory: self.allocation.memory,
            offset: self.allocation.offset,
            size: vk::WHOLE_SIZE,
            ..Default::default()
        }
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        self.unmap();
        unsafe {
            self.vk_dev.logical_device.destroy_buffer(self.raw, None);
            if let Err(err) = self.vk_alloc.free(&self.allocation) {
                log::error!("unable to free the buffer's memory: {}", err);
            }
        }
    }
}

/// How many whole `Element`s fit in `size_in_bytes`.
fn element_count<Element>(size_in_bytes: u64) -> Result<usize, BufferError> {
    match std::mem::size_of::<Element>() {
        0 => Err(BufferError::ZeroSizedElement),
        element_size => Ok(size_in_bytes as usize / element_size),
    }
}
