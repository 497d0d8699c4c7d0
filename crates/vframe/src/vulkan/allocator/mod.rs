use std::sync::Arc;

use ::ash::vk;

pub use self::{allocation::Allocation, device_allocator::DeviceAllocator};
use crate::{errors::AllocatorError, vulkan::render_device::RenderDevice};

mod allocation;
mod device_allocator;

pub trait MemoryAllocator: Send + Sync {
    /// # Safety
    ///
    /// `memory_requirements` must come from a resource created on the same
    /// device as the allocator, and the returned allocation must be freed
    /// through this allocator before the device is destroyed.
    unsafe fn allocate_memory(
        &self,
        memory_requirements: vk::MemoryRequirements,
        property_flags: vk::MemoryPropertyFlags,
    ) -> Result<Allocation, AllocatorError>;

    /// # Safety
    ///
    /// `allocation` must have come from this allocator and no resource may
    /// still be bound to it.
    unsafe fn free(&self, allocation: &Allocation) -> Result<(), AllocatorError>;
}

pub fn create_default_allocator(vk_dev: Arc<RenderDevice>) -> Arc<dyn MemoryAllocator> {
    Arc::new(DeviceAllocator::new(vk_dev))
}
