use std::sync::Arc;

use ash::vk;

use crate::{
    errors::AllocatorError,
    vulkan::{
        allocator::{Allocation, MemoryAllocator},
        render_device::RenderDevice,
    },
};

/// Hands every request straight to `vkAllocateMemory`, one device allocation
/// per resource.
pub struct DeviceAllocator {
    memory_properties: vk::PhysicalDeviceMemoryProperties,
    vk_dev: Arc<RenderDevice>,
}

impl DeviceAllocator {
    pub fn new(vk_dev: Arc<RenderDevice>) -> Self {
        Self { memory_properties: vk_dev.memory_properties(), vk_dev }
    }
}

pub(super) fn find_memory_type(
    memory_properties: &vk::PhysicalDeviceMemoryProperties,
    memory_requirements: &vk::MemoryRequirements,
    property_flags: vk::MemoryPropertyFlags,
) -> Option<(u32, vk::MemoryPropertyFlags)> {
    memory_properties.memory_types[..memory_properties.memory_type_count as usize]
        .iter()
        .enumerate()
        .find(|(i, memory_type)| {
            let type_supported = (memory_requirements.memory_type_bits & (1 << *i)) != 0;
            type_supported && memory_type.property_flags.contains(property_flags)
        })
        .map(|(i, memory_type)| (i as u32, memory_type.property_flags))
}

impl MemoryAllocator for DeviceAllocator {
    unsafe fn allocate_memory(
        &self,
        memory_requirements: vk::MemoryRequirements,
        property_flags: vk::MemoryPropertyFlags,
    ) -> Result<Allocation, AllocatorError> {
        let (memory_type_index, actual_flags) =
            find_memory_type(&self.memory_properties, &memory_requirements, property_flags)
                .ok_or(AllocatorError::MemoryTypeNotFound(property_flags, memory_requirements))?;

        let allocate_info = vk::MemoryAllocateInfo {
            allocation_size: memory_requirements.size,
            memory_type_index,
            ..Default::default()
        };
        let memory = self
            .vk_dev
            .logical_device
            .allocate_memory(&allocate_info, None)
            .map_err(|err| {
                AllocatorError::LogicalDeviceAllocationFailed(memory_requirements.size, err)
            })?;

        Ok(Allocation {
            memory,
            offset: 0,
            byte_size: memory_requirements.size,
            memory_type_index,
            property_flags: actual_flags,
        })
    }

    unsafe fn free(&self, allocation: &Allocation) -> Result<(), AllocatorError> {
        self.vk_dev.logical_device.free_memory(allocation.memory, None);
        Ok(())
    }
}
