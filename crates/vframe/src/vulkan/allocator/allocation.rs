use ash::vk;

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct Allocation {
    pub memory: vk::DeviceMemory,
    pub offset: vk::DeviceSize,
    pub byte_size: vk::DeviceSize,
    pub memory_type_index: u32,
    pub property_flags: vk::MemoryPropertyFlags,
}

impl Allocation {
    pub fn is_host_coherent(&self) -> bool {
        self.property_flags.contains(vk::MemoryPropertyFlags::HOST_COHERENT)
    }
}
