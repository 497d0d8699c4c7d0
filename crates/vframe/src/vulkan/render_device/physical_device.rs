use ash::vk;

use crate::errors::PhysicalDeviceError;

/// Returns the preferred physical device together with the queue family used
/// for both rendering and transfers.
pub fn find_optimal(
    ash: &ash::Instance,
) -> Result<(vk::PhysicalDevice, u32), PhysicalDeviceError> {
    let physical_devices = unsafe {
        ash.enumerate_physical_devices()
            .map_err(PhysicalDeviceError::UnableToEnumerateDevices)?
    };
    physical_devices
        .iter()
        .filter_map(|device| find_queue_family(ash, device).map(|family| (*device, family)))
        .min_by_key(|(device, _)| type_rank(ash, device))
        .ok_or(PhysicalDeviceError::NoSuitableDeviceFound)
}

fn find_queue_family(ash: &ash::Instance, physical_device: &vk::PhysicalDevice) -> Option<u32> {
    let queue_families =
        unsafe { ash.get_physical_device_queue_family_properties(*physical_device) };

    let find = |flags: vk::QueueFlags| {
        queue_families
            .iter()
            .position(|family| family.queue_count > 0 && family.queue_flags.contains(flags))
            .map(|i| i as u32)
    };

    find(vk::QueueFlags::GRAPHICS).or_else(|| find(vk::QueueFlags::TRANSFER))
}

fn type_rank(ash: &ash::Instance, physical_device: &vk::PhysicalDevice) -> u32 {
    let properties = unsafe { ash.get_physical_device_properties(*physical_device) };
    match properties.device_type {
        vk::PhysicalDeviceType::DISCRETE_GPU => 0,
        vk::PhysicalDeviceType::INTEGRATED_GPU => 1,
        vk::PhysicalDeviceType::VIRTUAL_GPU => 2,
        vk::PhysicalDeviceType::CPU => 3,
        _ => 4,
    }
}
