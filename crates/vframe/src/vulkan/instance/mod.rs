use ash::{vk, Entry};

use crate::errors::InstanceError;

const APPLICATION_NAME: &std::ffi::CStr = c"vframe";

pub struct Instance {
    pub ash: ash::Instance,
    pub entry: Entry,
}

impl Instance {
    pub fn new(instance: ash::Instance, entry: &Entry) -> Self {
        Self { ash: instance, entry: entry.clone() }
    }

    /// Loads the Vulkan library at runtime and creates an instance without any
    /// window-system extensions. Off-screen rendering and transfers need
    /// nothing more.
    pub fn headless() -> Result<Self, InstanceError> {
        let entry = unsafe { Entry::load().map_err(InstanceError::VulkanLoadingError)? };
        let app_info = vk::ApplicationInfo {
            p_application_name: APPLICATION_NAME.as_ptr(),
            application_version: vk::make_api_version(0, 0, 1, 0),
            p_engine_name: APPLICATION_NAME.as_ptr(),
            api_version: vk::API_VERSION_1_1,
            ..Default::default()
        };
        let create_info = vk::InstanceCreateInfo {
            p_application_info: &app_info,
            ..Default::default()
        };
        let instance = unsafe {
            entry
                .create_instance(&create_info, None)
                .map_err(InstanceError::UnableToCreateInstance)?
        };
        Ok(Self::new(instance, &entry))
    }

    pub fn create_logical_device(
        &self,
        physical_device: &vk::PhysicalDevice,
        queue_create_infos: &[vk::DeviceQueueCreateInfo],
    ) -> Result<ash::Device, InstanceError> {
        let create_info = vk::DeviceCreateInfo {
            queue_create_info_count: queue_create_infos.len() as u32,
            p_queue_create_infos: queue_create_infos.as_ptr(),
            ..Default::default()
        };

        unsafe {
            self.ash
                .create_device(*physical_device, &create_info, None)
                .map_err(InstanceError::UnableToCreateLogicalDevice)
        }
    }
}

impl Drop for Instance {
    fn drop(&mut self) {
        unsafe {
            self.ash.destroy_instance(None);
        }
    }
}
