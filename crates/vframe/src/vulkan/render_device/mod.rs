use std::fmt;

use ash::vk;

pub use crate::vulkan::render_device::gpu_queue::GpuQueue;
use crate::{errors::RenderDeviceError, vulkan::instance::Instance};

mod gpu_queue;
mod physical_device;

static SINGLE_QUEUE_PRIORITY: [f32; 1] = [1.0];

pub struct RenderDevice {
    pub physical_device: vk::PhysicalDevice,

    pub logical_device: ash::Device,

    /// The queue every submission in this crate goes through. It supports
    /// graphics work when the device has any graphics queue family, and at
    /// least transfers otherwise.
    pub graphics_queue: GpuQueue,

    pub instance: Instance,
}

impl RenderDevice {
    pub fn new(instance: Instance) -> Result<Self, RenderDeviceError> {
        let (physical_device, family_id) = physical_device::find_optimal(&instance.ash)?;

        let queue_create_infos = [vk::DeviceQueueCreateInfo {
            queue_family_index: family_id,
            p_queue_priorities: SINGLE_QUEUE_PRIORITY.as_ptr(),
            queue_count: 1,
            ..Default::default()
        }];
        let logical_device =
            instance.create_logical_device(&physical_device, &queue_create_infos)?;
        let raw_queue = unsafe { logical_device.get_device_queue(family_id, 0) };

        let vk_dev = Self {
            instance,
            physical_device,
            logical_device,
            graphics_queue: GpuQueue::from_raw(raw_queue, family_id, 0),
        };
        log::info!("selected render device\n{}", vk_dev);

        Ok(vk_dev)
    }

    pub fn headless() -> Result<Self, RenderDeviceError> {
        Self::new(Instance::headless()?)
    }

    pub fn wait_idle(&self) -> Result<(), RenderDeviceError> {
        unsafe {
            self.logical_device
                .device_wait_idle()
                .map_err(RenderDeviceError::UnableToWaitIdle)
        }
    }

    pub fn memory_properties(&self) -> vk::PhysicalDeviceMemoryProperties {
        unsafe {
            self.instance
                .ash
                .get_physical_device_memory_properties(self.physical_device)
        }
    }
}

impl Drop for RenderDevice {
    fn drop(&mut self) {
        if let Err(error) = self.wait_idle() {
            log::warn!("Error while waiting for device work to finish: {}", error);
        }
        unsafe {
            self.logical_device.destroy_device(None);
        }
    }
}

impl fmt::Display for RenderDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let properties = unsafe {
            self.instance
                .ash
                .get_physical_device_properties(self.physical_device)
        };
        let device_name = properties
            .device_name_as_c_str()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|_| String::from("<unnamed>"));
        let device_type = match properties.device_type {
            vk::PhysicalDeviceType::OTHER => "other",
            vk::PhysicalDeviceType::INTEGRATED_GPU => "integrated gpu",
            vk::PhysicalDeviceType::DISCRETE_GPU => "discrete gpu",
            vk::PhysicalDeviceType::VIRTUAL_GPU => "virtual gpu",
            vk::PhysicalDeviceType::CPU => "cpu",
            _ => "Unknown",
        };
        let api_version = properties.api_version;

        writeln!(f, "GPU: {}", device_name)?;
        writeln!(f, "Type: {}", device_type)?;
        writeln!(
            f,
            "vulkan api: {}.{}.{}",
            vk::api_version_major(api_version),
            vk::api_version_minor(api_version),
            vk::api_version_patch(api_version)
        )?;
        write!(f, "queue family: {}", self.graphics_queue.family_id)
    }
}
