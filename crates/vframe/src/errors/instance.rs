use ash::vk;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("Error while creating the Vulkan function loader")]
    VulkanLoadingError(#[source] ash::LoadingError),

    #[error("Unable to create the Vulkan instance")]
    UnableToCreateInstance(#[source] vk::Result),

    #[error("Unable to create the logical device")]
    UnableToCreateLogicalDevice(#[source] vk::Result),
}
