use ::ash::vk;
use thiserror::Error;

use crate::errors::InstanceError;

#[derive(Debug, Error)]
pub enum PhysicalDeviceError {
    #[error("Unable to enumerate physical devices")]
    UnableToEnumerateDevices(#[source] vk::Result),

    #[error("No physical device exposes a graphics or transfer queue")]
    NoSuitableDeviceFound,
}

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("Unable to submit work to queue family {}", .0)]
    UnableToSubmit(u32, #[source] vk::Result),

    #[error("Error while waiting for queue family {} to idle", .0)]
    UnableToWaitIdle(u32, #[source] vk::Result),
}

#[derive(Debug, Error)]
pub enum RenderDeviceError {
    #[error("Unexpected physical device error")]
    UnexpectedPhysicalDeviceError(#[from] PhysicalDeviceError),

    #[error("Unexpected Vulkan instance error")]
    UnexpectedInstanceError(#[from] InstanceError),

    #[error("Error while waiting for the device to idle")]
    UnableToWaitIdle(#[source] vk::Result),
}
