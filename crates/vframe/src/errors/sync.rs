use std::time::Duration;

use ash::vk;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FenceError {
    #[error("Unable to create a new fence")]
    UnableToCreateFence(#[source] vk::Result),

    #[error("Fence was not signaled within {:?}", .0)]
    Timeout(Duration),

    #[error("Error while waiting for fence")]
    UnexpectedWaitError(#[source] vk::Result),

    #[error("Error while resetting fence")]
    UnexpectedResetError(#[source] vk::Result),

    #[error("Error while querying fence status")]
    UnexpectedStatusError(#[source] vk::Result),
}
