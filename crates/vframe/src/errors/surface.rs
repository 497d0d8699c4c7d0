use ::ash::vk;
use thiserror::Error;

use crate::errors::ImageError;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Off-screen surface extent must be non-zero, got {}x{}", .0, .1)]
    InvalidExtent(u32, u32),

    #[error("Off-screen surface format must not be {:?}", .0)]
    InvalidFormat(vk::Format),

    #[error("Unable to create the image for slot {}", .0)]
    UnableToCreateSlot(usize, #[source] ImageError),
}
