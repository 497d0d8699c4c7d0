use ::ash::vk;
use thiserror::Error;

use crate::errors::{AllocatorError, CommandBufferError};

#[derive(Debug, Error)]
pub enum BufferError {
    #[error("Unable to map device memory")]
    UnableToMapDeviceMemory(#[source] vk::Result),

    #[error("Unable to flush mapped device memory")]
    UnableToFlushMappedMemory(#[source] vk::Result),

    #[error("Unable to invalidate mapped device memory")]
    UnableToInvalidateMappedMemory(#[source] vk::Result),

    #[error("Device memory pointer was not found, did you try calling .map()?")]
    NoMappedPointerFound,

    #[error("Cannot read zero-sized elements out of a buffer")]
    ZeroSizedElement,

    #[error("Cannot write {} bytes into a buffer of {} bytes", .len, .size)]
    WriteOutOfBounds { len: u64, size: u64 },

    #[error(
        "Copy of {} bytes from offset {} to offset {} does not fit buffers of {} and {} bytes",
        .region.size,
        .region.src_offset,
        .region.dst_offset,
        .src_size,
        .dst_size
    )]
    CopyOutOfBounds {
        region: vk::BufferCopy,
        src_size: u64,
        dst_size: u64,
    },

    #[error(
        "Unable to create a new device buffer for {} bytes with flags {:?}",
        .size,
        .usage
    )]
    UnableToCreateBuffer {
        size: u64,
        usage: vk::BufferUsageFlags,
        source: vk::Result,
    },

    #[error(transparent)]
    UnableToAllocateBufferMemory(#[from] AllocatorError),

    #[error("Unable to bind device memory to buffer")]
    UnableToBindDeviceMemory(#[source] vk::Result),

    #[error("Unable to copy between buffers")]
    UnableToCopyBuffer(#[from] CommandBufferError),
}
