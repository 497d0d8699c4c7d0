pub use crate::errors::{
    allocator::AllocatorError,
    buffer::BufferError,
    command_buffer::{CommandBufferError, CommandResult},
    image::ImageError,
    instance::InstanceError,
    render_device::{PhysicalDeviceError, QueueError, RenderDeviceError},
    surface::SurfaceError,
    sync::FenceError,
};

mod allocator;
mod buffer;
mod command_buffer;
mod image;
mod instance;
mod render_device;
mod surface;
mod sync;
