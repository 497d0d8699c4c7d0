pub mod allocator;
pub mod buffer;
pub mod command_buffer;
pub mod image;
pub mod instance;
pub mod render_device;

pub mod sync;
