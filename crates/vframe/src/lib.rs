pub mod errors;
pub mod surface;
pub mod vulkan;

pub use crate::{
    surface::{BufferMode, BufferRotation, OffscreenSurface, OffscreenSurfaceConfig, PresentSurface},
    vulkan::command_buffer::OneTimeSubmit,
};

#[macro_export]
macro_rules! builder_field {
    ($field:ident, $field_type:ty) => {
        pub fn $field(self, $field: $field_type) -> Self {
            Self { $field, ..self }
        }
    };
}

