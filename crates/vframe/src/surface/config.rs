use ash::vk;

use crate::{builder_field, errors::SurfaceError, surface::BufferMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffscreenSurfaceConfig {
    pub width: u32,
    pub height: u32,
    pub format: vk::Format,
    pub mode: BufferMode,
    pub samples: vk::SampleCountFlags,
}

impl Default for OffscreenSurfaceConfig {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            format: vk::Format::R8G8B8A8_UNORM,
            mode: BufferMode::DoubleBuffer,
            samples: vk::SampleCountFlags::TYPE_1,
        }
    }
}

impl OffscreenSurfaceConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Default::default() }
    }

    builder_field!(width, u32);
    builder_field!(height, u32);
    builder_field!(format, vk::Format);
    builder_field!(mode, BufferMode);
    builder_field!(samples, vk::SampleCountFlags);

    pub fn extent(&self) -> vk::Extent2D {
        vk::Extent2D { width: self.width, height: self.height }
    }

    pub fn validate(&self) -> Result<(), SurfaceError> {
        if self.width == 0 || self.height == 0 {
            return Err(SurfaceError::InvalidExtent(self.width, self.height));
        }
        if self.format == vk::Format::UNDEFINED {
            return Err(SurfaceError::InvalidFormat(self.format));
        }
        Ok(())
    }
}
