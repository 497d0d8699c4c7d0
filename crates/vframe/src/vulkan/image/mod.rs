use std::sync::Arc;

use ash::vk;

pub use self::view::ImageView;
use crate::{
    errors::ImageError,
    vulkan::{
        allocator::{Allocation, MemoryAllocator},
        render_device::RenderDevice,
    },
};

mod view;

pub struct Image {
    pub raw: vk::Image,

    pub format: vk::Format,

    pub extent: vk::Extent3D,

    pub samples: vk::SampleCountFlags,

    pub usage: vk::ImageUsageFlags,

    pub allocation: Allocation,

    pub vk_alloc: Arc<dyn MemoryAllocator>,

    pub vk_dev: Arc<RenderDevice>,
}

impl Image {
    pub fn new(
        vk_dev: Arc<RenderDevice>,
        vk_alloc: Arc<dyn MemoryAllocator>,
        create_info: &vk::ImageCreateInfo,
        memory_property_flags: vk::MemoryPropertyFlags,
    ) -> Result<Self, ImageError> {
        let raw = unsafe {
            vk_dev
                .logical_device
                .create_image(create_info, None)
                .map_err(ImageError::UnableToCreateImage)?
        };
        let memory_requirements =
            unsafe { vk_dev.logical_device.get_image_memory_requirements(raw) };

        let allocation =
            match unsafe { vk_alloc.allocate_memory(memory_requirements, memory_property_flags) } {
                Ok(allocation) => allocation,
                Err(err) => {
                    unsafe { vk_dev.logical_device.destroy_image(raw, None) };
                    return Err(err.into());
                }
            };

        let bound = unsafe {
            vk_dev
                .logical_device
                .bind_image_memory(raw, allocation.memory, allocation.offset)
        };
        if let Err(err) = bound {
            unsafe {
                vk_dev.logical_device.destroy_image(raw, None);
                if let Err(free_err) = vk_alloc.free(&allocation) {
                    log::warn!("unable to free memory of unbound image: {}", free_err);
                }
            }
            return Err(ImageError::UnableToBindImageMemory(err));
        }

        Ok(Self {
            raw,
            format: create_info.format,
            extent: create_info.extent,
            samples: create_info.samples,
            usage: create_info.usage,
            allocation,
            vk_alloc,
            vk_dev,
        })
    }

    /// Creates a single-mip, single-layer 2D image with exclusive sharing,
    /// starting in the `UNDEFINED` layout.
    #[allow(clippy::too_many_arguments)]
    pub fn new_2d(
        vk_dev: Arc<RenderDevice>,
        vk_alloc: Arc<dyn MemoryAllocator>,
        format: vk::Format,
        extent: vk::Extent2D,
        samples: vk::SampleCountFlags,
        tiling: vk::ImageTiling,
        usage: vk::ImageUsageFlags,
        memory_property_flags: vk::MemoryPropertyFlags,
    ) -> Result<Self, ImageError> {
        let create_info = vk::ImageCreateInfo {
            flags: vk::ImageCreateFlags::empty(),
            image_type: vk::ImageType::TYPE_2D,
            extent: vk::Extent3D { width: extent.width, height: extent.height, depth: 1 },
            mip_levels: 1,
            array_layers: 1,
            format,
            samples,
            tiling,
            initial_layout: vk::ImageLayout::UNDEFINED,
            usage,
            sharing_mode: vk::SharingMode::EXCLUSIVE,
            ..Default::default()
        };
        Self::new(vk_dev, vk_alloc, &create_info, memory_property_flags)
    }
}

impl Drop for Image {
    fn drop(&mut self) {
        unsafe {
            self.vk_dev.logical_device.destroy_image(self.raw, None);
            if let Err(err) = self.vk_alloc.free(&self.allocation) {
                log::error!("unable to free the image's memory: {}", err);
            }
        }
    }
}
