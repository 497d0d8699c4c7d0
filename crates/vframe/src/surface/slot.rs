use std::sync::Arc;

use ash::vk;

use crate::{
    errors::ImageError,
    surface::OffscreenSurfaceConfig,
    vulkan::{
        allocator::MemoryAllocator,
        image::{Image, ImageView},
        render_device::RenderDevice,
    },
};

/// One render target of a rotating surface.
pub struct Slot {
    // Declared before `image` so the view is destroyed first.
    pub view: ImageView,
    pub image: Arc<Image>,
    pub width: u32,
    pub height: u32,
    pub format: vk::Format,
}

impl Slot {
    pub fn new(
        vk_dev: Arc<RenderDevice>,
        vk_alloc: Arc<dyn MemoryAllocator>,
        config: &OffscreenSurfaceConfig,
    ) -> Result<Self, ImageError> {
        let image = Arc::new(Image::new_2d(
            vk_dev,
            vk_alloc,
            config.format,
            config.extent(),
            config.samples,
            vk::ImageTiling::OPTIMAL,
            vk::ImageUsageFlags::COLOR_ATTACHMENT
                | vk::ImageUsageFlags::SAMPLED
                | vk::ImageUsageFlags::TRANSFER_SRC
                | vk::ImageUsageFlags::TRANSFER_DST,
            vk::MemoryPropertyFlags::DEVICE_LOCAL,
        )?);
        let view = ImageView::new_2d(image.clone(), config.format, vk::ImageAspectFlags::COLOR)?;
        Ok(Self {
            view,
            image,
            width: config.width,
            height: config.height,
            format: config.format,
        })
    }
}
