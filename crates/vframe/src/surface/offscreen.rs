use std::sync::Arc;

use ash::vk;

use crate::{
    errors::SurfaceError,
    surface::{BufferMode, BufferRotation, OffscreenSurfaceConfig, PresentSurface, Slot},
    vulkan::{
        allocator::MemoryAllocator,
        image::{Image, ImageView},
        render_device::RenderDevice,
    },
};

/// A surface whose slots are plain device-local images with no presentation
/// engine behind them.
///
/// Cursor state only changes in [`PresentSurface::present`]. Callers must
/// not keep writing to a slot index obtained before a later present.
pub struct OffscreenSurface {
    slots: Vec<Slot>,
    rotation: BufferRotation,
    format: vk::Format,
    extent: vk::Extent2D,

    pub vk_dev: Arc<RenderDevice>,
}

impl OffscreenSurface {
    pub fn new(
        vk_dev: Arc<RenderDevice>,
        vk_alloc: Arc<dyn MemoryAllocator>,
        config: &OffscreenSurfaceConfig,
    ) -> Result<Self, SurfaceError> {
        config.validate()?;

        let slot_count = config.mode.slot_count();
        let slots = (0 .. slot_count)
            .map(|i| {
                Slot::new(vk_dev.clone(), vk_alloc.clone(), config)
                    .map_err(|err| SurfaceError::UnableToCreateSlot(i, err))
            })
            .collect::<Result<Vec<Slot>, SurfaceError>>()?;

        log::debug!(
            "created off-screen surface {}x{} {:?} with {} slots ({:?})",
            config.width,
            config.height,
            config.format,
            slot_count,
            config.mode
        );

        Ok(Self {
            slots,
            rotation: BufferRotation::new(config.mode),
            format: config.format,
            extent: config.extent(),
            vk_dev,
        })
    }

    pub fn mode(&self) -> BufferMode {
        self.rotation.mode()
    }

    pub fn rotation(&self) -> &BufferRotation {
        &self.rotation
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn is_destroyed(&self) -> bool {
        self.slots.is_empty()
    }

    /// Releases every slot. Calling it again, or letting the surface drop
    /// afterwards, does nothing.
    pub fn destroy(&mut self) {
        if self.slots.is_empty() {
            return;
        }
        // Views go first, then the images once their last reference is gone.
        self.slots.clear();
        self.rotation = BufferRotation::new(self.rotation.mode());
        log::debug!("destroyed off-screen surface");
    }
}

impl PresentSurface for OffscreenSurface {
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The index is meaningless once the surface is destroyed; asking for it
    /// then is caught in debug builds.
    fn acquire_write_slot(&self) -> usize {
        debug_assert!(!self.is_destroyed(), "write slot requested from a destroyed surface");
        self.rotation.acquire_write_slot()
    }

    /// Same caveat as `acquire_write_slot` for destroyed surfaces.
    fn read_slot(&self) -> usize {
        debug_assert!(!self.is_destroyed(), "read slot requested from a destroyed surface");
        self.rotation.read_slot()
    }

    fn present(&mut self) {
        if self.is_destroyed() {
            log::warn!("present called on a destroyed off-screen surface, ignoring");
            return;
        }
        self.rotation.advance();
        log::trace!("present: {:?}", self.rotation);
    }

    /// Off-screen slots are usable as soon as `present` returns, so there is
    /// never a semaphore to wait on.
    fn image_available(&self) -> Option<vk::Semaphore> {
        None
    }

    fn format(&self) -> vk::Format {
        self.format
    }

    fn extent(&self) -> vk::Extent2D {
        self.extent
    }

    fn image(&self, index: usize) -> Option<&Image> {
        self.slots.get(index).map(|slot| slot.image.as_ref())
    }

    fn view(&self, index: usize) -> Option<&ImageView> {
        self.slots.get(index).map(|slot| &slot.view)
    }
}

impl Drop for OffscreenSurface {
    fn drop(&mut self) {
        self.destroy();
    }
}
