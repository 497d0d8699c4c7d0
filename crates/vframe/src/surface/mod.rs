//! Render targets that rotate between a fixed set of image slots.
//!
//! A producer renders into [`PresentSurface::acquire_write_slot`], calls
//! [`PresentSurface::present`], and a consumer reads from
//! [`PresentSurface::read_slot`]. The slot roles are tracked by
//! [`BufferRotation`].

use ash::vk;

pub use self::{
    config::OffscreenSurfaceConfig,
    offscreen::OffscreenSurface,
    rotation::{BufferMode, BufferRotation},
    slot::Slot,
};
use crate::vulkan::image::{Image, ImageView};

mod config;
mod offscreen;
mod rotation;
mod slot;

/// Common interface of every presentable surface variant.
pub trait PresentSurface {
    fn slot_count(&self) -> usize;

    /// The slot the producer should render into for the upcoming frame.
    /// Never blocks and never changes state.
    fn acquire_write_slot(&self) -> usize;

    /// The slot holding the most recently completed frame.
    fn read_slot(&self) -> usize;

    /// Hands the current write slot over to readers and selects the next one.
    fn present(&mut self);

    /// Semaphore signaled once the write slot is available, for surfaces with
    /// an asynchronous acquire step. `None` means there is nothing to wait on.
    fn image_available(&self) -> Option<vk::Semaphore>;

    fn format(&self) -> vk::Format;

    fn extent(&self) -> vk::Extent2D;

    fn image(&self, index: usize) -> Option<&Image>;

    fn view(&self, index: usize) -> Option<&ImageView>;
}
