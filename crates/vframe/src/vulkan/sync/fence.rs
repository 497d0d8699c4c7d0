use std::{sync::Arc, time::Duration};

use ash::vk;

use crate::{errors::FenceError, vulkan::render_device::RenderDevice};

pub struct Fence {
    pub raw: vk::Fence,

    pub vk_dev: Arc<RenderDevice>,
}

impl Fence {
    /// Creates an unsignaled fence.
    pub fn new(vk_dev: Arc<RenderDevice>) -> Result<Self, FenceError> {
        Self::with_flags(vk_dev, vk::FenceCreateFlags::empty())
    }

    pub fn new_signaled(vk_dev: Arc<RenderDevice>) -> Result<Self, FenceError> {
        Self::with_flags(vk_dev, vk::FenceCreateFlags::SIGNALED)
    }

    pub fn with_flags(
        vk_dev: Arc<RenderDevice>,
        flags: vk::FenceCreateFlags,
    ) -> Result<Self, FenceError> {
        let raw = {
            let create_info = vk::FenceCreateInfo { flags, ..Default::default() };
            unsafe {
                vk_dev
                    .logical_device
                    .create_fence(&create_info, None)
                    .map_err(FenceError::UnableToCreateFence)?
            }
        };
        Ok(Self { raw, vk_dev })
    }

    pub fn wait_and_reset(&self) -> Result<(), FenceError> {
        self.wait()?;
        self.reset()
    }

    pub fn wait(&self) -> Result<(), FenceError> {
        self.wait_nanos(u64::MAX)
    }

    pub fn wait_timeout(&self, timeout: Duration) -> Result<(), FenceError> {
        self.wait_nanos(timeout_nanos(timeout))
    }

    fn wait_nanos(&self, timeout: u64) -> Result<(), FenceError> {
        let result = unsafe {
            self.vk_dev
                .logical_device
                .wait_for_fences(&[self.raw], true, timeout)
        };
        match result {
            Ok(()) => Ok(()),
            Err(vk::Result::TIMEOUT) => Err(FenceError::Timeout(Duration::from_nanos(timeout))),
            Err(err) => Err(FenceError::UnexpectedWaitError(err)),
        }
    }

    pub fn reset(&self) -> Result<(), FenceError> {
        unsafe {
            self.vk_dev
                .logical_device
                .reset_fences(&[self.raw])
                .map_err(FenceError::UnexpectedResetError)?;
        }
        Ok(())
    }

    pub fn is_signaled(&self) -> Result<bool, FenceError> {
        unsafe {
            self.vk_dev
                .logical_device
                .get_fence_status(self.raw)
                .map_err(FenceError::UnexpectedStatusError)
        }
    }
}

impl Drop for Fence {
    fn drop(&mut self) {
        unsafe {
            self.vk_dev.logical_device.destroy_fence(self.raw, None);
        }
    }
}

/// Vulkan treats `u64::MAX` as "wait forever", so durations too large to fit
/// in nanoseconds saturate to it.
pub(crate) fn timeout_nanos(timeout: Duration) -> u64 {
    u64::try_from(timeout.as_nanos()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_timeout_nanos() {
        assert_eq!(timeout_nanos(Duration::from_millis(5)), 5_000_000);
        assert_eq!(timeout_nanos(Duration::ZERO), 0);
    }

    #[test]
    fn test_timeout_nanos_saturates() {
        assert_eq!(timeout_nanos(Duration::MAX), u64::MAX);
        assert_eq!(timeout_nanos(Duration::from_secs(u64::MAX / 1_000)), u64::MAX);
    }
}
