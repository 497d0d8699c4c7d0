use std::{sync::Arc, time::Duration};

use ::ash::vk;

use crate::{
    errors::{CommandBufferError, CommandResult},
    vulkan::{
        command_buffer::{CommandBuffer, CommandPool},
        render_device::RenderDevice,
        sync::Fence,
    },
};

/// Records work into a one-shot command buffer, submits it with a fresh fence
/// and blocks the calling thread until the GPU has finished it.
///
/// Every call allocates its own command buffer and fence and releases both
/// before returning, so consecutive calls are fully serialized and share no
/// synchronization state.
pub struct OneTimeSubmit {
    pool: Arc<CommandPool>,
    timeout: Option<Duration>,

    pub vk_dev: Arc<RenderDevice>,
}

impl OneTimeSubmit {
    pub fn new(pool: Arc<CommandPool>) -> Self {
        Self { vk_dev: pool.vk_dev.clone(), pool, timeout: None }
    }

    /// Creates an executor with its own transient pool on the device's
    /// graphics queue.
    pub fn for_device(vk_dev: Arc<RenderDevice>) -> Result<Self, CommandBufferError> {
        Ok(Self::new(Arc::new(CommandPool::new_transient(vk_dev)?)))
    }

    /// Bounds every fence wait. Without it the wait is unbounded.
    pub fn timeout(self, timeout: Duration) -> Self {
        Self { timeout: Some(timeout), ..self }
    }

    pub fn pool(&self) -> &Arc<CommandPool> {
        &self.pool
    }

    /// Runs `func` against a freshly begun primary command buffer, submits it
    /// and waits for completion. The value returned by `func` is handed back
    /// once the GPU work is done, so anything it wrote is visible to the host
    /// (given host-coherent or explicitly invalidated memory).
    pub fn submit_and_wait<Func, T>(&self, func: Func) -> CommandResult<T>
    where
        Func: FnOnce(&RenderDevice, vk::CommandBuffer) -> T,
    {
        let cmd = CommandBuffer::new_primary(self.pool.clone())?;
        cmd.begin_one_time()?;
        let result = func(&self.vk_dev, cmd.raw);
        cmd.end()?;

        self.submit_with_fence(&cmd)?;
        Ok(result)
    }

    /// Submits a buffer the caller already recorded and waits for it. The
    /// caller keeps ownership. Only buffers begun with
    /// [`CommandBuffer::begin_reusable`] may be flushed again without
    /// re-recording them.
    pub fn flush(&self, cmd: &CommandBuffer) -> CommandResult<()> {
        self.submit_with_fence(cmd)
    }

    /// Like [`OneTimeSubmit::flush`] but releases the buffer back to its pool
    /// once the work has completed.
    pub fn flush_and_free(&self, cmd: CommandBuffer) -> CommandResult<()> {
        self.submit_with_fence(&cmd)
    }

    fn submit_with_fence(&self, cmd: &CommandBuffer) -> CommandResult<()> {
        let fence = Fence::new(self.vk_dev.clone())?;
        let queue = self.pool.queue;

        unsafe {
            queue.submit(&self.vk_dev.logical_device, &[], &[cmd.raw], &[], Some(&fence))?;
        }
        log::trace!("one-time submission sent to queue family {}", queue.family_id);

        let waited = match self.timeout {
            Some(timeout) => fence.wait_timeout(timeout),
            None => fence.wait(),
        };
        if let Err(error) = waited {
            // The buffer and fence may still be in use by the GPU. Drain the
            // queue so dropping them below is valid.
            if let Err(idle_error) = queue.wait_idle(&self.vk_dev.logical_device) {
                log::error!("unable to drain queue after failed fence wait: {}", idle_error);
            }
            return Err(error.into());
        }
        log::trace!("one-time submission completed");

        Ok(())
    }
}
