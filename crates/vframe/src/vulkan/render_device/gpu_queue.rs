use ash::vk;

use crate::{errors::QueueError, vulkan::sync::Fence};

#[derive(Debug, Clone, Copy)]
pub struct GpuQueue {
    pub queue: vk::Queue,
    pub family_id: u32,
    pub index: u32,
}

impl GpuQueue {
    pub fn from_raw(queue: vk::Queue, family_id: u32, index: u32) -> Self {
        Self { queue, family_id, index }
    }

    /// Submits `command_buffers` as a single batch.
    ///
    /// # Safety
    ///
    /// Every command buffer must have finished recording, and every semaphore
    /// and the fence must belong to `device`. The fence, when given, must be
    /// unsignaled.
    pub unsafe fn submit(
        &self,
        device: &ash::Device,
        wait_semaphores: &[(vk::Semaphore, vk::PipelineStageFlags)],
        command_buffers: &[vk::CommandBuffer],
        signal_semaphores: &[vk::Semaphore],
        fence: Option<&Fence>,
    ) -> Result<(), QueueError> {
        let (semaphores, stages): (Vec<vk::Semaphore>, Vec<vk::PipelineStageFlags>) =
            wait_semaphores.iter().copied().unzip();
        let submit_info = vk::SubmitInfo {
            wait_semaphore_count: semaphores.len() as u32,
            p_wait_semaphores: semaphores.as_ptr(),
            p_wait_dst_stage_mask: stages.as_ptr(),
            command_buffer_count: command_buffers.len() as u32,
            p_command_buffers: command_buffers.as_ptr(),
            signal_semaphore_count: signal_semaphores.len() as u32,
            p_signal_semaphores: signal_semaphores.as_ptr(),
            ..Default::default()
        };
        let fence = fence.map_or(vk::Fence::null(), |fence| fence.raw);
        device
            .queue_submit(self.queue, &[submit_info], fence)
            .map_err(|err| QueueError::UnableToSubmit(self.family_id, err))
    }

    pub fn wait_idle(&self, device: &ash::Device) -> Result<(), QueueError> {
        unsafe {
            device
                .queue_wait_idle(self.queue)
                .map_err(|err| QueueError::UnableToWaitIdle(self.family_id, err))
        }
    }
}
