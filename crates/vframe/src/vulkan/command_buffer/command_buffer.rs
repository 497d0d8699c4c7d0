use std::sync::Arc;

use ::ash::vk;

use crate::{
    errors::CommandBufferError,
    vulkan::{command_buffer::CommandPool, render_device::RenderDevice},
};

pub struct CommandBuffer {
    pub raw: vk::CommandBuffer,

    pub pool: Arc<CommandPool>,

    pub vk_dev: Arc<RenderDevice>,
}

impl CommandBuffer {
    pub fn new(
        pool: Arc<CommandPool>,
        command_level: vk::CommandBufferLevel,
    ) -> Result<Self, CommandBufferError> {
        let raw = unsafe { pool.allocate_command_buffer(command_level)? };
        Ok(Self { raw, vk_dev: pool.vk_dev.clone(), pool })
    }

    pub fn new_primary(pool: Arc<CommandPool>) -> Result<Self, CommandBufferError> {
        Self::new(pool, vk::CommandBufferLevel::PRIMARY)
    }

    /// Begins recording for a single submission. After it executes, the
    /// buffer must be re-recorded before it can be submitted again.
    pub fn begin_one_time(&self) -> Result<(), CommandBufferError> {
        self.begin(vk::CommandBufferUsageFlags::ONE_TIME_SUBMIT)
    }

    /// Begins recording a buffer that may be submitted any number of times.
    pub fn begin_reusable(&self) -> Result<(), CommandBufferError> {
        self.begin(vk::CommandBufferUsageFlags::empty())
    }

    pub fn begin(&self, flags: vk::CommandBufferUsageFlags) -> Result<(), CommandBufferError> {
        let begin_info = vk::CommandBufferBeginInfo { flags, ..Default::default() };
        unsafe {
            self.vk_dev
                .logical_device
                .begin_command_buffer(self.raw, &begin_info)
                .map_err(CommandBufferError::UnableToBeginCommandBuffer)
        }
    }

    pub fn end(&self) -> Result<(), CommandBufferError> {
        unsafe {
            self.vk_dev
                .logical_device
                .end_command_buffer(self.raw)
                .map_err(CommandBufferError::UnableToEndCommandBuffer)
        }
    }
}

impl Drop for CommandBuffer {
    fn drop(&mut self) {
        unsafe {
            self.pool.free_command_buffer(self.raw);
        }
    }
}
