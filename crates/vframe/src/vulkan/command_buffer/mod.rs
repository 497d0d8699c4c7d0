pub use self::{
    command_buffer::CommandBuffer, command_pool::CommandPool, one_time_submit::OneTimeSubmit,
};

mod command_buffer;
mod command_pool;
mod one_time_submit;
