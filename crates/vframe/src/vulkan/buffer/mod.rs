pub use self::{
    buffer::Buffer,
    copy::{cmd_host_read_barrier, copy_buffer, copy_whole_buffer},
};

mod buffer;
mod copy;
