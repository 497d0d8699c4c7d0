use ::ash::vk;

use crate::{
    errors::BufferError,
    vulkan::{buffer::Buffer, command_buffer::OneTimeSubmit},
};

/// Copies `region` from `src` into `dst` and blocks until the copy landed.
pub fn copy_buffer(
    executor: &OneTimeSubmit,
    src: &Buffer,
    dst: &Buffer,
    region: vk::BufferCopy,
) -> Result<(), BufferError> {
    check_region(&region, src.size(), dst.size())?;
    if region.size == 0 {
        return Ok(());
    }
    executor.submit_and_wait(|vk_dev, cmd| unsafe {
        vk_dev.logical_device.cmd_copy_buffer(cmd, src.raw, dst.raw, &[region]);
        cmd_host_read_barrier(&vk_dev.logical_device, cmd);
    })?;
    Ok(())
}

/// Copies as many bytes as both buffers can hold, starting at offset zero.
pub fn copy_whole_buffer(
    executor: &OneTimeSubmit,
    src: &Buffer,
    dst: &Buffer,
) -> Result<(), BufferError> {
    let region = vk::BufferCopy { src_offset: 0, dst_offset: 0, size: src.size().min(dst.size()) };
    copy_buffer(executor, src, dst, region)
}

/// Makes every transfer write recorded so far available to host reads once
/// the submission's fence has signaled.
///
/// # Safety
///
/// `cmd` must be in the recording state, outside of a render pass.
pub unsafe fn cmd_host_read_barrier(device: &ash::Device, cmd: vk::CommandBuffer) {
    device.cmd_pipeline_barrier(
        cmd,
        vk::PipelineStageFlags::TRANSFER,
        vk::PipelineStageFlags::HOST,
        vk::DependencyFlags::empty(),
        &[transfer_to_host_barrier()],
        &[],
        &[],
    );
}

fn transfer_to_host_barrier() -> vk::MemoryBarrier<'static> {
    vk::MemoryBarrier {
        src_access_mask: vk::AccessFlags::TRANSFER_WRITE,
        dst_access_mask: vk::AccessFlags::HOST_READ,
        ..Default::default()
    }
}

fn check_region(region: &vk::BufferCopy, src_size: u64, dst_size: u64) -> Result<(), BufferError> {
    let fits = |offset: u64, size: u64| offset.checked_add(region.size).is_some_and(|end| end <= size);
    if fits(region.src_offset, src_size) && fits(region.dst_offset, dst_size) {
        Ok(())
    } else {
        Err(BufferError::CopyOutOfBounds { region: *region, src_size, dst_size })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn region(src_offset: u64, dst_offset: u64, size: u64) -> vk::BufferCopy {
        vk::BufferCopy { src_offset, dst_offset, size }
    }

    #[test]
    fn test_region_inside_both_buffers() {
        assert!(check_region(&region(0, 0, 64), 64, 64).is_ok());
        assert!(check_region(&region(16, 32, 32), 48, 64).is_ok());
    }

    #[test]
    fn test_region_past_source_end() {
        let result = check_region(&region(8, 0, 64), 64, 128);
        assert!(matches!(result, Err(BufferError::CopyOutOfBounds { src_size: 64, .. })));
    }

    #[test]
    fn test_region_past_destination_end() {
        let result = check_region(&region(0, 65, 64), 128, 128);
        assert!(matches!(result, Err(BufferError::CopyOutOfBounds { dst_size: 128, .. })));
    }

    #[test]
    fn test_region_offset_overflow() {
        assert!(check_region(&region(u64::MAX, 0, 1), u64::MAX, 16).is_err());
    }

    #[test]
    fn test_transfer_writes_are_made_host_readable() {
        let barrier = transfer_to_host_barrier();
        assert_eq!(barrier.s_type, vk::StructureType::MEMORY_BARRIER);
        assert_eq!(barrier.src_access_mask, vk::AccessFlags::TRANSFER_WRITE);
        assert_eq!(barrier.dst_access_mask, vk::AccessFlags::HOST_READ);
    }

    #[test]
    fn test_empty_region_at_end() {
        assert!(check_region(&region(64, 64, 0), 64, 64).is_ok());
    }
}
