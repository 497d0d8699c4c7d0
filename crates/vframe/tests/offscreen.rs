mod common;

use anyhow::Result;
use ash::vk;
use vframe::{BufferMode, OffscreenSurface, OffscreenSurfaceConfig, PresentSurface};

#[test]
#[ignore = "requires a Vulkan device"]
fn test_double_buffer_surface() -> Result<()> {
    let gpu = common::headless_gpu()?;
    let config = OffscreenSurfaceConfig::new(64, 32);
    let mut surface = OffscreenSurface::new(gpu.vk_dev.clone(), gpu.vk_alloc.clone(), &config)?;

    assert_eq!(surface.slot_count(), 2);
    assert_eq!(surface.extent(), vk::Extent2D { width: 64, height: 32 });
    assert_eq!(surface.format(), vk::Format::R8G8B8A8_UNORM);

    assert_eq!(surface.acquire_write_slot(), 1);
    surface.present();
    assert_eq!(surface.acquire_write_slot(), 0);
    assert_eq!(surface.read_slot(), 1);
    Ok(())
}

#[test]
#[ignore = "requires a Vulkan device"]
fn test_triple_buffer_surface_slots() -> Result<()> {
    let gpu = common::headless_gpu()?;
    let config = OffscreenSurfaceConfig::new(16, 16).mode(BufferMode::TripleBuffer);
    let mut surface = OffscreenSurface::new(gpu.vk_dev.clone(), gpu.vk_alloc.clone(), &config)?;

    assert_eq!(surface.slot_count(), 3);
    for index in 0 .. 3 {
        let image = surface.image(index).expect("slot image");
        let view = surface.view(index).expect("slot view");
        assert_eq!(view.image.raw, image.raw);
        assert_eq!(image.extent, vk::Extent3D { width: 16, height: 16, depth: 1 });
        assert!(image.usage.contains(
            vk::ImageUsageFlags::COLOR_ATTACHMENT | vk::ImageUsageFlags::SAMPLED
        ));
    }
    assert!(surface.image(3).is_none());
    assert!(surface.image_available().is_none());

    let initial = *surface.rotation();
    for _ in 0 .. 3 {
        surface.present();
    }
    assert_eq!(*surface.rotation(), initial);
    Ok(())
}

#[test]
#[ignore = "requires a Vulkan device"]
fn test_destroy_twice() -> Result<()> {
    let gpu = common::headless_gpu()?;
    let config = OffscreenSurfaceConfig::new(8, 8);
    let mut surface = OffscreenSurface::new(gpu.vk_dev.clone(), gpu.vk_alloc.clone(), &config)?;

    surface.destroy();
    assert!(surface.is_destroyed());
    assert_eq!(surface.slot_count(), 0);
    surface.destroy();
    assert!(surface.is_destroyed());

    let rotation = *surface.rotation();
    surface.present();
    assert_eq!(*surface.rotation(), rotation);
    Ok(())
}

#[test]
#[ignore = "requires a Vulkan device"]
fn test_invalid_config_is_rejected() -> Result<()> {
    let gpu = common::headless_gpu()?;
    let config = OffscreenSurfaceConfig::new(0, 8);
    let result = OffscreenSurface::new(gpu.vk_dev.clone(), gpu.vk_alloc.clone(), &config);
    assert!(matches!(result, Err(vframe::errors::SurfaceError::InvalidExtent(0, 8))));
    Ok(())
}

#[test]
#[ignore = "requires a Vulkan device"]
#[cfg(debug_assertions)]
#[should_panic(expected = "destroyed surface")]
fn test_write_slot_of_destroyed_surface() {
    let gpu = common::headless_gpu().expect("headless device");
    let config = OffscreenSurfaceConfig::new(8, 8).mode(BufferMode::TripleBuffer);
    let mut surface = OffscreenSurface::new(gpu.vk_dev.clone(), gpu.vk_alloc.clone(), &config)
        .expect("off-screen surface");

    surface.destroy();
    surface.acquire_write_slot();
}
