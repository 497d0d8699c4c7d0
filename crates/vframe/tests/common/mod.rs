use std::{
    sync::{Arc, OnceLock},
    time::Instant,
};

use log::{Level, LevelFilter, Metadata, Record};
use vframe::vulkan::{
    allocator::{create_default_allocator, MemoryAllocator},
    render_device::RenderDevice,
};

struct Logger {
    time_start: Instant,
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let time = self.time_start.elapsed().as_secs_f64();
            let level = match record.level() {
                Level::Error => "ERRO",
                Level::Warn => "WARN",
                Level::Info => "INFO",
                Level::Debug => "DEBG",
                Level::Trace => "TRCE",
            };
            println!("[{time:>12.6}] {level} {}", record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub fn initialize_logger() {
    let logger = LOGGER.get_or_init(|| Logger { time_start: Instant::now() });
    // Every test binary calls this from several tests; only the first wins.
    if log::set_logger(logger).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
}

pub struct Gpu {
    pub vk_dev: Arc<RenderDevice>,
    pub vk_alloc: Arc<dyn MemoryAllocator>,
}

/// A headless device. GPU tests are `#[ignore]`d, so reaching this without
/// a usable Vulkan implementation is a test failure.
pub fn headless_gpu() -> anyhow::Result<Gpu> {
    initialize_logger();
    let vk_dev = Arc::new(RenderDevice::headless()?);
    let vk_alloc = create_default_allocator(vk_dev.clone());
    Ok(Gpu { vk_dev, vk_alloc })
}
