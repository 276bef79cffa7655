//! First program: open a window, report the GPU, clear every frame.

use anyhow::Result;
use winit::dpi::LogicalSize;

use firstlight_engine::core::{self, App, AppControl, FrameCtx};
use firstlight_engine::device::{Gpu, GpuInit};
use firstlight_engine::logging::{init_logging, LoggingConfig};
use firstlight_engine::paint::Color;
use firstlight_engine::window::{Runtime, RuntimeConfig};

const TITLE: &str = "firstlight: first window";
const CLEAR: Color = Color::rgb(1.0, 0.3, 0.3);

struct FirstWindow;

impl App for FirstWindow {
    fn init(&mut self, gpu: &Gpu<'_>) -> Result<()> {
        let info = gpu.adapter_info();
        println!("GPU adapter: {}", info.name);
        println!("GPU backend: {:?}", info.backend);
        println!("GPU device type: {:?}", info.device_type);
        println!("GPU driver: {} {}", info.driver, info.driver_info);
        println!("Surface format: {:?}", gpu.surface_format());
        println!();
        println!("Application initialized successfully!");
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        ctx.render(CLEAR, |_| {})
    }
}

fn main() {
    init_logging(LoggingConfig::default());
    println!("Initializing firstlight application ...");

    let config = RuntimeConfig {
        title: TITLE.to_string(),
        initial_size: LogicalSize::new(800.0, 600.0),
        ..RuntimeConfig::default()
    };

    core::finish(Runtime::run(config, GpuInit::default(), FirstWindow));
}
