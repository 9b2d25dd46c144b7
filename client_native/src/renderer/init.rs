use std::sync::Arc;

use anyhow::Context;
use game_core::Config;
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

pub const WINDOW_TITLE: &str = "Pong";

pub struct PixelsContext {
    pub window: Arc<Window>,
    pub pixels: Pixels<'static>,
    pub size: (u32, u32),
}

/// Open the game window and a pixel buffer the size of the arena
pub fn init_pixels(event_loop: &ActiveEventLoop, config: &Config) -> anyhow::Result<PixelsContext> {
    let width = config.arena_width as u32;
    let height = config.arena_height as u32;

    let attrs = Window::default_attributes()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(width, height))
        .with_resizable(false);
    let window = Arc::new(
        event_loop
            .create_window(attrs)
            .context("failed to create window")?,
    );

    let window_size = window.inner_size();
    let surface = SurfaceTexture::new(window_size.width, window_size.height, Arc::clone(&window));
    let pixels = Pixels::new(width, height, surface).context("failed to create pixel surface")?;

    tracing::info!(
        width,
        height,
        scale_factor = window.scale_factor(),
        "window created"
    );

    Ok(PixelsContext {
        window,
        pixels,
        size: (width, height),
    })
}
