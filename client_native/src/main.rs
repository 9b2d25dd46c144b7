mod app;
mod audio;
mod clock;
mod input;
mod menu;
mod renderer;
mod session;

use anyhow::Context;
use game_core::Config;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::new();
    let sink = audio::open_output().context("failed to start audio")?;

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = app::App::new(config, sink);
    event_loop.run_app(&mut app).context("event loop failed")?;

    tracing::info!("exiting");
    app.finish()
}
