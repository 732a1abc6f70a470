use anyhow::Context;
use error::BlobbyError;
use winit::event_loop::{ControlFlow, EventLoop};

mod animation;
mod app;
mod error;
mod input;
mod model;
mod renderer;
mod scene;
mod settings;
mod ui;

pub const CONFY_APP_NAME: &str = "blobby-man";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = settings::Settings::load();
    log::debug!("settings: {settings:?}");

    let event_loop = EventLoop::new().map_err(BlobbyError::from)?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut handler = app::AppHandler::new(settings);
    event_loop
        .run_app(&mut handler)
        .map_err(BlobbyError::from)
        .context("running event loop")?;

    if let Some(err) = handler.error.take() {
        return Err(anyhow::Error::new(err).context("Blobby Man could not start"));
    }

    Ok(())
}
