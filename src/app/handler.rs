use crate::app::app::App;
use crate::error::BlobbyError;
use crate::settings::Settings;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

pub struct AppHandler {
    pub app: Option<App>,
    pub settings: Settings,
    /// Set when startup failed; the event loop is asked to exit.
    pub error: Option<BlobbyError>,
}

impl AppHandler {
    pub fn new(settings: Settings) -> Self {
        Self {
            app: None,
            settings,
            error: None,
        }
    }

    fn start(&self, event_loop: &ActiveEventLoop) -> Result<App, BlobbyError> {
        let window_attrs = Window::default_attributes()
            .with_title("Blobby Man")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.settings.display.window_width,
                self.settings.display.window_height,
            ));

        let window = event_loop.create_window(window_attrs)?;
        App::new(Arc::new(window), &self.settings)
    }
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_some() || self.error.is_some() {
            return;
        }

        match self.start(event_loop) {
            Ok(app) => {
                log::info!("window ready, press h for help");
                app.screen.window.request_redraw();
                self.app = Some(app);
            }
            Err(e) => {
                log::error!("startup failed: {e}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(app) = &mut self.app {
            let response = app.handle_event(&event);
            if response.repaint {
                app.screen.window.request_redraw();
            }
            if response.exit {
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(app) = &mut self.app {
            if app.idle() {
                app.screen.window.request_redraw();
            }
        }
    }
}
