use crate::animation::{Cue, Stage};
use crate::model::{blobby_man, Pose, Segment};
use crate::renderer::{FrameRecorder, Renderer};
use crate::scene::{render_scene, CameraState, Palette, SceneLayout};
use crate::settings::Settings;
use crate::ui::{status_line, Overlay};
use egui_wgpu::ScreenDescriptor;
use egui_winit::State;
use std::sync::Arc;
use winit::window::Window;

/// The window as a stage: every presented pose is traversed, uploaded and shown at once.
pub struct Screen {
    pub window: Arc<Window>,
    pub(crate) renderer: Renderer,
    egui_state: State,
    overlay: Overlay,
    figure: Segment,
    camera: CameraState,
    layout: SceneLayout,
    palette: Palette,
    pub auto_rotate: bool,
}

impl Screen {
    pub fn new(window: Arc<Window>, renderer: Renderer, settings: &Settings) -> Self {
        let egui_state = State::new(
            renderer.egui_context(),
            egui::viewport::ViewportId::ROOT,
            &window,
            None,
            None,
            None,
        );

        let figure = blobby_man();
        log::debug!("figure built with {} ellipsoids", figure.blob_count());

        Self {
            window,
            renderer,
            egui_state,
            overlay: Overlay::new(settings.display.show_labels, settings.display.show_hud),
            figure,
            camera: CameraState::default(),
            layout: settings.display.layout(),
            palette: settings.colors.palette(),
            auto_rotate: false,
        }
    }

    pub fn on_window_event(&mut self, event: &winit::event::WindowEvent) -> bool {
        self.egui_state.on_window_event(&self.window, event).repaint
    }

    fn draw(&mut self, pose: &Pose, cue: Option<&Cue>) -> Result<(), wgpu::SurfaceError> {
        let mut frame = FrameRecorder::new();
        render_scene(
            &mut frame,
            pose,
            &self.figure,
            &self.camera,
            &self.layout,
            &self.palette,
        );

        let (width, height) = self.renderer.size();
        let pixels_per_point = self.window.scale_factor() as f32;
        let size = egui::vec2(
            width as f32 / pixels_per_point,
            height as f32 / pixels_per_point,
        );
        let status = status_line(cue, self.auto_rotate);

        let raw_input = self.egui_state.take_egui_input(&self.window);
        let egui_ctx = self.renderer.egui_context();
        let full_output = egui_ctx.run(raw_input, |ctx| {
            self.overlay.show(ctx, &frame, size, &status);
        });
        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);
        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point,
        };

        self.renderer.render(
            &frame,
            paint_jobs,
            full_output.textures_delta,
            screen_descriptor,
        )
    }
}

impl Stage for Screen {
    fn present(&mut self, pose: &Pose, cue: Option<&Cue>) {
        match self.draw(pose, cue) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("surface lost, reconfiguring");
                self.renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::Timeout) => log::warn!("surface timeout, frame skipped"),
            Err(e) => log::error!("render error: {e:?}"),
        }
    }
}
