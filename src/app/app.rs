use crate::animation::Stage;
use crate::app::screen::Screen;
use crate::error::BlobbyError;
use crate::input::{Command, Flow, InputHandler};
use crate::model::Pose;
use crate::renderer::Renderer;
use crate::settings::Settings;
use std::sync::Arc;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::Key;
use winit::window::Window;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventResponse {
    pub repaint: bool,
    pub exit: bool,
}

impl EventResponse {
    /// Response to a key command. Commands that presented their own frame
    /// only repaint when egui asks for it.
    pub fn after(flow: Flow, egui_repaint: bool) -> Self {
        Self {
            repaint: egui_repaint || flow == Flow::Redraw,
            exit: flow == Flow::Exit,
        }
    }
}

pub struct App {
    pub screen: Screen,
    pose: Pose,
    input: InputHandler,
}

impl App {
    pub fn new(window: Arc<Window>, settings: &Settings) -> Result<Self, BlobbyError> {
        let size = window.inner_size();
        let renderer = pollster::block_on(Renderer::new(
            window.clone(),
            settings.colors.background,
        ))
        .map_err(|e| {
            BlobbyError::new("renderer-init")
                .with_arg("width", size.width)
                .with_arg("height", size.height)
                .push_blobby(e)
        })?;

        Ok(Self {
            screen: Screen::new(window, renderer, settings),
            pose: Pose::initial(),
            input: settings.input_handler(),
        })
    }

    pub fn handle_event(&mut self, event: &WindowEvent) -> EventResponse {
        let repaint = self.screen.on_window_event(event);

        match event {
            WindowEvent::CloseRequested => {
                return EventResponse {
                    repaint: false,
                    exit: true,
                };
            }
            WindowEvent::Resized(size) => {
                self.screen.renderer.resize(*size);
                return EventResponse {
                    repaint: true,
                    exit: false,
                };
            }
            WindowEvent::RedrawRequested => self.redraw(),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                let Key::Character(text) = &event.logical_key else {
                    return EventResponse {
                        repaint,
                        exit: false,
                    };
                };
                if let Some(command) = Command::from_key(text.as_str()) {
                    let flow = self.input.apply(&command, &mut self.pose, &mut self.screen);
                    self.screen.auto_rotate = self.input.auto_rotate;
                    return EventResponse::after(flow, repaint);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                log::trace!("mouse {button:?} {state:?} ignored");
            }
            _ => {}
        }

        EventResponse {
            repaint,
            exit: false,
        }
    }

    /// Per-iteration hook of the event loop; returns whether a new frame is needed.
    pub fn idle(&mut self) -> bool {
        self.input.idle(&mut self.pose)
    }

    pub fn redraw(&mut self) {
        self.screen.present(&self.pose, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Cue;

    #[derive(Default)]
    struct CountingStage {
        frames: usize,
    }

    impl Stage for CountingStage {
        fn present(&mut self, _pose: &Pose, _cue: Option<&Cue>) {
            self.frames += 1;
        }
    }

    /// Key press followed by the redraw the event loop would schedule.
    fn frames_for(key: &str) -> usize {
        let mut input = InputHandler::default();
        let mut pose = Pose::initial();
        let mut stage = CountingStage::default();

        let Some(command) = Command::from_key(key) else {
            return 0;
        };
        let response = EventResponse::after(input.apply(&command, &mut pose, &mut stage), false);
        if response.repaint {
            stage.present(&pose, None);
        }
        stage.frames
    }

    #[test]
    fn spin_key_renders_exactly_once() {
        assert_eq!(frames_for("b"), 1);
        assert_eq!(frames_for("B"), 1);
    }

    #[test]
    fn joint_keys_render_exactly_once() {
        for key in ["t", "T", "n", "s", "d", "a", "l", "f", "F"] {
            assert_eq!(frames_for(key), 1, "{key}");
        }
    }

    #[test]
    fn toggles_and_help() {
        assert_eq!(frames_for("r"), 1);
        assert_eq!(frames_for("h"), 0);
        assert_eq!(frames_for("x"), 0);
    }

    #[test]
    fn egui_repaint_is_kept_and_quit_exits() {
        assert!(EventResponse::after(Flow::Continue, true).repaint);
        assert_eq!(
            EventResponse::after(Flow::Exit, false),
            EventResponse {
                repaint: false,
                exit: true
            }
        );
    }
}
