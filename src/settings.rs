use crate::animation::{Director, PacingMode};
use crate::input::InputHandler;
use crate::scene::{Palette, SceneLayout};
use crate::CONFY_APP_NAME;

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub window_width: f64,
    pub window_height: f64,
    pub show_grid: bool,
    pub show_labels: bool,
    pub show_hud: bool,
    /// Floor offsets of the figures drawn; one entry per dancer.
    pub troupe: Vec<[f32; 2]>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            window_width: 512.0,
            window_height: 512.0,
            show_grid: true,
            show_labels: true,
            show_hud: true,
            troupe: vec![[0.0, 0.0]],
        }
    }
}

impl DisplaySettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "display").unwrap_or_default()
    }

    pub fn layout(&self) -> SceneLayout {
        let mut layout = SceneLayout {
            show_grid: self.show_grid,
            ..SceneLayout::default()
        };
        if !self.troupe.is_empty() {
            layout.troupe = self.troupe.clone();
        }
        layout
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorSettings {
    pub background: [f32; 3],
    pub body: [f32; 3],
    pub eyes: [f32; 3],
    pub mouth: [f32; 3],
    pub grid_minor: [f32; 3],
    pub grid_major: [f32; 3],
}

impl Default for ColorSettings {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            background: [1.0, 1.0, 1.0],
            body: palette.body,
            eyes: palette.eyes,
            mouth: palette.mouth,
            grid_minor: palette.grid_minor,
            grid_major: palette.grid_major,
        }
    }
}

impl ColorSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "colors").unwrap_or_default()
    }

    pub fn palette(&self) -> Palette {
        Palette {
            body: self.body,
            eyes: self.eyes,
            mouth: self.mouth,
            grid_minor: self.grid_minor,
            grid_major: self.grid_major,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingSettings {
    pub step_delay_ms: u64,
    pub jump_delay_ms: u64,
    /// Off: dances run as fast as frames can be presented.
    pub real_time: bool,
    pub sway_swings: u32,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            step_delay_ms: 60,
            jump_delay_ms: 10,
            real_time: true,
            sway_swings: 4,
        }
    }
}

impl TimingSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "timing").unwrap_or_default()
    }

    pub fn director(&self) -> Director {
        let mode = if self.real_time {
            PacingMode::RealTime
        } else {
            PacingMode::Unpaced
        };
        Director::new(
            mode,
            Duration::from_millis(self.step_delay_ms),
            Duration::from_millis(self.jump_delay_ms),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlSettings {
    pub spin_step: f32,
    pub joint_step: f32,
    pub auto_rotate_step: f32,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            spin_step: 15.0,
            joint_step: 15.0,
            auto_rotate_step: 0.5,
        }
    }
}

impl ControlSettings {
    pub fn load() -> Self {
        confy::load(CONFY_APP_NAME, "controls").unwrap_or_default()
    }
}

// Aggregate struct for convenience
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub display: DisplaySettings,
    pub colors: ColorSettings,
    pub timing: TimingSettings,
    pub controls: ControlSettings,
}

impl Settings {
    pub fn load() -> Self {
        Self {
            display: DisplaySettings::load(),
            colors: ColorSettings::load(),
            timing: TimingSettings::load(),
            controls: ControlSettings::load(),
        }
    }

    pub fn input_handler(&self) -> InputHandler {
        InputHandler {
            spin_step: self.controls.spin_step,
            joint_step: self.controls.joint_step,
            auto_rotate_step: self.controls.auto_rotate_step,
            sway_swings: self.timing.sway_swings,
            auto_rotate: false,
            director: self.timing.director(),
        }
    }
}
