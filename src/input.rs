use crate::animation::{hip_sway, jump, macarena, wave, Director, Stage};
use crate::model::{Joint, Pose, Side};

pub const USAGE: &str = "\
Blobby Man keys:
  h      this help
  q      quit
  m      dance the macarena
  y      sway the hips
  w / W  wave the left / right arm
  j      jump
  b / B  spin the camera
  r      toggle auto-rotate
  t / T  rotate the torso
  n / N  turn the head
  s / S  raise / lower both shoulders
  d / D  twist both arms
  a / A  bend both elbows
  l / L  bend both knees
  f / F  bend both hands";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dance {
    Macarena,
    Sway,
    Wave(Side),
    Jump,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Quit,
    /// Camera spin by one step, +1 or -1.
    Spin(f32),
    /// Every listed joint by one step, +1 or -1.
    Nudge(&'static [Joint], f32),
    Dance(Dance),
    ToggleAutoRotate,
}

impl Command {
    /// Maps a typed character to its command; unbound keys give `None`.
    pub fn from_key(key: &str) -> Option<Command> {
        const TORSO: &[Joint] = &[Joint::TorsoRotation];
        const NECK: &[Joint] = &[Joint::HeadTurn];
        const SHOULDERS: &[Joint] = &[Joint::LeftShoulder, Joint::RightShoulder];
        const ARM_TWISTS: &[Joint] = &[Joint::LeftArmTwist, Joint::RightArmTwist];
        const ELBOWS: &[Joint] = &[Joint::LeftElbow, Joint::RightElbow];
        const KNEES: &[Joint] = &[Joint::LeftKnee, Joint::RightKnee];
        const HANDS: &[Joint] = &[Joint::LeftHand, Joint::RightHand];

        let command = match key {
            "h" => Command::Help,
            "q" => Command::Quit,
            "b" => Command::Spin(1.0),
            "B" => Command::Spin(-1.0),
            "m" => Command::Dance(Dance::Macarena),
            "y" => Command::Dance(Dance::Sway),
            "w" => Command::Dance(Dance::Wave(Side::Left)),
            "W" => Command::Dance(Dance::Wave(Side::Right)),
            "j" => Command::Dance(Dance::Jump),
            "r" => Command::ToggleAutoRotate,
            "t" => Command::Nudge(TORSO, 1.0),
            "T" => Command::Nudge(TORSO, -1.0),
            "n" => Command::Nudge(NECK, 1.0),
            "N" => Command::Nudge(NECK, -1.0),
            "s" => Command::Nudge(SHOULDERS, 1.0),
            "S" => Command::Nudge(SHOULDERS, -1.0),
            "d" => Command::Nudge(ARM_TWISTS, 1.0),
            "D" => Command::Nudge(ARM_TWISTS, -1.0),
            "a" => Command::Nudge(ELBOWS, 1.0),
            "A" => Command::Nudge(ELBOWS, -1.0),
            "l" => Command::Nudge(KNEES, 1.0),
            "L" => Command::Nudge(KNEES, -1.0),
            "f" => Command::Nudge(HANDS, 1.0),
            "F" => Command::Nudge(HANDS, -1.0),
            _ => return None,
        };
        Some(command)
    }
}

/// What the event loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Nothing left to draw: the command presented its own frames or changed nothing.
    Continue,
    /// The screen is stale and needs one more frame.
    Redraw,
    Exit,
}

/// Applies commands to the pose and shows the result.
#[derive(Debug, Clone)]
pub struct InputHandler {
    pub spin_step: f32,
    pub joint_step: f32,
    pub auto_rotate_step: f32,
    pub sway_swings: u32,
    pub auto_rotate: bool,
    pub director: Director,
}

impl InputHandler {
    pub fn apply<S: Stage + ?Sized>(
        &mut self,
        command: &Command,
        pose: &mut Pose,
        stage: &mut S,
    ) -> Flow {
        log::debug!("command {:?}", command);
        match command {
            Command::Help => println!("{USAGE}"),
            Command::Quit => return Flow::Exit,
            Command::Spin(sign) => {
                pose.nudge(Joint::CameraSpin, sign * self.spin_step);
                stage.present(pose, None);
            }
            Command::Nudge(joints, sign) => {
                for &joint in joints.iter() {
                    pose.nudge(joint, sign * self.joint_step);
                }
                stage.present(pose, None);
            }
            Command::Dance(dance) => {
                let choreography = match dance {
                    Dance::Macarena => macarena(),
                    Dance::Sway => hip_sway(self.sway_swings),
                    Dance::Wave(side) => wave(*side),
                    Dance::Jump => jump(),
                };
                let playback = self.director.play(&choreography, pose, stage);
                log::debug!(
                    "{} frames presented, {:?} nominal",
                    playback.frames,
                    playback.paced
                );
                // the last frame still carries the dance status
                return Flow::Redraw;
            }
            Command::ToggleAutoRotate => {
                self.auto_rotate = !self.auto_rotate;
                log::info!("auto-rotate {}", if self.auto_rotate { "on" } else { "off" });
                return Flow::Redraw;
            }
        }
        Flow::Continue
    }

    /// Advances the camera spin while auto-rotate is on. Returns whether the pose changed.
    pub fn idle(&self, pose: &mut Pose) -> bool {
        if self.auto_rotate {
            pose.nudge(Joint::CameraSpin, self.auto_rotate_step);
        }
        self.auto_rotate
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self {
            spin_step: 15.0,
            joint_step: 15.0,
            auto_rotate_step: 0.5,
            sway_swings: 4,
            auto_rotate: false,
            director: Director::default(),
        }
    }
}
