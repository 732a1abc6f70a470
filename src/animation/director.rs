use super::choreography::{Choreography, Tempo};
use crate::model::Pose;
use std::time::Duration;

/// Where frames are shown. `cue` is set while a choreography is running.
pub trait Stage {
    fn present(&mut self, pose: &Pose, cue: Option<&Cue>);
}

/// Position inside a running choreography, handed to the stage with every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    pub choreography: &'static str,
    pub cycle: u32,
    pub cycles: u32,
    pub phase: usize,
    pub phase_label: &'static str,
    /// Frame inside the phase, from 1.
    pub frame: u32,
    /// Frames presented so far in this run, including this one.
    pub total: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacingMode {
    /// Sleep between frames as the demo did.
    RealTime,
    /// Present frames back to back.
    Unpaced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    pub frames: u32,
    /// Time the run would take in real-time mode, whatever the actual mode.
    pub paced: Duration,
}

#[derive(Debug, Clone)]
pub struct Director {
    pub mode: PacingMode,
    pub step_delay: Duration,
    pub jump_delay: Duration,
}

impl Director {
    pub fn new(mode: PacingMode, step_delay: Duration, jump_delay: Duration) -> Self {
        Self {
            mode,
            step_delay,
            jump_delay,
        }
    }

    #[cfg(test)]
    pub fn unpaced() -> Self {
        Self {
            mode: PacingMode::Unpaced,
            ..Self::default()
        }
    }

    fn delay(&self, tempo: Tempo) -> Duration {
        match tempo {
            Tempo::Step => self.step_delay,
            Tempo::Jump => self.jump_delay,
        }
    }

    /// Runs `choreography` to completion on the calling thread.
    ///
    /// Each frame applies the phase delta once, then presents, then waits.
    pub fn play<S: Stage + ?Sized>(
        &self,
        choreography: &Choreography,
        pose: &mut Pose,
        stage: &mut S,
    ) -> Playback {
        log::info!(
            "dancing {} ({} frames, {:?})",
            choreography.name,
            choreography.frame_count(),
            self.mode
        );

        if choreography.resets_pose {
            pose.reset_to_rest();
        }

        let mut playback = Playback {
            frames: 0,
            paced: Duration::ZERO,
        };

        for cycle in 1..=choreography.cycles {
            for (index, phase) in choreography.phases.iter().enumerate() {
                log::debug!(
                    "{} cycle {}/{} phase {}: {}",
                    choreography.name,
                    cycle,
                    choreography.cycles,
                    index,
                    phase.label
                );
                let delay = self.delay(phase.tempo);

                for frame in 1..=phase.frames {
                    phase.delta.apply(pose);
                    playback.frames += 1;

                    let cue = Cue {
                        choreography: choreography.name,
                        cycle,
                        cycles: choreography.cycles,
                        phase: index,
                        phase_label: phase.label,
                        frame,
                        total: playback.frames,
                    };
                    stage.present(pose, Some(&cue));

                    playback.paced += delay;
                    if self.mode == PacingMode::RealTime && !delay.is_zero() {
                        std::thread::sleep(delay);
                    }
                }
            }
        }

        log::info!("{} finished after {} frames", choreography.name, playback.frames);
        playback
    }
}

impl Default for Director {
    fn default() -> Self {
        Self {
            mode: PacingMode::RealTime,
            step_delay: Duration::from_millis(60),
            jump_delay: Duration::from_millis(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::choreography::{hip_sway, jump, macarena, wave};
    use crate::model::Side;
    use approx::assert_relative_eq;

    #[derive(Default)]
    struct RecordingStage {
        cues: Vec<Cue>,
        poses: Vec<Pose>,
    }

    impl Stage for RecordingStage {
        fn present(&mut self, pose: &Pose, cue: Option<&Cue>) {
            self.cues.extend(cue.cloned());
            self.poses.push(pose.clone());
        }
    }

    fn dance(choreography: &Choreography, start: Pose) -> (Pose, RecordingStage, Playback) {
        let mut pose = start;
        let mut stage = RecordingStage::default();
        let playback = Director::unpaced().play(choreography, &mut pose, &mut stage);
        (pose, stage, playback)
    }

    #[test]
    fn macarena_presents_every_frame() {
        let (_, stage, playback) = dance(&macarena(), Pose::initial());
        assert_eq!(playback.frames, 448);
        assert_eq!(stage.cues.len(), 448);
        assert_eq!(stage.cues.last().map(|cue| cue.total), Some(448));
        assert_eq!(stage.cues[112].cycle, 2);
        assert_eq!(stage.cues[112].phase, 0);
        assert_eq!(stage.cues[112].frame, 1);
    }

    #[test]
    fn macarena_is_deterministic() {
        let (first, _, _) = dance(&macarena(), Pose::initial());

        // starting pose does not matter, the dance resets first
        let mut twisted = Pose::initial();
        twisted.right_knee = 170.0;
        twisted.jump = 3.0;
        let (second, _, _) = dance(&macarena(), twisted);

        assert_eq!(first, second);
    }

    #[test]
    fn macarena_ends_near_rest_after_full_turn() {
        let (pose, _, _) = dance(&macarena(), Pose::initial());
        let mut rest = Pose::initial();
        rest.reset_to_rest();

        assert_relative_eq!(pose.turn, -360.0, epsilon = 1e-3);
        assert_relative_eq!(pose.jump, 0.0, epsilon = 1e-4);
        assert_relative_eq!(pose.right_shoulder, rest.right_shoulder, epsilon = 1e-3);
        assert_relative_eq!(pose.left_elbow, rest.left_elbow, epsilon = 1e-3);
        assert_relative_eq!(pose.torso_twist, 0.0, epsilon = 1e-3);
        assert_eq!(pose.camera_spin, rest.camera_spin);
    }

    #[test]
    fn first_frame_is_one_delta_from_rest() {
        let (_, stage, _) = dance(&macarena(), Pose::initial());
        let mut expected = Pose::initial();
        expected.reset_to_rest();
        macarena().phases[0].delta.apply(&mut expected);
        assert_eq!(stage.poses[0], expected);
    }

    #[test]
    fn paced_duration_follows_tempo() {
        let (_, _, playback) = dance(&macarena(), Pose::initial());
        let per_cycle = Duration::from_millis(64 * 60 + 48 * 10);
        assert_eq!(playback.paced, per_cycle * 4);
    }

    #[test]
    fn wave_sway_and_jump_lengths() {
        let (_, stage, _) = dance(&wave(Side::Right), Pose::initial());
        assert_eq!(stage.cues.len(), 8);
        assert!(stage.cues.iter().all(|cue| cue.choreography == "wave right"));

        let (_, stage, _) = dance(&hip_sway(3), Pose::initial());
        assert_eq!(stage.cues.len(), 48);
        assert_eq!(stage.cues[47].cycle, 3);

        let (pose, stage, _) = dance(&jump(), Pose::initial());
        assert_eq!(stage.cues.len(), 48);
        assert_relative_eq!(pose.turn, -90.0, epsilon = 1e-4);
    }

    #[test]
    fn wave_raises_the_arm_and_returns_the_hip() {
        let (pose, _, _) = dance(&wave(Side::Left), Pose::initial());
        assert_eq!(pose.left_shoulder, 72.0);
        assert_eq!(pose.left_elbow, 90.0 - 80.0);
        assert_eq!(pose.left_knee, 0.0);
        assert_eq!(pose.torso_twist, 0.0);
    }

    #[test]
    fn real_time_mode_sleeps() {
        let director = Director::new(
            PacingMode::RealTime,
            Duration::from_millis(1),
            Duration::from_millis(1),
        );
        let mut pose = Pose::initial();
        let mut stage = RecordingStage::default();
        let started = std::time::Instant::now();
        let playback = director.play(&wave(Side::Right), &mut pose, &mut stage);
        assert!(started.elapsed() >= Duration::from_millis(8));
        assert_eq!(playback.paced, Duration::from_millis(8));
    }
}
