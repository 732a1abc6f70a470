// Dance routines as data: each phase adds one pose delta per frame.

use crate::model::{Joint, Pose, Side};

/// Per-frame increments for a subset of joints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoseDelta {
    changes: Vec<(Joint, f32)>,
}

impl PoseDelta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to `joint`'s increment, merging with an existing entry.
    pub fn add(mut self, joint: Joint, amount: f32) -> Self {
        match self.changes.iter_mut().find(|(j, _)| *j == joint) {
            Some((_, existing)) => *existing += amount,
            None => self.changes.push((joint, amount)),
        }
        self
    }

    /// Both moves performed in the same frame.
    pub fn with(self, other: PoseDelta) -> Self {
        other
            .changes
            .into_iter()
            .fold(self, |delta, (joint, amount)| delta.add(joint, amount))
    }

    pub fn apply(&self, pose: &mut Pose) {
        for &(joint, amount) in &self.changes {
            pose.nudge(joint, amount);
        }
    }

    #[cfg(test)]
    pub fn get(&self, joint: Joint) -> f32 {
        self.changes
            .iter()
            .find(|(j, _)| *j == joint)
            .map(|(_, amount)| *amount)
            .unwrap_or(0.0)
    }
}

/// How long a frame is held in real-time playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tempo {
    Step,
    Jump,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub label: &'static str,
    pub delta: PoseDelta,
    pub frames: u32,
    pub tempo: Tempo,
}

impl Phase {
    fn step(label: &'static str, delta: PoseDelta) -> Self {
        Self {
            label,
            delta,
            frames: 4,
            tempo: Tempo::Step,
        }
    }

    fn jump(label: &'static str, delta: PoseDelta) -> Self {
        Self {
            label,
            delta,
            frames: 8,
            tempo: Tempo::Jump,
        }
    }
}

/// A named dance: `phases` played in order, `cycles` times.
#[derive(Debug, Clone, PartialEq)]
pub struct Choreography {
    pub name: &'static str,
    pub phases: Vec<Phase>,
    pub cycles: u32,
    /// Start from the rest pose instead of wherever the figure stands.
    pub resets_pose: bool,
}

impl Choreography {
    pub fn frames_per_cycle(&self) -> u32 {
        self.phases.iter().map(|phase| phase.frames).sum()
    }

    pub fn frame_count(&self) -> u32 {
        self.frames_per_cycle() * self.cycles
    }
}

// ---- moves ---------------------------------------------------------------

/// Lean onto one hip, bending the opposite knee. `sign` = -1 undoes it.
pub fn sway(side: Side, sign: f32) -> PoseDelta {
    let lean = match side {
        Side::Left => 1.0,
        Side::Right => -1.0,
    };
    PoseDelta::new()
        .add(Joint::TorsoTwist, lean * sign)
        .add(side.ankle(), -5.0 * sign)
        .add(side.leg_front(), 5.5 * sign)
        .add(side.knee(), -8.0 * sign)
}

/// Raise an arm half way to the front, palm down.
pub fn raise_arm(side: Side) -> PoseDelta {
    let mirror = -side.lateral_sign();
    PoseDelta::new()
        .add(side.elbow(), -10.0 * mirror)
        .add(side.arm_twist(), 6.5 * mirror)
        .add(side.shoulder(), 9.0)
}

/// Bend the forearm towards the chest.
pub fn fold_arm(side: Side) -> PoseDelta {
    let mirror = -side.lateral_sign();
    PoseDelta::new().add(side.elbow(), 12.0 * mirror)
}

pub fn hand_on_head(side: Side) -> PoseDelta {
    let mirror = -side.lateral_sign();
    PoseDelta::new()
        .add(side.shoulder(), 5.0)
        .add(side.arm_twist(), 9.0 * mirror)
        .add(side.hand(), 2.5)
}

/// Undo raise, fold and hand-on-head, back to the hip.
pub fn arm_go_back(side: Side) -> PoseDelta {
    let mirror = -side.lateral_sign();
    PoseDelta::new()
        .add(side.shoulder(), -14.0)
        .add(side.arm_twist(), -15.5 * mirror)
        .add(side.hand(), -2.5)
        .add(side.elbow(), -2.0 * mirror)
}

pub fn bend_for_jump() -> PoseDelta {
    PoseDelta::new()
        .add(Joint::Jump, -1.0 / 30.0)
        .add(Joint::LeftLegFront, 4.5)
        .add(Joint::RightLegFront, 4.5)
        .add(Joint::RightAnkle, 3.0)
        .add(Joint::LeftAnkle, 3.0)
        .add(Joint::RightKnee, -8.0)
        .add(Joint::LeftKnee, -8.0)
        .add(Joint::LeftElbow, -5.5)
        .add(Joint::RightElbow, 5.5)
        .add(Joint::LeftArmSide, 4.0)
        .add(Joint::RightArmSide, -4.0)
        .add(Joint::RightShoulder, -3.0)
        .add(Joint::LeftShoulder, -3.0)
        .add(Joint::RightArmTwist, -10.0)
        .add(Joint::LeftArmTwist, 10.0)
        .add(Joint::TorsoExtension, -2.0)
}

/// Push off: straighten the legs, open the arms and raise the torso.
pub fn stretch_for_jump() -> PoseDelta {
    PoseDelta::new()
        .add(Joint::Jump, 1.0 / 30.0)
        .add(Joint::LeftLegFront, -4.5)
        .add(Joint::RightLegFront, -4.5)
        .add(Joint::RightAnkle, -5.0)
        .add(Joint::LeftAnkle, -5.0)
        .add(Joint::RightKnee, 8.0)
        .add(Joint::LeftKnee, 8.0)
        .add(Joint::TorsoExtension, 1.0)
        .add(Joint::LeftElbow, 4.0)
        .add(Joint::RightElbow, -4.0)
        .add(Joint::RightShoulder, 3.0)
        .add(Joint::LeftShoulder, 3.0)
}

pub fn jump_and_turn() -> PoseDelta {
    PoseDelta::new()
        .add(Joint::Jump, 1.0 / 10.0)
        .add(Joint::RightAnkle, -5.0)
        .add(Joint::LeftAnkle, -5.0)
        .add(Joint::TorsoExtension, 1.0)
        .add(Joint::Turn, -5.625)
        .add(Joint::HeadNod, 2.0)
}

/// Come down, still turning, feet flexing back.
pub fn land_from_jump() -> PoseDelta {
    PoseDelta::new()
        .add(Joint::Jump, -1.0 / 10.0)
        .add(Joint::RightAnkle, 5.0)
        .add(Joint::LeftAnkle, 5.0)
        .add(Joint::HeadNod, -2.0)
        .add(Joint::Turn, -5.625)
}

/// Absorb the landing in the knees.
pub fn dampen_jump() -> PoseDelta {
    PoseDelta::new()
        .add(Joint::Jump, -1.0 / 50.0)
        .add(Joint::LeftLegFront, 3.0)
        .add(Joint::RightLegFront, 3.0)
        .add(Joint::RightAnkle, 5.0)
        .add(Joint::LeftAnkle, 5.0)
        .add(Joint::RightKnee, -6.0)
        .add(Joint::LeftKnee, -6.0)
        .add(Joint::TorsoExtension, -1.0)
}

pub fn finish_jump() -> PoseDelta {
    PoseDelta::new()
        .add(Joint::Jump, 1.0 / 50.0)
        .add(Joint::LeftLegFront, -3.0)
        .add(Joint::RightLegFront, -3.0)
        .add(Joint::RightAnkle, -3.0)
        .add(Joint::LeftAnkle, -3.0)
        .add(Joint::RightKnee, 6.0)
        .add(Joint::LeftKnee, 6.0)
        .add(Joint::LeftElbow, 1.5)
        .add(Joint::RightElbow, -1.5)
        .add(Joint::LeftArmSide, -4.0)
        .add(Joint::RightArmSide, 4.0)
        .add(Joint::RightArmTwist, 10.0)
        .add(Joint::LeftArmTwist, -10.0)
        .add(Joint::TorsoExtension, 1.0)
}

// ---- routines ------------------------------------------------------------

/// Right arm while leaning left and back, then left arm while leaning right and back.
fn arm_phrase(label: &'static str, arm_move: fn(Side) -> PoseDelta) -> Vec<Phase> {
    vec![
        Phase::step(label, arm_move(Side::Right).with(sway(Side::Left, 1.0))),
        Phase::step(label, arm_move(Side::Right).with(sway(Side::Left, -1.0))),
        Phase::step(label, arm_move(Side::Left).with(sway(Side::Right, 1.0))),
        Phase::step(label, arm_move(Side::Left).with(sway(Side::Right, -1.0))),
    ]
}

fn jump_phases() -> Vec<Phase> {
    vec![
        Phase::jump("crouch", bend_for_jump()),
        Phase::jump("push off", stretch_for_jump()),
        Phase::jump("airborne turn", jump_and_turn()),
        Phase::jump("landing turn", land_from_jump()),
        Phase::jump("absorb", dampen_jump()),
        Phase::jump("recover", finish_jump()),
    ]
}

/// The full dance: four arm phrases with swaying hips, then a quarter-turn jump.
pub fn macarena() -> Choreography {
    let mut phases = Vec::new();
    phases.extend(arm_phrase("arms forward", raise_arm));
    phases.extend(arm_phrase("fold arms", fold_arm));
    phases.extend(arm_phrase("hands to head", hand_on_head));
    phases.extend(arm_phrase("back to hips", arm_go_back));
    phases.extend(jump_phases());

    Choreography {
        name: "macarena",
        phases,
        cycles: 4,
        resets_pose: true,
    }
}

/// Lean left and back, then right and back, `swings` times.
pub fn hip_sway(swings: u32) -> Choreography {
    Choreography {
        name: "sway",
        phases: vec![
            Phase::step("lean left", sway(Side::Left, 1.0)),
            Phase::step("lean left", sway(Side::Left, -1.0)),
            Phase::step("lean right", sway(Side::Right, 1.0)),
            Phase::step("lean right", sway(Side::Right, -1.0)),
        ],
        cycles: swings,
        resets_pose: true,
    }
}

/// Raise one arm while leaning on the same side.
pub fn wave(side: Side) -> Choreography {
    Choreography {
        name: match side {
            Side::Left => "wave left",
            Side::Right => "wave right",
        },
        phases: vec![
            Phase::step("raise arm", raise_arm(side).with(sway(side, 1.0))),
            Phase::step("raise arm", raise_arm(side).with(sway(side, -1.0))),
        ],
        cycles: 1,
        resets_pose: true,
    }
}

pub fn jump() -> Choreography {
    Choreography {
        name: "jump",
        phases: jump_phases(),
        cycles: 1,
        resets_pose: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macarena_frame_count() {
        let dance = macarena();
        assert_eq!(dance.phases.len(), 22);
        assert_eq!(dance.frames_per_cycle(), 16 * 4 + 6 * 8);
        assert_eq!(dance.frame_count(), 448);
    }

    #[test]
    fn first_phase_raises_right_arm_and_sways_left() {
        let dance = macarena();
        let delta = &dance.phases[0].delta;

        assert_eq!(delta.get(Joint::RightElbow), 10.0);
        assert_eq!(delta.get(Joint::RightArmTwist), -6.5);
        assert_eq!(delta.get(Joint::RightShoulder), 9.0);
        assert_eq!(delta.get(Joint::LeftAnkle), -5.0);
        assert_eq!(delta.get(Joint::LeftLegFront), 5.5);
        assert_eq!(delta.get(Joint::LeftKnee), -8.0);
        assert_eq!(delta.get(Joint::TorsoTwist), 1.0);
        assert_eq!(delta.changes.len(), 7);
    }

    #[test]
    fn left_arm_moves_mirror_right_arm_moves() {
        let right = raise_arm(Side::Right);
        let left = raise_arm(Side::Left);
        assert_eq!(left.get(Joint::LeftElbow), -right.get(Joint::RightElbow));
        assert_eq!(left.get(Joint::LeftArmTwist), -right.get(Joint::RightArmTwist));
        assert_eq!(left.get(Joint::LeftShoulder), right.get(Joint::RightShoulder));

        let back = arm_go_back(Side::Left);
        assert_eq!(back.get(Joint::LeftArmTwist), -15.5);
        assert_eq!(back.get(Joint::LeftElbow), -2.0);
        assert_eq!(fold_arm(Side::Left).get(Joint::LeftElbow), 12.0);
        assert_eq!(fold_arm(Side::Right).get(Joint::RightElbow), -12.0);
    }

    #[test]
    fn right_sway_leans_the_other_way() {
        let sway = sway(Side::Right, 1.0);
        assert_eq!(sway.get(Joint::TorsoTwist), -1.0);
        assert_eq!(sway.get(Joint::RightAnkle), -5.0);
        assert_eq!(sway.get(Joint::RightLegFront), 5.5);
        assert_eq!(sway.get(Joint::RightKnee), -8.0);
    }

    #[test]
    fn arm_phrases_return_legs_and_torso() {
        // each four-phase phrase sways out and back on both sides
        let mut pose = Pose::initial();
        pose.reset_to_rest();
        for phase in &macarena().phases[..4] {
            for _ in 0..phase.frames {
                phase.delta.apply(&mut pose);
            }
        }
        assert_eq!(pose.torso_twist, 0.0);
        assert_eq!(pose.left_knee, 0.0);
        assert_eq!(pose.right_leg_front, 0.0);
        assert_eq!(pose.right_shoulder, 72.0);
        assert_eq!(pose.left_shoulder, 72.0);
    }

    #[test]
    fn jump_turns_a_quarter() {
        let dance = jump();
        let turn: f32 = dance
            .phases
            .iter()
            .map(|phase| phase.delta.get(Joint::Turn) * phase.frames as f32)
            .sum();
        assert_eq!(turn, -90.0);
        assert!(dance.phases.iter().all(|phase| phase.tempo == Tempo::Jump));
    }

    #[test]
    fn merged_moves_sum_shared_joints() {
        let delta = PoseDelta::new()
            .add(Joint::TorsoTwist, 1.0)
            .with(PoseDelta::new().add(Joint::TorsoTwist, 2.0).add(Joint::Turn, 3.0));
        assert_eq!(delta.get(Joint::TorsoTwist), 3.0);
        assert_eq!(delta.get(Joint::Turn), 3.0);
        assert_eq!(delta.get(Joint::Jump), 0.0);
    }

    #[test]
    fn sway_and_wave_lengths() {
        assert_eq!(hip_sway(7).frame_count(), 7 * 16);
        assert_eq!(wave(Side::Left).frame_count(), 8);
        assert_eq!(jump().frame_count(), 48);
    }
}
