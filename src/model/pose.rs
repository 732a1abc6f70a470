/// Left or right half of the figure, as seen by the figure itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Sign of the lateral (model X) offset of this side's limbs.
    pub fn lateral_sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn hip(self) -> Joint {
        match self {
            Side::Left => Joint::LeftHip,
            Side::Right => Joint::RightHip,
        }
    }

    pub fn hip_out(self) -> Joint {
        match self {
            Side::Left => Joint::LeftHipOut,
            Side::Right => Joint::RightHipOut,
        }
    }

    pub fn leg_twist(self) -> Joint {
        match self {
            Side::Left => Joint::LeftLegTwist,
            Side::Right => Joint::RightLegTwist,
        }
    }

    pub fn knee(self) -> Joint {
        match self {
            Side::Left => Joint::LeftKnee,
            Side::Right => Joint::RightKnee,
        }
    }

    pub fn leg_front(self) -> Joint {
        match self {
            Side::Left => Joint::LeftLegFront,
            Side::Right => Joint::RightLegFront,
        }
    }

    pub fn ankle(self) -> Joint {
        match self {
            Side::Left => Joint::LeftAnkle,
            Side::Right => Joint::RightAnkle,
        }
    }

    pub fn foot(self) -> Joint {
        match self {
            Side::Left => Joint::LeftFoot,
            Side::Right => Joint::RightFoot,
        }
    }

    pub fn arm_side(self) -> Joint {
        match self {
            Side::Left => Joint::LeftArmSide,
            Side::Right => Joint::RightArmSide,
        }
    }

    pub fn shoulder(self) -> Joint {
        match self {
            Side::Left => Joint::LeftShoulder,
            Side::Right => Joint::RightShoulder,
        }
    }

    pub fn arm_twist(self) -> Joint {
        match self {
            Side::Left => Joint::LeftArmTwist,
            Side::Right => Joint::RightArmTwist,
        }
    }

    pub fn elbow(self) -> Joint {
        match self {
            Side::Left => Joint::LeftElbow,
            Side::Right => Joint::RightElbow,
        }
    }

    pub fn hand(self) -> Joint {
        match self {
            Side::Left => Joint::LeftHand,
            Side::Right => Joint::RightHand,
        }
    }
}

/// Every scalar degree of freedom of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    Jump,
    Turn,
    CameraBack,
    CameraSpin,
    CameraTilt,
    TorsoRotation,
    TorsoExtension,
    TorsoTwist,
    HeadNod,
    HeadTurn,
    RightAnkle,
    LeftAnkle,
    RightFoot,
    LeftFoot,
    RightHip,
    RightHipOut,
    RightLegTwist,
    RightKnee,
    RightLegFront,
    RightHand,
    LeftHand,
    LeftHip,
    LeftHipOut,
    LeftLegTwist,
    LeftKnee,
    LeftLegFront,
    LeftArmSide,
    LeftShoulder,
    LeftArmTwist,
    LeftElbow,
    RightArmSide,
    RightShoulder,
    RightArmTwist,
    RightElbow,
}

impl Joint {
    pub const ALL: [Joint; 34] = [
        Joint::Jump,
        Joint::Turn,
        Joint::CameraBack,
        Joint::CameraSpin,
        Joint::CameraTilt,
        Joint::TorsoRotation,
        Joint::TorsoExtension,
        Joint::TorsoTwist,
        Joint::HeadNod,
        Joint::HeadTurn,
        Joint::RightAnkle,
        Joint::LeftAnkle,
        Joint::RightFoot,
        Joint::LeftFoot,
        Joint::RightHip,
        Joint::RightHipOut,
        Joint::RightLegTwist,
        Joint::RightKnee,
        Joint::RightLegFront,
        Joint::RightHand,
        Joint::LeftHand,
        Joint::LeftHip,
        Joint::LeftHipOut,
        Joint::LeftLegTwist,
        Joint::LeftKnee,
        Joint::LeftLegFront,
        Joint::LeftArmSide,
        Joint::LeftShoulder,
        Joint::LeftArmTwist,
        Joint::LeftElbow,
        Joint::RightArmSide,
        Joint::RightShoulder,
        Joint::RightArmTwist,
        Joint::RightElbow,
    ];

    /// Camera joints describe the viewer, not the figure, and survive a pose reset.
    pub fn is_camera(self) -> bool {
        matches!(
            self,
            Joint::CameraBack | Joint::CameraSpin | Joint::CameraTilt
        )
    }
}

/// Complete set of joint angles (degrees) plus the global jump offset.
///
/// Values are never clamped or wrapped: choreographies add deltas and the
/// accumulated value is drawn as is.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    /// Vertical offset of the whole figure, in model units.
    pub jump: f32,
    pub turn: f32,

    pub camera_back: f32,
    pub camera_spin: f32,
    pub camera_tilt: f32,

    /// Z: torso around the waist
    pub torso_rotation: f32,
    /// X: torso forward or backward
    pub torso_extension: f32,
    /// Y: torso sideways
    pub torso_twist: f32,

    pub head_nod: f32,
    pub head_turn: f32,

    pub right_ankle: f32,
    pub left_ankle: f32,
    pub right_foot: f32,
    pub left_foot: f32,

    pub right_hip: f32,
    pub right_hip_out: f32,
    pub right_leg_twist: f32,
    pub right_knee: f32,
    pub right_leg_front: f32,

    pub right_hand: f32,
    pub left_hand: f32,

    pub left_hip: f32,
    pub left_hip_out: f32,
    pub left_leg_twist: f32,
    pub left_knee: f32,
    pub left_leg_front: f32,

    pub left_arm_side: f32,
    pub left_shoulder: f32,
    pub left_arm_twist: f32,
    pub left_elbow: f32,

    pub right_arm_side: f32,
    pub right_shoulder: f32,
    pub right_arm_twist: f32,
    pub right_elbow: f32,
}

impl Pose {
    /// Startup pose of Blinn's reference figure: right leg raised, left hand on the hip.
    pub fn initial() -> Self {
        Self {
            jump: 0.0,
            turn: 0.0,
            camera_back: -90.0,
            camera_spin: -30.0,
            camera_tilt: 0.0,
            torso_rotation: 0.0,
            torso_extension: 0.0,
            torso_twist: 0.0,
            head_nod: -25.0,
            head_turn: 28.0,
            right_ankle: 0.0,
            left_ankle: 0.0,
            right_foot: 0.0,
            left_foot: 0.0,
            right_hip: 105.0,
            right_hip_out: 13.0,
            right_leg_twist: -86.0,
            right_knee: -53.0,
            right_leg_front: 0.0,
            right_hand: 0.0,
            left_hand: 0.0,
            left_hip: 0.0,
            left_hip_out: 0.0,
            left_leg_twist: 0.0,
            left_knee: 0.0,
            left_leg_front: 0.0,
            left_arm_side: -45.0,
            left_shoulder: 0.0,
            left_arm_twist: -90.0,
            left_elbow: 90.0,
            right_arm_side: 112.0,
            right_shoulder: 40.0,
            right_arm_twist: -102.0,
            right_elbow: 85.0,
        }
    }

    /// Standing still with both hands on the hips. The camera is left alone.
    pub fn reset_to_rest(&mut self) {
        for joint in Joint::ALL {
            if !joint.is_camera() {
                *self.angle_mut(joint) = 0.0;
            }
        }

        self.left_arm_side = -45.0;
        self.left_arm_twist = -90.0;
        self.left_elbow = 90.0;

        self.right_arm_side = 45.0;
        self.right_arm_twist = -90.0;
        self.right_elbow = -90.0;
    }

    pub fn angle(&self, joint: Joint) -> f32 {
        match joint {
            Joint::Jump => self.jump,
            Joint::Turn => self.turn,
            Joint::CameraBack => self.camera_back,
            Joint::CameraSpin => self.camera_spin,
            Joint::CameraTilt => self.camera_tilt,
            Joint::TorsoRotation => self.torso_rotation,
            Joint::TorsoExtension => self.torso_extension,
            Joint::TorsoTwist => self.torso_twist,
            Joint::HeadNod => self.head_nod,
            Joint::HeadTurn => self.head_turn,
            Joint::RightAnkle => self.right_ankle,
            Joint::LeftAnkle => self.left_ankle,
            Joint::RightFoot => self.right_foot,
            Joint::LeftFoot => self.left_foot,
            Joint::RightHip => self.right_hip,
            Joint::RightHipOut => self.right_hip_out,
            Joint::RightLegTwist => self.right_leg_twist,
            Joint::RightKnee => self.right_knee,
            Joint::RightLegFront => self.right_leg_front,
            Joint::RightHand => self.right_hand,
            Joint::LeftHand => self.left_hand,
            Joint::LeftHip => self.left_hip,
            Joint::LeftHipOut => self.left_hip_out,
            Joint::LeftLegTwist => self.left_leg_twist,
            Joint::LeftKnee => self.left_knee,
            Joint::LeftLegFront => self.left_leg_front,
            Joint::LeftArmSide => self.left_arm_side,
            Joint::LeftShoulder => self.left_shoulder,
            Joint::LeftArmTwist => self.left_arm_twist,
            Joint::LeftElbow => self.left_elbow,
            Joint::RightArmSide => self.right_arm_side,
            Joint::RightShoulder => self.right_shoulder,
            Joint::RightArmTwist => self.right_arm_twist,
            Joint::RightElbow => self.right_elbow,
        }
    }

    pub fn angle_mut(&mut self, joint: Joint) -> &mut f32 {
        match joint {
            Joint::Jump => &mut self.jump,
            Joint::Turn => &mut self.turn,
            Joint::CameraBack => &mut self.camera_back,
            Joint::CameraSpin => &mut self.camera_spin,
            Joint::CameraTilt => &mut self.camera_tilt,
            Joint::TorsoRotation => &mut self.torso_rotation,
            Joint::TorsoExtension => &mut self.torso_extension,
            Joint::TorsoTwist => &mut self.torso_twist,
            Joint::HeadNod => &mut self.head_nod,
            Joint::HeadTurn => &mut self.head_turn,
            Joint::RightAnkle => &mut self.right_ankle,
            Joint::LeftAnkle => &mut self.left_ankle,
            Joint::RightFoot => &mut self.right_foot,
            Joint::LeftFoot => &mut self.left_foot,
            Joint::RightHip => &mut self.right_hip,
            Joint::RightHipOut => &mut self.right_hip_out,
            Joint::RightLegTwist => &mut self.right_leg_twist,
            Joint::RightKnee => &mut self.right_knee,
            Joint::RightLegFront => &mut self.right_leg_front,
            Joint::RightHand => &mut self.right_hand,
            Joint::LeftHand => &mut self.left_hand,
            Joint::LeftHip => &mut self.left_hip,
            Joint::LeftHipOut => &mut self.left_hip_out,
            Joint::LeftLegTwist => &mut self.left_leg_twist,
            Joint::LeftKnee => &mut self.left_knee,
            Joint::LeftLegFront => &mut self.left_leg_front,
            Joint::LeftArmSide => &mut self.left_arm_side,
            Joint::LeftShoulder => &mut self.left_shoulder,
            Joint::LeftArmTwist => &mut self.left_arm_twist,
            Joint::LeftElbow => &mut self.left_elbow,
            Joint::RightArmSide => &mut self.right_arm_side,
            Joint::RightShoulder => &mut self.right_shoulder,
            Joint::RightArmTwist => &mut self.right_arm_twist,
            Joint::RightElbow => &mut self.right_elbow,
        }
    }

    /// Adds `delta` to a single joint.
    pub fn nudge(&mut self, joint: Joint, delta: f32) {
        *self.angle_mut(joint) += delta;
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::initial()
    }
}
