// Blobby Man body plan, after Jim Blinn's Corner (IEEE CG&A, October 1987).
// Each segment is drawn inside its own push/pop pair; operations run in order.

use super::pose::{Joint, Pose, Side};

/// Rotation axes of the figure. Blinn's convention rotates about the negated unit axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn vector(self) -> [f32; 3] {
        match self {
            Axis::X => [-1.0, 0.0, 0.0],
            Axis::Y => [0.0, -1.0, 0.0],
            Axis::Z => [0.0, 0.0, -1.0],
        }
    }
}

/// Where a rotation angle comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Angle {
    Joint(Joint),
    Negated(Joint),
}

impl Angle {
    pub fn resolve(self, pose: &Pose) -> f32 {
        match self {
            Angle::Joint(joint) => pose.angle(joint),
            Angle::Negated(joint) => -pose.angle(joint),
        }
    }
}

/// Palette slot an ellipsoid is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Body,
    Eyes,
    Mouth,
}

/// A wireframe ellipsoid placed in the current segment frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    pub name: &'static str,
    pub offset: [f32; 3],
    pub tilt: Option<(f32, Axis)>,
    pub radii: [f32; 3],
    pub tint: Tint,
}

impl Blob {
    fn new(name: &'static str, offset: [f32; 3], radii: [f32; 3]) -> Self {
        Self {
            name,
            offset,
            tilt: None,
            radii,
            tint: Tint::Body,
        }
    }

    fn tilted(mut self, degrees: f32, axis: Axis) -> Self {
        self.tilt = Some((degrees, axis));
        self
    }

    fn tinted(mut self, tint: Tint) -> Self {
        self.tint = tint;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Translate([f32; 3]),
    Rotate(Angle, Axis),
    Ellipsoid(Blob),
    Child(Segment),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub name: &'static str,
    pub ops: Vec<Op>,
}

impl Segment {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ops: Vec::new(),
        }
    }

    pub fn translate(mut self, x: f32, y: f32, z: f32) -> Self {
        self.ops.push(Op::Translate([x, y, z]));
        self
    }

    pub fn rotate(mut self, joint: Joint, axis: Axis) -> Self {
        self.ops.push(Op::Rotate(Angle::Joint(joint), axis));
        self
    }

    pub fn rotate_back(mut self, joint: Joint, axis: Axis) -> Self {
        self.ops.push(Op::Rotate(Angle::Negated(joint), axis));
        self
    }

    pub fn blob(mut self, blob: Blob) -> Self {
        self.ops.push(Op::Ellipsoid(blob));
        self
    }

    pub fn child(mut self, segment: Segment) -> Self {
        self.ops.push(Op::Child(segment));
        self
    }

    /// Depth-first search by name, including `self`.
    #[cfg(test)]
    pub fn find(&self, name: &str) -> Option<&Segment> {
        if self.name == name {
            return Some(self);
        }
        self.ops.iter().find_map(|op| match op {
            Op::Child(child) => child.find(name),
            _ => None,
        })
    }

    /// Number of ellipsoids in this segment and all of its descendants.
    pub fn blob_count(&self) -> usize {
        self.ops
            .iter()
            .map(|op| match op {
                Op::Ellipsoid(_) => 1,
                Op::Child(child) => child.blob_count(),
                _ => 0,
            })
            .sum()
    }
}

/// Builds the full figure rooted at the torso.
pub fn blobby_man() -> Segment {
    Segment::new("torso")
        .child(leg(Side::Left))
        .child(leg(Side::Right))
        .blob(Blob::new("pelvis", [0.0, 0.0, 0.08], [0.275, 0.152, 0.153]))
        .child(body())
}

fn torso_rotations(segment: Segment) -> Segment {
    segment
        .rotate(Joint::TorsoExtension, Axis::X)
        .rotate(Joint::TorsoTwist, Axis::Y)
        .rotate(Joint::TorsoRotation, Axis::Z)
}

fn body() -> Segment {
    torso_rotations(Segment::new("body"))
        .blob(Blob::new("belly", [0.0, 0.0, 0.62], [0.306, 0.21, 0.5]))
        .child(shoulder())
}

fn shoulder() -> Segment {
    // the shoulder line takes the torso rotations a second time
    torso_rotations(Segment::new("shoulder").translate(0.0, 0.0, 1.0))
        .blob(Blob::new("chest", [0.0, 0.0, 0.0], [0.45, 0.153, 0.12]))
        .child(head())
        .child(arm(Side::Left))
        .child(arm(Side::Right))
}

fn head() -> Segment {
    Segment::new("head")
        .translate(0.0, 0.0, 0.153)
        .rotate(Joint::HeadNod, Axis::X)
        .rotate(Joint::HeadTurn, Axis::Z)
        .blob(Blob::new("skull", [0.0, 0.0, 0.4], [0.2, 0.23, 0.3]))
        .blob(Blob::new("nose", [0.0, -0.255, 0.42], [0.035, 0.075, 0.035]))
        .blob(Blob::new("neck", [0.0, 0.0, 0.07], [0.065, 0.065, 0.14]))
        .blob(
            Blob::new("mouth", [0.0, -0.162, 0.239], [0.0533, 0.0508, 0.0506])
                .tinted(Tint::Mouth),
        )
        .blob(Blob::new("left_eye", [0.1, -0.175, 0.5], [0.042, 0.046, 0.042]).tinted(Tint::Eyes))
        .blob(
            Blob::new("right_eye", [-0.1, -0.175, 0.5], [0.042, 0.046, 0.042])
                .tinted(Tint::Eyes),
        )
}

fn arm(side: Side) -> Segment {
    let name = match side {
        Side::Left => "left_arm",
        Side::Right => "right_arm",
    };
    Segment::new(name)
        .translate(0.45 * side.lateral_sign(), 0.0, 0.0)
        .rotate(side.arm_side(), Axis::Y)
        .rotate(side.shoulder(), Axis::X)
        .rotate(side.arm_twist(), Axis::Z)
        .blob(Blob::new("upper_arm", [0.0, 0.0, -0.275], [0.09, 0.09, 0.275]))
        .translate(0.0, 0.0, -0.55)
        .rotate(side.elbow(), Axis::X)
        .blob(Blob::new("lower_arm", [0.0, 0.0, -0.25], [0.08, 0.08, 0.25]))
        .translate(0.0, 0.0, -0.5)
        .rotate(side.hand(), Axis::Y)
        .blob(Blob::new("hand", [0.0, 0.0, -0.116], [0.052, 0.091, 0.155]))
}

fn leg(side: Side) -> Segment {
    let name = match side {
        Side::Left => "left_leg",
        Side::Right => "right_leg",
    };
    // Rotating by +hip, out, -hip swings the thigh outward about a tilted
    // axis while keeping it facing forward.
    Segment::new(name)
        .translate(0.178 * side.lateral_sign(), 0.0, 0.0)
        .rotate(side.leg_front(), Axis::X)
        .rotate(side.hip(), Axis::Z)
        .rotate(side.hip_out(), Axis::Y)
        .rotate_back(side.hip(), Axis::Z)
        .rotate(side.leg_twist(), Axis::Z)
        .blob(Blob::new("thigh", [0.0, 0.0, -0.425], [0.141, 0.141, 0.425]))
        .translate(0.0, 0.0, -0.85)
        .rotate(side.knee(), Axis::X)
        .blob(Blob::new("knee", [0.0, 0.0, 0.0], [0.05, 0.05, 0.05]))
        .blob(Blob::new("calf", [0.0, 0.0, -0.425], [0.1, 0.1, 0.425]))
        .translate(0.0, 0.0, -0.84)
        .rotate(side.ankle(), Axis::X)
        .rotate(side.foot(), Axis::Z)
        .blob(Blob::new("ankle", [0.0, 0.0, 0.0], [0.05, 0.04, 0.04]))
        .blob(Blob::new("heel", [0.0, 0.05, -0.05], [0.04, 0.04, 0.04]))
        .blob(Blob::new("sole", [0.0, -0.15, -0.05], [0.08, 0.19, 0.05]).tilted(10.0, Axis::X))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child_names(segment: &Segment) -> Vec<&'static str> {
        segment
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Child(child) => Some(child.name),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn hierarchy_matches_body_plan() {
        let figure = blobby_man();
        assert_eq!(child_names(&figure), ["left_leg", "right_leg", "body"]);

        let body = figure.find("body").unwrap();
        assert_eq!(child_names(body), ["shoulder"]);

        let shoulder = figure.find("shoulder").unwrap();
        assert_eq!(child_names(shoulder), ["head", "left_arm", "right_arm"]);
    }

    #[test]
    fn blob_counts() {
        let figure = blobby_man();
        assert_eq!(figure.find("head").unwrap().blob_count(), 6);
        assert_eq!(figure.find("left_arm").unwrap().blob_count(), 3);
        assert_eq!(figure.find("right_leg").unwrap().blob_count(), 6);
        // 2 legs * 6 + pelvis + belly + chest + head 6 + 2 arms * 3
        assert_eq!(figure.blob_count(), 27);
    }

    #[test]
    fn shoulder_repeats_torso_rotations() {
        let figure = blobby_man();
        let rotations = |segment: &Segment| -> Vec<Op> {
            segment
                .ops
                .iter()
                .filter(|op| matches!(op, Op::Rotate(..)))
                .cloned()
                .collect()
        };

        let body = rotations(figure.find("body").unwrap());
        let shoulder = rotations(figure.find("shoulder").unwrap());
        assert_eq!(body.len(), 3);
        assert_eq!(body, shoulder);
    }

    #[test]
    fn legs_are_mirrored() {
        let figure = blobby_man();
        let left = figure.find("left_leg").unwrap();
        let right = figure.find("right_leg").unwrap();

        assert_eq!(left.ops[0], Op::Translate([-0.178, 0.0, 0.0]));
        assert_eq!(right.ops[0], Op::Translate([0.178, 0.0, 0.0]));
        assert_eq!(left.ops.len(), right.ops.len());
    }

    fn rotations(segment: &Segment) -> Vec<(Angle, Axis)> {
        segment
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Rotate(angle, axis) => Some((*angle, *axis)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn hip_trick_rotation_order() {
        let figure = blobby_man();
        for (side, leg_name) in [(Side::Left, "left_leg"), (Side::Right, "right_leg")] {
            let leg = figure.find(leg_name).unwrap();
            assert_eq!(
                rotations(leg)[..5],
                [
                    (Angle::Joint(side.leg_front()), Axis::X),
                    (Angle::Joint(side.hip()), Axis::Z),
                    (Angle::Joint(side.hip_out()), Axis::Y),
                    (Angle::Negated(side.hip()), Axis::Z),
                    (Angle::Joint(side.leg_twist()), Axis::Z),
                ],
                "{side:?}"
            );
            assert_eq!(
                rotations(leg)[5..],
                [
                    (Angle::Joint(side.knee()), Axis::X),
                    (Angle::Joint(side.ankle()), Axis::X),
                    (Angle::Joint(side.foot()), Axis::Z),
                ]
            );
        }
    }

    #[test]
    fn arm_rotation_order() {
        let figure = blobby_man();
        for (side, name) in [(Side::Left, "left_arm"), (Side::Right, "right_arm")] {
            let arm = figure.find(name).unwrap();
            assert_eq!(
                rotations(arm),
                [
                    (Angle::Joint(side.arm_side()), Axis::Y),
                    (Angle::Joint(side.shoulder()), Axis::X),
                    (Angle::Joint(side.arm_twist()), Axis::Z),
                    (Angle::Joint(side.elbow()), Axis::X),
                    (Angle::Joint(side.hand()), Axis::Y),
                ],
                "{side:?}"
            );
        }
    }

    #[test]
    fn head_nods_before_turning() {
        let figure = blobby_man();
        assert_eq!(
            rotations(figure.find("head").unwrap()),
            [
                (Angle::Joint(Joint::HeadNod), Axis::X),
                (Angle::Joint(Joint::HeadTurn), Axis::Z),
            ]
        );
    }

    #[test]
    fn negated_angle_resolves_against_pose() {
        let mut pose = Pose::initial();
        pose.right_hip = 30.0;
        assert_eq!(Angle::Negated(Joint::RightHip).resolve(&pose), -30.0);
        assert_eq!(Angle::Joint(Joint::RightHip).resolve(&pose), 30.0);
    }
}
