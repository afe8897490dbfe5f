//! Figure parameters: segment proportions and the joint-angle pose.
//!
//! Both types are plain data. A [`Pose`] is passed by reference into the
//! node builder and the animation driver; nothing in the engine holds angle
//! state of its own.

use serde::{Deserialize, Serialize};

use super::part::{Joint, PartId};

/// Segment sizes of the figure, in model units.
///
/// Widths apply to both x and z (parts have square cross-sections).
/// Attachment pivots are derived from these sizes by the node builder, so
/// resizing a segment moves everything attached to it accordingly.
///
/// | segment   | width | height |
/// |-----------|-------|--------|
/// | torso     | 1.0   | 5.0    |
/// | head      | 1.0   | 1.5    |
/// | upper arm | 0.5   | 3.0    |
/// | lower arm | 0.5   | 2.0    |
/// | upper leg | 0.5   | 3.0    |
/// | lower leg | 0.5   | 2.0    |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Proportions {
    pub torso_width: f32,
    pub torso_height: f32,
    pub head_width: f32,
    pub head_height: f32,
    pub upper_arm_width: f32,
    pub upper_arm_height: f32,
    pub lower_arm_width: f32,
    pub lower_arm_height: f32,
    pub upper_leg_width: f32,
    pub upper_leg_height: f32,
    pub lower_leg_width: f32,
    pub lower_leg_height: f32,
}

impl Proportions {
    /// Returns `(width, height)` for one part.
    #[must_use]
    pub const fn size_of(&self, part: PartId) -> (f32, f32) {
        match part {
            PartId::Torso => (self.torso_width, self.torso_height),
            PartId::Head => (self.head_width, self.head_height),
            PartId::LeftUpperArm | PartId::RightUpperArm => {
                (self.upper_arm_width, self.upper_arm_height)
            }
            PartId::LeftLowerArm | PartId::RightLowerArm => {
                (self.lower_arm_width, self.lower_arm_height)
            }
            PartId::LeftUpperLeg | PartId::RightUpperLeg => {
                (self.upper_leg_width, self.upper_leg_height)
            }
            PartId::LeftLowerLeg | PartId::RightLowerLeg => {
                (self.lower_leg_width, self.lower_leg_height)
            }
        }
    }
}

impl Default for Proportions {
    fn default() -> Self {
        Self {
            torso_width: 1.0,
            torso_height: 5.0,
            head_width: 1.0,
            head_height: 1.5,
            upper_arm_width: 0.5,
            upper_arm_height: 3.0,
            lower_arm_width: 0.5,
            lower_arm_height: 2.0,
            upper_leg_width: 0.5,
            upper_leg_height: 3.0,
            lower_leg_width: 0.5,
            lower_leg_height: 2.0,
        }
    }
}

/// Rest-pose angles in canonical [`Joint`] order, in degrees.
const REST_ANGLES: [f32; Joint::COUNT] = [
    40.0,  // TorsoYaw
    -10.0, // HeadPitch
    0.0,   // HeadYaw
    150.0, // LeftShoulder
    80.0,  // LeftElbow
    150.0, // RightShoulder
    90.0,  // RightElbow
    10.0,  // LeftHip
    -55.0, // LeftKnee
    -10.0, // RightHip
    -30.0, // RightKnee
];

/// The joint-angle table: one angle in **degrees** per [`Joint`].
///
/// Angles are plain values; the pose performs no validation, normalization,
/// or change tracking. After editing angles, rebuild the affected parts with
/// [`Figure::rebuild_part`](super::Figure::rebuild_part) or
/// [`Figure::rebuild_all`](super::Figure::rebuild_all) so the stored local
/// transforms pick up the change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    angles: [f32; Joint::COUNT],
}

impl Pose {
    /// The canonical standing pose.
    #[must_use]
    pub const fn rest() -> Self {
        Self {
            angles: REST_ANGLES,
        }
    }

    /// Current angle of `joint`, in degrees.
    #[must_use]
    #[inline]
    pub fn angle(&self, joint: Joint) -> f32 {
        self.angles[joint.index()]
    }

    /// Sets the angle of `joint`, in degrees.
    #[inline]
    pub fn set_angle(&mut self, joint: Joint, degrees: f32) {
        self.angles[joint.index()] = degrees;
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::rest()
    }
}
