//! Part and joint enumerations.
//!
//! The figure's vocabulary is closed: ten rigid parts and eleven rotational
//! joints, fixed at compile time. Both enums index fixed tables directly, so
//! no out-of-range access is representable.

/// One rigid segment of the figure.
///
/// [`PartId::Torso`] is the root of the hierarchy and the traversal entry
/// point. The remaining parts hang off it through child/sibling links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartId {
    Torso,
    Head,
    LeftUpperArm,
    LeftLowerArm,
    RightUpperArm,
    RightLowerArm,
    LeftUpperLeg,
    LeftLowerLeg,
    RightUpperLeg,
    RightLowerLeg,
}

impl PartId {
    /// Number of parts in the figure.
    pub const COUNT: usize = 10;

    /// All parts in canonical order.
    pub const ALL: [PartId; Self::COUNT] = [
        PartId::Torso,
        PartId::Head,
        PartId::LeftUpperArm,
        PartId::LeftLowerArm,
        PartId::RightUpperArm,
        PartId::RightLowerArm,
        PartId::LeftUpperLeg,
        PartId::LeftLowerLeg,
        PartId::RightUpperLeg,
        PartId::RightLowerLeg,
    ];

    /// Index of this part into the figure's node table.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One rotational degree of freedom.
///
/// Each joint drives exactly one part's local transform; the head carries
/// two joints (pitch and yaw) that both drive [`PartId::Head`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    TorsoYaw,
    HeadPitch,
    HeadYaw,
    LeftShoulder,
    LeftElbow,
    RightShoulder,
    RightElbow,
    LeftHip,
    LeftKnee,
    RightHip,
    RightKnee,
}

impl Joint {
    /// Number of joints in the figure.
    pub const COUNT: usize = 11;

    /// All joints in canonical order.
    pub const ALL: [Joint; Self::COUNT] = [
        Joint::TorsoYaw,
        Joint::HeadPitch,
        Joint::HeadYaw,
        Joint::LeftShoulder,
        Joint::LeftElbow,
        Joint::RightShoulder,
        Joint::RightElbow,
        Joint::LeftHip,
        Joint::LeftKnee,
        Joint::RightHip,
        Joint::RightKnee,
    ];

    /// Index of this joint into the pose's angle table.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The part whose local transform this joint drives.
    #[must_use]
    pub const fn part(self) -> PartId {
        match self {
            Joint::TorsoYaw => PartId::Torso,
            Joint::HeadPitch | Joint::HeadYaw => PartId::Head,
            Joint::LeftShoulder => PartId::LeftUpperArm,
            Joint::LeftElbow => PartId::LeftLowerArm,
            Joint::RightShoulder => PartId::RightUpperArm,
            Joint::RightElbow => PartId::RightLowerArm,
            Joint::LeftHip => PartId::LeftUpperLeg,
            Joint::LeftKnee => PartId::LeftLowerLeg,
            Joint::RightHip => PartId::RightUpperLeg,
            Joint::RightKnee => PartId::RightLowerLeg,
        }
    }
}
