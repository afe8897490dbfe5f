//! The figure model: a fixed node table with child/sibling topology, plus
//! the node builder that derives local transforms from a pose.
//!
//! The part set is closed ([`PartId`]), so the model is a plain array
//! indexed by part rather than a growable arena; links are `Option<PartId>`
//! with `None` as the explicit no-link value.

use std::rc::Rc;

use glam::{Affine3A, Vec3};

use super::node::{PartNode, RenderCallback};
use super::part::{Joint, PartId};
use super::pose::{Pose, Proportions};
use crate::errors::{MarionetteError, Result};
use crate::render::DrawContext;

// ============================================================================
// Humanoid wiring and transform recipes
// ============================================================================

/// Canonical humanoid topology: `(child, sibling)` per part.
///
/// The torso is the root; the head and the four upper limb segments form its
/// child list via sibling links; each upper segment carries its lower
/// segment as an only child.
const fn humanoid_links(part: PartId) -> (Option<PartId>, Option<PartId>) {
    match part {
        PartId::Torso => (Some(PartId::Head), None),
        PartId::Head => (None, Some(PartId::LeftUpperArm)),
        PartId::LeftUpperArm => (Some(PartId::LeftLowerArm), Some(PartId::RightUpperArm)),
        PartId::RightUpperArm => (Some(PartId::RightLowerArm), Some(PartId::LeftUpperLeg)),
        PartId::LeftUpperLeg => (Some(PartId::LeftLowerLeg), Some(PartId::RightUpperLeg)),
        PartId::RightUpperLeg => (Some(PartId::RightLowerLeg), None),
        PartId::LeftLowerArm
        | PartId::RightLowerArm
        | PartId::LeftLowerLeg
        | PartId::RightLowerLeg => (None, None),
    }
}

/// Translation to a joint pivot followed by a rotation about x.
fn pivot_rotation_x(pivot: Vec3, degrees: f32) -> Affine3A {
    Affine3A::from_translation(pivot) * Affine3A::from_rotation_x(degrees.to_radians())
}

/// Local transform of `part` under `pose`.
///
/// Composition order is load-bearing: translate to the pivot first, then
/// rotate, then apply any offset-back. Angles are stored in degrees and
/// converted here, at matrix construction.
fn local_transform(part: PartId, pose: &Pose, prop: &Proportions) -> Affine3A {
    match part {
        PartId::Torso => Affine3A::from_rotation_y(pose.angle(Joint::TorsoYaw).to_radians()),
        // Pivot at the neck, offset back so the head turns about its base.
        PartId::Head => {
            let neck = Vec3::new(0.0, prop.torso_height + 0.5 * prop.head_height, 0.0);
            Affine3A::from_translation(neck)
                * Affine3A::from_rotation_x(pose.angle(Joint::HeadPitch).to_radians())
                * Affine3A::from_rotation_y(pose.angle(Joint::HeadYaw).to_radians())
                * Affine3A::from_translation(Vec3::new(0.0, -0.5 * prop.head_height, 0.0))
        }
        PartId::LeftUpperArm => {
            let pivot = Vec3::new(
                -(prop.torso_width + prop.upper_arm_width),
                0.9 * prop.torso_height,
                0.0,
            );
            pivot_rotation_x(pivot, pose.angle(Joint::LeftShoulder))
        }
        PartId::RightUpperArm => {
            let pivot = Vec3::new(
                prop.torso_width + prop.upper_arm_width,
                0.9 * prop.torso_height,
                0.0,
            );
            pivot_rotation_x(pivot, pose.angle(Joint::RightShoulder))
        }
        // The extra half turn makes legs extend downward from the hip.
        PartId::LeftUpperLeg => {
            let pivot = Vec3::new(
                -(prop.torso_width + prop.upper_leg_width),
                0.1 * prop.upper_leg_height,
                0.0,
            );
            pivot_rotation_x(pivot, pose.angle(Joint::LeftHip) + 180.0)
        }
        PartId::RightUpperLeg => {
            let pivot = Vec3::new(
                prop.torso_width + prop.upper_leg_width,
                0.1 * prop.upper_leg_height,
                0.0,
            );
            pivot_rotation_x(pivot, pose.angle(Joint::RightHip) + 180.0)
        }
        PartId::LeftLowerArm => pivot_rotation_x(
            Vec3::new(0.0, prop.upper_arm_height, 0.0),
            pose.angle(Joint::LeftElbow),
        ),
        PartId::RightLowerArm => pivot_rotation_x(
            Vec3::new(0.0, prop.upper_arm_height, 0.0),
            pose.angle(Joint::RightElbow),
        ),
        PartId::LeftLowerLeg => pivot_rotation_x(
            Vec3::new(0.0, prop.upper_leg_height, 0.0),
            pose.angle(Joint::LeftKnee),
        ),
        PartId::RightLowerLeg => pivot_rotation_x(
            Vec3::new(0.0, prop.upper_leg_height, 0.0),
            pose.angle(Joint::RightKnee),
        ),
    }
}

/// Default render callback for `part`: one unit box scaled to the part's
/// size and centered above the pivot.
fn cuboid_callback(part: PartId, prop: &Proportions) -> RenderCallback {
    let (width, height) = prop.size_of(part);
    Rc::new(move |world: Affine3A, ctx: &mut dyn DrawContext| {
        let instance = world
            * Affine3A::from_translation(Vec3::new(0.0, 0.5 * height, 0.0))
            * Affine3A::from_scale(Vec3::new(width, height, width));
        ctx.draw_box(instance);
    })
}

// ============================================================================
// Figure
// ============================================================================

/// The articulated figure: a fixed table of [`PartNode`]s plus the
/// proportions its local transforms are built from.
#[derive(Debug, Clone)]
pub struct Figure {
    nodes: [PartNode; PartId::COUNT],
    proportions: Proportions,
}

impl Figure {
    /// Root of the hierarchy and sole traversal entry point.
    pub const ROOT: PartId = PartId::Torso;

    /// Builds the canonical humanoid with default cuboid render callbacks.
    #[must_use]
    pub fn new(proportions: Proportions, pose: &Pose) -> Self {
        Self::with_callbacks(proportions, pose, |part| {
            cuboid_callback(part, &proportions)
        })
    }

    /// Builds the canonical humanoid with caller-supplied render callbacks.
    ///
    /// `callbacks` is invoked once per part. The returned callbacks are
    /// bound for the figure's lifetime; rebuilding a part never replaces
    /// them.
    pub fn with_callbacks(
        proportions: Proportions,
        pose: &Pose,
        callbacks: impl Fn(PartId) -> RenderCallback,
    ) -> Self {
        let nodes = std::array::from_fn(|i| {
            let part = PartId::ALL[i];
            let (child, sibling) = humanoid_links(part);
            PartNode::new(
                local_transform(part, pose, &proportions),
                callbacks(part),
                sibling,
                child,
            )
        });
        log::debug!("figure built: {} parts, root {:?}", PartId::COUNT, Self::ROOT);
        Self { nodes, proportions }
    }

    // ========================================================================
    // Node table access
    // ========================================================================

    /// The node for `part`.
    #[must_use]
    #[inline]
    pub fn node(&self, part: PartId) -> &PartNode {
        &self.nodes[part.index()]
    }

    /// Installs a node for `part`, replacing transform, callback, and links.
    ///
    /// Links are taken as given; wiring a cycle is a caller error that
    /// traversal does not detect. Use [`Figure::validate_topology`] to check
    /// a custom wiring once it is complete.
    pub fn set_node(&mut self, part: PartId, node: PartNode) {
        if node.sibling == Some(part) || node.child == Some(part) {
            log::warn!("part {:?} links to itself; traversal from it would not terminate", part);
        }
        self.nodes[part.index()] = node;
    }

    /// The proportions this figure was built with.
    #[must_use]
    #[inline]
    pub fn proportions(&self) -> &Proportions {
        &self.proportions
    }

    // ========================================================================
    // Node builder
    // ========================================================================

    /// Recomputes `part`'s local transform from `pose`.
    ///
    /// The render callback and the links are untouched; the stored local
    /// transform is the only field that changes. Call this for every part
    /// whose controlling joint angle changed since the last build.
    pub fn rebuild_part(&mut self, part: PartId, pose: &Pose) {
        self.nodes[part.index()].local = local_transform(part, pose, &self.proportions);
    }

    /// Recomputes every part's local transform from `pose`.
    pub fn rebuild_all(&mut self, pose: &Pose) {
        for part in PartId::ALL {
            self.rebuild_part(part, pose);
        }
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// Checks that the links form a tree covering every part.
    ///
    /// Walks child/sibling links from the root; a part encountered twice is
    /// reported as [`MarionetteError::TopologyCycle`], a part never reached
    /// as [`MarionetteError::PartUnreachable`]. The walk terminates on
    /// cyclic wirings because the visited check precedes recursion.
    ///
    /// This is an explicit diagnostic for construction sites and tests; the
    /// traversal itself performs no such checks.
    pub fn validate_topology(&self) -> Result<()> {
        let mut visited = [false; PartId::COUNT];
        self.walk_links(Some(Self::ROOT), &mut visited)?;
        for part in PartId::ALL {
            if !visited[part.index()] {
                return Err(MarionetteError::PartUnreachable { part });
            }
        }
        Ok(())
    }

    fn walk_links(&self, link: Option<PartId>, visited: &mut [bool; PartId::COUNT]) -> Result<()> {
        let Some(part) = link else {
            return Ok(());
        };
        if visited[part.index()] {
            return Err(MarionetteError::TopologyCycle { part });
        }
        visited[part.index()] = true;
        let node = self.node(part);
        self.walk_links(node.child, visited)?;
        self.walk_links(node.sibling, visited)
    }
}

impl Default for Figure {
    /// The canonical humanoid at rest, with default proportions.
    fn default() -> Self {
        Self::new(Proportions::default(), &Pose::rest())
    }
}
