//! Frame driver for the walking gait.

use std::time::Duration;

use glam::Affine3A;

use super::gait::{GaitParameters, SWING_TARGETS};
use crate::figure::{Figure, Joint, Pose};
use crate::render::DrawContext;

/// Restores the swing joints' angles when dropped.
///
/// Captured before the perturbed writes, so the baseline comes back on
/// every exit path, including an unwind out of a render callback.
struct SwingGuard<'a> {
    pose: &'a mut Pose,
    saved: [(Joint, f32); SWING_TARGETS.len()],
}

impl<'a> SwingGuard<'a> {
    fn capture(pose: &'a mut Pose) -> Self {
        let saved = SWING_TARGETS.map(|(joint, _)| (joint, pose.angle(joint)));
        Self { pose, saved }
    }
}

impl Drop for SwingGuard<'_> {
    fn drop(&mut self) {
        for (joint, angle) in self.saved {
            self.pose.set_angle(joint, angle);
        }
    }
}

/// Drives the walking gait: one call per frame perturbs the four swing
/// joints, rebuilds exactly those parts, renders the figure, and restores
/// the pose.
///
/// The driver holds parameters only; all animated state lives in the
/// caller's [`Pose`] and is identical before and after every frame.
#[derive(Debug, Default, Clone)]
pub struct GaitDriver {
    params: GaitParameters,
}

impl GaitDriver {
    /// Creates a driver with the given parameters.
    #[must_use]
    pub fn new(params: GaitParameters) -> Self {
        Self { params }
    }

    /// The gait parameters.
    #[must_use]
    #[inline]
    pub fn parameters(&self) -> &GaitParameters {
        &self.params
    }

    /// Swing angle in degrees at `elapsed`; see [`GaitParameters::swing`].
    #[must_use]
    pub fn swing(&self, elapsed: Duration) -> f32 {
        self.params.swing(elapsed)
    }

    /// Runs one animation frame at `elapsed` since animation start.
    ///
    /// In order: snapshots the four swing-joint angles, writes the
    /// perturbed values (baseline plus the signed swing), rebuilds exactly
    /// the four affected parts, and traverses the figure from the root with
    /// `base`. The snapshot is restored before this returns, or during
    /// unwinding if a render callback panics.
    ///
    /// Restoring does not rebuild the four parts; their stored locals keep
    /// the perturbed values until the next frame's rebuild, which always
    /// precedes the next traversal.
    pub fn advance_frame(
        &self,
        figure: &mut Figure,
        pose: &mut Pose,
        elapsed: Duration,
        base: Affine3A,
        ctx: &mut dyn DrawContext,
    ) {
        let swing = self.params.swing(elapsed);

        let guard = SwingGuard::capture(pose);
        for (joint, sign) in SWING_TARGETS {
            let baseline = guard.pose.angle(joint);
            guard.pose.set_angle(joint, baseline + sign * swing);
        }
        for (joint, _) in SWING_TARGETS {
            figure.rebuild_part(joint.part(), guard.pose);
        }
        figure.render(base, ctx);
    }
}
