//! Walking-gait parameters and the sinusoidal swing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::figure::Joint;

/// Joints the gait perturbs, with the sign each applies to the swing angle.
///
/// Opposite limbs swing in opposite phase, and each arm counter-phases the
/// leg on its own side.
pub const SWING_TARGETS: [(Joint, f32); 4] = [
    (Joint::LeftHip, 1.0),
    (Joint::LeftShoulder, -1.0),
    (Joint::RightHip, -1.0),
    (Joint::RightShoulder, 1.0),
];

/// Parameters of the sinusoidal walking gait.
///
/// The swing angle at elapsed time `t` is
/// `amplitude * sin(frequency * t_seconds)` degrees. The defaults give the
/// classic gait: a 50 degree swing at one radian per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaitParameters {
    /// Peak swing, in degrees.
    pub amplitude: f32,
    /// Angular frequency, in radians per second.
    pub frequency: f32,
}

impl GaitParameters {
    /// Swing angle in degrees at `elapsed` since animation start.
    ///
    /// The caller's clock must be monotonically non-decreasing across
    /// frames; the swing itself is a pure function of `elapsed`.
    #[must_use]
    pub fn swing(&self, elapsed: Duration) -> f32 {
        self.amplitude * (self.frequency * elapsed.as_secs_f32()).sin()
    }
}

impl Default for GaitParameters {
    fn default() -> Self {
        Self {
            amplitude: 50.0,
            frequency: 1.0,
        }
    }
}
