//! Orbit camera: the base-transform provider for traversal.
//!
//! Keeps the viewing math and nothing else; input plumbing (mouse, wheel,
//! key bindings) is the caller's business. The produced transform is opaque
//! to the engine and goes in as the `base` of a traversal.

use glam::{Affine3A, Vec3};
use serde::{Deserialize, Serialize};

/// Distance change per zoom step.
const ZOOM_STEP: f32 = 0.5;

/// Orbit state: spin angles around the target plus an eye distance.
///
/// The eye sits on the view axis at `-distance`, looks at the origin, and
/// the whole scene is spun under it by the pitch/yaw angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitCamera {
    /// Pitch spin in degrees, wrapped to plus or minus one turn.
    pub spin_x: f32,
    /// Yaw spin in degrees, wrapped to plus or minus one turn.
    pub spin_y: f32,
    /// Eye distance from the target, clamped to the range below.
    pub distance: f32,
    /// Closest the eye may zoom in.
    pub min_distance: f32,
    /// Farthest the eye may zoom out.
    pub max_distance: f32,
}

impl OrbitCamera {
    /// Creates a camera at `distance` with no spin.
    #[must_use]
    pub fn new(distance: f32) -> Self {
        Self {
            distance,
            ..Self::default()
        }
    }

    /// Accumulates spin: `dx` adds to the yaw, `dy` to the pitch, both in
    /// degrees.
    pub fn orbit_by(&mut self, dx: f32, dy: f32) {
        self.spin_y = (self.spin_y + dx) % 360.0;
        self.spin_x = (self.spin_x + dy) % 360.0;
    }

    /// Zooms by whole or fractional steps; positive steps move the eye in.
    pub fn zoom_by(&mut self, steps: f32) {
        self.distance =
            (self.distance - steps * ZOOM_STEP).clamp(self.min_distance, self.max_distance);
    }

    /// The view transform: look-at from the eye composed with the spins.
    #[must_use]
    pub fn view(&self) -> Affine3A {
        Affine3A::look_at_rh(Vec3::new(0.0, 0.0, -self.distance), Vec3::ZERO, Vec3::Y)
            * Affine3A::from_rotation_x(self.spin_x.to_radians())
            * Affine3A::from_rotation_y(self.spin_y.to_radians())
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            spin_x: 0.0,
            spin_y: 0.0,
            distance: 25.0,
            min_distance: 1.0,
            max_distance: 100.0,
        }
    }
}
