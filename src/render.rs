//! Drawing capability handed to render callbacks.
//!
//! The engine's output surface is the stream of callback invocations; a
//! [`DrawContext`] is the only thing a callback can draw through. GPU
//! submission is out of scope here, so the crate ships [`DrawList`], a
//! recording sink that collects instance transforms for tests, demos, and
//! downstream renderers.

use glam::Affine3A;

/// Receiver for draw primitives issued by render callbacks.
///
/// Each callback issues a bounded, fixed number of primitives per
/// invocation; the default part callbacks issue exactly one box each.
pub trait DrawContext {
    /// Draws a unit box under `instance`.
    ///
    /// The unit box spans `[-0.5, 0.5]` on each axis; `instance` carries the
    /// full placement (world transform composed with any centering and
    /// scaling the callback applies).
    fn draw_box(&mut self, instance: Affine3A);
}

/// A [`DrawContext`] that records every instance transform in order.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    instances: Vec<Affine3A>,
}

impl DrawList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded instance transforms, in draw order.
    #[must_use]
    pub fn instances(&self) -> &[Affine3A] {
        &self.instances
    }

    /// Number of recorded draws.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Forgets all recorded draws, keeping the allocation.
    pub fn clear(&mut self) {
        self.instances.clear();
    }
}

impl DrawContext for DrawList {
    fn draw_box(&mut self, instance: Affine3A) {
        self.instances.push(instance);
    }
}
