//! Depth-first traversal with an explicit transform stack.
//!
//! The walk is pre-order: a part's render callback runs before its
//! descendants, a child subtree drains entirely before the next sibling.
//! The stack holds exactly the chain of parent frames above the current
//! part, so its depth equals the part's depth at every step and it is empty
//! before the first push and after the last pop.

use glam::Affine3A;
use smallvec::SmallVec;

use super::figure::Figure;
use super::part::PartId;
use crate::render::DrawContext;

/// Inline stack capacity. The humanoid is three levels deep; custom
/// wirings within the inline capacity never touch the heap.
const STACK_INLINE: usize = 8;

/// Save/restore stack of accumulated world transforms.
///
/// Tracks a high-water mark so callers can check how deep a traversal went.
#[derive(Debug, Default, Clone)]
pub struct TransformStack {
    frames: SmallVec<[Affine3A; STACK_INLINE]>,
    max_depth: usize,
}

impl TransformStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a frame.
    pub fn push(&mut self, frame: Affine3A) {
        self.frames.push(frame);
        self.max_depth = self.max_depth.max(self.frames.len());
    }

    /// Restores the most recently saved frame.
    pub fn pop(&mut self) -> Option<Affine3A> {
        self.frames.pop()
    }

    /// Number of frames currently saved.
    #[must_use]
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Deepest the stack has been since creation or the last [`clear`].
    ///
    /// [`clear`]: TransformStack::clear
    #[must_use]
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Whether no frames are saved.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Drops all frames and resets the high-water mark.
    pub fn clear(&mut self) {
        self.frames.clear();
        self.max_depth = 0;
    }
}

impl Figure {
    /// Traverses the whole figure from the root with a fresh stack.
    ///
    /// `base` is the platform transform the root composes with, typically an
    /// [`OrbitCamera::view`](crate::OrbitCamera::view).
    pub fn render(&self, base: Affine3A, ctx: &mut dyn DrawContext) {
        let mut stack = TransformStack::new();
        self.traverse(Self::ROOT, base, &mut stack, ctx);
        debug_assert!(
            stack.is_empty(),
            "transform stack must drain after a complete traversal"
        );
    }

    /// Depth-first pre-order walk from `from`.
    ///
    /// For each reachable part: saves `current` on the stack, composes
    /// `world = current * local`, invokes the part's render callback with
    /// `world`, recurses into the child with `world`, pops the stack, and
    /// recurses into the sibling with the popped parent frame.
    ///
    /// Sibling links are followed from `from` itself too, so the walk covers
    /// `from`, its subtree, and every sibling subtree after it. Only a part
    /// with no child and no sibling is visited alone.
    ///
    /// The stack is the caller's; it ends the call at the depth it started.
    pub fn traverse(
        &self,
        from: PartId,
        current: Affine3A,
        stack: &mut TransformStack,
        ctx: &mut dyn DrawContext,
    ) {
        self.traverse_link(Some(from), current, stack, ctx);
    }

    fn traverse_link(
        &self,
        link: Option<PartId>,
        current: Affine3A,
        stack: &mut TransformStack,
        ctx: &mut dyn DrawContext,
    ) {
        // A `None` link is the base case; no node is touched.
        let Some(part) = link else {
            return;
        };
        let node = self.node(part);

        // Save the parent frame, then enter this part's frame.
        stack.push(current);
        let world = current * node.local;
        (node.render)(world, ctx);

        self.traverse_link(node.child, world, stack, ctx);

        // Siblings compose with the parent frame, never with each other.
        let parent = stack.pop().unwrap_or(current);
        self.traverse_link(node.sibling, parent, stack, ctx);
    }

    /// Iterative equivalent of [`Figure::traverse`] over an explicit work
    /// stack of `(part, base frame)` pairs.
    ///
    /// Produces the identical callback sequence; useful where custom
    /// wirings run deeper than comfortable recursion.
    pub fn traverse_iterative(&self, from: PartId, current: Affine3A, ctx: &mut dyn DrawContext) {
        let mut work: SmallVec<[(PartId, Affine3A); STACK_INLINE]> = SmallVec::new();
        work.push((from, current));
        while let Some((part, base)) = work.pop() {
            let node = self.node(part);
            let world = base * node.local;
            (node.render)(world, ctx);

            // Sibling first so the child subtree drains before it.
            if let Some(sibling) = node.sibling {
                work.push((sibling, base));
            }
            if let Some(child) = node.child {
                work.push((child, world));
            }
        }
    }
}
