//! A single rigid part of the figure.

use std::fmt;
use std::rc::Rc;

use glam::Affine3A;

use super::part::PartId;
use crate::render::DrawContext;

/// Callback invoked with a part's world transform during traversal.
///
/// Callbacks issue draw primitives through the [`DrawContext`] and nothing
/// else; traversal holds the figure by shared reference, so a callback
/// cannot reach back into the model, the transform stack, or the pose.
///
/// `Rc` rather than `Arc`: the engine is single-threaded by design.
pub type RenderCallback = Rc<dyn Fn(Affine3A, &mut dyn DrawContext)>;

/// One rigid part: a local transform, a render callback, and the
/// child/sibling links that wire the part into the figure's tree.
///
/// `None` is the explicit no-link value. The local transform is the only
/// field mutated after construction, and only by the node builder.
#[derive(Clone)]
pub struct PartNode {
    /// Local transform relative to the parent's frame.
    pub local: Affine3A,
    /// Render callback, bound at construction.
    pub render: RenderCallback,
    /// Next sibling in the parent's child list.
    pub sibling: Option<PartId>,
    /// First child of this part.
    pub child: Option<PartId>,
}

impl PartNode {
    /// Creates a node from its four fields.
    #[must_use]
    pub fn new(
        local: Affine3A,
        render: RenderCallback,
        sibling: Option<PartId>,
        child: Option<PartId>,
    ) -> Self {
        Self {
            local,
            render,
            sibling,
            child,
        }
    }
}

impl fmt::Debug for PartNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartNode")
            .field("local", &self.local)
            .field("sibling", &self.sibling)
            .field("child", &self.child)
            .finish_non_exhaustive()
    }
}
