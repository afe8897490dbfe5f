//! The articulated figure: part/joint vocabulary, proportions and pose,
//! the node table with its builder, and the stack-based traversal.

pub mod figure;
pub mod node;
pub mod part;
pub mod pose;
pub mod traversal;

pub use figure::Figure;
pub use node::{PartNode, RenderCallback};
pub use part::{Joint, PartId};
pub use pose::{Pose, Proportions};
pub use traversal::TransformStack;
