#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod camera;
pub mod errors;
pub mod figure;
pub mod render;

pub use animation::{GaitDriver, GaitParameters, SWING_TARGETS};
pub use camera::OrbitCamera;
pub use errors::MarionetteError;
pub use figure::{
    Figure, Joint, PartId, PartNode, Pose, Proportions, RenderCallback, TransformStack,
};
pub use render::{DrawContext, DrawList};
