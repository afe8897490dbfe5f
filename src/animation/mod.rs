//! Frame-driven walking gait.

pub mod driver;
pub mod gait;

pub use driver::GaitDriver;
pub use gait::{GaitParameters, SWING_TARGETS};
