//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! # Overview
//!
//! The main error type [`MarionetteError`] covers the failure modes of the
//! explicit diagnostics:
//! - Topology validation failures (cycles, unreachable parts)
//!
//! The per-frame paths (node rebuild, traversal, gait animation) are
//! infallible and do not return `Result`.
//!
//! # Usage
//!
//! Fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, MarionetteError>`.
//!
//! ```rust,ignore
//! use marionette::errors::Result;
//!
//! fn check(figure: &marionette::Figure) -> Result<()> {
//!     figure.validate_topology()
//! }
//! ```

use thiserror::Error;

use crate::figure::PartId;

/// The main error type for the marionette engine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarionetteError {
    // ========================================================================
    // Topology Errors
    // ========================================================================
    /// The child/sibling links revisit a part, so they do not form a tree.
    #[error("Topology cycle: {part:?} is reachable more than once")]
    TopologyCycle {
        /// The first part encountered twice during the validation walk.
        part: PartId,
    },

    /// A part cannot be reached from the root via child/sibling links.
    #[error("Unreachable part: {part:?} is not linked into the figure")]
    PartUnreachable {
        /// The unreachable part.
        part: PartId,
    },
}

/// Alias for `Result<T, MarionetteError>`.
pub type Result<T> = std::result::Result<T, MarionetteError>;
