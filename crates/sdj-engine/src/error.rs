//! # Structural Errors
//!
//! The four finding kinds are local, recoverable results carried in the
//! [`ValidationReport`](crate::ValidationReport); this module holds the one
//! condition that aborts traversal instead.

use thiserror::Error;

/// The document's structure prevented a complete walk.
///
/// A `serde_json::Value` tree cannot be cyclic, so the classic
/// shared-structure hazard reduces to pathological nesting; the depth guard
/// bounds recursion and keeps the walk total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// Nesting exceeded the validator's depth limit.
    #[error("document nesting exceeds the maximum depth of {limit}")]
    DepthExceeded {
        /// The configured depth limit that was exceeded.
        limit: usize,
    },
}
