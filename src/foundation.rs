//! Shared value types and the error taxonomy.

/// Progress, colors, viewport, geometry re-exports.
pub mod core;
/// Error enum and result alias.
pub mod error;
