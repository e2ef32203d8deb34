//! Declarative scene description: layers, element configuration, the built-in ensemble.

/// Element and scene configuration.
pub mod config;
/// The built-in night-sky ensemble.
pub mod ensemble;
/// Layer tiers and their style bundles.
pub mod layer;
/// Narrative stages of the progress domain.
pub mod stage;
