//! Stateless outline geometry.

pub mod outline;
/// Star polygon generator.
pub mod star;
