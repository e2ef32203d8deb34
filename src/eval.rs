//! Frame resolution, fingerprinting, and multi-sample sweeps.

/// Stable frame hashes.
pub mod fingerprint;
/// Resolved frame snapshots.
pub mod frame;
/// Sequential and parallel sweeps.
pub mod sweep;
