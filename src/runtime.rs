//! Stateful drivers: scroll sample holder, timer queue, and the timeline that owns them.

/// Timer queue with per-element cancellation.
pub mod scheduler;
/// Scroll range allocation and the host boundary.
pub mod scroll;
/// Timeline orchestrator.
pub mod timeline;
