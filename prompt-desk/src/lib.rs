//! In-memory prompt library core.
//!
//! This facade bundles the Prompt Desk crates behind feature flags so a
//! presentation layer can depend on a single crate and enable only what it
//! needs.

#![warn(missing_docs, clippy::pedantic)]

/// Re-export shared primitives for convenience.
pub use desk_primitives as primitives;

/// Prompt and category collections, filtering, and tag editing.
pub use desk_store as store;

/// Application state store and form (enabled by `session` feature).
#[cfg(feature = "session")]
pub use desk_session as session;

/// Configuration and seed data (enabled by `config` feature).
#[cfg(feature = "config")]
pub use desk_config as config;

/// Tracing setup (enabled by `telemetry` feature).
#[cfg(feature = "telemetry")]
pub use desk_telemetry as telemetry;
