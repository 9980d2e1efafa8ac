//! optmapgen version information.
//!
//! The generator stamps its own name into every emitted banner, so all
//! subsystems (CLI, banner, logging) should agree on one version value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - Prefer this constant over repeating `env!("CARGO_PKG_VERSION")` in multiple places.

/// The optmapgen version string (for example, `0.2.1`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
