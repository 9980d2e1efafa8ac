#![forbid(unsafe_code)]
//! optmapgen
//!
//! Generator for the kind-specific sources of optmap, a string-keyed C++
//! parameter map exposed to Python via SWIG. From one ordered registry of
//! conceptual kinds (integer, float, complex, string) it regenerates a
//! coupled family of artifacts: the native typedefs, the `OptMapValue`
//! tagged-value wrapper, explicit instantiation lists for `ArraySpan` and
//! `OptMap`, and the two SWIG interface files.
//!
//! The registry is the single source of truth: every per-kind section of
//! every artifact enumerates exactly the registered kinds, in registry
//! order, and regeneration from an unchanged registry is byte-identical.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `driver` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a generator bug (logic error), use `.expect("INVARIANT: reason")`
//!   with a clear explanation.

pub mod cli;
pub mod driver;
pub mod emit;
pub mod registry;
pub mod version;

pub use driver::{Artifact, EmitError, EmitOptions};
pub use registry::{Kind, KindSpec, Registry, RegistryError};
