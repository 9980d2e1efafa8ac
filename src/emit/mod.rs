//! The per-artifact generators and their shared emission vocabulary.
//!
//! Every generator here is a pure `(registry, year) -> String` function: no
//! shared mutable state, no filesystem access. The driver owns the mapping
//! from generators to output files.
//!
//! ## Modules
//!
//! - `typedefs` - native type aliases (`typedefs.hxx`)
//! - `supported` - the `IsSupportedType<T>` trait (`IsSupportedType.hxx`)
//! - `value` - the `OptMapValue` tagged-value wrapper (`OptMapValue.hxx`)
//! - `instantiation` - explicit instantiation lists for `ArraySpan` and `OptMap`
//! - `bindings` - the SWIG interface files (`ArraySpan.i`, `OptMap.i`)

pub mod bindings;
pub mod instantiation;
pub mod supported;
pub mod typedefs;
pub mod value;
mod writer;

pub use writer::SourceWriter;

use crate::registry::Registry;

/// The C++ namespace all generated declarations live in.
pub const NAMESPACE: &str = "optmap";

/// Write the copyright / machine-generated banner every artifact starts with.
pub(crate) fn banner(w: &mut SourceWriter, year: i32) {
    w.line("//");
    w.line(&format!("// Copyright (C) {year} by the optmap contributors"));
    w.line("//");
    w.line("// This file is part of optmap, distributed under the terms of the");
    w.line("// Apache License, Version 2.0. See the LICENSE file in the project");
    w.line("// root for details.");
    w.line("//");
    w.blank();
    w.line("//");
    w.line("// Do not edit. This file has been machine generated by optmapgen.");
    w.line("// Edit the registry or the generator instead and rerun it.");
    w.line("//");
}

pub(crate) fn open_namespace(w: &mut SourceWriter) {
    w.blank();
    w.line(&format!("namespace {NAMESPACE} {{"));
    w.blank();
}

pub(crate) fn close_namespace(w: &mut SourceWriter) {
    w.blank();
    w.line(&format!("}} // namespace {NAMESPACE}"));
}

/// All storable C++ types: each kind's alias, then each kind's ArrayKind,
/// both halves in registry order.
pub(crate) fn supported_cpp_types(registry: &Registry) -> Vec<String> {
    registry
        .kinds()
        .iter()
        .map(|k| k.alias())
        .chain(registry.kinds().iter().map(|k| k.span_alias()))
        .collect()
}
