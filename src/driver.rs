//! Emission driver: the fixed artifact table and the file writes.
//!
//! Every artifact is rendered in memory first, then the whole set is staged
//! to `<name>.tmp` files and renamed into place only once every stage
//! succeeded. A failure anywhere discards the staged files, so a run never
//! leaves a mixed-generation artifact set behind.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::emit::{bindings, instantiation, supported, typedefs, value};
use crate::registry::Registry;

/// A pure generator: registry snapshot and banner year in, artifact text out.
pub type GenerateFn = fn(&Registry, i32) -> String;

/// One output slot of the generation run.
pub struct Artifact {
    /// File name of the slot, relative to the output directory
    pub file_name: &'static str,
    /// What the artifact declares, for logs
    pub describes: &'static str,
    /// The generator owning the slot
    pub generate: GenerateFn,
}

/// The fixed, ordered artifact table. Order here decides write order only;
/// the generators are independent of each other.
pub const ARTIFACTS: &[Artifact] = &[
    Artifact {
        file_name: "typedefs.hxx",
        describes: "native type aliases",
        generate: typedefs::generate,
    },
    Artifact {
        file_name: "IsSupportedType.hxx",
        describes: "supported-type trait",
        generate: supported::generate,
    },
    Artifact {
        file_name: "OptMapValue.hxx",
        describes: "tagged-value wrapper",
        generate: value::generate,
    },
    Artifact {
        file_name: "ArraySpan.instantiation.hxx",
        describes: "array container instantiations",
        generate: instantiation::generate_array_span,
    },
    Artifact {
        file_name: "OptMap.instantiation.hxx",
        describes: "map accessor instantiations",
        generate: instantiation::generate_opt_map,
    },
    Artifact {
        file_name: "ArraySpan.i",
        describes: "array view binding interface",
        generate: bindings::generate_array_span_i,
    },
    Artifact {
        file_name: "OptMap.i",
        describes: "map binding interface",
        generate: bindings::generate_opt_map_i,
    },
];

/// Errors raised while writing the artifact set.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to stage `{}`: {source}", .path.display())]
    Stage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to move `{}` into place: {source}", .path.display())]
    Commit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where and under which banner year to emit.
pub struct EmitOptions {
    pub out_dir: PathBuf,
    pub year: i32,
}

impl EmitOptions {
    pub fn new(out_dir: impl Into<PathBuf>, year: i32) -> Self {
        Self {
            out_dir: out_dir.into(),
            year,
        }
    }
}

/// Regenerate every artifact from the registry snapshot.
///
/// Returns the paths written, in table order. On error nothing has been
/// renamed into place and all staged files have been removed.
#[tracing::instrument(skip_all, fields(out_dir = %options.out_dir.display(), kind_count = registry.kinds().len()))]
pub fn emit_all(registry: &Registry, options: &EmitOptions) -> Result<Vec<PathBuf>, EmitError> {
    // Render everything before touching the filesystem.
    let rendered: Vec<(&Artifact, String)> = ARTIFACTS
        .iter()
        .map(|artifact| (artifact, (artifact.generate)(registry, options.year)))
        .collect();

    // Stage the full set.
    let mut staged: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(rendered.len());
    for (artifact, text) in &rendered {
        let tmp = options.out_dir.join(format!("{}.tmp", artifact.file_name));
        let path = options.out_dir.join(artifact.file_name);
        if let Err(source) = fs::write(&tmp, text) {
            discard_staged(&staged);
            return Err(EmitError::Stage { path: tmp, source });
        }
        staged.push((tmp, path));
    }

    // Rename into place, truncating whatever was there before.
    let mut written = Vec::with_capacity(staged.len());
    for (index, (tmp, path)) in staged.iter().enumerate() {
        if let Err(source) = fs::rename(tmp, path) {
            discard_staged(&staged[index..]);
            return Err(EmitError::Commit {
                path: path.clone(),
                source,
            });
        }
        tracing::info!(
            artifact = ARTIFACTS[index].file_name,
            describes = ARTIFACTS[index].describes,
            "wrote artifact"
        );
        written.push(path.clone());
    }
    Ok(written)
}

fn discard_staged(staged: &[(PathBuf, PathBuf)]) {
    for (tmp, _) in staged {
        let _ = fs::remove_file(tmp);
    }
}
