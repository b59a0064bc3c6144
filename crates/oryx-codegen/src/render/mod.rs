//! Deterministic renderers for the validated registry.
//!
//! Output depends only on the [`Registry`]: no timestamps, no absolute paths, and
//! declaration order throughout, so rendering an unchanged source twice is byte-identical.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::document::OutputSpec;
use crate::error::{CodegenError, Result};
use crate::model::Registry;

mod csharp;
mod go;
mod rust;

pub use csharp::render_csharp;
pub use go::render_go;
pub use rust::render_rust;

/// A rendered artifact and where it belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Destination path.
    pub path: PathBuf,
    /// File contents.
    pub contents: String,
}

/// Render every sibling-language output declared in the registry.
///
/// Output directories are resolved against `out_root`.
///
/// # Errors
///
/// Returns [`CodegenError::OutputCollision`] when two outputs resolve to the same file.
pub fn render_outputs(registry: &Registry, out_root: &Path) -> Result<Vec<GeneratedFile>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for collection in &registry.collections {
        for output in &collection.outputs {
            let (path, contents) = match output {
                OutputSpec::Go { directory, package } => (
                    out_root
                        .join(directory)
                        .join(format!("{}.go", collection.module)),
                    render_go(registry, collection, package),
                ),
                OutputSpec::Csharp {
                    directory,
                    namespace,
                } => (
                    out_root
                        .join(directory)
                        .join(format!("{}.cs", collection.type_name)),
                    render_csharp(registry, collection, namespace),
                ),
            };
            if !seen.insert(path.clone()) {
                return Err(CodegenError::OutputCollision { path });
            }
            files.push(GeneratedFile { path, contents });
        }
    }
    Ok(files)
}

/// Line comment marking a file as generated, shared by every `//`-comment language.
///
/// Matches the `Code generated ... DO NOT EDIT.` convention recognised by Go tooling.
pub(crate) fn generated_header(registry: &Registry) -> String {
    format!(
        "// Code generated from {} (sha256:{}). DO NOT EDIT.\n",
        registry.source_name, registry.source_digest
    )
}
