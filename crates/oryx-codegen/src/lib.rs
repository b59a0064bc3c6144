#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Constant generator core: reads the declarative `constants.yaml`, validates it, and renders
//! the Rust registry module plus Go and C# constant files.
//!
//! # Design
//! - Pure library surface used by the registry build script and the CLI.
//! - Every artifact is rendered before any file is written; a rejected source writes nothing.
//! - Rendering depends only on the source bytes, so regeneration is byte-identical.
//!
//! Layout: `document.rs` (serde model, conflict scan), `validate.rs` (invariants),
//! `naming.rs` (identifier conversions), `render/` (per-language output).

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{CodegenError, Result};

pub mod document;
pub mod error;
pub mod model;
pub mod naming;
pub mod render;
pub mod validate;

pub use document::{OutputSpec, parse_document};
pub use error::{Location, SourcePosition};
pub use model::{Collection, Constant, Registry};
pub use render::{GeneratedFile, render_csharp, render_go, render_outputs, render_rust};

/// Default file name of the declarative source.
pub const DEFAULT_SOURCE_NAME: &str = "constants.yaml";

/// Read and validate the declarative source at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails any generation-time check.
pub fn load_source(path: &Path) -> Result<Registry> {
    let raw = fs::read_to_string(path).map_err(|source| CodegenError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;
    parse_source(&raw, path)
}

/// Validate an in-memory source, attributing diagnostics to `path`.
///
/// # Errors
///
/// Returns an error for conflict markers, malformed YAML, or any invariant violation.
pub fn parse_source(raw: &str, path: &Path) -> Result<Registry> {
    let document = parse_document(raw, path)?;
    let source_name = path
        .file_name()
        .map_or_else(|| DEFAULT_SOURCE_NAME.to_string(), |name| {
            name.to_string_lossy().into_owned()
        });
    let registry = validate::validate(document, path, &source_name, &source_digest(raw))?;
    tracing::debug!(
        source = %path.display(),
        collections = registry.collections.len(),
        constants = registry.len(),
        "loaded constants source"
    );
    Ok(registry)
}

/// SHA-256 hex digest of the source text.
#[must_use]
pub fn source_digest(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Write generated files, creating parent directories as needed.
///
/// Files whose contents already match are left untouched. Returns how many files changed.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or a file cannot be read or written.
pub fn write_outputs(files: &[GeneratedFile]) -> Result<usize> {
    let mut written = 0;
    for file in files {
        if read_existing(&file.path)?.as_deref() == Some(file.contents.as_str()) {
            tracing::debug!(path = %file.path.display(), "generated output unchanged");
            continue;
        }
        if let Some(parent) = file.path.parent() {
            fs::create_dir_all(parent).map_err(|source| CodegenError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&file.path, &file.contents).map_err(|source| CodegenError::WriteOutput {
            path: file.path.clone(),
            source,
        })?;
        tracing::info!(path = %file.path.display(), "wrote generated output");
        written += 1;
    }
    Ok(written)
}

/// Verify generated files on disk match what the source renders to.
///
/// Every mismatch is logged; the first one is returned.
///
/// # Errors
///
/// Returns [`CodegenError::MissingOutput`] or [`CodegenError::StaleOutput`] for the first
/// file that does not match, or an IO error if a file cannot be read.
pub fn check_outputs(files: &[GeneratedFile]) -> Result<()> {
    let mut first_failure = None;
    for file in files {
        let failure = match read_existing(&file.path)? {
            None => Some(CodegenError::MissingOutput {
                path: file.path.clone(),
            }),
            Some(existing) if existing != file.contents => Some(CodegenError::StaleOutput {
                path: file.path.clone(),
            }),
            Some(_) => None,
        };
        if let Some(err) = failure {
            tracing::warn!(path = %file.path.display(), error = %err, "generated output out of date");
            if first_failure.is_none() {
                first_failure = Some(err);
            }
        }
    }
    first_failure.map_or(Ok(()), Err)
}

fn read_existing(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(CodegenError::ReadOutput {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::path::PathBuf;

    #[test]
    fn digest_is_stable_hex() {
        let digest = source_digest("- name: a\n");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|ch| ch.is_ascii_hexdigit()));
        assert_eq!(digest, source_digest("- name: a\n"));
        assert_ne!(digest, source_digest("- name: b\n"));
    }

    #[test]
    fn parse_source_records_file_name_only() -> std::result::Result<(), Box<dyn Error>> {
        let registry = parse_source(
            "- name: extVarNames\n  constants:\n    EnvironmentType: ORYX_ENV_TYPE\n",
            Path::new("/build/config/constants.yaml"),
        )?;
        assert_eq!(registry.source_name, "constants.yaml");
        Ok(())
    }

    #[test]
    fn load_source_reports_missing_file() -> std::result::Result<(), Box<dyn Error>> {
        let missing = PathBuf::from("target/definitely-missing/constants.yaml");
        let err = load_source(&missing)
            .err()
            .ok_or_else(|| std::io::Error::other("missing source should fail"))?;
        assert!(matches!(err, CodegenError::ReadSource { .. }));
        Ok(())
    }
}
