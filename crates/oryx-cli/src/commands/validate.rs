use std::io::Write;
use std::path::Path;

use oryx_codegen::{Registry, load_source};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::render_validation;

/// Result of validating a constants source.
#[derive(Debug, Serialize)]
pub(crate) struct ValidationSummary {
    pub(crate) source: String,
    pub(crate) digest: String,
    pub(crate) constants: usize,
    pub(crate) collections: Vec<CollectionSummary>,
    /// Whether the compiled registry was built from these exact bytes.
    pub(crate) matches_compiled_registry: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct CollectionSummary {
    pub(crate) name: String,
    pub(crate) constants: usize,
    pub(crate) outputs: usize,
}

impl ValidationSummary {
    fn new(source: &Path, registry: &Registry) -> Self {
        Self {
            source: source.display().to_string(),
            digest: registry.source_digest.clone(),
            constants: registry.len(),
            collections: registry
                .collections
                .iter()
                .map(|collection| CollectionSummary {
                    name: collection.name.clone(),
                    constants: collection.constants.len(),
                    outputs: collection.outputs.len(),
                })
                .collect(),
            matches_compiled_registry: registry.source_digest == oryx_consts::SOURCE_DIGEST,
        }
    }
}

pub(crate) fn handle_validate(
    source: &Path,
    format: OutputFormat,
    out: &mut impl Write,
) -> CliResult<()> {
    let registry = load_source(source).map_err(CliError::from_codegen)?;
    let summary = ValidationSummary::new(source, &registry);
    tracing::info!(
        source = %source.display(),
        constants = summary.constants,
        matches_compiled_registry = summary.matches_compiled_registry,
        "constants source is valid"
    );
    render_validation(&summary, format, out)
}
