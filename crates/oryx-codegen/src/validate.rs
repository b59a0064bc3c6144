//! Validation of a parsed document into a [`Registry`].
//!
//! Every check here is fatal: a document that fails any of them never reaches a renderer,
//! so no artifact is produced from it.

use std::collections::{HashMap, HashSet};
use std::path::{Component, Path};

use regex::Regex;

use crate::document::{CollectionSpec, Document, OutputSpec, RawConstant};
use crate::error::{CodegenError, Location, Result};
use crate::model::{Collection, Constant, Registry};
use crate::naming;

const CONSTANT_NAME_PATTERN: &str = r"^[A-Z][A-Za-z0-9]*$";
const COLLECTION_NAME_PATTERN: &str = r"^[a-z][A-Za-z0-9]*$";
const GO_PACKAGE_PATTERN: &str = r"^[a-z][a-z0-9_]*$";
const CSHARP_NAMESPACE_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$";

struct Patterns {
    constant_name: Regex,
    collection_name: Regex,
    go_package: Regex,
    csharp_namespace: Regex,
}

impl Patterns {
    fn compile() -> Result<Self> {
        Ok(Self {
            constant_name: compile(CONSTANT_NAME_PATTERN)?,
            collection_name: compile(COLLECTION_NAME_PATTERN)?,
            go_package: compile(GO_PACKAGE_PATTERN)?,
            csharp_namespace: compile(CSHARP_NAMESPACE_PATTERN)?,
        })
    }
}

fn compile(pattern: &'static str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| CodegenError::RegexCompile { pattern, source })
}

/// Names seen so far, keyed for the uniqueness checks.
#[derive(Default)]
struct Seen {
    collections: HashSet<String>,
    modules: HashMap<String, String>,
    names: HashMap<String, Location>,
    idents: HashMap<String, String>,
    values: HashMap<String, String>,
}

/// Validate a parsed document.
///
/// # Errors
///
/// Returns the first violation found: an empty document or collection, an invalid or
/// duplicate collection or constant name, a non-string value, an identifier or module
/// collision, or a malformed output target.
pub fn validate(
    document: Document,
    path: &Path,
    source_name: &str,
    source_digest: &str,
) -> Result<Registry> {
    if document.collections.is_empty() {
        return Err(CodegenError::EmptyDocument {
            path: path.to_path_buf(),
        });
    }

    let patterns = Patterns::compile()?;
    let mut seen = Seen::default();
    let mut collections = Vec::with_capacity(document.collections.len());
    for spec in document.collections {
        collections.push(validate_collection(spec, &patterns, &mut seen)?);
    }

    Ok(Registry {
        source_name: source_name.to_string(),
        source_digest: source_digest.to_string(),
        collections,
    })
}

fn validate_collection(
    spec: CollectionSpec,
    patterns: &Patterns,
    seen: &mut Seen,
) -> Result<Collection> {
    let CollectionSpec {
        name,
        constants,
        outputs,
    } = spec;

    if !patterns.collection_name.is_match(&name) {
        return Err(CodegenError::InvalidCollectionName {
            name,
            reason: "must be camelCase ASCII letters and digits",
        });
    }
    if !seen.collections.insert(name.clone()) {
        return Err(CodegenError::DuplicateCollection { name });
    }

    let module = naming::snake(&name);
    if naming::is_rust_keyword(&module) {
        return Err(CodegenError::InvalidCollectionName {
            name,
            reason: "maps to a reserved Rust keyword",
        });
    }
    if naming::is_reserved_module(&module) {
        return Err(CodegenError::InvalidCollectionName {
            name,
            reason: "maps to a module name the registry crate already uses",
        });
    }
    if let Some(first) = seen.modules.get(&module) {
        return Err(CodegenError::ModuleCollision {
            first: first.clone(),
            second: name,
            module,
        });
    }
    seen.modules.insert(module.clone(), name.clone());

    if constants.entries.is_empty() {
        return Err(CodegenError::EmptyCollection { name });
    }

    let mut validated = Vec::with_capacity(constants.entries.len());
    for (index, raw) in constants.entries.into_iter().enumerate() {
        let location = Location {
            collection: name.clone(),
            position: index + 1,
        };
        validated.push(validate_constant(raw, location, patterns, seen)?);
    }

    for output in &outputs {
        validate_output(&name, output, patterns)?;
    }

    let type_name = naming::pascal(&name);
    if outputs
        .iter()
        .any(|output| matches!(output, OutputSpec::Csharp { .. }))
        && let Some(index) = validated
            .iter()
            .position(|constant| constant.name == type_name)
    {
        return Err(CodegenError::InvalidName {
            name: type_name,
            location: Location {
                collection: name,
                position: index + 1,
            },
            reason: "matches the C# class generated for its collection",
        });
    }

    tracing::debug!(
        collection = %name,
        constants = validated.len(),
        outputs = outputs.len(),
        "validated collection"
    );

    Ok(Collection {
        type_name,
        name,
        module,
        constants: validated,
        outputs,
    })
}

fn validate_constant(
    raw: RawConstant,
    location: Location,
    patterns: &Patterns,
    seen: &mut Seen,
) -> Result<Constant> {
    let RawConstant { name, value } = raw;

    if !patterns.constant_name.is_match(&name) {
        return Err(CodegenError::InvalidName {
            name,
            location,
            reason: "must be PascalCase ASCII letters and digits",
        });
    }

    let serde_yaml::Value::String(value) = value else {
        return Err(CodegenError::InvalidValue {
            name,
            location,
            reason: "must be a string; quote numbers, booleans, and empty values",
        });
    };
    if value.chars().any(|ch| ch.is_control() && ch != '\t') {
        return Err(CodegenError::InvalidValue {
            name,
            location,
            reason: "must not contain control characters",
        });
    }

    if let Some(first) = seen.names.get(&name) {
        return Err(CodegenError::DuplicateName {
            first: first.clone(),
            second: location,
            name,
        });
    }

    let ident = naming::screaming_snake(&name);
    if let Some(first) = seen.idents.get(&ident) {
        return Err(CodegenError::IdentifierCollision {
            first: first.clone(),
            second: name,
            ident,
        });
    }

    if let Some(first) = seen.values.get(&value) {
        tracing::warn!(
            value = %value,
            first = %first,
            second = %name,
            "constants share a value"
        );
    } else {
        seen.values.insert(value.clone(), name.clone());
    }

    seen.names.insert(name.clone(), location);
    seen.idents.insert(ident.clone(), name.clone());

    Ok(Constant {
        category: naming::category(&name).to_string(),
        name,
        ident,
        value,
    })
}

fn validate_output(collection: &str, output: &OutputSpec, patterns: &Patterns) -> Result<()> {
    let invalid = |reason| CodegenError::InvalidOutput {
        collection: collection.to_string(),
        kind: output.kind(),
        reason,
    };

    let directory = output.directory();
    if directory.as_os_str().is_empty() {
        return Err(invalid("directory must not be empty"));
    }
    if directory
        .components()
        .any(|component| !matches!(component, Component::Normal(_) | Component::CurDir))
    {
        return Err(invalid(
            "directory must be relative and must not leave the output root",
        ));
    }

    match output {
        OutputSpec::Go { package, .. } if !patterns.go_package.is_match(package) => {
            Err(invalid("package must be a lowercase Go identifier"))
        }
        OutputSpec::Csharp { namespace, .. } if !patterns.csharp_namespace.is_match(namespace) => {
            Err(invalid("namespace must be dot-separated identifiers"))
        }
        OutputSpec::Go { .. } | OutputSpec::Csharp { .. } => Ok(()),
    }
}
