//! Error types for constant generation.

use std::fmt::{self, Display, Formatter};
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for generator operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Position of a constant inside the declarative document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Collection declaring the constant.
    pub collection: String,
    /// 1-based position of the constant within its collection.
    pub position: usize,
}

impl Display for Location {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "collection '{}' entry {}",
            self.collection, self.position
        )
    }
}

/// Line and column reported by the YAML parser, when it knows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourcePosition {
    /// Parser reported a 1-based line and column.
    Known {
        /// Line number.
        line: usize,
        /// Column number.
        column: usize,
    },
    /// Parser did not report a position.
    Unknown,
}

impl SourcePosition {
    pub(crate) fn of(error: &serde_yaml::Error) -> Self {
        error
            .location()
            .map_or(Self::Unknown, |location| Self::Known {
                line: location.line(),
                column: location.column(),
            })
    }
}

impl Display for SourcePosition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known { line, column } => write!(formatter, " at line {line}, column {column}"),
            Self::Unknown => Ok(()),
        }
    }
}

/// Errors raised while reading, validating, rendering, or writing constants.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The declarative source could not be read.
    #[error("failed to read constants source {}", .path.display())]
    ReadSource {
        /// Source path.
        path: PathBuf,
        /// IO error.
        #[source]
        source: io::Error,
    },
    /// The source still contains a merge conflict marker.
    #[error(
        "unresolved merge conflict marker '{marker}' in {} at line {line}; resolve it by hand before generating",
        .path.display()
    )]
    ConflictMarker {
        /// Source path.
        path: PathBuf,
        /// 1-based line of the marker.
        line: usize,
        /// Marker that was found.
        marker: &'static str,
    },
    /// The source is not a well-formed constants document.
    #[error("failed to parse constants source {}{position}", .path.display())]
    Parse {
        /// Source path.
        path: PathBuf,
        /// Where the parser stopped.
        position: SourcePosition,
        /// YAML error.
        #[source]
        source: serde_yaml::Error,
    },
    /// The document declares no collections.
    #[error("constants source {} declares no collections", .path.display())]
    EmptyDocument {
        /// Source path.
        path: PathBuf,
    },
    /// A collection name is not a usable identifier.
    #[error("invalid collection name '{name}': {reason}")]
    InvalidCollectionName {
        /// Offending collection name.
        name: String,
        /// Why the name was rejected.
        reason: &'static str,
    },
    /// Two collections share a name.
    #[error("duplicate collection '{name}'")]
    DuplicateCollection {
        /// Repeated collection name.
        name: String,
    },
    /// Two collection names render to the same module name.
    #[error("collections '{first}' and '{second}' both map to module '{module}'")]
    ModuleCollision {
        /// Collection declared first.
        first: String,
        /// Collection declared second.
        second: String,
        /// Shared module name.
        module: String,
    },
    /// A collection declares no constants.
    #[error("collection '{name}' declares no constants")]
    EmptyCollection {
        /// Collection name.
        name: String,
    },
    /// A constant name is not a usable identifier.
    #[error("invalid constant name '{name}' at {location}: {reason}")]
    InvalidName {
        /// Offending constant name.
        name: String,
        /// Where the constant is declared.
        location: Location,
        /// Why the name was rejected.
        reason: &'static str,
    },
    /// A constant value is not a plain string.
    #[error("invalid value for '{name}' at {location}: {reason}")]
    InvalidValue {
        /// Constant name.
        name: String,
        /// Where the constant is declared.
        location: Location,
        /// Why the value was rejected.
        reason: &'static str,
    },
    /// The same constant name is declared twice.
    #[error("duplicate constant '{name}' at {second} (first declared at {first})")]
    DuplicateName {
        /// Repeated constant name.
        name: String,
        /// First declaration.
        first: Location,
        /// Conflicting declaration.
        second: Location,
    },
    /// Two distinct names render to the same binding identifier.
    #[error("constants '{first}' and '{second}' both map to identifier '{ident}'")]
    IdentifierCollision {
        /// Constant declared first.
        first: String,
        /// Constant declared second.
        second: String,
        /// Shared identifier.
        ident: String,
    },
    /// An output target is misconfigured.
    #[error("invalid {kind} output for collection '{collection}': {reason}")]
    InvalidOutput {
        /// Collection owning the output.
        collection: String,
        /// Output kind label.
        kind: &'static str,
        /// Why the output was rejected.
        reason: &'static str,
    },
    /// Two outputs resolve to the same file.
    #[error("output {} is produced more than once", .path.display())]
    OutputCollision {
        /// Contested output path.
        path: PathBuf,
    },
    /// A regex failed to compile.
    #[error("failed to compile regex '{pattern}'")]
    RegexCompile {
        /// Regex pattern.
        pattern: &'static str,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
    /// Failed to create an output directory.
    #[error("failed to create output directory {}", .path.display())]
    CreateDir {
        /// Directory path.
        path: PathBuf,
        /// IO error.
        #[source]
        source: io::Error,
    },
    /// Failed to write a generated file.
    #[error("failed to write generated output {}", .path.display())]
    WriteOutput {
        /// Output path.
        path: PathBuf,
        /// IO error.
        #[source]
        source: io::Error,
    },
    /// Failed to read a previously generated file.
    #[error("failed to read generated output {}", .path.display())]
    ReadOutput {
        /// Output path.
        path: PathBuf,
        /// IO error.
        #[source]
        source: io::Error,
    },
    /// A generated file is absent on disk.
    #[error("generated output {} is missing; run generate", .path.display())]
    MissingOutput {
        /// Output path.
        path: PathBuf,
    },
    /// A generated file no longer matches the source.
    #[error("generated output {} is stale; run generate", .path.display())]
    StaleOutput {
        /// Output path.
        path: PathBuf,
    },
}
