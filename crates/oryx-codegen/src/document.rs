//! Serde model of the declarative constants document and the pre-parse conflict scan.
//!
//! The document is a YAML sequence of collections:
//!
//! ```yaml
//! - name: extVarNames
//!   constants:
//!     EnvironmentType: ORYX_ENV_TYPE
//!   outputs:
//!     - type: go
//!       directory: generated/go/consts
//!       package: consts
//! ```

use std::fmt::{self, Formatter};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

use crate::error::{CodegenError, Result, SourcePosition};

/// Merge markers left behind by an unresolved VCS conflict.
const CONFLICT_MARKERS: [&str; 4] = ["<<<<<<<", "|||||||", "=======", ">>>>>>>"];

/// Parsed, not yet validated, constants document.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Document {
    /// Collections in declaration order.
    pub collections: Vec<CollectionSpec>,
}

/// One named group of constants.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionSpec {
    /// Collection name (`camelCase`).
    pub name: String,
    /// Constants in declaration order, duplicates included.
    pub constants: ConstantList,
    /// Sibling-language files generated from this collection.
    #[serde(default)]
    pub outputs: Vec<OutputSpec>,
}

/// Ordered list of declared constants.
///
/// Deserialised from a YAML mapping without collapsing repeated keys, so duplicates survive
/// until validation can report them with their positions.
#[derive(Debug, Clone, Default)]
pub struct ConstantList {
    /// Raw entries in declaration order.
    pub entries: Vec<RawConstant>,
}

/// A constant exactly as written in the document.
#[derive(Debug, Clone)]
pub struct RawConstant {
    /// Declared name.
    pub name: String,
    /// Declared value; validation requires a string scalar.
    pub value: serde_yaml::Value,
}

/// Sibling-language target for a collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutputSpec {
    /// Go source file with one `const` per constant.
    Go {
        /// Output directory, relative to the output root.
        directory: PathBuf,
        /// Go package clause.
        package: String,
    },
    /// C# source file with a static class of `const string` members.
    Csharp {
        /// Output directory, relative to the output root.
        directory: PathBuf,
        /// C# namespace wrapping the class.
        namespace: String,
    },
}

impl OutputSpec {
    /// Short label used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Go { .. } => "go",
            Self::Csharp { .. } => "csharp",
        }
    }

    /// Output directory relative to the output root.
    #[must_use]
    pub fn directory(&self) -> &Path {
        match self {
            Self::Go { directory, .. } | Self::Csharp { directory, .. } => directory,
        }
    }
}

impl<'de> Deserialize<'de> for ConstantList {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ConstantListVisitor;

        impl<'de> Visitor<'de> for ConstantListVisitor {
            type Value = ConstantList;

            fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
                formatter.write_str("a mapping of constant names to string values")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, value)) = map.next_entry::<String, serde_yaml::Value>()? {
                    entries.push(RawConstant { name, value });
                }
                Ok(ConstantList { entries })
            }
        }

        deserializer.deserialize_map(ConstantListVisitor)
    }
}

/// Scan for conflict markers, then parse the document.
///
/// # Errors
///
/// Returns [`CodegenError::ConflictMarker`] for the first marker line and
/// [`CodegenError::Parse`] when the YAML does not match the document shape.
pub fn parse_document(raw: &str, path: &Path) -> Result<Document> {
    scan_conflict_markers(raw, path)?;
    serde_yaml::from_str(raw).map_err(|source| CodegenError::Parse {
        path: path.to_path_buf(),
        position: SourcePosition::of(&source),
        source,
    })
}

fn scan_conflict_markers(raw: &str, path: &Path) -> Result<()> {
    for (index, line) in raw.lines().enumerate() {
        if let Some(&marker) = CONFLICT_MARKERS
            .iter()
            .find(|marker| is_marker_line(line, marker))
        {
            return Err(CodegenError::ConflictMarker {
                path: path.to_path_buf(),
                line: index + 1,
                marker,
            });
        }
    }
    Ok(())
}

fn is_marker_line(line: &str, marker: &str) -> bool {
    let Some(rest) = line.strip_prefix(marker) else {
        return false;
    };
    if marker == "=======" {
        return rest.trim().is_empty();
    }
    rest.is_empty() || rest.starts_with(char::is_whitespace)
}
