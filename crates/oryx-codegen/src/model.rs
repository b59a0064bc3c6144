//! Validated registry model handed to the renderers.

use crate::document::OutputSpec;

/// A fully validated constants document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    /// File name of the declarative source (no directories, so output stays portable).
    pub source_name: String,
    /// SHA-256 hex digest of the source bytes.
    pub source_digest: String,
    /// Collections in declaration order.
    pub collections: Vec<Collection>,
}

/// A validated collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    /// Declared name, e.g. `extVarNames`.
    pub name: String,
    /// Rust module and Go file stem, e.g. `ext_var_names`.
    pub module: String,
    /// C# class name, e.g. `ExtVarNames`.
    pub type_name: String,
    /// Constants in declaration order.
    pub constants: Vec<Constant>,
    /// Sibling-language targets.
    pub outputs: Vec<OutputSpec>,
}

/// A validated constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    /// Declared symbolic name, e.g. `EnvironmentType`.
    pub name: String,
    /// Rust binding, e.g. `ENVIRONMENT_TYPE`.
    pub ident: String,
    /// Literal value.
    pub value: String,
    /// Informational category derived from the name.
    pub category: String,
}

impl Registry {
    /// Iterate every constant across all collections in declaration order.
    pub fn constants(&self) -> impl Iterator<Item = (&Collection, &Constant)> {
        self.collections.iter().flat_map(|collection| {
            collection
                .constants
                .iter()
                .map(move |constant| (collection, constant))
        })
    }

    /// Find a constant by its declared name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Constant> {
        self.constants()
            .map(|(_, constant)| constant)
            .find(|constant| constant.name == name)
    }

    /// Total number of constants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collections
            .iter()
            .map(|collection| collection.constants.len())
            .sum()
    }

    /// Whether the registry holds no constants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
