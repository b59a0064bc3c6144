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

//! Immutable registry of the environment-variable names, file paths, and version strings
//! shared by the Oryx startup tooling.
//!
//! Every value is generated at build time from `constants.yaml`; nothing in this crate is
//! hand-maintained. Static access goes through the per-collection modules:
//!
//! ```
//! assert_eq!(oryx_consts::ext_var_names::ENVIRONMENT_TYPE, "ORYX_ENV_TYPE");
//! ```
//!
//! Callers holding a name only at runtime use [`lookup`] or [`value`], which report unknown
//! names as [`RegistryError::NotFound`]:
//!
//! ```
//! assert_eq!(
//!     oryx_consts::value("FpmMaxChildrenSettingName"),
//!     Ok("pm.max_children")
//! );
//! assert!(oryx_consts::value("DoesNotExist").is_err());
//! ```
//!
//! The registry performs no IO and never reads or writes the process environment.

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;
use serde::Serialize;

pub mod error;

pub use error::{RegistryError, RegistryResult};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/registry.rs"));
}

pub use generated::*;

/// One generated constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ConstantEntry {
    /// Declared symbolic name, e.g. `EnvironmentType`.
    pub name: &'static str,
    /// Rust binding inside the collection module, e.g. `ENVIRONMENT_TYPE`.
    pub ident: &'static str,
    /// Literal value.
    pub value: &'static str,
    /// Declaring collection, e.g. `extVarNames`.
    pub collection: &'static str,
    /// Leading word of the name, e.g. `Fpm`. Informational only.
    pub category: &'static str,
}

static INDEX: Lazy<HashMap<&'static str, &'static ConstantEntry>> =
    Lazy::new(|| ENTRIES.iter().map(|entry| (entry.name, entry)).collect());

/// Every constant in declaration order.
#[must_use]
pub fn entries() -> &'static [ConstantEntry] {
    ENTRIES
}

/// Look up a constant by its declared name.
///
/// # Errors
///
/// Returns [`RegistryError::NotFound`] if no constant has that name.
pub fn lookup(name: &str) -> RegistryResult<&'static ConstantEntry> {
    INDEX
        .get(name)
        .copied()
        .ok_or_else(|| RegistryError::NotFound {
            name: name.to_string(),
        })
}

/// Look up a constant's value by its declared name.
///
/// # Errors
///
/// Returns [`RegistryError::NotFound`] if no constant has that name.
pub fn value(name: &str) -> RegistryResult<&'static str> {
    lookup(name).map(|entry| entry.value)
}

/// Whether a constant is declared under `name`.
#[must_use]
pub fn contains(name: &str) -> bool {
    INDEX.contains_key(name)
}

/// Constants declared in `collection`, in declaration order.
pub fn by_collection(collection: &str) -> impl Iterator<Item = &'static ConstantEntry> + '_ {
    ENTRIES
        .iter()
        .filter(move |entry| entry.collection == collection)
}

/// Constants whose name starts with the `category` word, in declaration order.
pub fn by_category(category: &str) -> impl Iterator<Item = &'static ConstantEntry> + '_ {
    ENTRIES
        .iter()
        .filter(move |entry| entry.category == category)
}

/// Collection names in declaration order.
#[must_use]
pub fn collections() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for entry in ENTRIES {
        if !names.contains(&entry.collection) {
            names.push(entry.collection);
        }
    }
    names
}

/// Distinct categories, sorted.
#[must_use]
pub fn categories() -> BTreeSet<&'static str> {
    ENTRIES.iter().map(|entry| entry.category).collect()
}
