//! Subcommand handlers.

pub(crate) mod generate;
pub(crate) mod get;
pub(crate) mod list;
pub(crate) mod validate;
