//! Error types for registry construction and lookup.

use thiserror::Error;

use crate::base::SourceUnit;

/// Errors that can occur while building or querying the registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A symbol name was declared a second time with a different source unit.
    #[error("symbol '{name}' is already registered in {existing}, cannot re-register in {new}")]
    DuplicateSymbol {
        name: String,
        existing: SourceUnit,
        new: SourceUnit,
    },

    /// A lookup key is not present in the registry.
    #[error("unknown symbol: '{0}'")]
    UnknownSymbol(String),
}
