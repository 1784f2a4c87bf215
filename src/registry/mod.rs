//! Central registry of the package's exported symbols
mod entry;
mod error;
mod lookup;
mod table;

pub use entry::{EntryId, SymbolEntry};
pub use error::RegistryError;
pub use table::SymbolRegistry;
