//! # kitaev-index-base
//!
//! Symbol registry and documentation index for the long-range Kitaev / AAH
//! topological-chain package.
//!
//! The package's exported symbols are authored in numbered notebooks and
//! compiled into physical module files for distribution. This crate is the
//! bookkeeping between the two: a read-only registry mapping each exported
//! name to its defining notebook, the module list, the reference URLs, and
//! the custom-doc-link hook the documentation generator calls per symbol.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! index    → the generated package index (build-once global)
//!   ↓
//! links    → doc-link resolution strategy
//!   ↓
//! registry → symbol registry (arena + name/unit indexes)
//!   ↓
//! base     → foundation types (SourceUnit, domain constants)
//! ```

// ============================================================================
// MODULES (dependency order: base → registry → links → index)
// ============================================================================

/// Foundation types: SourceUnit, domain constants
pub mod base;

/// Symbol registry: exported name → defining notebook
pub mod registry;

/// Doc-link resolution strategy
pub mod links;

/// The generated package index
pub mod index;

// Re-export commonly needed items
pub use base::SourceUnit;
pub use index::{PackageIndex, package_index};
pub use links::{DocLinkResolver, NoCustomLinks};
pub use registry::{EntryId, RegistryError, SymbolEntry, SymbolRegistry};
