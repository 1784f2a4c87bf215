//! Foundation types for the package index.
//!
//! This module provides the fundamental vocabulary used throughout the crate:
//! - [`SourceUnit`] - the closed set of notebooks symbols are authored in
//! - Domain constants (reference URLs, module file list)
//!
//! This module has NO dependencies on other kitaev_index modules.

pub mod constants;
mod source_unit;

pub use source_unit::SourceUnit;
