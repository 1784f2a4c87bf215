//! The package index the documentation generator reads.
//!
//! [`PackageIndex`] bundles the symbol registry with the static facts the
//! generator needs (module list, reference URLs) and the link-resolution
//! strategy it calls per symbol. The index is built once from the generated
//! table and published as a process-wide immutable global via
//! [`package_index`]; any number of readers may query it concurrently.

mod data;

use std::sync::LazyLock;

use tracing::debug;

use crate::base::SourceUnit;
use crate::base::constants::{DOC_URL, GIT_URL, MODULE_FILES};
use crate::links::{DocLinkResolver, NoCustomLinks};
use crate::registry::{RegistryError, SymbolRegistry};

/// The package's documentation index: symbol registry, module list, and
/// reference URLs, plus the custom-link strategy.
pub struct PackageIndex {
    registry: SymbolRegistry,
    modules: &'static [&'static str],
    doc_url: &'static str,
    git_url: &'static str,
    link_resolver: Box<dyn DocLinkResolver>,
}

impl PackageIndex {
    /// Build a fresh index from the generated symbol table.
    ///
    /// Prefer [`package_index`] for read access; building a fresh index is
    /// only useful for swapping in a custom link strategy.
    pub fn new() -> Self {
        Self::from_table(data::SYMBOL_TABLE)
    }

    fn from_table(table: &[(&str, SourceUnit)]) -> Self {
        let mut registry = SymbolRegistry::new();
        for &(name, unit) in table {
            // The generated table has unique names; a conflict means a stale
            // regeneration and the later entry is dropped.
            if let Err(err) = registry.insert(name, unit) {
                debug!("[INDEX] dropping conflicting entry: {err}");
            }
        }
        for unit in SourceUnit::ALL {
            debug!(
                "[INDEX] {} symbols from {}",
                registry.symbols_in_unit(unit).len(),
                unit.notebook()
            );
        }
        Self {
            registry,
            modules: &MODULE_FILES,
            doc_url: DOC_URL,
            git_url: GIT_URL,
            link_resolver: Box::new(NoCustomLinks),
        }
    }

    /// Replace the link-resolution strategy.
    pub fn with_link_resolver(mut self, resolver: Box<dyn DocLinkResolver>) -> Self {
        self.link_resolver = resolver;
        self
    }

    /// Resolve an exported name to the notebook that defines it.
    ///
    /// `None` is an ordinary negative result, not a failure.
    pub fn lookup_source(&self, name: &str) -> Option<SourceUnit> {
        self.registry.lookup_source(name)
    }

    /// Error-typed variant of [`lookup_source`](Self::lookup_source).
    pub fn require_source(&self, name: &str) -> Result<SourceUnit, RegistryError> {
        self.registry.require_source(name)
    }

    /// The physical module files, in declared order.
    pub fn modules(&self) -> &[&'static str] {
        self.modules
    }

    /// Custom documentation link for `name`, per the configured strategy.
    ///
    /// Total: the generator calls this for every symbol without
    /// special-casing failure. With the default [`NoCustomLinks`] strategy
    /// the answer is `None` for every input.
    pub fn custom_doc_link(&self, name: &str) -> Option<String> {
        self.link_resolver.resolve(name)
    }

    /// Rendered documentation site.
    pub fn doc_url(&self) -> &'static str {
        self.doc_url
    }

    /// Source repository.
    pub fn git_url(&self) -> &'static str {
        self.git_url
    }

    /// Read access to the underlying registry.
    pub fn registry(&self) -> &SymbolRegistry {
        &self.registry
    }
}

impl Default for PackageIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide index - built on first access, immutable afterwards.
static PACKAGE_INDEX: LazyLock<PackageIndex> = LazyLock::new(PackageIndex::new);

/// The process-wide package index.
pub fn package_index() -> &'static PackageIndex {
    &PACKAGE_INDEX
}
