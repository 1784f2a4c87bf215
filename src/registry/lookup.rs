use crate::base::SourceUnit;

use super::entry::SymbolEntry;
use super::error::RegistryError;
use super::table::SymbolRegistry;

impl SymbolRegistry {
    // ============================================================
    // Enumeration
    // ============================================================

    /// Returns the count of registered symbols (O(1))
    pub fn symbol_count(&self) -> usize {
        self.entries_by_name.len()
    }

    /// Returns an iterator over all entries in declaration order (lazy, no allocation)
    pub fn iter_symbols(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.entries_by_name
            .values()
            .filter_map(|id| self.arena.get(id.index()))
    }

    /// Exported names in declaration order
    pub fn symbol_names(&self) -> impl Iterator<Item = &str> {
        self.iter_symbols().map(|entry| entry.name())
    }

    // ============================================================
    // Unit-based Operations
    // ============================================================

    /// Get all entries authored in a specific notebook
    ///
    /// Uses an internal index instead of scanning the whole arena.
    pub fn symbols_in_unit(&self, unit: SourceUnit) -> Vec<&SymbolEntry> {
        self.entries_by_unit
            .get(&unit)
            .into_iter()
            .flatten()
            .filter_map(|id| self.arena.get(id.index()))
            .collect()
    }

    // ============================================================
    // Error-typed Lookup
    // ============================================================

    /// Like [`lookup_source`](Self::lookup_source), for callers that treat
    /// an unknown name as an error rather than a negative result.
    pub fn require_source(&self, name: &str) -> Result<SourceUnit, RegistryError> {
        self.lookup_source(name)
            .ok_or_else(|| RegistryError::UnknownSymbol(name.to_string()))
    }
}
