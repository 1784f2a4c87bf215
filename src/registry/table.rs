use std::collections::HashMap;

use indexmap::IndexMap;

use crate::base::SourceUnit;

use super::entry::{EntryId, SymbolEntry};
use super::error::RegistryError;

pub struct SymbolRegistry {
    /// Arena storage for all entries - single source of truth
    pub(super) arena: Vec<SymbolEntry>,
    /// Index for O(1) name lookups, kept in declaration order: name -> EntryId
    pub(super) entries_by_name: IndexMap<String, EntryId>,
    /// Index mapping source units to the entries authored in them
    pub(super) entries_by_unit: HashMap<SourceUnit, Vec<EntryId>>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            entries_by_name: IndexMap::new(),
            entries_by_unit: HashMap::new(),
        }
    }

    /// Register an exported symbol as defined in `unit`.
    ///
    /// Re-registering an identical `(name, unit)` pair is a no-op that
    /// returns the existing id, so declaring the same generated table twice
    /// cannot change lookup results. Registering a known name under a
    /// different unit is rejected, keeping the name set unique.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        unit: SourceUnit,
    ) -> Result<EntryId, RegistryError> {
        let name = name.into();

        if let Some(&id) = self.entries_by_name.get(&name) {
            let existing = match self.get_entry(id) {
                Some(entry) => entry.unit(),
                None => unit,
            };
            if existing == unit {
                return Ok(id);
            }
            return Err(RegistryError::DuplicateSymbol {
                name,
                existing,
                new: unit,
            });
        }

        // Add entry to arena and get its ID
        let id = EntryId::new(self.arena.len());
        self.arena.push(SymbolEntry::new(name.clone(), unit));

        // Update the name -> EntryId index for O(1) lookup
        self.entries_by_name.insert(name, id);

        // Update the unit -> EntryIds index
        self.entries_by_unit.entry(unit).or_default().push(id);

        Ok(id)
    }

    /// Resolve an exported name to the notebook that defines it.
    ///
    /// An absent name is an ordinary negative result, not a failure.
    pub fn lookup_source(&self, name: &str) -> Option<SourceUnit> {
        let unit = self
            .entries_by_name
            .get(name)
            .and_then(|id| self.get_entry(*id))
            .map(|entry| entry.unit());
        tracing::trace!(
            "[REGISTRY] lookup name='{}' found={}",
            name,
            unit.is_some()
        );
        unit
    }

    /// Get an entry by its EntryId (O(1) arena lookup)
    pub fn get_entry(&self, id: EntryId) -> Option<&SymbolEntry> {
        self.arena.get(id.index())
    }

    /// Find an EntryId by name (for callers that need the ID)
    pub fn find_id(&self, name: &str) -> Option<EntryId> {
        self.entries_by_name.get(name).copied()
    }
}

impl Default for SymbolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
