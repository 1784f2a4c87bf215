use crate::base::SourceUnit;

/// Unique identifier for an entry in the registry arena.
/// Uses u32 for compact storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub u32);

impl EntryId {
    /// Create a new EntryId from an index
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the index into the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// An exported symbol together with the notebook that defines it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    name: String,
    unit: SourceUnit,
}

impl SymbolEntry {
    pub fn new(name: impl Into<String>, unit: SourceUnit) -> Self {
        Self {
            name: name.into(),
            unit,
        }
    }

    /// The exported name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The notebook this symbol is authored in
    pub fn unit(&self) -> SourceUnit {
        self.unit
    }
}
