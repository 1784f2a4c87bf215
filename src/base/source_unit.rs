use std::fmt;

/// A logical document in which exported symbols are authored.
///
/// The set is closed: every registry entry points at one of these notebooks.
/// Using an enum rather than free text keeps a negative lookup result
/// structurally distinct from every valid source unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceUnit {
    /// `01_Hamiltonians.ipynb` — Hamiltonian construction for the
    /// long-range Kitaev chain with quasiperiodic modulation.
    Hamiltonians,
    /// `02_Winding_num.ipynb` — winding-number and Chern-number routines.
    WindingNum,
}

impl SourceUnit {
    /// All source units, in notebook-numbering order.
    pub const ALL: [SourceUnit; 2] = [SourceUnit::Hamiltonians, SourceUnit::WindingNum];

    /// The notebook filename, as used for document titles throughout the
    /// documentation pipeline.
    pub fn notebook(self) -> &'static str {
        match self {
            SourceUnit::Hamiltonians => "01_Hamiltonians.ipynb",
            SourceUnit::WindingNum => "02_Winding_num.ipynb",
        }
    }

    /// The physical module file this notebook's exports are compiled into.
    pub fn module_file(self) -> &'static str {
        match self {
            SourceUnit::Hamiltonians => "Hamiltonians.py",
            SourceUnit::WindingNum => "Winding_num.py",
        }
    }

    /// Find the unit whose notebook filename matches `notebook`.
    pub fn from_notebook(notebook: &str) -> Option<SourceUnit> {
        Self::ALL.into_iter().find(|unit| unit.notebook() == notebook)
    }
}

impl fmt::Display for SourceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notebook())
    }
}
