use super::residue::Residue;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub id: String,                   // Chain identifier (e.g., "A", "B")
    pub(crate) residues: Vec<Residue>, // Residues in file order
}

impl Chain {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            residues: Vec::new(),
        }
    }

    pub fn with_residues(id: &str, residues: Vec<Residue>) -> Self {
        Self {
            id: id.to_string(),
            residues,
        }
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    /// Distinct sequence numbers of the residues in this chain.
    ///
    /// Residues without a number are skipped.
    pub fn residue_numbers(&self) -> BTreeSet<isize> {
        self.residues.iter().filter_map(|r| r.number).collect()
    }
}
