use super::chain::Chain;

/// A loaded molecular model, reduced to what residue highlighting needs.
///
/// The structure is an immutable snapshot: readers build it once through
/// [`super::builder::StructureBuilder`] and every later operation only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Structure {
    /// Model id used by the viewer to address this model (e.g. `"1"` or `"1.2"`).
    pub model_id: String,
    /// Human-readable name, typically the file stem.
    pub name: String,
    /// Chains in order of first appearance.
    pub(crate) chains: Vec<Chain>,
}

impl Structure {
    /// Creates a structure from already-assembled chains.
    ///
    /// # Arguments
    ///
    /// * `model_id` - The viewer model id.
    /// * `name` - A display name for the model.
    /// * `chains` - Chains in the order the viewer lists them.
    pub fn new(model_id: &str, name: &str, chains: Vec<Chain>) -> Self {
        Self {
            model_id: model_id.to_string(),
            name: name.to_string(),
            chains,
        }
    }

    /// Returns the chains of the model in order.
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    /// Finds a chain by its identifier.
    ///
    /// # Return
    ///
    /// Returns `Some(&Chain)` for the first chain with a matching id, otherwise `None`.
    pub fn chain_by_id(&self, id: &str) -> Option<&Chain> {
        self.chains.iter().find(|c| c.id == id)
    }

    /// Returns a copy of this structure addressed by a different model id.
    pub fn with_model_id(mut self, model_id: &str) -> Self {
        self.model_id = model_id.to_string();
        self
    }

    /// Total number of residues across all chains.
    pub fn residue_count(&self) -> usize {
        self.chains.iter().map(|c| c.residues().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::residue::Residue;

    fn two_chain_structure() -> Structure {
        Structure::new(
            "1",
            "test",
            vec![
                Chain::with_residues("B", vec![Residue::new(Some(1), "ALA")]),
                Chain::with_residues(
                    "A",
                    vec![Residue::new(Some(1), "GLY"), Residue::new(Some(2), "SER")],
                ),
            ],
        )
    }

    #[test]
    fn chain_by_id_finds_chain_regardless_of_position() {
        let structure = two_chain_structure();
        assert_eq!(structure.chain_by_id("A").map(|c| c.residues().len()), Some(2));
        assert!(structure.chain_by_id("C").is_none());
    }

    #[test]
    fn chains_preserve_order() {
        let structure = two_chain_structure();
        let ids: Vec<_> = structure.chains().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
    }

    #[test]
    fn residue_count_sums_all_chains() {
        assert_eq!(two_chain_structure().residue_count(), 3);
    }

    #[test]
    fn with_model_id_replaces_id() {
        let structure = two_chain_structure().with_model_id("2.1");
        assert_eq!(structure.model_id, "2.1");
    }
}
