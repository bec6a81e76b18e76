use super::chain::Chain;
use super::residue::Residue;
use super::structure::Structure;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Cannot start a residue before a chain has been started")]
    NoCurrentChain,
}

type ResidueKey = (Option<isize>, Option<char>);

pub struct StructureBuilder {
    structure: Structure,

    // --- Builder-specific state for efficient construction ---
    chain_id_map: HashMap<String, usize>,
    residue_maps: Vec<HashMap<ResidueKey, usize>>,
    current_chain_idx: Option<usize>,
}

impl StructureBuilder {
    pub fn new(model_id: &str, name: &str) -> Self {
        Self {
            structure: Structure::new(model_id, name, Vec::new()),
            chain_id_map: HashMap::new(),
            residue_maps: Vec::new(),
            current_chain_idx: None,
        }
    }

    pub fn start_chain(&mut self, id: &str) -> &mut Self {
        let idx = match self.chain_id_map.get(id) {
            Some(&idx) => idx,
            None => {
                let index = self.structure.chains.len();
                self.structure.chains.push(Chain::new(id));
                self.residue_maps.push(HashMap::new());
                self.chain_id_map.insert(id.to_string(), index);
                index
            }
        };
        self.current_chain_idx = Some(idx);
        self
    }

    /// Starts (or re-enters) a residue in the current chain.
    ///
    /// A residue whose number and insertion code were already seen in this
    /// chain is merged into the existing record instead of being duplicated.
    pub fn start_residue(
        &mut self,
        number: Option<isize>,
        insertion_code: Option<char>,
        name: &str,
    ) -> Result<&mut Self, BuildError> {
        let chain_idx = self.current_chain_idx.ok_or(BuildError::NoCurrentChain)?;
        let chain = &mut self.structure.chains[chain_idx];
        let residue_map = &mut self.residue_maps[chain_idx];

        residue_map
            .entry((number, insertion_code))
            .or_insert_with(|| {
                let index = chain.residues.len();
                chain
                    .residues
                    .push(Residue::new(number, name).with_insertion_code(insertion_code));
                index
            });
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.structure.chains.is_empty()
    }

    pub fn build(self) -> Structure {
        self.structure
    }
}
