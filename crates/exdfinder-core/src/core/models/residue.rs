#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub number: Option<isize>,          // Sequence number from the source file, if any
    pub insertion_code: Option<char>,   // PDB insertion code (e.g., 'A' in "52A")
    pub name: String,                   // Name of the residue (e.g., "ALA", "GLY")
}

impl Residue {
    pub fn new(number: Option<isize>, name: &str) -> Self {
        Self {
            number,
            insertion_code: None,
            name: name.to_string(),
        }
    }

    pub fn with_insertion_code(mut self, code: Option<char>) -> Self {
        self.insertion_code = code;
        self
    }

    pub fn is_numbered(&self) -> bool {
        self.number.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_residue_initializes_fields_correctly() {
        let residue = Residue::new(Some(10), "GLY");
        assert_eq!(residue.number, Some(10));
        assert_eq!(residue.name, "GLY");
        assert!(residue.insertion_code.is_none());
        assert!(residue.is_numbered());
    }

    #[test]
    fn residue_without_number_is_not_numbered() {
        let residue = Residue::new(None, "HOH");
        assert!(!residue.is_numbered());
    }

    #[test]
    fn with_insertion_code_sets_code() {
        let residue = Residue::new(Some(52), "SER").with_insertion_code(Some('A'));
        assert_eq!(residue.insertion_code, Some('A'));
    }
}
