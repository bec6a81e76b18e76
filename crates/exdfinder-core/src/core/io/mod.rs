//! Provides input functionality for the files the highlighting workflow consumes.
//!
//! This module contains readers for molecular structure formats, which turn a
//! coordinate file into a read-only [`Structure`] snapshot, and the loader for
//! match tables, which turns a CSV file into an exclusion set.

pub mod bgf;
pub mod matches;
pub mod pdb;
pub mod traits;

use crate::core::models::structure::Structure;
use bgf::{BgfError, BgfFile};
use pdb::{PdbError, PdbFile};
use std::path::Path;
use thiserror::Error;
use traits::StructureFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureFormat {
    Bgf,
    Pdb,
}

impl StructureFormat {
    /// Guesses the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "bgf" => Some(Self::Bgf),
            "pdb" | "ent" => Some(Self::Pdb),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum StructureReadError {
    #[error("Unsupported structure format for '{0}' (expected .bgf, .pdb or .ent)")]
    UnsupportedFormat(String),
    #[error(transparent)]
    Bgf(#[from] BgfError),
    #[error(transparent)]
    Pdb(#[from] PdbError),
}

/// Reads a structure file, choosing the reader from the file extension.
pub fn read_structure(path: &Path) -> Result<Structure, StructureReadError> {
    match StructureFormat::from_path(path) {
        Some(StructureFormat::Bgf) => Ok(BgfFile::read_from_path(path)?),
        Some(StructureFormat::Pdb) => Ok(PdbFile::read_from_path(path)?),
        None => Err(StructureReadError::UnsupportedFormat(
            path.to_string_lossy().to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn format_is_detected_from_extension() {
        assert_eq!(
            StructureFormat::from_path(Path::new("a/protein.BGF")),
            Some(StructureFormat::Bgf)
        );
        assert_eq!(
            StructureFormat::from_path(Path::new("1abc.pdb")),
            Some(StructureFormat::Pdb)
        );
        assert_eq!(
            StructureFormat::from_path(Path::new("pdb1abc.ent")),
            Some(StructureFormat::Pdb)
        );
        assert_eq!(StructureFormat::from_path(Path::new("model.cif")), None);
        assert_eq!(StructureFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn read_structure_dispatches_to_pdb_reader() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dimer.pdb");
        fs::write(
            &path,
            "ATOM      1  CA  ALA A   1       0.000   0.000   0.000  1.00  0.00           C\n\
             ATOM      2  CA  GLY B   1       0.000   0.000   0.000  1.00  0.00           C\n",
        )
        .unwrap();

        let structure = read_structure(&path).unwrap();
        assert_eq!(structure.name, "dimer");
        assert_eq!(structure.chains().len(), 2);
    }

    #[test]
    fn read_structure_rejects_unknown_extension() {
        let result = read_structure(Path::new("model.mmtf"));
        assert!(matches!(result, Err(StructureReadError::UnsupportedFormat(_))));
    }
}
