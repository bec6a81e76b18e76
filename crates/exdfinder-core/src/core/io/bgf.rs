use super::traits::{DEFAULT_MODEL_ID, StructureFile, slice_and_trim};
use crate::core::models::builder::{BuildError, StructureBuilder};
use crate::core::models::structure::Structure;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BgfError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: BgfParseErrorKind,
    },
    #[error("Inconsistent data: {0}")]
    Inconsistency(#[from] BuildError),
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum BgfParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Line is too short for ATOM/HETATM record (must reach the residue number columns)")]
    LineTooShort,
}

const MIN_ATOM_LINE_LEN: usize = 30;

pub struct BgfFile;

impl StructureFile for BgfFile {
    type Error = BgfError;

    fn read_from(reader: &mut impl BufRead) -> Result<Structure, Self::Error> {
        let mut builder = StructureBuilder::new(DEFAULT_MODEL_ID, "");
        let mut atom_count = 0usize;

        let mut current_chain_id: Option<String> = None;
        let mut current_residue_id: Option<Option<isize>> = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let record_type = slice_and_trim(&line, 0, 6);
            match record_type {
                "ATOM" | "HETATM" => {
                    if line.len() < MIN_ATOM_LINE_LEN {
                        return Err(BgfError::Parse {
                            line: line_num,
                            kind: BgfParseErrorKind::LineTooShort,
                        });
                    }

                    let res_name_str = slice_and_trim(&line, 19, 22);
                    let chain_id_str = slice_and_trim(&line, 23, 24);
                    let res_id_str = slice_and_trim(&line, 25, 30);

                    let chain_id = if chain_id_str.is_empty() {
                        "A"
                    } else {
                        chain_id_str
                    };
                    let res_id: Option<isize> = if res_id_str.is_empty() {
                        None
                    } else {
                        Some(res_id_str.parse().map_err(|_| BgfError::Parse {
                            line: line_num,
                            kind: BgfParseErrorKind::InvalidInt {
                                columns: "26-30".into(),
                                value: res_id_str.into(),
                            },
                        })?)
                    };

                    if current_chain_id.as_deref() != Some(chain_id) {
                        builder.start_chain(chain_id);
                        current_chain_id = Some(chain_id.to_string());
                        current_residue_id = None;
                    }
                    if current_residue_id != Some(res_id) {
                        builder.start_residue(res_id, None, res_name_str)?;
                        current_residue_id = Some(res_id);
                    }
                    atom_count += 1;
                }
                "END" => break,
                _ => {}
            }
        }

        if atom_count == 0 {
            return Err(BgfError::MissingRecord("ATOM/HETATM records".into()));
        }
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Write};

    fn atom_line(record: &str, serial: usize, res_name: &str, chain: char, res_id: &str) -> String {
        format!(
            "{:<6} {:>5} {:<5} {:>3} {:1} {:>5}{:>10.5}{:>10.5}{:>10.5} {:<5}  1 0 {:>8.5}",
            record, serial, "CA", res_name, chain, res_id, 0.0, 0.0, 0.0, "C_3", 0.0
        )
    }

    fn read(content: &str) -> Result<Structure, BgfError> {
        BgfFile::read_from(&mut BufReader::new(content.as_bytes()))
    }

    #[test]
    fn reads_chains_and_residues_in_order() {
        let content = [
            "BIOGRF 200".to_string(),
            atom_line("ATOM", 1, "ALA", 'A', "1"),
            atom_line("ATOM", 2, "ALA", 'A', "1"),
            atom_line("ATOM", 3, "GLY", 'A', "2"),
            atom_line("ATOM", 4, "SER", 'B', "1"),
            "END".to_string(),
        ]
        .join("\n");

        let structure = read(&content).unwrap();
        assert_eq!(structure.model_id, DEFAULT_MODEL_ID);
        assert_eq!(structure.chains().len(), 2);

        let chain_a = structure.chain_by_id("A").unwrap();
        let names: Vec<_> = chain_a.residues().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["ALA", "GLY"]);
        assert_eq!(chain_a.residues()[1].number, Some(2));
        assert_eq!(structure.chain_by_id("B").unwrap().residues().len(), 1);
    }

    #[test]
    fn blank_residue_number_is_undefined() {
        let content = atom_line("HETATM", 1, "HOH", 'W', "");
        let structure = read(&content).unwrap();
        let residue = &structure.chain_by_id("W").unwrap().residues()[0];
        assert_eq!(residue.number, None);
    }

    #[test]
    fn blank_chain_id_defaults_to_a() {
        let content = atom_line("ATOM", 1, "ALA", ' ', "7");
        let structure = read(&content).unwrap();
        assert!(structure.chain_by_id("A").is_some());
    }

    #[test]
    fn invalid_residue_number_reports_line() {
        let content = ["BIOGRF 200".to_string(), atom_line("ATOM", 1, "ALA", 'A', "x1")].join("\n");
        match read(&content) {
            Err(BgfError::Parse {
                line,
                kind: BgfParseErrorKind::InvalidInt { value, .. },
            }) => {
                assert_eq!(line, 2);
                assert_eq!(value, "x1");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn short_atom_line_is_rejected() {
        let result = read("ATOM      1 CA");
        assert!(matches!(
            result,
            Err(BgfError::Parse {
                line: 1,
                kind: BgfParseErrorKind::LineTooShort
            })
        ));
    }

    #[test]
    fn file_without_atoms_is_rejected() {
        let result = read("BIOGRF 200\nEND\n");
        assert!(matches!(result, Err(BgfError::MissingRecord(_))));
    }

    #[test]
    fn records_after_end_are_ignored() {
        let content = [
            atom_line("ATOM", 1, "ALA", 'A', "1"),
            "END".to_string(),
            atom_line("ATOM", 2, "GLY", 'B', "2"),
        ]
        .join("\n");
        let structure = read(&content).unwrap();
        assert_eq!(structure.chains().len(), 1);
    }

    #[test]
    fn read_from_path_names_structure_after_file_stem() {
        let mut file = tempfile::Builder::new().suffix(".bgf").tempfile().unwrap();
        writeln!(file, "{}", atom_line("ATOM", 1, "ALA", 'A', "1")).unwrap();
        let path = file.path().to_path_buf();
        let stem = path.file_stem().unwrap().to_string_lossy().into_owned();

        let structure = BgfFile::read_from_path(&path).unwrap();
        assert_eq!(structure.name, stem);
    }
}
