use super::traits::{DEFAULT_MODEL_ID, StructureFile, slice_and_trim};
use crate::core::models::builder::{BuildError, StructureBuilder};
use crate::core::models::structure::Structure;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
    #[error("Inconsistent data: {0}")]
    Inconsistency(#[from] BuildError),
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Line is too short for ATOM/HETATM record (must reach the residue number columns)")]
    LineTooShort,
}

const MIN_ATOM_LINE_LEN: usize = 26;

/// Reader for the residue layout of PDB coordinate files.
///
/// Only the first model of a multi-model file is read.
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Structure, Self::Error> {
        let mut builder = StructureBuilder::new(DEFAULT_MODEL_ID, "");
        let mut atom_count = 0usize;

        let mut current_chain_id: Option<String> = None;
        let mut current_residue_key: Option<(Option<isize>, Option<char>)> = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            match slice_and_trim(&line, 0, 6) {
                "ATOM" | "HETATM" => {
                    if line.len() < MIN_ATOM_LINE_LEN {
                        return Err(PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::LineTooShort,
                        });
                    }

                    let res_name_str = slice_and_trim(&line, 17, 20);
                    let chain_id_str = slice_and_trim(&line, 21, 22);
                    let res_seq_str = slice_and_trim(&line, 22, 26);
                    let insertion_code = slice_and_trim(&line, 26, 27).chars().next();

                    let chain_id = if chain_id_str.is_empty() {
                        "A"
                    } else {
                        chain_id_str
                    };
                    let res_seq: Option<isize> = if res_seq_str.is_empty() {
                        None
                    } else {
                        Some(res_seq_str.parse().map_err(|_| PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::InvalidInt {
                                columns: "23-26".into(),
                                value: res_seq_str.into(),
                            },
                        })?)
                    };

                    if current_chain_id.as_deref() != Some(chain_id) {
                        builder.start_chain(chain_id);
                        current_chain_id = Some(chain_id.to_string());
                        current_residue_key = None;
                    }
                    let key = (res_seq, insertion_code);
                    if current_residue_key != Some(key) {
                        builder.start_residue(res_seq, insertion_code, res_name_str)?;
                        current_residue_key = Some(key);
                    }
                    atom_count += 1;
                }
                "ENDMDL" | "END" => break,
                _ => {}
            }
        }

        if atom_count == 0 {
            return Err(PdbError::MissingRecord("ATOM/HETATM records".into()));
        }
        Ok(builder.build())
    }
}
