//! # Core Models Module
//!
//! Read-only snapshots of the molecular data the highlighting logic works on.
//!
//! ## Overview
//!
//! A viewer owns the live structural graph (atoms, residues, chains). The
//! highlighting logic never needs more than the ordered chain and residue
//! records, so the models here are plain owned values:
//!
//! - [`structure`] - A loaded model with its host model id and ordered chains
//! - [`chain`] - A chain identifier with its ordered residues
//! - [`residue`] - A residue with an optional sequence number
//! - [`builder`] - Incremental construction used by the file readers
//!
//! Nothing in the selector or the workflows mutates these values.
//!
//! ## Usage
//!
//! ```ignore
//! use exdfinder::core::models::builder::StructureBuilder;
//!
//! let mut builder = StructureBuilder::new("1", "dimer");
//! builder.start_chain("A");
//! builder.start_residue(Some(10), None, "GLY")?;
//! let structure = builder.build();
//! ```

pub mod builder;
pub mod chain;
pub mod residue;
pub mod structure;

use std::collections::BTreeSet;

/// Residue sequence numbers that are already matched and must not be highlighted.
pub type ExclusionSet = BTreeSet<isize>;
