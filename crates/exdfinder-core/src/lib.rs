//! # ExDFinder Core Library
//!
//! Highlights the residues of a molecular structure that a match table does
//! not cover.
//!
//! A match table is a CSV file whose rows name residue indices and a match
//! confidence. Residues matched with enough confidence are excluded; every
//! other residue of the chosen chain(s) is recolored through the viewer's
//! `color` command.
//!
//! ## Layers
//!
//! - **[`core`]: Data.** Read-only structure snapshots, BGF/PDB readers, the
//!   match-table loader and colors.
//!
//! - **[`engine`]: Logic.** Chain resolution, the residue set computation,
//!   selector strings and command sinks.
//!
//! - **[`workflows`]: The Public API.** [`workflows::highlight::run`] plans the
//!   selection and issues the commands with the partial-failure rules.

pub mod core;
pub mod engine;
pub mod workflows;
