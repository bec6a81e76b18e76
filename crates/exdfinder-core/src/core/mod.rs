//! # Core Module
//!
//! Stateless building blocks for residue highlighting: the molecular snapshot
//! models, the file readers that produce them, and colors.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Read-only structures, chains and residues
//! - **File I/O** ([`io`]) - BGF/PDB structure readers and the match-table loader
//! - **Colors** ([`color`]) - RGB colors, hex formatting and named colors
//!
//! Nothing in this module talks to a viewer. Turning data into viewer commands
//! is the job of [`crate::engine`].

pub mod color;
pub mod io;
pub mod models;
