//! # Workflows Module
//!
//! High-level entry points that tie the [`crate::core`] data and the
//! [`crate::engine`] logic together.
//!
//! - **Highlight Workflow** ([`highlight`]) - Plans the residue selection and
//!   issues the background and highlight `color` commands to a command sink.

pub mod highlight;
