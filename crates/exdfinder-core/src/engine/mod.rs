//! # Engine Module
//!
//! The logic between loaded data and the viewer.
//!
//! - [`selector`] - Chain resolution and the residue set computation
//! - [`command`] - Selector specs, `color` commands and command sinks
//! - [`config`] - Highlighting mode and colors
//! - [`error`] - Errors raised while planning or issuing commands
//!
//! The selector never touches a sink; [`crate::workflows::highlight`] connects the two.

pub mod command;
pub mod config;
pub mod error;
pub mod selector;
