use clap::{Args, Parser, Subcommand};
use exdfinder::core::color::Color;
use exdfinder::engine::config::Mode;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "ExDFinder CLI - Highlight the residues of a structure that a match table does not cover.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the viewer `color` commands that highlight unmatched residues.
    Highlight(HighlightArgs),
    /// Load a match table and print the residue indices it excludes.
    Inspect(InspectArgs),
}

/// Arguments for the `highlight` subcommand.
#[derive(Args, Debug)]
pub struct HighlightArgs {
    // --- Core Arguments ---
    /// Path to the match table (CSV with 'Matched' and 'Residue Index' columns).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub matches: PathBuf,

    /// Path to the molecular structure file (.bgf, .pdb or .ent).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub structure: PathBuf,

    /// Write the command script to a file instead of stdout (e.g., highlight.cxc).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Overrides ---
    /// Processing mode: 'monomer' (chain A) or 'dimer' (chains A and B).
    #[arg(long, value_name = "MODE")]
    pub mode: Option<Mode>,

    /// Model id the viewer uses for the structure (e.g., '1' or '1.2').
    #[arg(long, value_name = "ID")]
    pub model_id: Option<String>,

    /// Color for the whole model (name or '#RRGGBB').
    #[arg(long, value_name = "COLOR")]
    pub background: Option<Color>,

    /// Color for the highlighted residues (name or '#RRGGBB').
    #[arg(long, value_name = "COLOR")]
    pub highlight: Option<Color>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S colors.highlight=red
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the match table.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub matches: PathBuf,

    /// Path to an optional configuration file (only the [matches] section is used).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
