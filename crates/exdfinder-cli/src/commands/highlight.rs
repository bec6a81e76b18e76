use crate::cli::HighlightArgs;
use crate::config::{AppConfig, PartialConfig};
use crate::error::{CliError, Result};
use exdfinder::core::io::matches::MatchTable;
use exdfinder::core::io::read_structure;
use exdfinder::core::models::structure::Structure;
use exdfinder::engine::command::{CommandSink, ScriptSink};
use exdfinder::engine::selector::EmptyReason;
use exdfinder::workflows::{self, highlight::HighlightOutcome};
use std::fs::File;
use std::io::{self, BufWriter};
use tracing::{info, warn};

pub fn run(args: HighlightArgs) -> Result<()> {
    let partial_config = PartialConfig::from_optional_file(args.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    let (table, structure) = load_inputs(&config)?;

    let outcome = match &config.output_path {
        Some(path) => {
            info!("Writing command script to {:?}", path);
            let mut sink = ScriptSink::new(BufWriter::new(File::create(path)?));
            execute(&structure, &table, &config, &mut sink)?
        }
        None => {
            let stdout = io::stdout();
            let mut sink = ScriptSink::new(stdout.lock());
            execute(&structure, &table, &config, &mut sink)?
        }
    };

    match outcome {
        HighlightOutcome::Applied { plan, .. } => {
            eprintln!(
                "Highlighted {} residue(s) across {} chain(s) of model #{} ({}).",
                plan.total, plan.operating_chains, structure.model_id, structure.name
            );
        }
        HighlightOutcome::Empty(reason) => {
            let message = match reason {
                EmptyReason::ReferenceFullyExcluded => {
                    "all residues of the reference chain are covered by the match table"
                }
                EmptyReason::NotInOperatingChains => {
                    "the remaining residues are not present in the selected chain(s)"
                }
            };
            warn!("Nothing to highlight: {}.", message);
            eprintln!("Warning: nothing to highlight, {}.", message);
        }
    }

    Ok(())
}

fn load_inputs(config: &AppConfig) -> Result<(MatchTable, Structure)> {
    info!("Loading match table from {:?}", &config.matches_path);
    let table = MatchTable::load(&config.matches_path, &config.match_options).map_err(|e| {
        CliError::FileParsing {
            path: config.matches_path.clone(),
            source: e.into(),
        }
    })?;
    if !table.skipped.is_empty() {
        eprintln!(
            "Warning: skipped {} row(s) of '{}' with missing or invalid values.",
            table.skipped.len(),
            config.matches_path.display()
        );
    }

    info!("Loading input structure from {:?}", &config.structure_path);
    let structure = read_structure(&config.structure_path)
        .map_err(|e| CliError::FileParsing {
            path: config.structure_path.clone(),
            source: e.into(),
        })?
        .with_model_id(&config.model_id);
    info!(
        "Structure '{}' has {} chain(s) and {} residue(s).",
        structure.name,
        structure.chains().len(),
        structure.residue_count()
    );

    Ok((table, structure))
}

fn execute(
    structure: &Structure,
    table: &MatchTable,
    config: &AppConfig,
    sink: &mut impl CommandSink,
) -> Result<HighlightOutcome> {
    info!(
        "Highlighting in {} mode with background {} and highlight {}.",
        config.highlight.mode, config.highlight.background, config.highlight.highlight
    );
    Ok(workflows::highlight::run(
        structure,
        &table.exclusions,
        &config.highlight,
        sink,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const DIMER_PDB: &str = "\
ATOM      1  CA  ALA A   1       0.000   0.000   0.000  1.00  0.00           C
ATOM      2  CA  GLY A   2       0.000   0.000   0.000  1.00  0.00           C
ATOM      3  CA  SER A   3       0.000   0.000   0.000  1.00  0.00           C
ATOM      4  CA  ALA B   1       0.000   0.000   0.000  1.00  0.00           C
ATOM      5  CA  GLY B   2       0.000   0.000   0.000  1.00  0.00           C
ATOM      6  CA  SER B   3       0.000   0.000   0.000  1.00  0.00           C
END
";

    fn highlight_args(dir: &Path, matches: &str, extra: &[&str]) -> HighlightArgs {
        let matches_path = dir.join("matches.csv");
        let structure_path = dir.join("dimer.pdb");
        fs::write(&matches_path, matches).unwrap();
        fs::write(&structure_path, DIMER_PDB).unwrap();

        let mut argv = vec![
            "exdfinder".to_string(),
            "highlight".to_string(),
            "-m".to_string(),
            matches_path.to_string_lossy().into_owned(),
            "-s".to_string(),
            structure_path.to_string_lossy().into_owned(),
            "-o".to_string(),
            dir.join("out.cxc").to_string_lossy().into_owned(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        match Cli::parse_from(argv).command {
            Commands::Highlight(args) => args,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn writes_script_for_dimer() {
        let dir = tempdir().unwrap();
        let args = highlight_args(
            dir.path(),
            "Matched,Residue Index\n1,2\n0,3\n",
            &["--mode", "dimer", "--model-id", "4"],
        );

        run(args).unwrap();

        let script = fs::read_to_string(dir.path().join("out.cxc")).unwrap();
        assert_eq!(script, "color #4 #c0c0c0\ncolor #4/A:1,3 #4/B:1,3 #0000ff\n");
    }

    #[test]
    fn fully_matched_structure_writes_empty_script() {
        let dir = tempdir().unwrap();
        let args = highlight_args(dir.path(), "Matched,Residue Index\n1,1\n1,2\n1,3\n", &[]);

        run(args).unwrap();

        let script = fs::read_to_string(dir.path().join("out.cxc")).unwrap();
        assert!(script.is_empty());
    }

    #[test]
    fn missing_columns_fail_before_structure_is_read() {
        let dir = tempdir().unwrap();
        let args = highlight_args(dir.path(), "Residue,Score\n1,1\n", &[]);

        let result = run(args);
        assert!(matches!(result, Err(CliError::FileParsing { path, .. }) if path.ends_with("matches.csv")));
        assert!(!dir.path().join("out.cxc").exists());
    }
}
