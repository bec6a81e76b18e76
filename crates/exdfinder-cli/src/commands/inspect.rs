use crate::cli::InspectArgs;
use crate::config::PartialConfig;
use crate::error::{CliError, Result};
use exdfinder::core::io::matches::MatchTable;
use tracing::info;

pub fn run(args: InspectArgs) -> Result<()> {
    let options = PartialConfig::from_optional_file(args.config.as_deref())?.match_options()?;

    info!("Loading match table from {:?}", &args.matches);
    let table = MatchTable::load(&args.matches, &options).map_err(|e| CliError::FileParsing {
        path: args.matches.clone(),
        source: e.into(),
    })?;

    println!("{}", format_summary(&table));
    for warning in &table.skipped {
        eprintln!("  skipped {}", warning);
    }
    Ok(())
}

fn format_summary(table: &MatchTable) -> String {
    let indices = table
        .sorted_indices()
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "{} excluded residue(s): {}\n{} row(s) skipped",
        table.exclusions.len(),
        if indices.is_empty() { "-" } else { indices.as_str() },
        table.skipped.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use exdfinder::core::io::matches::MatchTableOptions;

    #[test]
    fn summary_lists_sorted_indices_and_skips() {
        let table = MatchTable::read_from(
            "Matched,Residue Index\n1,9\n1,3\nx,4\n".as_bytes(),
            &MatchTableOptions::default(),
        )
        .unwrap();
        assert_eq!(
            format_summary(&table),
            "2 excluded residue(s): 3,9\n1 row(s) skipped"
        );
    }

    #[test]
    fn summary_of_empty_table_uses_placeholder() {
        assert_eq!(
            format_summary(&MatchTable::default()),
            "0 excluded residue(s): -\n0 row(s) skipped"
        );
    }
}
