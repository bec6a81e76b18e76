use crate::cli::HighlightArgs;
use crate::error::{CliError, Result};
use exdfinder::core::color::Color;
use exdfinder::core::io::matches::MatchTableOptions;
use exdfinder::core::io::traits::DEFAULT_MODEL_ID;
use exdfinder::engine::config::{HighlightConfig, HighlightConfigBuilder, Mode};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialColorsConfig {
    background: Option<String>,
    highlight: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialMatchesConfig {
    #[serde(rename = "matched-column")]
    matched_column: Option<String>,
    #[serde(rename = "residue-column")]
    residue_column: Option<String>,
    threshold: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    mode: Option<String>,
    #[serde(rename = "model-id")]
    model_id: Option<String>,
    colors: Option<PartialColorsConfig>,
    matches: Option<PartialMatchesConfig>,
}

/// Fully resolved settings for one `highlight` run.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub matches_path: PathBuf,
    pub structure_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub model_id: String,
    pub highlight: HighlightConfig,
    pub match_options: MatchTableOptions,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_optional_file(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(mut self, args: &HighlightArgs) -> Result<AppConfig> {
        self.apply_set_values(&args.set_values)?;

        let colors = self.colors.take().unwrap_or_default();

        let mode = match (args.mode, self.mode.as_deref()) {
            (Some(mode), _) => mode,
            (None, Some(s)) => s
                .parse::<Mode>()
                .map_err(|e| CliError::Config(e.to_string()))?,
            (None, None) => Mode::default(),
        };

        let resolve_color = |cli: Option<Color>, file: Option<&String>, key: &str| -> Result<Option<Color>> {
            match (cli, file) {
                (Some(color), _) => Ok(Some(color)),
                (None, Some(s)) => s
                    .parse::<Color>()
                    .map(Some)
                    .map_err(|e| CliError::Config(format!("`{}`: {}", key, e))),
                (None, None) => Ok(None),
            }
        };

        let mut builder = HighlightConfigBuilder::new().mode(mode);
        if let Some(color) =
            resolve_color(args.background, colors.background.as_ref(), "colors.background")?
        {
            builder = builder.background(color);
        }
        if let Some(color) =
            resolve_color(args.highlight, colors.highlight.as_ref(), "colors.highlight")?
        {
            builder = builder.highlight(color);
        }

        let model_id = args
            .model_id
            .clone()
            .or(self.model_id.take())
            .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());
        validate_model_id(&model_id)?;

        Ok(AppConfig {
            matches_path: args.matches.clone(),
            structure_path: args.structure.clone(),
            output_path: args.output.clone(),
            model_id,
            highlight: builder.build(),
            match_options: self.match_options()?,
        })
    }

    pub fn match_options(&self) -> Result<MatchTableOptions> {
        let mut options = MatchTableOptions::default();
        if let Some(matches) = &self.matches {
            if let Some(column) = &matches.matched_column {
                options.matched_column = column.clone();
            }
            if let Some(column) = &matches.residue_column {
                options.residue_column = column.clone();
            }
            if let Some(threshold) = matches.threshold {
                if !threshold.is_finite() {
                    return Err(CliError::Config(format!(
                        "`matches.threshold` must be a finite number, got {}",
                        threshold
                    )));
                }
                options.threshold = threshold;
            }
        }
        Ok(options)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let parts: Vec<_> = kv_pair.splitn(2, '=').collect();
            if parts.len() != 2 {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            }
            let key = parts[0];
            let value_str = parts[1];

            match key {
                "mode" => self.mode = Some(value_str.to_string()),
                "model-id" => self.model_id = Some(value_str.to_string()),
                "colors.background" => {
                    self.colors
                        .get_or_insert_with(Default::default)
                        .background = Some(value_str.to_string());
                }
                "colors.highlight" => {
                    self.colors
                        .get_or_insert_with(Default::default)
                        .highlight = Some(value_str.to_string());
                }
                "matches.threshold" => {
                    self.matches
                        .get_or_insert_with(Default::default)
                        .threshold = Some(value_str.parse().map_err(|_| {
                        CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                    })?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Model ids are dot-separated positive integers, e.g. `1` or `1.2.3`.
fn validate_model_id(model_id: &str) -> Result<()> {
    let valid = !model_id.is_empty()
        && model_id
            .split('.')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));
    if valid {
        Ok(())
    } else {
        Err(CliError::Config(format!(
            "Invalid model id '{}': expected dot-separated integers such as '1' or '1.2'",
            model_id
        )))
    }
}
