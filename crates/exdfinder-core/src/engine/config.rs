use crate::core::color::Color;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid mode '{0}': expected 'monomer' or 'dimer'")]
    InvalidMode(String),
}

/// How many chains take part in highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// One chain: "A" if present, otherwise the first chain.
    #[default]
    SingleChain,
    /// Two chains: "A" and "B" if both are present, otherwise the first two chains.
    DimerPair,
}

impl FromStr for Mode {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monomer" | "single" | "single-chain" => Ok(Mode::SingleChain),
            "dimer" | "pair" | "dimer-pair" => Ok(Mode::DimerPair),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Mode::SingleChain => "monomer",
                Mode::DimerPair => "dimer",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightConfig {
    pub mode: Mode,
    pub background: Color,
    pub highlight: Color,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            mode: Mode::SingleChain,
            background: Color::SILVER,
            highlight: Color::BLUE,
        }
    }
}

#[derive(Default)]
pub struct HighlightConfigBuilder {
    mode: Option<Mode>,
    background: Option<Color>,
    highlight: Option<Color>,
}

impl HighlightConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
    pub fn highlight(mut self, color: Color) -> Self {
        self.highlight = Some(color);
        self
    }

    pub fn build(self) -> HighlightConfig {
        let defaults = HighlightConfig::default();
        HighlightConfig {
            mode: self.mode.unwrap_or(defaults.mode),
            background: self.background.unwrap_or(defaults.background),
            highlight: self.highlight.unwrap_or(defaults.highlight),
        }
    }
}
