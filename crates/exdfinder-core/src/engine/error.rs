use super::command::CommandError;
use super::selector::SelectionError;
use std::fmt;
use thiserror::Error;

/// Which of the two color commands was being issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStage {
    Background,
    Highlight,
}

impl fmt::Display for CommandStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CommandStage::Background => "applying background color",
            CommandStage::Highlight => "highlighting residues",
        })
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("Error occurred while {stage}: {source}")]
    CommandExecution {
        stage: CommandStage,
        #[source]
        source: CommandError,
    },
}
