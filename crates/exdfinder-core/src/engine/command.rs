//! Viewer color commands and the sinks that execute them.

use super::selector::ChainSelection;
use crate::core::color::Color;
use std::fmt;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Command rejected: {0}")]
    Rejected(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// `#<modelId>`, addressing a whole model.
pub fn model_spec(model_id: &str) -> String {
    format!("#{}", model_id)
}

/// `#<modelId>/<chainId>:<n1>,<n2>,...`, addressing residues of one chain.
pub fn chain_spec(model_id: &str, selection: &ChainSelection) -> String {
    let numbers = selection
        .numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("#{}/{}:{}", model_id, selection.chain_id, numbers)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCommand {
    pub targets: Vec<String>,
    pub color: Color,
}

impl ColorCommand {
    pub fn new(targets: Vec<String>, color: Color) -> Self {
        Self { targets, color }
    }
}

impl fmt::Display for ColorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "color {} {}", self.targets.join(" "), self.color)
    }
}

/// The viewer's text-command entry point.
pub trait CommandSink {
    fn execute(&mut self, command: &str) -> Result<(), CommandError>;
}

/// Writes each command on its own line, producing a viewer command script.
pub struct ScriptSink<W: Write> {
    writer: W,
}

impl<W: Write> ScriptSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> CommandSink for ScriptSink<W> {
    fn execute(&mut self, command: &str) -> Result<(), CommandError> {
        writeln!(self.writer, "{}", command)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps executed commands in memory.
///
/// A failure can be injected at a given call index to simulate a viewer that
/// rejects a command.
#[derive(Debug, Default)]
pub struct RecordingSink {
    commands: Vec<String>,
    fail_at: Option<usize>,
    calls: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(call_index: usize) -> Self {
        Self {
            fail_at: Some(call_index),
            ..Self::default()
        }
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }
}

impl CommandSink for RecordingSink {
    fn execute(&mut self, command: &str) -> Result<(), CommandError> {
        let call = self.calls;
        self.calls += 1;
        if self.fail_at == Some(call) {
            return Err(CommandError::Rejected(command.to_string()));
        }
        self.commands.push(command.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(chain_id: &str, numbers: &[isize]) -> ChainSelection {
        ChainSelection {
            chain_id: chain_id.to_string(),
            numbers: numbers.to_vec(),
        }
    }

    #[test]
    fn specs_follow_viewer_syntax() {
        assert_eq!(model_spec("1"), "#1");
        assert_eq!(chain_spec("1.2", &selection("B", &[1, 3, 10])), "#1.2/B:1,3,10");
    }

    #[test]
    fn color_command_joins_targets_with_spaces() {
        let command = ColorCommand::new(
            vec![
                chain_spec("1", &selection("A", &[1, 3])),
                chain_spec("1", &selection("B", &[1, 3])),
            ],
            Color::BLUE,
        );
        assert_eq!(command.to_string(), "color #1/A:1,3 #1/B:1,3 #0000ff");
    }

    #[test]
    fn script_sink_writes_one_line_per_command() {
        let mut sink = ScriptSink::new(Vec::new());
        sink.execute("color #1 #c0c0c0").unwrap();
        sink.execute("color #1/A:1 #0000ff").unwrap();
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "color #1 #c0c0c0\ncolor #1/A:1 #0000ff\n");
    }

    #[test]
    fn recording_sink_fails_at_requested_call() {
        let mut sink = RecordingSink::failing_at(1);
        assert!(sink.execute("first").is_ok());
        assert!(matches!(sink.execute("second"), Err(CommandError::Rejected(c)) if c == "second"));
        assert!(sink.execute("third").is_ok());
        assert_eq!(sink.commands(), &["first".to_string(), "third".to_string()]);
    }
}
