use crate::core::models::ExclusionSet;
use crate::core::models::structure::Structure;
use crate::engine::command::{ColorCommand, CommandSink, chain_spec, model_spec};
use crate::engine::config::HighlightConfig;
use crate::engine::error::{CommandStage, EngineError};
use crate::engine::selector::{EmptyReason, HighlightPlan, SelectionOutcome, plan_highlight};
use tracing::{error, info, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightOutcome {
    /// Both commands were issued.
    Applied {
        plan: HighlightPlan,
        commands: Vec<String>,
    },
    /// Nothing to highlight; no command was issued.
    Empty(EmptyReason),
}

/// Recolors a structure: the whole model in the background color, then every
/// non-excluded residue of the operating chain(s) in the highlight color.
///
/// Planning happens before any command is sent, so a chain-resolution failure
/// or an empty result leaves the viewer untouched. If the background command
/// fails the highlight command is not attempted.
///
/// # Errors
///
/// Returns [`EngineError::Selection`] when no suitable chain(s) exist and
/// [`EngineError::CommandExecution`] when the sink rejects a command.
#[instrument(skip_all, name = "highlight_workflow", fields(model = %structure.model_id))]
pub fn run(
    structure: &Structure,
    exclusions: &ExclusionSet,
    config: &HighlightConfig,
    sink: &mut impl CommandSink,
) -> Result<HighlightOutcome, EngineError> {
    let outcome = plan_highlight(exclusions, structure.chains(), config.mode).map_err(|e| {
        error!("{} (model #{})", e, structure.model_id);
        e
    })?;

    let plan = match outcome {
        SelectionOutcome::Planned(plan) => plan,
        SelectionOutcome::Empty(reason) => {
            match reason {
                EmptyReason::ReferenceFullyExcluded => info!(
                    "No residues to highlight. All residues in the reference chain are in the match table or the chain is empty."
                ),
                EmptyReason::NotInOperatingChains => info!(
                    "Residues to highlight were not found in the target chain(s)."
                ),
            }
            return Ok(HighlightOutcome::Empty(reason));
        }
    };

    let background = ColorCommand::new(vec![model_spec(&structure.model_id)], config.background);
    let highlight = ColorCommand::new(
        plan.selections
            .iter()
            .map(|s| chain_spec(&structure.model_id, s))
            .collect(),
        config.highlight,
    );

    let mut commands = Vec::with_capacity(2);
    for (stage, command) in [
        (CommandStage::Background, background),
        (CommandStage::Highlight, highlight),
    ] {
        let text = command.to_string();
        info!("Executing command: {}", text);
        sink.execute(&text).map_err(|source| {
            error!("Error occurred while {}: {}", stage, source);
            EngineError::CommandExecution { stage, source }
        })?;
        commands.push(text);
    }

    info!(
        "Successfully highlighted {} residues across {} chain(s) in {}.",
        plan.total, plan.operating_chains, config.highlight
    );
    Ok(HighlightOutcome::Applied { plan, commands })
}
