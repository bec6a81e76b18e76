//! Residue selection: which residues of which chains get the highlight color.
//!
//! The selector is pure. It reads the exclusion set and the chain snapshot and
//! returns per-chain descriptors; issuing viewer commands is left to the caller.

use super::config::Mode;
use crate::core::models::ExclusionSet;
use crate::core::models::chain::Chain;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{debug, info, warn};

const PRIMARY_CHAIN_ID: &str = "A";
const PARTNER_CHAIN_ID: &str = "B";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No suitable chain found for monomer mode: the structure has no chains")]
    NoSuitableChain,
    #[error("Not enough chains for dimer mode: need at least 2, found {found}")]
    InsufficientChains { found: usize },
}

/// Residues to highlight in one chain, sorted ascending without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSelection {
    pub chain_id: String,
    pub numbers: Vec<isize>,
}

impl ChainSelection {
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightPlan {
    /// One entry per operating chain that has something to highlight, in resolution order.
    pub selections: Vec<ChainSelection>,
    /// Sum of the selection sizes.
    pub total: usize,
    /// Number of chains that took part, including those that contributed nothing.
    pub operating_chains: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// Every numbered residue of the reference chain is excluded, or it has none.
    ReferenceFullyExcluded,
    /// The residues left to highlight exist in none of the operating chains.
    NotInOperatingChains,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    Planned(HighlightPlan),
    Empty(EmptyReason),
}

/// Picks the chains that take part in highlighting.
///
/// Chains are looked up by id ("A", and "B" for dimers). When they are not
/// present the first chain(s) in list order are used instead; the fallback is
/// logged so it stays visible.
///
/// # Errors
///
/// Returns [`SelectionError::NoSuitableChain`] for an empty chain list in
/// [`Mode::SingleChain`], and [`SelectionError::InsufficientChains`] when
/// [`Mode::DimerPair`] finds fewer than two chains.
pub fn resolve_chains(chains: &[Chain], mode: Mode) -> Result<Vec<&Chain>, SelectionError> {
    let find = |id: &str| chains.iter().find(|c| c.id == id);

    match mode {
        Mode::SingleChain => {
            if let Some(chain) = find(PRIMARY_CHAIN_ID) {
                return Ok(vec![chain]);
            }
            let first = chains.first().ok_or(SelectionError::NoSuitableChain)?;
            info!(
                "Chain '{}' not found, defaulting to first chain: {}",
                PRIMARY_CHAIN_ID, first.id
            );
            Ok(vec![first])
        }
        Mode::DimerPair => {
            if let (Some(a), Some(b)) = (find(PRIMARY_CHAIN_ID), find(PARTNER_CHAIN_ID)) {
                return Ok(vec![a, b]);
            }
            match chains {
                [first, second, ..] => {
                    warn!(
                        "Chains '{}' and '{}' not both found. Defaulting to first two chains: {}, {} for dimer mode.",
                        PRIMARY_CHAIN_ID, PARTNER_CHAIN_ID, first.id, second.id
                    );
                    Ok(vec![first, second])
                }
                _ => Err(SelectionError::InsufficientChains {
                    found: chains.len(),
                }),
            }
        }
    }
}

/// Computes which residues to highlight.
///
/// The reference chain (the first operating chain) defines the residue numbers
/// of interest; excluded numbers are removed; the rest is intersected with each
/// operating chain's own numbering.
///
/// # Errors
///
/// Propagates chain-resolution failures from [`resolve_chains`]. An empty
/// result is not an error and is reported as [`SelectionOutcome::Empty`].
pub fn plan_highlight(
    exclusions: &ExclusionSet,
    chains: &[Chain],
    mode: Mode,
) -> Result<SelectionOutcome, SelectionError> {
    let operating = resolve_chains(chains, mode)?;
    let reference = operating[0];

    let to_highlight: BTreeSet<isize> = reference
        .residue_numbers()
        .difference(exclusions)
        .copied()
        .collect();
    debug!(
        "Reference chain {} leaves {} residue number(s) to highlight.",
        reference.id,
        to_highlight.len()
    );

    if to_highlight.is_empty() {
        return Ok(SelectionOutcome::Empty(EmptyReason::ReferenceFullyExcluded));
    }

    let mut selections = Vec::with_capacity(operating.len());
    for chain in &operating {
        let numbers: Vec<isize> = chain
            .residue_numbers()
            .intersection(&to_highlight)
            .copied()
            .collect();
        if numbers.is_empty() {
            debug!("Chain {} contributes no residues.", chain.id);
            continue;
        }
        selections.push(ChainSelection {
            chain_id: chain.id.clone(),
            numbers,
        });
    }

    if selections.is_empty() {
        return Ok(SelectionOutcome::Empty(EmptyReason::NotInOperatingChains));
    }

    let total = selections.iter().map(ChainSelection::len).sum();
    Ok(SelectionOutcome::Planned(HighlightPlan {
        selections,
        total,
        operating_chains: operating.len(),
    }))
}
