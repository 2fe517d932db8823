//! Screening workflow state machine
//!
//! Each step of the human-in-the-loop process is a named state; every
//! transition consumes the old state value and returns a new one, so there
//! is no hidden mutable session state. Transitions are driven only by
//! reviewer confirmations and data availability; an action that is not
//! valid in the current state is a `Workflow` error that leaves the caller
//! holding the error, never a silently skipped step.

use crate::error::{Result, ScreenerError};
use crate::output::export::RankedResultSet;
use crate::processing::keywords::KeywordSet;
use crate::processing::scoring::{HighSelection, PriorityTiers};
use crate::workflow::batch::{CandidateRecord, JobDescription};

#[derive(Debug)]
pub enum WorkflowState {
    AwaitingJd,
    HighPrioritySelection {
        jd: JobDescription,
    },
    MediumPrioritySelection {
        jd: JobDescription,
        high: KeywordSet,
        choices: KeywordSet,
    },
    PrioritiesConfirmed {
        jd: JobDescription,
        tiers: PriorityTiers,
    },
    BatchProcessing {
        jd: JobDescription,
        tiers: PriorityTiers,
    },
    LocationReview {
        jd: JobDescription,
        tiers: PriorityTiers,
        records: Vec<CandidateRecord>,
    },
    Finalized {
        ranked: RankedResultSet,
    },
}

impl WorkflowState {
    pub fn new() -> Self {
        WorkflowState::AwaitingJd
    }

    pub fn name(&self) -> &'static str {
        match self {
            WorkflowState::AwaitingJd => "AwaitingJd",
            WorkflowState::HighPrioritySelection { .. } => "HighPrioritySelection",
            WorkflowState::MediumPrioritySelection { .. } => "MediumPrioritySelection",
            WorkflowState::PrioritiesConfirmed { .. } => "PrioritiesConfirmed",
            WorkflowState::BatchProcessing { .. } => "BatchProcessing",
            WorkflowState::LocationReview { .. } => "LocationReview",
            WorkflowState::Finalized { .. } => "Finalized",
        }
    }

    /// Keywords on offer for the selection step the workflow is currently
    /// in, if it is in one.
    pub fn current_choices(&self) -> Option<&KeywordSet> {
        match self {
            WorkflowState::HighPrioritySelection { jd } => Some(&jd.keywords),
            WorkflowState::MediumPrioritySelection { choices, .. } => Some(choices),
            _ => None,
        }
    }

    /// A job description with extracted keywords enters the workflow.
    /// Re-uploading past `AwaitingJd` is rejected rather than resetting
    /// downstream selections; the session must be restarted to swap the JD.
    pub fn upload_jd(self, jd: JobDescription) -> Result<Self> {
        match self {
            WorkflowState::AwaitingJd => Ok(WorkflowState::HighPrioritySelection { jd }),
            other => Err(ScreenerError::Workflow(format!(
                "A job description is already loaded (state: {})",
                other.name()
            ))),
        }
    }

    /// Reviewer confirms the High-priority picks.
    pub fn confirm_high<I, S>(self, picks: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self {
            WorkflowState::HighPrioritySelection { jd } => {
                let stage = HighSelection::new(jd.keywords.clone()).select_high(picks)?;
                let choices = stage.choices().clone();
                // Rebuild from the kept sets on the next confirmation; the
                // staged builder is not held across the human pause.
                let high = difference(&jd.keywords, &choices);
                Ok(WorkflowState::MediumPrioritySelection { jd, high, choices })
            }
            other => Err(ScreenerError::Workflow(format!(
                "High-priority selection is not available in state {}",
                other.name()
            ))),
        }
    }

    /// Reviewer confirms the Medium-priority picks; the remainder is Low.
    pub fn confirm_medium<I, S>(self, picks: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self {
            WorkflowState::MediumPrioritySelection { jd, high, choices } => {
                let tiers = HighSelection::new(jd.keywords.clone())
                    .select_high(high.iter())?
                    .select_medium(picks)?;
                debug_assert_eq!(choices.len(), tiers.medium().len() + tiers.low().len());
                Ok(WorkflowState::PrioritiesConfirmed { jd, tiers })
            }
            other => Err(ScreenerError::Workflow(format!(
                "Medium-priority selection is not available in state {}",
                other.name()
            ))),
        }
    }

    /// Reviewer proceeds from the confirmed partition to batch processing.
    pub fn start_batch(self) -> Result<Self> {
        match self {
            WorkflowState::PrioritiesConfirmed { jd, tiers } => {
                Ok(WorkflowState::BatchProcessing { jd, tiers })
            }
            other => Err(ScreenerError::Workflow(format!(
                "Batch processing cannot start in state {}",
                other.name()
            ))),
        }
    }

    /// The batch run completed; records move into manual location review.
    pub fn complete_batch(self, records: Vec<CandidateRecord>) -> Result<Self> {
        match self {
            WorkflowState::BatchProcessing { jd, tiers } => Ok(WorkflowState::LocationReview {
                jd,
                tiers,
                records,
            }),
            other => Err(ScreenerError::Workflow(format!(
                "No batch is running in state {}",
                other.name()
            ))),
        }
    }

    /// Apply manual location-score overrides (by record index) and finalize.
    /// Indices without an override keep their computed score.
    pub fn finalize(self, overrides: &[(usize, f32)]) -> Result<Self> {
        match self {
            WorkflowState::LocationReview {
                jd: _,
                tiers: _,
                mut records,
            } => {
                for &(index, score) in overrides {
                    let record = records.get_mut(index).ok_or_else(|| {
                        ScreenerError::InvalidInput(format!(
                            "No candidate record at index {}",
                            index
                        ))
                    })?;
                    record.set_location_score(score)?;
                }
                Ok(WorkflowState::Finalized {
                    ranked: RankedResultSet::rank(records),
                })
            }
            other => Err(ScreenerError::Workflow(format!(
                "Location review is not active in state {}",
                other.name()
            ))),
        }
    }
}

impl Default for WorkflowState {
    fn default() -> Self {
        Self::new()
    }
}

fn difference(full: &KeywordSet, taken: &KeywordSet) -> KeywordSet {
    KeywordSet::from_phrases(full.iter().filter(|k| !taken.contains(k)))
}
