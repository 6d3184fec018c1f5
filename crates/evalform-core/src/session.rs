//! Form session - owns the draft and the editing/confirmation phase

use serde::{Deserialize, Serialize};

use crate::draft::{EvaluationDraft, FieldUpdate};
use crate::error::{EvalFormError, Result};
use crate::sink::SubmissionSink;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormPhase {
    #[default]
    Editing,
    Confirmation,
}

/// Single source of truth for one evaluation form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationSession {
    pub draft: EvaluationDraft,
    pub phase: FormPhase,

    /// A "start over" request awaiting the user's yes/no
    #[serde(skip)]
    pub reset_pending: bool,
    /// Message from the last rejected submission
    #[serde(skip)]
    pub last_error: Option<String>,
}

impl EvaluationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Confirmation
    }

    pub fn set_field(&mut self, update: FieldUpdate) {
        tracing::debug!(?update, "Field updated");
        self.draft.apply(update);
    }

    /// Validates required fields, then hands the draft to `sink`.
    pub fn submit(&mut self, sink: &dyn SubmissionSink) -> Result<()> {
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            tracing::warn!(count = missing.len(), "Submission blocked by empty required fields");
            return Err(EvalFormError::MissingFields(missing));
        }

        if let Err(e) = sink.submit(&self.draft) {
            tracing::warn!("Submission rejected: {}", e);
            self.last_error = Some(e.to_string());
            return Err(e);
        }

        self.last_error = None;
        self.phase = FormPhase::Confirmation;
        Ok(())
    }

    /// Back to the empty template and the editing view.
    pub fn reset(&mut self) {
        tracing::info!(phase = ?self.phase, "Form reset");
        self.draft.clear();
        self.phase = FormPhase::Editing;
        self.reset_pending = false;
        self.last_error = None;
    }

    pub fn submit_another(&mut self) {
        if !self.is_submitted() {
            return;
        }
        self.reset();
    }

    pub fn request_reset(&mut self) {
        self.reset_pending = true;
    }

    /// Resets only when a request is pending. Returns whether it did.
    pub fn confirm_reset(&mut self) -> bool {
        if !self.reset_pending {
            return false;
        }
        self.reset();
        true
    }

    pub fn cancel_reset(&mut self) {
        self.reset_pending = false;
    }
}
