//! Where a completed draft goes on submit.

use crate::draft::EvaluationDraft;
use crate::error::Result;

pub trait SubmissionSink {
    fn submit(&self, draft: &EvaluationDraft) -> Result<()>;
}

/// Writes the draft to the `tracing` diagnostic channel and always accepts it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&self, draft: &EvaluationDraft) -> Result<()> {
        let payload = serde_json::to_string(draft)?;
        tracing::info!(evaluatee = %draft.evaluatee_name, "Form submitted: {}", payload);
        Ok(())
    }
}
