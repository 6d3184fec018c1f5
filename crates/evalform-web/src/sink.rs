use evalform_core::{EvaluationDraft, Result, SubmissionSink};
use wasm_bindgen::JsValue;

/// Logs the submitted draft to the browser console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl SubmissionSink for ConsoleSink {
    fn submit(&self, draft: &EvaluationDraft) -> Result<()> {
        let payload = serde_json::to_string(draft)?;
        web_sys::console::log_1(&JsValue::from_str(&format!("Form submitted: {}", payload)));
        Ok(())
    }
}
