//! Form rules, bridge error taxonomy, and result formatting.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test
//! the submit/clear/parse behavior on the host.

use thiserror::Error;

/// Relative URL the compute module is fetched from on every submission.
pub const MODULE_URL: &str = "./readcoin.wasm";

/// Name of the module's single numeric export.
pub const EXPORT_NAME: &str = "block_number_to_nonce";

/// Everything that can go wrong between reading the input field and
/// getting a number back from the compute module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// The draft text is empty after trimming or is not a base-10 integer.
    #[error("input: {0}")]
    InputParse(String),
    /// Fetching or instantiating the module failed.
    #[error("module: {0}")]
    ModuleLoad(String),
    /// The export is missing, is not a function, threw, or returned a
    /// non-numeric value.
    #[error("export: {0}")]
    ExportInvocation(String),
}

/// The submit control is enabled exactly when the input field is non-empty.
pub fn submit_enabled(draft: &str) -> bool {
    !draft.is_empty()
}

/// Parse a block height from user text: trimmed, base 10.
pub fn parse_block_height(text: &str) -> Result<i32, BridgeError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(BridgeError::InputParse("empty input".to_string()));
    }
    trimmed
        .parse::<i32>()
        .map_err(|_| BridgeError::InputParse(format!("not a base-10 integer: {trimmed:?}")))
}

/// State behind the submit form: the draft text plus the submission rules.
#[derive(Debug, Default, Clone)]
pub struct SubmitForm {
    draft: String,
}

impl SubmitForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_draft(&mut self, text: &str) {
        self.draft = text.to_string();
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn submit_enabled(&self) -> bool {
        submit_enabled(&self.draft)
    }

    /// Consume the draft: parse it as a block height and clear the field.
    /// The field is cleared (and submission thereby re-disabled) whether or
    /// not the parse succeeds.
    pub fn take_submission(&mut self) -> Result<i32, BridgeError> {
        let result = parse_block_height(&self.draft);
        self.draft.clear();
        result
    }
}

/// Format a numeric result from the module boundary for display.
///
/// The browser hands back an f64 regardless of the export's declared
/// type; integral values render without a fractional part.
pub fn format_result(value: f64) -> String {
    const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0; // 2^53
    if value.is_finite() && value.fract() == 0.0 && value.abs() < MAX_EXACT_INT {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
