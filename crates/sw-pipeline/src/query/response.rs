//! Interpretation of the model's classification reply.

use serde::Deserialize;
use sw_core::entities::{InteractionVerdict, MALFORMED_RESPONSE_EXPLANATION};
use sw_core::enums::RiskLevel;

#[derive(Deserialize)]
struct RawVerdict {
    risk_description: Option<String>,
    explanation: Option<String>,
}

/// Turn a model reply into a verdict. Never fails.
///
/// Text that does not open a JSON object is kept as the explanation of an
/// undetermined verdict. Anything opening with `{` that does not parse,
/// including a truncated object, gets a generic explanation.
#[must_use]
pub fn parse_verdict(reply: &str) -> InteractionVerdict {
    let text = reply.trim();
    if !text.starts_with('{') {
        if text.is_empty() {
            return InteractionVerdict::undetermined(RiskLevel::Undetermined.description());
        }
        return InteractionVerdict::undetermined(text);
    }

    match serde_json::from_str::<RawVerdict>(text) {
        Ok(raw) => {
            let risk = raw
                .risk_description
                .as_deref()
                .map_or(RiskLevel::Undetermined, RiskLevel::from_model_label);
            let explanation = raw
                .explanation
                .unwrap_or_else(|| RiskLevel::Undetermined.description().to_string());
            InteractionVerdict::new(risk, explanation)
        }
        Err(error) => {
            tracing::warn!(%error, "model reply is not a valid verdict object");
            InteractionVerdict::undetermined(MALFORMED_RESPONSE_EXPLANATION)
        }
    }
}
