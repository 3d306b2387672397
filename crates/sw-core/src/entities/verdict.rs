use serde::{Deserialize, Serialize};

use crate::enums::RiskLevel;

/// Generic explanation when the model reply looked like JSON but did not parse.
pub const MALFORMED_RESPONSE_EXPLANATION: &str = "모델 응답을 해석할 수 없습니다.";

/// Generic explanation for any other failure while classifying.
pub const UNEXPECTED_ERROR_EXPLANATION: &str = "예기치 않은 오류가 발생했습니다.";

/// Risk classification of a supplement combination with its justification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InteractionVerdict {
    pub risk: RiskLevel,
    pub explanation: String,
}

impl InteractionVerdict {
    #[must_use]
    pub fn new(risk: RiskLevel, explanation: impl Into<String>) -> Self {
        Self {
            risk,
            explanation: explanation.into(),
        }
    }

    #[must_use]
    pub fn undetermined(explanation: impl Into<String>) -> Self {
        Self::new(RiskLevel::Undetermined, explanation)
    }

    /// Canonical risk message; always one of the four fixed strings.
    #[must_use]
    pub const fn risk_description(&self) -> &'static str {
        self.risk.description()
    }
}
