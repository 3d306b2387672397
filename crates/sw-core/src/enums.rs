//! Status, classification, and policy enums for suppwise.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Risk classification of a supplement combination.
///
/// The three classified levels and the undetermined fallback each carry one
/// canonical user-facing message. A verdict never exposes any other text as its
/// risk description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Safe,
    Caution,
    Dangerous,
    Undetermined,
}

impl RiskLevel {
    /// Levels the classification model may choose from.
    pub const CLASSIFIED: [Self; 3] = [Self::Safe, Self::Caution, Self::Dangerous];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Caution => "caution",
            Self::Dangerous => "dangerous",
            Self::Undetermined => "undetermined",
        }
    }

    /// Canonical message shown to the user.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Safe => "안전한 조합이에요. 안심하고 복용하셔도 됩니다.",
            Self::Caution => "주의가 필요해요. 전문가와 상담해보세요.",
            Self::Dangerous => "위험한 조합이에요. 함께 복용하지 마세요.",
            Self::Undetermined => "결과를 판단할 수 없습니다.",
        }
    }

    /// First sentence of the canonical message, without the trailing period.
    fn lead_clause(self) -> &'static str {
        let description = self.description();
        description.split('.').next().unwrap_or(description)
    }

    /// Map a model-produced `risk_description` onto a level.
    ///
    /// Accepts a canonical message (matched on its first sentence, so truncated or
    /// re-punctuated copies still match) or the English label. Anything else is
    /// `Undetermined`.
    #[must_use]
    pub fn from_model_label(raw: &str) -> Self {
        let text = raw.trim();
        if text.is_empty() {
            return Self::Undetermined;
        }
        Self::CLASSIFIED
            .into_iter()
            .find(|level| {
                text.starts_with(level.lead_clause()) || text.eq_ignore_ascii_case(level.as_str())
            })
            .unwrap_or(Self::Undetermined)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// JobStatus
// ---------------------------------------------------------------------------

/// Status of a remote fine-tuning job.
///
/// ```text
/// validating_files → queued → running → succeeded
///                                     → failed
///                                     → cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    ValidatingFiles,
    Queued,
    Running,
    Succeeded,
    Failed,
    Cancelled,
}

impl JobStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidatingFiles => "validating_files",
            Self::Queued => "queued",
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse a provider status string. Unrecognized states are reported as
    /// `Running` so the supervisor keeps polling until a known terminal state.
    #[must_use]
    pub fn from_provider(raw: &str) -> Self {
        match raw {
            "validating_files" => Self::ValidatingFiles,
            "queued" => Self::Queued,
            "succeeded" => Self::Succeeded,
            "failed" => Self::Failed,
            "cancelled" => Self::Cancelled,
            _ => Self::Running,
        }
    }

    /// No further transition happens after a terminal state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Cancelled)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FactAbsence
// ---------------------------------------------------------------------------

/// Why a reference fact sheet yielded no interaction passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactAbsence {
    /// The provider could not be reached or returned a non-success status.
    Unreachable,
    /// The document had no `Content` element in the fact-sheet namespace.
    NoContent,
    /// The content never mentions the medication-interaction section.
    NoInteractionInfo,
}

impl FactAbsence {
    /// Fixed sentinel message rendered in place of the missing passage.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Unreachable => "NIH 데이터에 접근할 수 없습니다.",
            Self::NoContent => "상호작용 정보가 포함된 Content 태그를 찾을 수 없습니다.",
            Self::NoInteractionInfo => "상호작용 정보가 없습니다.",
        }
    }
}

impl fmt::Display for FactAbsence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ---------------------------------------------------------------------------
// FactMatchPolicy
// ---------------------------------------------------------------------------

/// Which entity names a reference fact must mention to count as direct evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactMatchPolicy {
    /// Only the first two entities are checked, even for longer lists.
    #[default]
    LeadingPair,
    /// Every entity must be mentioned.
    AllEntities,
}
