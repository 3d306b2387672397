use serde::{Deserialize, Serialize};

use crate::enums::FactAbsence;

/// Medication-interaction passage extracted from a reference fact sheet, or the
/// reason it is missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ReferenceFact {
    Found(String),
    Missing(FactAbsence),
}

impl ReferenceFact {
    /// The passage text, if one was found.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Found(text) => Some(text),
            Self::Missing(_) => None,
        }
    }

    #[must_use]
    pub const fn absence(&self) -> Option<FactAbsence> {
        match self {
            Self::Found(_) => None,
            Self::Missing(reason) => Some(*reason),
        }
    }

    /// Passage text, or the fixed sentinel message for the absence reason.
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self {
            Self::Found(text) => text,
            Self::Missing(reason) => reason.message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_exposes_text() {
        let fact = ReferenceFact::Found("Interactions with Medications".into());
        assert_eq!(fact.text(), Some("Interactions with Medications"));
        assert!(fact.absence().is_none());
    }

    #[test]
    fn missing_renders_sentinel() {
        let fact = ReferenceFact::Missing(FactAbsence::NoContent);
        assert!(fact.text().is_none());
        assert_eq!(fact.display_text(), FactAbsence::NoContent.message());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(ReferenceFact::Missing(FactAbsence::Unreachable)).unwrap();
        assert_eq!(json["kind"], "missing");
        assert_eq!(json["value"], "unreachable");
    }
}
