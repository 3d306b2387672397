//! Interaction query pipeline.
//!
//! ```text
//! names ─► translate (non-ASCII only) ─► facts ┐
//!                                      literature ┴► filter ─► prompt ─► tuned model ─► verdict
//! ```
//!
//! [`InteractionQueryPipeline::analyze`] never fails: every provider or parsing
//! problem ends in an undetermined verdict with an explanation.

pub mod prompt;
pub mod response;
pub mod translate;

use serde::Serialize;
use sw_config::SwConfig;
use sw_core::CoreError;
use sw_core::entities::{InteractionVerdict, UNEXPECTED_ERROR_EXPLANATION};
use sw_core::enums::FactMatchPolicy;
use sw_core::filter::filter_direct;
use sw_core::sources::{LiteratureSource, ReferenceSource};
use sw_llm::{ChatModel, ChatRequest};

pub use prompt::classification_prompt;
pub use response::parse_verdict;
pub use translate::{needs_translation, parse_translation};

/// Model and sampling settings for one pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOptions {
    /// Tuned classification model.
    pub model_id: String,
    pub translation_model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub fact_match: FactMatchPolicy,
}

impl QueryOptions {
    #[must_use]
    pub fn from_config(config: &SwConfig, model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            translation_model: config.openai.translation_model.clone(),
            temperature: config.query.temperature,
            max_tokens: config.query.max_tokens,
            fact_match: config.query.fact_match,
        }
    }
}

/// How much direct evidence reached the prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EvidenceCounts {
    pub facts: usize,
    pub articles: usize,
}

/// Outcome of one analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionAnalysis {
    /// Names as entered.
    pub entities: Vec<String>,
    /// Names used against the evidence sources.
    pub normalized_entities: Vec<String>,
    pub verdict: InteractionVerdict,
    pub evidence: EvidenceCounts,
    /// Degradations worth telling the user about, e.g. a failed translation.
    pub notes: Vec<String>,
}

impl InteractionAnalysis {
    fn rejected(entities: &[String], reason: String) -> Self {
        Self {
            entities: entities.to_vec(),
            normalized_entities: Vec::new(),
            verdict: InteractionVerdict::undetermined(reason.clone()),
            evidence: EvidenceCounts::default(),
            notes: vec![reason],
        }
    }
}

pub struct InteractionQueryPipeline<R, L, C> {
    reference: R,
    literature: L,
    chat: C,
    options: QueryOptions,
}

impl<R, L, C> InteractionQueryPipeline<R, L, C>
where
    R: ReferenceSource,
    L: LiteratureSource,
    C: ChatModel,
{
    pub const fn new(reference: R, literature: L, chat: C, options: QueryOptions) -> Self {
        Self {
            reference,
            literature,
            chat,
            options,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// Classify the interaction risk of taking `entities` together.
    pub async fn analyze(&self, entities: &[String]) -> InteractionAnalysis {
        if let Err(error) = CoreError::check_entities(entities) {
            return InteractionAnalysis::rejected(entities, error.to_string());
        }

        let mut notes = Vec::new();
        let normalized = self.normalize(entities, &mut notes).await;

        let (facts, articles) = tokio::join!(
            async {
                let mut facts = Vec::with_capacity(normalized.len());
                for entity in &normalized {
                    facts.push(self.reference.reference_fact(entity).await);
                }
                facts
            },
            self.literature.literature(&normalized),
        );

        let evidence = filter_direct(&facts, &articles, &normalized, self.options.fact_match);
        tracing::info!(
            facts = evidence.facts.len(),
            articles = evidence.articles.len(),
            "direct evidence selected"
        );
        let counts = EvidenceCounts {
            facts: evidence.facts.len(),
            articles: evidence.articles.len(),
        };

        let request = ChatRequest::user(
            self.options.model_id.as_str(),
            classification_prompt(entities, &evidence),
        )
        .with_temperature(self.options.temperature)
        .with_max_tokens(self.options.max_tokens);

        let verdict = match self.chat.complete(request).await {
            Ok(reply) => parse_verdict(&reply),
            Err(error) => {
                tracing::warn!(%error, model = %self.options.model_id, "classification request failed");
                InteractionVerdict::undetermined(UNEXPECTED_ERROR_EXPLANATION)
            }
        };
        tracing::info!(risk = %verdict.risk, "interaction classified");

        InteractionAnalysis {
            entities: entities.to_vec(),
            normalized_entities: normalized,
            verdict,
            evidence: counts,
            notes,
        }
    }

    /// English names for the evidence sources. Falls back to the input names
    /// when translation fails.
    async fn normalize(&self, entities: &[String], notes: &mut Vec<String>) -> Vec<String> {
        if !needs_translation(entities) {
            return entities.to_vec();
        }
        match translate::translate(&self.chat, &self.options.translation_model, entities).await {
            Ok(names) => names,
            Err(error) => {
                tracing::warn!(%error, "translation failed, searching with original names");
                notes.push(format!("translation failed, original names used: {error}"));
                entities.to_vec()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;
    use sw_core::entities::{LiteratureArticle, MALFORMED_RESPONSE_EXPLANATION, ReferenceFact};
    use sw_core::enums::{FactAbsence, RiskLevel};
    use sw_llm::LlmError;

    use super::*;

    struct FakeReference(HashMap<&'static str, &'static str>);

    impl ReferenceSource for FakeReference {
        async fn reference_fact(&self, entity: &str) -> ReferenceFact {
            self.0.get(entity).map_or(
                ReferenceFact::Missing(FactAbsence::NoInteractionInfo),
                |text| ReferenceFact::Found((*text).to_string()),
            )
        }
    }

    struct FakeLiterature {
        articles: Vec<LiteratureArticle>,
        queries: Mutex<Vec<Vec<String>>>,
    }

    impl LiteratureSource for FakeLiterature {
        async fn literature(&self, entities: &[String]) -> Vec<LiteratureArticle> {
            self.queries.lock().unwrap().push(entities.to_vec());
            self.articles.clone()
        }
    }

    /// Replies in order; `None` stands for a provider error.
    struct ScriptedChat {
        replies: Mutex<Vec<Option<&'static str>>>,
        requests: Mutex<Vec<ChatRequest>>,
    }

    impl ScriptedChat {
        fn new(replies: Vec<Option<&'static str>>) -> Self {
            Self {
                replies: Mutex::new(replies.into_iter().rev().collect()),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    impl ChatModel for ScriptedChat {
        async fn complete(&self, request: ChatRequest) -> Result<String, LlmError> {
            self.requests.lock().unwrap().push(request);
            match self.replies.lock().unwrap().pop().flatten() {
                Some(reply) => Ok(reply.to_string()),
                None => Err(LlmError::Api {
                    status: 503,
                    message: "overloaded".into(),
                }),
            }
        }
    }

    const CAUTION_REPLY: &str =
        r#"{"risk_description": "주의가 필요해요. 전문가와 상담해보세요.", "explanation": "칼슘은 철분 흡수를 방해합니다."}"#;

    fn pipeline(replies: Vec<Option<&'static str>>) -> InteractionQueryPipeline<FakeReference, FakeLiterature, ScriptedChat> {
        let reference = FakeReference(HashMap::from([
            ("Iron", "Interactions with Medications\nCalcium reduces Iron absorption."),
            ("Calcium", "Interactions with Medications\nThiazide diuretics."),
        ]));
        let literature = FakeLiterature {
            articles: vec![
                LiteratureArticle::new("Iron and calcium absorption", "Calcium inhibits iron uptake."),
                LiteratureArticle::new("Iron in pregnancy", "No mention of the other mineral."),
            ],
            queries: Mutex::new(Vec::new()),
        };
        let options = QueryOptions {
            model_id: "ft:gpt-4o-mini:test".into(),
            translation_model: "gpt-4o".into(),
            temperature: 0.1,
            max_tokens: 300,
            fact_match: FactMatchPolicy::LeadingPair,
        };
        InteractionQueryPipeline::new(reference, literature, ScriptedChat::new(replies), options)
    }

    #[tokio::test]
    async fn english_names_skip_translation() {
        let pipeline = pipeline(vec![Some(CAUTION_REPLY)]);
        let analysis = pipeline.analyze(&["Iron".into(), "Calcium".into()]).await;

        assert_eq!(analysis.verdict.risk, RiskLevel::Caution);
        assert_eq!(analysis.normalized_entities, vec!["Iron", "Calcium"]);
        assert_eq!(analysis.evidence, EvidenceCounts { facts: 1, articles: 1 });
        assert!(analysis.notes.is_empty());

        let requests = pipeline.chat.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "ft:gpt-4o-mini:test");
        assert_eq!(requests[0].max_tokens, Some(300));
        let prompt = &requests[0].messages[0].content;
        assert!(prompt.contains("Calcium reduces Iron absorption."));
        assert!(prompt.contains("Iron and calcium absorption"));
        assert!(!prompt.contains("Iron in pregnancy"));
    }

    #[tokio::test]
    async fn korean_names_are_translated_for_sources_only() {
        let pipeline = pipeline(vec![Some("Iron, Calcium"), Some(CAUTION_REPLY)]);
        let analysis = pipeline.analyze(&["철분".into(), "칼슘".into()]).await;

        assert_eq!(analysis.normalized_entities, vec!["Iron", "Calcium"]);
        assert_eq!(analysis.entities, vec!["철분", "칼슘"]);
        assert_eq!(
            *pipeline.literature.queries.lock().unwrap(),
            vec![vec!["Iron".to_string(), "Calcium".to_string()]]
        );

        let requests = pipeline.chat.requests.lock().unwrap();
        assert_eq!(requests[0].model, "gpt-4o");
        assert_eq!(requests[0].max_tokens, Some(100));
        assert!(requests[1].messages[0].content.starts_with("다음은 철분 와 칼슘 간의"));
    }

    #[tokio::test]
    async fn failed_translation_falls_back_with_note() {
        let pipeline = pipeline(vec![None, Some(CAUTION_REPLY)]);
        let analysis = pipeline.analyze(&["철분".into(), "Calcium".into()]).await;

        assert_eq!(analysis.normalized_entities, vec!["철분", "Calcium"]);
        assert_eq!(analysis.notes.len(), 1);
        assert_eq!(analysis.verdict.risk, RiskLevel::Caution);
    }

    #[tokio::test]
    async fn provider_error_yields_generic_undetermined() {
        let pipeline = pipeline(vec![None]);
        let analysis = pipeline.analyze(&["Iron".into(), "Calcium".into()]).await;
        assert_eq!(
            analysis.verdict,
            InteractionVerdict::undetermined(UNEXPECTED_ERROR_EXPLANATION)
        );
    }

    #[tokio::test]
    async fn malformed_json_yields_generic_undetermined() {
        let pipeline = pipeline(vec![Some("{\"risk_description\": }")]);
        let analysis = pipeline.analyze(&["Iron".into(), "Calcium".into()]).await;
        assert_eq!(
            analysis.verdict,
            InteractionVerdict::undetermined(MALFORMED_RESPONSE_EXPLANATION)
        );
    }

    #[tokio::test]
    async fn empty_input_is_rejected_without_requests() {
        let pipeline = pipeline(vec![]);
        let analysis = pipeline.analyze(&[]).await;
        assert_eq!(analysis.verdict.risk, RiskLevel::Undetermined);
        assert!(pipeline.chat.requests.lock().unwrap().is_empty());
        assert!(pipeline.literature.queries.lock().unwrap().is_empty());
    }
}
