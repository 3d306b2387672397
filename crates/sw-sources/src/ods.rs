//! NIH Office of Dietary Supplements fact-sheet client.

use std::future::Future;
use std::time::Duration;

use sw_config::OdsConfig;
use sw_core::entities::ReferenceFact;
use sw_core::enums::FactAbsence;
use sw_core::sources::ReferenceSource;

use crate::error::SourceError;
use crate::http::{check_response, with_query};
use crate::xml::{parse_document, text_content};

/// Namespace of the fact-sheet schema.
pub const FACTSHEET_NS: &str = "http://tempuri.org/factsheet.xsd";

/// Line that opens the medication-interaction section of a fact sheet.
pub const INTERACTION_MARKER: &str = "Interactions with Medications";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw fact-sheet retrieval, separated from interpretation.
trait SheetFetch: Sync {
    fn fetch_sheet(&self, entity: &str) -> impl Future<Output = Result<String, SourceError>> + Send;
}

/// HTTP client for ODS fact sheets.
pub struct OdsClient {
    http: reqwest::Client,
    config: OdsConfig,
}

impl OdsClient {
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: OdsConfig) -> Result<Self, SourceError> {
        Ok(Self {
            http: crate::build_http(REQUEST_TIMEOUT)?,
            config,
        })
    }

    /// Medication-interaction passage of the fact sheet for `entity`.
    ///
    /// Transport failures and non-success statuses are reported as
    /// [`FactAbsence::Unreachable`].
    pub async fn interaction_facts(&self, entity: &str) -> ReferenceFact {
        resolve_fact(self, entity).await
    }
}

impl SheetFetch for OdsClient {
    async fn fetch_sheet(&self, entity: &str) -> Result<String, SourceError> {
        let url = with_query(
            &self.config.base_url,
            &[
                ("resourcename", entity),
                ("readinglevel", self.config.reading_level.as_str()),
                ("outputformat", "XML"),
            ],
        );
        tracing::debug!(entity, "ods fact sheet request");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        Ok(resp.text().await?)
    }
}

impl ReferenceSource for OdsClient {
    async fn reference_fact(&self, entity: &str) -> ReferenceFact {
        self.interaction_facts(entity).await
    }
}

async fn resolve_fact<F: SheetFetch>(api: &F, entity: &str) -> ReferenceFact {
    match api.fetch_sheet(entity).await {
        Ok(body) => {
            let fact = extract_interaction_facts(&body);
            if let Some(reason) = fact.absence() {
                tracing::debug!(entity, ?reason, "no interaction passage in fact sheet");
            }
            fact
        }
        Err(error) => {
            tracing::warn!(entity, %error, "ODS fact sheet unreachable");
            ReferenceFact::Missing(FactAbsence::Unreachable)
        }
    }
}

/// Extract the medication-interaction section from a fact-sheet document.
///
/// The section runs from the first line containing [`INTERACTION_MARKER`] to the
/// end of the flattened `Content` text; fact sheets have no closing marker.
/// A document that is not XML is treated like one without a `Content` element.
#[must_use]
pub fn extract_interaction_facts(xml: &str) -> ReferenceFact {
    let Ok(doc) = parse_document(xml) else {
        return ReferenceFact::Missing(FactAbsence::NoContent);
    };

    let Some(content) = doc
        .descendants()
        .find(|n| n.has_tag_name((FACTSHEET_NS, "Content")))
    else {
        return ReferenceFact::Missing(FactAbsence::NoContent);
    };

    let text = text_content(content);
    let lines: Vec<&str> = text.split('\n').collect();
    match lines.iter().position(|line| line.contains(INTERACTION_MARKER)) {
        Some(start) => ReferenceFact::Found(lines[start..].join("\n")),
        None => ReferenceFact::Missing(FactAbsence::NoInteractionInfo),
    }
}
