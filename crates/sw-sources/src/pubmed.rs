//! PubMed E-utilities literature client.
//!
//! One [`PubMedClient::search`] call runs a keyword sweep:
//!
//! ```text
//! for keyword in SEARCH_KEYWORDS:
//!     esearch("{subject} AND {keyword}")  → ids      (pause)
//!     drop ids already seen in this call
//!     efetch(new ids)                     → records  (pause)
//!     keep records mentioning every entity
//! ```
//!
//! A failed `esearch` or `efetch` only drops that keyword's contribution.

use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;

use chrono::{Days, Local, NaiveDate};
use sw_config::PubMedConfig;
use sw_core::entities::LiteratureArticle;
use sw_core::sources::LiteratureSource;

use crate::error::SourceError;
use crate::http::{check_response, with_query};
use crate::xml::{first_text, parse_document};

/// Interaction-oriented keywords combined with the subject term, in search order.
pub const SEARCH_KEYWORDS: [&str; 4] = [
    "negative interaction",
    "adverse effects",
    "interaction risk",
    "contraindications",
];

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(serde::Deserialize)]
struct SearchResponse {
    esearchresult: SearchResult,
}

#[derive(serde::Deserialize)]
struct SearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

/// The two E-utilities endpoints a keyword sweep needs.
trait Eutils: Sync {
    fn search_ids(
        &self,
        term: &str,
    ) -> impl Future<Output = Result<Vec<String>, SourceError>> + Send;

    fn fetch_articles(
        &self,
        ids: &[String],
    ) -> impl Future<Output = Result<Vec<LiteratureArticle>, SourceError>> + Send;
}

/// HTTP client for PubMed search and fetch.
pub struct PubMedClient {
    http: reqwest::Client,
    config: PubMedConfig,
}

impl PubMedClient {
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: PubMedConfig) -> Result<Self, SourceError> {
        Ok(Self {
            http: crate::build_http(REQUEST_TIMEOUT)?,
            config,
        })
    }

    /// Articles from the last `lookback_days` whose title or abstract mentions every
    /// entity, de-duplicated by PubMed id within this call.
    pub async fn search(&self, entities: &[String]) -> Vec<LiteratureArticle> {
        let delay = Duration::from_millis(self.config.request_delay_ms);
        keyword_sweep(self, entities, delay).await
    }

    fn date_window(&self) -> (String, String) {
        let today = Local::now().date_naive();
        let start = today
            .checked_sub_days(Days::new(self.config.lookback_days))
            .unwrap_or(NaiveDate::MIN);
        (format_pdat(start), format_pdat(today))
    }
}

impl Eutils for PubMedClient {
    async fn search_ids(&self, term: &str) -> Result<Vec<String>, SourceError> {
        let (mindate, maxdate) = self.date_window();
        let retmax = self.config.retmax.to_string();
        let mut params = vec![
            ("db", "pubmed"),
            ("term", term),
            ("retmax", retmax.as_str()),
            ("retmode", "json"),
            ("datetype", "pdat"),
            ("mindate", mindate.as_str()),
            ("maxdate", maxdate.as_str()),
        ];
        if !self.config.api_key.is_empty() {
            params.push(("api_key", self.config.api_key.as_str()));
        }
        let url = with_query(&format!("{}/esearch.fcgi", self.config.base_url), &params);
        tracing::debug!(term, "pubmed esearch");

        let resp = check_response(self.http.get(&url).send().await?).await?;
        let data: SearchResponse = resp
            .json()
            .await
            .map_err(|e| SourceError::Parse(e.to_string()))?;
        Ok(data.esearchresult.idlist)
    }

    async fn fetch_articles(&self, ids: &[String]) -> Result<Vec<LiteratureArticle>, SourceError> {
        let joined = ids.join(",");
        let url = with_query(
            &format!("{}/efetch.fcgi", self.config.base_url),
            &[("db", "pubmed"), ("id", joined.as_str()), ("retmode", "xml")],
        );
        tracing::debug!(count = ids.len(), "pubmed efetch");

        let resp = check_response(self.http.get(&url).send().await?).await?;
        let body = resp.text().await?;
        parse_articles(&body)
    }
}

impl LiteratureSource for PubMedClient {
    async fn literature(&self, entities: &[String]) -> Vec<LiteratureArticle> {
        self.search(entities).await
    }
}

/// `{a} AND {b} AND ...` for several entities, the bare name for one.
#[must_use]
pub fn subject_term(entities: &[String]) -> String {
    entities.join(" AND ")
}

fn format_pdat(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

async fn keyword_sweep<E: Eutils>(
    api: &E,
    entities: &[String],
    delay: Duration,
) -> Vec<LiteratureArticle> {
    if entities.is_empty() {
        return Vec::new();
    }

    let subject = subject_term(entities);
    let mut seen: HashSet<String> = HashSet::new();
    let mut articles = Vec::new();

    for keyword in SEARCH_KEYWORDS {
        let term = format!("{subject} AND {keyword}");
        let searched = api.search_ids(&term).await;
        tokio::time::sleep(delay).await;

        let ids = match searched {
            Ok(ids) => ids,
            Err(error) => {
                tracing::warn!(keyword, %error, "pubmed search failed, skipping keyword");
                continue;
            }
        };

        let fresh: Vec<String> = ids.into_iter().filter(|id| seen.insert(id.clone())).collect();
        if fresh.is_empty() {
            continue;
        }

        let fetched = api.fetch_articles(&fresh).await;
        tokio::time::sleep(delay).await;

        match fetched {
            Ok(records) => articles.extend(
                records
                    .into_iter()
                    .filter(|article| article.mentions_all(entities)),
            ),
            Err(error) => {
                tracing::warn!(keyword, %error, "pubmed fetch failed, skipping keyword");
            }
        }
    }

    tracing::debug!(
        entities = ?entities,
        unique_ids = seen.len(),
        matched = articles.len(),
        "pubmed sweep finished"
    );
    articles
}

/// Title and abstract of every `PubmedArticle` in an `efetch` XML document.
///
/// # Errors
///
/// Returns [`SourceError::Parse`] if the document is not well-formed XML.
pub fn parse_articles(xml: &str) -> Result<Vec<LiteratureArticle>, SourceError> {
    let doc = parse_document(xml)?;
    Ok(doc
        .descendants()
        .filter(|n| n.has_tag_name("PubmedArticle"))
        .map(|article| {
            LiteratureArticle::new(
                first_text(article, "ArticleTitle"),
                first_text(article, "AbstractText"),
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;

    const FIXTURE: &str = r#"<?xml version="1.0" ?>
<!DOCTYPE PubmedArticleSet PUBLIC "-//NLM//DTD PubMedArticle, 1st January 2024//EN" "https://dtd.nlm.nih.gov/ncbi/pubmed/out/pubmed_240101.dtd">
<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation>
      <PMID Version="1">38000001</PMID>
      <Article>
        <ArticleTitle>Calcium supplementation and <i>iron</i> absorption.</ArticleTitle>
        <Abstract>
          <AbstractText Label="BACKGROUND">Calcium inhibits non-heme iron uptake.</AbstractText>
          <AbstractText Label="RESULTS">Second section ignored.</AbstractText>
        </Abstract>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
  <PubmedArticle>
    <MedlineCitation>
      <PMID Version="1">38000002</PMID>
      <Article>
        <ArticleTitle>Zinc and copper balance</ArticleTitle>
      </Article>
    </MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>"#;

    #[test]
    fn parse_efetch_records() {
        let articles = parse_articles(FIXTURE).unwrap();
        assert_eq!(
            articles,
            vec![
                LiteratureArticle::new(
                    "Calcium supplementation and iron absorption.",
                    "Calcium inhibits non-heme iron uptake."
                ),
                LiteratureArticle::new("Zinc and copper balance", ""),
            ]
        );
    }

    #[test]
    fn parse_rejects_malformed_xml() {
        assert!(matches!(
            parse_articles("<PubmedArticleSet>"),
            Err(SourceError::Parse(_))
        ));
    }

    #[test]
    fn parse_search_response() {
        let data: SearchResponse = serde_json::from_str(
            r#"{"header":{"type":"esearch"},"esearchresult":{"count":"2","idlist":["1","2"]}}"#,
        )
        .unwrap();
        assert_eq!(data.esearchresult.idlist, vec!["1", "2"]);
    }

    #[test]
    fn single_entity_term_is_bare_name() {
        assert_eq!(subject_term(&["Iron".into()]), "Iron");
    }

    #[test]
    fn several_entities_are_and_joined() {
        assert_eq!(
            subject_term(&["Iron".into(), "Calcium".into(), "Zinc".into()]),
            "Iron AND Calcium AND Zinc"
        );
    }

    #[test]
    fn keyword_set_has_no_duplicates() {
        let unique: HashSet<&str> = SEARCH_KEYWORDS.into_iter().collect();
        assert_eq!(unique.len(), SEARCH_KEYWORDS.len());
    }

    /// In-memory E-utilities keyed by search term and article id.
    #[derive(Default)]
    struct FakeEutils {
        ids_by_keyword: HashMap<&'static str, Result<Vec<&'static str>, u16>>,
        records: HashMap<&'static str, LiteratureArticle>,
        terms: Mutex<Vec<String>>,
        fetched: Mutex<Vec<Vec<String>>>,
        fail_fetch: bool,
    }

    impl Eutils for FakeEutils {
        async fn search_ids(&self, term: &str) -> Result<Vec<String>, SourceError> {
            self.terms.lock().unwrap().push(term.to_string());
            let keyword = SEARCH_KEYWORDS
                .into_iter()
                .find(|k| term.ends_with(k))
                .unwrap();
            match self.ids_by_keyword.get(keyword) {
                Some(Ok(ids)) => Ok(ids.iter().map(ToString::to_string).collect()),
                Some(Err(status)) => Err(SourceError::Api {
                    status: *status,
                    message: String::new(),
                }),
                None => Ok(Vec::new()),
            }
        }

        async fn fetch_articles(
            &self,
            ids: &[String],
        ) -> Result<Vec<LiteratureArticle>, SourceError> {
            self.fetched.lock().unwrap().push(ids.to_vec());
            if self.fail_fetch {
                return Err(SourceError::Parse("bad xml".into()));
            }
            Ok(ids
                .iter()
                .filter_map(|id| self.records.get(id.as_str()).cloned())
                .collect())
        }
    }

    fn entities(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[tokio::test]
    async fn sweep_builds_one_term_per_keyword() {
        let api = FakeEutils::default();
        keyword_sweep(&api, &entities(&["Iron", "Calcium"]), Duration::ZERO).await;

        let terms = api.terms.lock().unwrap().clone();
        assert_eq!(
            terms,
            vec![
                "Iron AND Calcium AND negative interaction",
                "Iron AND Calcium AND adverse effects",
                "Iron AND Calcium AND interaction risk",
                "Iron AND Calcium AND contraindications",
            ]
        );
    }

    #[tokio::test]
    async fn ids_seen_twice_are_fetched_once() {
        let mut api = FakeEutils::default();
        api.ids_by_keyword
            .insert("negative interaction", Ok(vec!["1", "2"]));
        api.ids_by_keyword.insert("adverse effects", Ok(vec!["2", "3"]));
        api.ids_by_keyword.insert("interaction risk", Ok(vec!["1"]));
        api.records
            .insert("1", LiteratureArticle::new("Iron overload", "iron"));
        api.records
            .insert("2", LiteratureArticle::new("Iron and vitamin C", ""));
        api.records
            .insert("3", LiteratureArticle::new("Iron deficiency", ""));

        let found = keyword_sweep(&api, &entities(&["Iron"]), Duration::ZERO).await;

        let fetched = api.fetched.lock().unwrap().clone();
        assert_eq!(
            fetched,
            vec![vec!["1".to_string(), "2".to_string()], vec!["3".to_string()]]
        );
        assert_eq!(found.len(), 3);
    }

    #[tokio::test]
    async fn records_missing_an_entity_are_dropped() {
        let mut api = FakeEutils::default();
        api.ids_by_keyword
            .insert("contraindications", Ok(vec!["1", "2"]));
        api.records
            .insert("1", LiteratureArticle::new("Iron and CALCIUM", ""));
        api.records
            .insert("2", LiteratureArticle::new("Iron alone", "no partner"));

        let found = keyword_sweep(&api, &entities(&["Iron", "Calcium"]), Duration::ZERO).await;
        assert_eq!(found, vec![LiteratureArticle::new("Iron and CALCIUM", "")]);
    }

    #[tokio::test]
    async fn failed_search_skips_only_that_keyword() {
        let mut api = FakeEutils::default();
        api.ids_by_keyword.insert("negative interaction", Err(500));
        api.ids_by_keyword.insert("interaction risk", Ok(vec!["7"]));
        api.records
            .insert("7", LiteratureArticle::new("Magnesium risk", ""));

        let found = keyword_sweep(&api, &entities(&["Magnesium"]), Duration::ZERO).await;
        assert_eq!(found.len(), 1);
        assert_eq!(api.terms.lock().unwrap().len(), SEARCH_KEYWORDS.len());
    }

    #[tokio::test]
    async fn failed_fetch_contributes_nothing() {
        let mut api = FakeEutils {
            fail_fetch: true,
            ..FakeEutils::default()
        };
        api.ids_by_keyword.insert("adverse effects", Ok(vec!["1"]));

        let found = keyword_sweep(&api, &entities(&["Zinc"]), Duration::ZERO).await;
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn empty_entity_list_makes_no_requests() {
        let api = FakeEutils::default();
        let found = keyword_sweep(&api, &[], Duration::ZERO).await;
        assert!(found.is_empty());
        assert!(api.terms.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn pauses_after_every_request() {
        let mut api = FakeEutils::default();
        api.ids_by_keyword.insert("negative interaction", Ok(vec!["1"]));

        let started = tokio::time::Instant::now();
        keyword_sweep(&api, &entities(&["Iron"]), Duration::from_millis(500)).await;

        // four searches plus one fetch
        assert!(started.elapsed() >= Duration::from_millis(2500));
    }

    #[test]
    fn pdat_format_uses_slashes() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_pdat(date), "2024/03/07");
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_search_iron_calcium() {
        let client = PubMedClient::new(PubMedConfig::default()).unwrap();
        let articles = client.search(&entities(&["Iron", "Calcium"])).await;
        println!("\n── pubmed(Iron, Calcium) ── {} articles", articles.len());
        for a in &articles {
            println!("  {}", a.title);
        }
    }
}
