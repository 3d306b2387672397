//! Classification prompt.

use sw_core::entities::LiteratureArticle;
use sw_core::enums::RiskLevel;
use sw_core::filter::DirectEvidence;

pub const NO_FACTS_PLACEHOLDER: &str = "두 성분 간의 NIH 상호작용 정보가 없습니다.";
pub const NO_ARTICLES_PLACEHOLDER: &str = "두 성분 간의 PubMed 논문이 없습니다.";

/// Reference passages joined by newlines, or the placeholder.
#[must_use]
pub fn facts_text(evidence: &DirectEvidence) -> String {
    if evidence.facts.is_empty() {
        NO_FACTS_PLACEHOLDER.to_string()
    } else {
        evidence.facts.join("\n")
    }
}

/// Rendered articles separated by blank lines, or the placeholder.
#[must_use]
pub fn articles_text(evidence: &DirectEvidence) -> String {
    if evidence.articles.is_empty() {
        return NO_ARTICLES_PLACEHOLDER.to_string();
    }
    evidence
        .articles
        .iter()
        .map(LiteratureArticle::render)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Prompt asking the tuned model for a JSON verdict on `entities`.
///
/// `entities` are the names as the user entered them.
#[must_use]
pub fn classification_prompt<S: AsRef<str>>(entities: &[S], evidence: &DirectEvidence) -> String {
    let names: Vec<&str> = entities.iter().map(AsRef::as_ref).collect();
    let pair = names.join(" 와 ");
    let listed = names.join(", ");
    let options = RiskLevel::CLASSIFIED
        .iter()
        .map(|level| format!("'{}'", level.description()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"다음은 {pair} 간의 상호작용에 관한 NIH 정보와 PubMed 논문들입니다:

NIH 정보:
{facts}

PubMed 논문들:
{articles}

다음 지침을 따르세요:
1. 입력된 영양소({listed}) 간의 상호작용에만 집중하세요.
2. {listed} 외에 다른 영양소에 대한 언급은 제외하세요.
3. 위험한 상호작용이 없는 경우, 이를 명확히 설명하세요.

NIH와 PubMed 논문에서 위험 관련 정보(예: 흡수 저하, 부작용, 독성 등)가 발견되었다면 이를 명확히 반영하세요. 아래 JSON 형식으로 응답하세요:
{{
    "risk_description": "위험도에 대한 설명 (다음 중 하나: {options})",
    "explanation": "위험 또는 안전 근거를 구체적으로 설명하세요. NIH 정보와 PubMed 논문 내용을 바탕으로 간단한 언어로 작성."
}}"#,
        facts = facts_text(evidence),
        articles = articles_text(evidence),
    )
}
