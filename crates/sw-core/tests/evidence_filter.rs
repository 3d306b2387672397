//! Filter behaviour on realistic mixed evidence.

use pretty_assertions::assert_eq;
use rstest::rstest;
use sw_core::entities::{LiteratureArticle, ReferenceFact};
use sw_core::enums::{FactAbsence, FactMatchPolicy};
use sw_core::filter::filter_direct;

fn evidence() -> (Vec<ReferenceFact>, Vec<LiteratureArticle>) {
    let facts = vec![
        ReferenceFact::Found("Interactions with Medications\nIron and Calcium compete; Zinc too.".into()),
        ReferenceFact::Found("Interactions with Medications\nIron and Calcium compete.".into()),
        ReferenceFact::Missing(FactAbsence::Unreachable),
    ];
    let articles = vec![
        LiteratureArticle::new("IRON, CALCIUM AND ZINC", "Trace minerals."),
        LiteratureArticle::new("Iron and calcium", "No third mineral."),
    ];
    (facts, articles)
}

#[rstest]
#[case(FactMatchPolicy::LeadingPair, 2)]
#[case(FactMatchPolicy::AllEntities, 1)]
fn third_entity_only_binds_facts_under_all_entities(#[case] policy: FactMatchPolicy, #[case] kept: usize) {
    let (facts, articles) = evidence();
    let direct = filter_direct(&facts, &articles, &["Iron", "Calcium", "Zinc"], policy);

    assert_eq!(direct.facts.len(), kept);
    assert_eq!(direct.articles, vec![articles[0].clone()]);
}

#[test]
fn fact_matching_is_case_sensitive() {
    let (facts, articles) = evidence();
    let direct = filter_direct(&facts, &articles, &["iron", "calcium"], FactMatchPolicy::LeadingPair);
    assert!(direct.facts.is_empty());
    assert_eq!(direct.articles.len(), 2);
}

#[test]
fn sentinel_text_never_counts_as_evidence() {
    let facts = vec![ReferenceFact::Missing(FactAbsence::NoInteractionInfo)];
    let direct = filter_direct(&facts, &[], &["상호작용"], FactMatchPolicy::AllEntities);
    assert!(direct.is_empty());
}
