use std::fmt::Write as _;

use serde::Serialize;
use sw_core::entities::LiteratureArticle;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::context::AppContext;
use crate::output::{TextView, output};
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct SearchResponse {
    entities: Vec<String>,
    articles: Vec<LiteratureArticle>,
}

impl TextView for SearchResponse {
    fn to_text(&self) -> String {
        if self.articles.is_empty() {
            return format!("No articles mention {}.", self.entities.join(" and "));
        }
        let mut out = String::new();
        for (i, article) in self.articles.iter().enumerate() {
            if i > 0 {
                out.push_str("\n\n");
            }
            let _ = write!(out, "[{}] {}", i + 1, article.render());
        }
        out
    }
}

/// Handle `swise search`.
pub async fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.pubmed()?;

    let spinner = Progress::spinner("Searching PubMed...");
    let articles = client.search(&args.entities).await;
    spinner.finish_clear();

    output(
        &SearchResponse {
            entities: args.entities.clone(),
            articles,
        },
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_numbers_articles() {
        let response = SearchResponse {
            entities: vec!["Iron".into(), "Zinc".into()],
            articles: vec![
                LiteratureArticle::new("A", "a"),
                LiteratureArticle::new("B", "b"),
            ],
        };
        let text = response.to_text();
        assert!(text.starts_with("[1] Title: A\nAbstract: a"));
        assert!(text.contains("\n\n[2] Title: B"));
    }

    #[test]
    fn text_for_no_articles() {
        let response = SearchResponse {
            entities: vec!["Iron".into(), "Zinc".into()],
            articles: Vec::new(),
        };
        assert_eq!(response.to_text(), "No articles mention Iron and Zinc.");
    }
}
