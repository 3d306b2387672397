use serde::{Deserialize, Serialize};

/// Title and abstract of one literature record.
///
/// The provider-assigned article id is only used for de-duplication during a
/// search and is not kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LiteratureArticle {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

impl LiteratureArticle {
    #[must_use]
    pub fn new(title: impl Into<String>, abstract_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            abstract_text: abstract_text.into(),
        }
    }

    /// True when every entity name occurs in the title or abstract, ignoring case.
    #[must_use]
    pub fn mentions_all<S: AsRef<str>>(&self, entities: &[S]) -> bool {
        let haystack = format!("{} {}", self.title, self.abstract_text).to_lowercase();
        entities
            .iter()
            .all(|name| haystack.contains(&name.as_ref().to_lowercase()))
    }

    /// `Title: …\nAbstract: …` block used in training completions and prompts.
    #[must_use]
    pub fn render(&self) -> String {
        format!("Title: {}\nAbstract: {}", self.title, self.abstract_text)
    }
}
