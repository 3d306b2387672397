use serde::{Deserialize, Serialize};

/// One supervised example: a question about a single entity and its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingExample {
    pub prompt: String,
    pub completion: String,
}

impl TrainingExample {
    /// Example answered with the entity's reference interaction passage.
    #[must_use]
    pub fn reference(entity: &str, fact: &str) -> Self {
        Self {
            prompt: format!("What are the interactions of {entity}?"),
            completion: fact.to_string(),
        }
    }

    /// Example answered with one article's rendered title and abstract.
    #[must_use]
    pub fn research(entity: &str, rendered_article: String) -> Self {
        Self {
            prompt: format!("What does research say about {entity}?"),
            completion: rendered_article,
        }
    }
}

/// A single chat turn in the fine-tuning file format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

/// One line of the fine-tuning JSONL file: a user/assistant exchange.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRecord {
    pub messages: Vec<ChatTurn>,
}

impl From<&TrainingExample> for ChatRecord {
    fn from(example: &TrainingExample) -> Self {
        Self {
            messages: vec![
                ChatTurn {
                    role: "user".into(),
                    content: example.prompt.clone(),
                },
                ChatTurn {
                    role: "assistant".into(),
                    content: example.completion.clone(),
                },
            ],
        }
    }
}
