//! Supplement name translation into English.

use sw_llm::{ChatModel, ChatRequest};

use crate::error::TranslationError;

const MAX_TOKENS: u32 = 100;

/// Whether any name needs translating before it can match English sources.
#[must_use]
pub fn needs_translation<S: AsRef<str>>(entities: &[S]) -> bool {
    entities.iter().any(|e| !e.as_ref().is_ascii())
}

#[must_use]
pub fn translation_prompt<S: AsRef<str>>(entities: &[S]) -> String {
    let names: Vec<&str> = entities.iter().map(AsRef::as_ref).collect();
    format!(
        "Translate the following supplement names into English:\n{}\nPlease provide the translations as a comma-separated list.",
        names.join(", ")
    )
}

/// Names from a translation reply.
///
/// A multi-line reply is read as `original: translation` lines and only lines
/// with a colon count. A single-line reply is a comma-separated list.
#[must_use]
pub fn parse_translation(reply: &str) -> Vec<String> {
    let names: Vec<&str> = if reply.contains('\n') {
        reply
            .lines()
            .filter_map(|line| line.rsplit_once(':').map(|(_, name)| name))
            .collect()
    } else {
        reply.split(',').collect()
    };

    names
        .into_iter()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Ask `model` to translate `entities`.
///
/// # Errors
///
/// [`TranslationError::Provider`] if the request fails,
/// [`TranslationError::Empty`] if the reply yields no names.
pub async fn translate<C: ChatModel, S: AsRef<str>>(
    chat: &C,
    model: &str,
    entities: &[S],
) -> Result<Vec<String>, TranslationError> {
    let request = ChatRequest::user(model, translation_prompt(entities)).with_max_tokens(MAX_TOKENS);
    let reply = chat.complete(request).await?;
    let names = parse_translation(&reply);
    if names.is_empty() {
        return Err(TranslationError::Empty(reply));
    }
    if names.len() != entities.len() {
        tracing::warn!(
            expected = entities.len(),
            got = names.len(),
            "translation returned a different number of names"
        );
    }
    tracing::debug!(?names, "translated supplement names");
    Ok(names)
}
