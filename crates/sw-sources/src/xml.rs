//! XML helpers over `roxmltree`.

use roxmltree::{Document, Node, ParsingOptions};

use crate::error::SourceError;

/// Parse a provider document. DTDs are allowed because `efetch` responses carry a
/// `<!DOCTYPE PubmedArticleSet ...>` declaration.
pub fn parse_document(text: &str) -> Result<Document<'_>, SourceError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(text, options).map_err(|e| SourceError::Parse(e.to_string()))
}

/// Concatenated text of every descendant text node.
pub fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect()
}

/// Trimmed text of the first descendant named `name`, or an empty string.
pub fn first_text(node: Node<'_, '_>, name: &str) -> String {
    node.descendants()
        .find(|n| n.has_tag_name(name))
        .map(|n| text_content(n).trim().to_string())
        .unwrap_or_default()
}
