//! Decoding of the provider's text payload into article content.

use crate::models::ArticleContent;
use crate::{Error, Result};

/// Parse the raw text payload as a `{title, content}` JSON object.
///
/// Surrounding whitespace is tolerated. Malformed JSON and missing keys both
/// surface as the fixed content-decode error; the parser's own message is
/// only logged.
pub fn parse_article(raw: &str) -> Result<ArticleContent> {
    let trimmed = raw.trim();
    serde_json::from_str(trimmed).map_err(|e| {
        tracing::error!("Failed to parse article JSON: {}\nPayload: {}", e, trimmed);
        Error::ContentDecode
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parses_title_and_content() {
        let article =
            parse_article("{\"title\":\"My Post\",\"content\":\"One.\\n\\nTwo.\"}").unwrap();

        assert_eq!(article.title, "My Post");
        assert_eq!(article.content, "One.\n\nTwo.");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let article =
            parse_article("  \n {\"title\":\"T\",\"content\":\"C\"} \n\t").unwrap();
        assert_eq!(article.title, "T");
    }

    #[test]
    fn test_extra_keys_are_tolerated() {
        let article =
            parse_article("{\"title\":\"T\",\"content\":\"C\",\"tags\":[\"x\"]}").unwrap();
        assert_eq!(article.content, "C");
    }

    #[test]
    fn test_malformed_json_is_a_content_decode_error() {
        let err = parse_article("this is not json").unwrap_err();
        assert!(matches!(err, Error::ContentDecode));
    }

    #[test]
    fn test_missing_keys_are_a_content_decode_error() {
        let err = parse_article("{\"title\":\"only a title\"}").unwrap_err();
        assert!(matches!(err, Error::ContentDecode));
    }

    #[test]
    fn test_decode_error_message_is_fixed() {
        let err = parse_article("{").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to parse blog content from AI response"
        );
    }
}
