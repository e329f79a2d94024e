//! HTML entity decoding for API payloads

use scraper::Html;

/// Decode HTML entities (`&quot;`, `&#039;`, `&eacute;`, ...) to plain text
///
/// The trivia API encodes every string field this way. Any markup that
/// survives decoding is dropped, keeping only its text.
pub fn decode_entities(input: &str) -> String {
    if !input.contains('&') && !input.contains('<') {
        return input.to_string();
    }
    let fragment = Html::parse_fragment(input);
    fragment.root_element().text().collect()
}
