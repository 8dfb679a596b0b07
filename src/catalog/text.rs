//! Text processing for lyrics: escaping and tokenization.
//!
//! These are two deliberately separate steps. Percent-encoding for URL path
//! segments happens in the lyrics client at transport time; the escaping
//! here prepares the returned text for rendering, and tokenization runs on
//! that escaped text.

/// Escape HTML-significant characters (`&`, `<`, `>`).
///
/// Quotes and apostrophes are left alone: apostrophes are word characters
/// for tokenization purposes (`Don't` must stay one token).
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Split text into word tokens.
///
/// Every character that is not a word character, hyphen, or apostrophe is
/// treated as whitespace; empty tokens are discarded. Hyphen and apostrophe
/// are kept because they occur inside regular words (`Stop-Believing`,
/// `Don't`).
pub fn tokenize(text: &str) -> Vec<String> {
    text.chars()
        .map(|c| if is_word_char(c) { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-' || c == '\''
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b <i>c</i>"), "a &amp; b &lt;i&gt;c&lt;/i&gt;");
    }

    #[test]
    fn test_escape_html_leaves_apostrophes() {
        assert_eq!(escape_html("Don't"), "Don't");
    }

    #[test]
    fn test_escape_html_empty() {
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_tokenize_keeps_apostrophe_and_hyphen() {
        assert_eq!(
            tokenize("Don't Stop-Believing!"),
            vec!["Don't", "Stop-Believing"]
        );
    }

    #[test]
    fn test_tokenize_punctuation_separates() {
        assert_eq!(
            tokenize("hello, world... again"),
            vec!["hello", "world", "again"]
        );
    }

    #[test]
    fn test_tokenize_discards_empty_tokens() {
        assert_eq!(tokenize("...!!!..."), Vec::<String>::new());
        assert_eq!(tokenize(""), Vec::<String>::new());
    }

    #[test]
    fn test_tokenize_unicode_words() {
        assert_eq!(tokenize("über alles"), vec!["über", "alles"]);
    }

    #[test]
    fn test_tokenize_newlines_as_separators() {
        assert_eq!(tokenize("line one\nline two"), vec!["line", "one", "line", "two"]);
    }
}
