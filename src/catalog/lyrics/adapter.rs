//! Adapter layer: Convert raw lyrics text to the domain model
//!
//! Escaping happens before tokenization, in that order, so the token
//! sequence is derived from exactly the text the rendering layer shows.

use crate::catalog::domain::Lyrics;
use crate::catalog::text;

/// Build a domain [`Lyrics`] from the raw text returned by the service.
pub fn to_lyrics(raw: &str) -> Lyrics {
    let escaped = text::escape_html(raw);
    let words = text::tokenize(&escaped);
    let word_count = words.len();
    Lyrics {
        text: escaped,
        words,
        word_count,
    }
}
