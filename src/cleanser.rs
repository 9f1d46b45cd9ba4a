use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::MalformedInputError;

// @module: Lexical cleansing of raw corpus text

// @const: HTML-style comment, lazily matched across lines.
// Tanzil translation files carry comments with `--` inside them, which a
// strict XML reader refuses, so they are removed before parsing.
static COMMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<!--.*?-->").unwrap()
});

/// Prostration marker printed after sajdah verses (U+06E9 ARABIC PLACE OF SAJDAH)
pub const SAJDAH_GLYPH: char = '\u{06E9}';

/// Replacement written in place of every apostrophe in translated text
pub const APOSTROPHE_ENTITY: &str = "&quot;";

/// Decode raw bytes as UTF-8 and remove every `<!-- ... -->` comment.
///
/// Only comment spans are touched; all other markup is returned as is.
pub fn strip_comments(raw: &[u8]) -> Result<String, MalformedInputError> {
    let text = std::str::from_utf8(raw)
        .map_err(|e| MalformedInputError::InvalidUtf8(e.to_string()))?;
    Ok(strip_comments_str(text))
}

/// Same as [`strip_comments`] for already decoded text
pub fn strip_comments_str(text: &str) -> String {
    COMMENT_REGEX.replace_all(text, "").into_owned()
}

/// Remove every sajdah glyph from verse text, leaving all other characters
/// (spaces included) untouched.
pub fn strip_sajdah_glyph(text: &str) -> String {
    text.replace(SAJDAH_GLYPH, "")
}

/// Replace every `'` with `&quot;`.
///
/// Downstream SQL loaders rely on this exact substitution, even though the
/// entity denotes a double quote.
pub fn escape_apostrophes(text: &str) -> String {
    text.replace('\'', APOSTROPHE_ENTITY)
}

/// Split verse text into words on the ASCII space, dropping empty tokens
/// produced by leading, trailing or repeated spaces.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|token| !token.is_empty())
}
