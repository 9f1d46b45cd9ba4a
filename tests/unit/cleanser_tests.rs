/*!
 * Tests for lexical cleansing
 */

use tanzil_importer::cleanser::{self, SAJDAH_GLYPH};

/// Test that a comment containing `--` is removed along with its markers
#[test]
fn test_strip_comments_withDoubleHyphenInside_shouldRemoveComment() {
    let raw = "<quran><!-- Translator: a -- b --><sura/></quran>";
    let cleaned = cleanser::strip_comments(raw.as_bytes()).unwrap();
    assert_eq!(cleaned, "<quran><sura/></quran>");
}

/// Test that markup outside comments is left untouched
#[test]
fn test_strip_comments_withoutComments_shouldReturnInputUnchanged() {
    let raw = r#"<aya index="1" text="a  b"/>"#;
    assert_eq!(cleanser::strip_comments_str(raw), raw);
}

/// Test that the sajdah glyph is removed and nothing else changes
#[test]
fn test_strip_sajdah_glyph_withGlyph_shouldOnlyRemoveGlyph() {
    let text = format!("word1 word2 {}", SAJDAH_GLYPH);
    assert_eq!(cleanser::strip_sajdah_glyph(&text), "word1 word2 ");
}

/// Test that stripping the glyph twice gives the same text as once
#[test]
fn test_strip_sajdah_glyph_appliedTwice_shouldBeIdempotent() {
    let text = format!("{g}a {g} b{g}", g = SAJDAH_GLYPH);
    let once = cleanser::strip_sajdah_glyph(&text);
    let twice = cleanser::strip_sajdah_glyph(&once);
    assert_eq!(once, twice);
    assert!(!once.contains(SAJDAH_GLYPH));
}

/// Test that every apostrophe becomes the quote entity
#[test]
fn test_escape_apostrophes_withSeveralApostrophes_shouldReplaceAll() {
    assert_eq!(
        cleanser::escape_apostrophes("it's God's"),
        "it&quot;s God&quot;s"
    );
    assert_eq!(cleanser::escape_apostrophes("no quotes"), "no quotes");
}

/// Test that word splitting follows single spaces
#[test]
fn test_split_words_withSingleSpaces_shouldMatchTokenCount() {
    let text = "ذَٰلِكَ ٱلْكِتَـٰبُ لَا رَيْبَ";
    let words: Vec<&str> = cleanser::split_words(text).collect();
    assert_eq!(words.len(), 4);
    assert_eq!(words[0], "ذَٰلِكَ");
}

/// Test that an empty verse has no words
#[test]
fn test_split_words_withEmptyText_shouldYieldNothing() {
    assert_eq!(cleanser::split_words("").count(), 0);
    assert_eq!(cleanser::split_words("   ").count(), 0);
}
