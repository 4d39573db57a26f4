//! Display-width utilities for table cells
//!
//! Column alignment is computed in terminal cells, not bytes or code points:
//! CJK ideographs, kana, CJK punctuation and full-width Latin occupy two cells,
//! everything else occupies one.

/// Code point ranges rendered double-width
const WIDE_RANGES: &[(u32, u32)] = &[
    (0x3000, 0x303F),   // CJK Symbols and Punctuation
    (0x3040, 0x309F),   // Hiragana
    (0x30A0, 0x30FF),   // Katakana
    (0x31F0, 0x31FF),   // Katakana Phonetic Extensions
    (0x3400, 0x4DBF),   // CJK Unified Ideographs Extension A
    (0x4E00, 0x9FFF),   // CJK Unified Ideographs
    (0xF900, 0xFAFF),   // CJK Compatibility Ideographs
    (0xFF01, 0xFF60),   // Fullwidth ASCII variants
    (0xFFE0, 0xFFE6),   // Fullwidth symbol variants
    (0x20000, 0x2FFFF), // CJK Unified Ideographs Extension B..F, Compatibility Supplement
    (0x30000, 0x3134F), // CJK Unified Ideographs Extension G
];

/// Check if a character occupies two terminal cells
pub fn is_wide(ch: char) -> bool {
    let cp = ch as u32;
    WIDE_RANGES
        .iter()
        .any(|&(start, end)| cp >= start && cp <= end)
}

/// Display width of a single character (1 or 2)
pub fn char_width(ch: char) -> usize {
    if is_wide(ch) {
        2
    } else {
        1
    }
}

/// Display width of a string, summed per code point
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Pad `text` with spaces up to `width` display cells.
///
/// Never truncates: text already wider than `width` is returned unchanged.
pub fn pad(text: &str, width: usize) -> String {
    pad_with(text, width, ' ')
}

/// Pad `text` with `fill` up to `width` display cells
pub fn pad_with(text: &str, width: usize, fill: char) -> String {
    let missing = width.saturating_sub(display_width(text));
    let mut result = String::with_capacity(text.len() + missing * fill.len_utf8());
    result.push_str(text);
    result.extend(std::iter::repeat(fill).take(missing));
    result
}

/// Number of characters (code points) in a string.
///
/// Cursor offsets in the navigator are character offsets, so this is the
/// unit every range computation uses.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Leading whitespace of a line (the table indentation prefix)
pub fn leading_whitespace(line: &str) -> &str {
    let trimmed = line.trim_start();
    &line[..line.len() - trimmed.len()]
}
