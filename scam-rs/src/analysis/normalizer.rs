//! Text normalization applied before classification
//!
//! Must stay byte-identical to the normalization the model was trained
//! with: lower-case, drop ASCII punctuation, drop decimal digits, collapse
//! whitespace. Digits are removed without inserting a separator, so
//! "call4free" becomes "callfree".

use regex::Regex;
use std::sync::LazyLock;

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

/// Normalize a message. Total: never fails, empty in gives empty out.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();

    let without_punctuation: String = lowered
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    let without_digits = DIGITS.replace_all(&without_punctuation, "");

    without_digits
        .split(is_separator)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

// Unicode whitespace plus the ASCII file/group/record/unit separators,
// which the training-side splitter also treats as whitespace.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
