// src/name.rs

//! Handwritten recipe name normalization
//!
//! Turns freeform text into a canonical display name, in this order:
//! hyphens and underscores become spaces, everything that is not an
//! ASCII letter or space is stripped, whitespace runs collapse to single
//! spaces, and each word is title-cased. Pure and stateless; independent
//! of the cookbook.

use std::sync::LazyLock;

use regex::Regex;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_]").unwrap());
static NON_LETTERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z ]").unwrap());

/// Normalize a handwritten recipe name.
///
/// Returns `None` when nothing survives the cleanup.
pub fn normalize(raw: &str) -> Option<String> {
    let spaced = SEPARATORS.replace_all(raw, " ");
    let letters = NON_LETTERS.replace_all(&spaced, "");

    let name = letters
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() { None } else { Some(name) }
}

/// Uppercase the first letter of a word, lowercase the rest.
///
/// Only ASCII letters reach this point; everything else was stripped.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
        None => String::new(),
    }
}
