//! # Gap Classifier
//!
//! Turns the segmenter's gaps into name, producer and excess tokens.

use std::sync::LazyLock;

use regex::Regex;

/// Two or more literal dots, or any whitespace run.
static TOKEN_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\.+|\s+").expect("static token split pattern"));

/// Name, producer and excess extracted from a gap list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    pub name: String,
    pub producer: String,
    pub excess: Vec<String>,
}

/// Classifies `gaps` (in title order).
///
/// The first gap is the name. Every later gap is trimmed of separator
/// runs and split into tokens; the last token is the producer and the rest
/// are excess.
pub fn classify(gaps: &[&str]) -> Classified {
    let Some((first, rest)) = gaps.split_first() else {
        return Classified::default();
    };

    let mut tokens: Vec<String> = rest
        .iter()
        .flat_map(|&gap| tokenize(gap))
        .map(str::to_string)
        .collect();
    let producer = tokens.pop().unwrap_or_default();

    Classified {
        name: clean_name(first),
        producer,
        excess: tokens,
    }
}

/// Strips separators around a gap and splits it into non-empty tokens.
fn tokenize(gap: &str) -> impl Iterator<Item = &str> {
    let trimmed = gap
        .trim_start_matches(|c: char| {
            c.is_whitespace() || matches!(c, '-' | '_' | '.' | '(' | ')' | ',')
        })
        .trim_end_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '.' | ','));
    TOKEN_SPLIT
        .split(trimmed)
        .filter(|token| !token.is_empty())
}

/// Normalizes the leading gap into a display name.
///
/// Scene names separate words with dots or underscores; those become
/// spaces only when the name carries no whitespace of its own, so names
/// like "Mr. Robot" keep their punctuation.
pub fn clean_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let spaced = if trimmed.contains(char::is_whitespace) {
        trimmed.to_string()
    } else {
        trimmed.replace(['.', '_'], " ")
    };

    spaced
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| matches!(c, '-' | '_' | '.' | ',' | '(' | ' '))
        .to_string()
}
