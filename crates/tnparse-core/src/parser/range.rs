//! # Range Expansion
//!
//! Season and episode text such as `S01-S03` or `E05` becomes an explicit
//! ascending list of numbers.

/// Expands the digit runs of `text` into a list of numbers.
///
/// - one digit run: a single-element list
/// - two digit runs `a`, `b`: the inclusive range `a..=b`, empty when `a > b`
/// - zero or more than two runs: empty
///
/// A run too large for `u32` counts as malformed and also yields an empty list.
///
/// ```
/// use tnparse_core::parser::range::expand;
///
/// assert_eq!(expand("S01-S03"), vec![1, 2, 3]);
/// assert_eq!(expand("E07"), vec![7]);
/// assert!(expand("Complete").is_empty());
/// ```
pub fn expand(text: &str) -> Vec<u32> {
    let runs: Vec<&str> = text
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .collect();

    let numbers: Option<Vec<u32>> = runs.iter().map(|run| run.parse().ok()).collect();
    match numbers.as_deref() {
        Some(&[single]) => vec![single],
        Some(&[low, high]) => (low..=high).collect(),
        _ => Vec::new(),
    }
}
