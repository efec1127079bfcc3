//! # Segmenter
//!
//! Splits a title into the substrings no resolved match claims.

use tracing::trace;

use super::matcher::ResolvedMatch;

/// Returns the unmatched substrings ("gaps") of `title`, left to right.
///
/// Matches are visited by ascending start offset; matches sharing a start
/// offset are visited in category declaration order. A cursor only moves
/// forward, so a match overlapping an already consumed region contributes
/// no gap but still extends the cursor when it ends further right.
pub fn gaps<'t, 'm>(
    title: &'t str,
    matches: impl IntoIterator<Item = &'m ResolvedMatch>,
) -> Vec<&'t str> {
    let mut ordered: Vec<&ResolvedMatch> = matches.into_iter().collect();
    ordered.sort_by_key(|m| (m.start, m.category));

    let mut gaps = Vec::new();
    let mut cursor = 0;
    for m in ordered {
        if m.start > cursor {
            gaps.push(&title[cursor..m.start]);
        }
        cursor = cursor.max(m.end);
    }
    if cursor < title.len() {
        gaps.push(&title[cursor..]);
    }

    trace!(?gaps, "segmented title");
    gaps
}
