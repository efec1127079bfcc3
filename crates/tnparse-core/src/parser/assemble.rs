//! # Result Assembly

use std::collections::BTreeMap;

use super::classifier::Classified;
use super::matcher::ResolvedMatch;
use super::range::expand;
use crate::types::{Category, MediaType, ParsedResult};

/// Combines resolved categories and classified gaps into a [`ParsedResult`].
///
/// Season and episode lists are expanded from the raw matched text, so
/// they do not depend on the parse mode. A title with no resolved match
/// keeps its trimmed text verbatim as the name.
pub fn assemble(
    title: &str,
    matches: &BTreeMap<Category, ResolvedMatch>,
    classified: Classified,
) -> ParsedResult {
    let name = if matches.is_empty() {
        title.trim().to_string()
    } else {
        classified.name
    };
    let mut result = ParsedResult {
        name,
        producer: classified.producer,
        excess: classified.excess,
        ..ParsedResult::default()
    };

    for (category, resolved) in matches {
        let content = resolved.content.clone();
        match category {
            Category::Network => result.network = content,
            Category::Quality => result.quality = content,
            Category::Resolution => result.resolution = content,
            Category::Year => result.year = content,
            Category::Codec => result.codec = content,
            Category::Audio => result.audio = content,
            Category::BitDepth => result.bit_depth = content,
            Category::AudioTrack => result.audio_track = content,
            Category::Season => result.season = expand(resolved.raw(title)),
            Category::Episode => result.episode = expand(resolved.raw(title)),
        }
    }

    result.media_type = MediaType::from_season_count(result.season.len());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::classifier::classify;

    fn resolved(category: Category, title: &str, text: &str, content: &str) -> ResolvedMatch {
        let start = title.find(text).unwrap();
        ResolvedMatch {
            category,
            start,
            end: start + text.len(),
            value_start: start,
            value_end: start + text.len(),
            content: content.to_string(),
            rule: 0,
        }
    }

    #[test]
    fn fields_come_from_resolved_content() {
        let title = "Movie.2020.1080p.x264";
        let matches: BTreeMap<_, _> = [
            resolved(Category::Year, title, "2020", "2020"),
            resolved(Category::Resolution, title, "1080p", "1080p"),
            resolved(Category::Codec, title, "x264", "H.264"),
        ]
        .into_iter()
        .map(|m| (m.category, m))
        .collect();

        let result = assemble(title, &matches, Classified::default());
        assert_eq!(result.year, "2020");
        assert_eq!(result.resolution, "1080p");
        assert_eq!(result.codec, "H.264");
        assert!(result.network.is_empty());
        assert_eq!(result.media_type, MediaType::Movie);
    }

    #[test]
    fn numbering_expands_from_raw_text() {
        let title = "Show.S01-S03.E02";
        let matches: BTreeMap<_, _> = [
            resolved(Category::Season, title, "S01-S03", "label without digits"),
            resolved(Category::Episode, title, "E02", "E02"),
        ]
        .into_iter()
        .map(|m| (m.category, m))
        .collect();

        let result = assemble(title, &matches, Classified::default());
        assert_eq!(result.season, vec![1, 2, 3]);
        assert_eq!(result.episode, vec![2]);
        assert_eq!(result.media_type, MediaType::TvSeries);
    }

    #[test]
    fn episode_count_never_sets_media_type() {
        let title = "Show.E01-E12";
        let matches: BTreeMap<_, _> = [resolved(Category::Episode, title, "E01-E12", "E01-E12")]
            .into_iter()
            .map(|m| (m.category, m))
            .collect();

        let result = assemble(title, &matches, Classified::default());
        assert_eq!(result.episode.len(), 12);
        assert_eq!(result.media_type, MediaType::Movie);
    }

    #[test]
    fn classified_gaps_are_carried_over() {
        let classified = Classified {
            name: "Movie Title".into(),
            producer: "GROUP".into(),
            excess: vec!["PROPER".into()],
        };
        let title = "Movie.Title.PROPER.2020-GROUP";
        let matches: BTreeMap<_, _> = [resolved(Category::Year, title, "2020", "2020")]
            .into_iter()
            .map(|m| (m.category, m))
            .collect();
        let result = assemble(title, &matches, classified);
        assert_eq!(result.name, "Movie Title");
        assert_eq!(result.producer, "GROUP");
        assert_eq!(result.excess, vec!["PROPER"]);
    }

    #[test]
    fn unmatched_title_keeps_its_text() {
        let classified = classify(&["  Some.Random_Words. "]);
        let result = assemble("  Some.Random_Words. ", &BTreeMap::new(), classified);
        assert_eq!(result.name, "Some.Random_Words.");
        assert!(result.producer.is_empty());
        assert!(result.excess.is_empty());
    }
}
