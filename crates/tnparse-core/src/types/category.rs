use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TnpError;

/// One metadata field the engine can extract from a title.
///
/// The declaration order doubles as the tie-break order when two resolved
/// matches start at the same offset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Network,
    Quality,
    Resolution,
    Year,
    Codec,
    Audio,
    BitDepth,
    AudioTrack,
    Season,
    Episode,
}

impl Category {
    /// Total number of categories.
    pub const COUNT: usize = 10;

    /// All categories in declaration order.
    pub const ALL: [Category; Self::COUNT] = [
        Category::Network,
        Category::Quality,
        Category::Resolution,
        Category::Year,
        Category::Codec,
        Category::Audio,
        Category::BitDepth,
        Category::AudioTrack,
        Category::Season,
        Category::Episode,
    ];

    /// Snake-case name, as used in catalog override documents.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Quality => "quality",
            Self::Resolution => "resolution",
            Self::Year => "year",
            Self::Codec => "codec",
            Self::Audio => "audio",
            Self::BitDepth => "bit_depth",
            Self::AudioTrack => "audio_track",
            Self::Season => "season",
            Self::Episode => "episode",
        }
    }

    /// Whether the winning occurrence is the last one in the title rather than the first.
    ///
    /// Titles sometimes lead with an original release year ahead of a remake
    /// or reissue year; the trailing one is the primary year.
    #[must_use]
    pub fn selects_last(self) -> bool {
        matches!(self, Self::Year)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TnpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TnpError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order_is_ordering() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
        assert!(Category::Network < Category::Episode);
    }

    #[test]
    fn only_year_selects_last() {
        for category in Category::ALL {
            assert_eq!(category.selects_last(), category == Category::Year);
        }
    }

    #[test]
    fn parse_from_name() {
        assert_eq!("bit_depth".parse::<Category>().unwrap(), Category::BitDepth);
        assert_eq!("Season".parse::<Category>().unwrap(), Category::Season);
        assert!(matches!(
            "subtitles".parse::<Category>(),
            Err(TnpError::UnknownCategory(_))
        ));
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&Category::AudioTrack).unwrap();
        assert_eq!(json, "\"audio_track\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::AudioTrack);
    }
}
