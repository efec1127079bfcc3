use serde::{Deserialize, Serialize};

use super::media_type::MediaType;

/// The primary output of the parsing engine.
///
/// Scalar fields are empty strings when their category did not resolve;
/// `season` and `episode` are empty when no numbering was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResult {
    /// Title text ahead of the first recognized token.
    pub name: String,

    /// Release year (the last year-like token in the title).
    pub year: String,

    /// Release group, heuristically the last leftover token.
    pub producer: String,

    /// Video codec.
    pub codec: String,

    /// Color bit depth digits, e.g. "10" for a "10bit" token.
    pub bit_depth: String,

    /// Audio format, optionally with a channel layout.
    pub audio: String,

    /// Video resolution.
    pub resolution: String,

    /// Source quality, e.g. "WEB-DL" or "Blu-ray".
    pub quality: String,

    /// Season numbers in ascending order.
    pub season: Vec<u32>,

    /// Episode numbers in ascending order.
    pub episode: Vec<u32>,

    /// Broadcasting or streaming network.
    pub network: String,

    /// Leftover descriptive tokens, in title order.
    pub excess: Vec<String>,

    /// Movie, single season or multi-season series.
    pub media_type: MediaType,

    /// Audio track count marker, e.g. "2Audio".
    pub audio_track: String,
}

impl ParsedResult {
    /// Returns `true` for season packs and series packs.
    #[must_use]
    pub fn is_tv(&self) -> bool {
        self.media_type != MediaType::Movie
    }

    /// Returns `true` if any category beyond the name resolved.
    #[must_use]
    pub fn has_metadata(&self) -> bool {
        !(self.year.is_empty()
            && self.codec.is_empty()
            && self.bit_depth.is_empty()
            && self.audio.is_empty()
            && self.resolution.is_empty()
            && self.quality.is_empty()
            && self.network.is_empty()
            && self.audio_track.is_empty()
            && self.season.is_empty()
            && self.episode.is_empty())
    }
}

impl std::fmt::Display for ParsedResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParsedResult(name={:?}", self.name)?;
        let scalars = [
            ("year", &self.year),
            ("res", &self.resolution),
            ("quality", &self.quality),
            ("codec", &self.codec),
            ("audio", &self.audio),
            ("network", &self.network),
            ("group", &self.producer),
        ];
        for (label, value) in scalars {
            if !value.is_empty() {
                write!(f, ", {label}={value}")?;
            }
        }
        if !self.season.is_empty() {
            write!(f, ", season={:?}", self.season)?;
        }
        if !self.episode.is_empty() {
            write!(f, ", episode={:?}", self.episode)?;
        }
        write!(f, ", type={})", self.media_type)
    }
}
