use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of release a title describes, derived from its season list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    /// No season information.
    Movie,
    /// Exactly one season.
    TvSeason,
    /// Several seasons, e.g. a complete-series pack.
    TvSeries,
}

impl MediaType {
    /// Classifies a release by how many seasons it spans.
    ///
    /// Episode numbers are never consulted.
    #[must_use]
    pub fn from_season_count(count: usize) -> Self {
        match count {
            0 => Self::Movie,
            1 => Self::TvSeason,
            _ => Self::TvSeries,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::TvSeason => "tv_season",
            Self::TvSeries => "tv_series",
        }
    }
}

impl Default for MediaType {
    fn default() -> Self {
        Self::Movie
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
