//! # tnparse Core
//!
//! Extracts structured metadata from scene and torrent release names:
//! title, year, release group, codec, resolution, audio, season and
//! episode numbers, network, and leftover tokens.
//!
//! A [`PatternCatalog`] maps each [`Category`] to ordered regex rules. A
//! parse call resolves one match per category, splits the title into the
//! unmatched gaps, classifies those gaps and expands season/episode ranges.
//!
//! ## Quick Start
//!
//! ```rust
//! use tnparse_core::{parse, default_catalog, MediaType};
//!
//! let result = parse("Series.Name.S01-S03.Complete.1080p", true, default_catalog());
//!
//! assert_eq!(result.name, "Series Name");
//! assert_eq!(result.season, vec![1, 2, 3]);
//! assert_eq!(result.media_type, MediaType::TvSeries);
//! ```
pub mod catalog;
pub mod error;
pub mod parser;
pub mod types;

// Re-export primary API
pub use catalog::{default_catalog, CatalogBuilder, CatalogSpec, PatternCatalog, Rule};
pub use error::{Result, TnpError};
pub use parser::{parse, parse_default, Parser, ParserConfig, ResolvedMatch};
pub use types::{Category, MediaType, ParsedResult};
