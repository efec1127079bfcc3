//! # Unified Parser Interface
//!
//! Runs the full pipeline: matcher, segmenter, classifier and range
//! expansion, then result assembly.

use crate::catalog::{default_catalog, PatternCatalog};
use crate::parser::assemble::assemble;
use crate::parser::classifier::classify;
use crate::parser::matcher::Matcher;
use crate::parser::segmenter::gaps;
use crate::types::ParsedResult;

/// Configuration for the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Report canonical labels instead of the matched text where a rule defines one.
    pub standardized: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { standardized: true }
    }
}

impl ParserConfig {
    /// Create a new parser configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose between canonical labels and raw matched text.
    pub fn with_standardized(mut self, standardized: bool) -> Self {
        self.standardized = standardized;
        self
    }
}

/// A catalog paired with a configuration.
///
/// Holds no per-call state, so one parser can serve any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'c> {
    config: ParserConfig,
    catalog: &'c PatternCatalog,
}

impl<'c> Parser<'c> {
    /// Create a parser over `catalog`.
    pub fn new(catalog: &'c PatternCatalog, config: ParserConfig) -> Self {
        Self { config, catalog }
    }

    /// Parse a release name.
    ///
    /// # Examples
    /// ```
    /// use tnparse_core::parser::{Parser, ParserConfig};
    /// use tnparse_core::catalog::default_catalog;
    ///
    /// let parser = Parser::new(default_catalog(), ParserConfig::default());
    /// let result = parser.parse("Movie.Title.2020.1080p.BluRay.x264-GROUP");
    ///
    /// assert_eq!(result.name, "Movie Title");
    /// assert_eq!(result.codec, "H.264");
    /// assert_eq!(result.producer, "GROUP");
    /// ```
    pub fn parse(&self, title: &str) -> ParsedResult {
        parse(title, self.config.standardized, self.catalog)
    }

    /// Get the parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn catalog(&self) -> &'c PatternCatalog {
        self.catalog
    }
}

impl Default for Parser<'static> {
    fn default() -> Self {
        Self::new(default_catalog(), ParserConfig::default())
    }
}

/// Parse `title` against `catalog`.
///
/// Never fails: with no recognizable tokens the whole trimmed title
/// becomes the name and every other field stays empty.
pub fn parse(title: &str, standardized: bool, catalog: &PatternCatalog) -> ParsedResult {
    let matches = Matcher::new(catalog, standardized).resolve(title);
    let gaps = gaps(title, matches.values());
    let classified = classify(&gaps);
    assemble(title, &matches, classified)
}

/// Parse with the built-in catalog in standardized mode.
pub fn parse_default(title: &str) -> ParsedResult {
    parse(title, true, default_catalog())
}
