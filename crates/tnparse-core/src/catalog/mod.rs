//! # Pattern Catalog
//!
//! An immutable table mapping each [`Category`] to its ordered rules.
//! A catalog is built once, then shared read-only by every parse call.

pub mod builder;
pub mod rules;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use builder::{CatalogBuilder, ChannelLayout, Composition, Family};

use crate::error::{Result, TnpError};
use crate::types::Category;

/// A match specification plus an optional canonical replacement.
///
/// The pattern may contain capturing groups; only the first one is used,
/// and only when it participates in the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace: Option<String>,
}

impl Rule {
    /// A rule that always reports the matched text.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replace: None,
        }
    }

    /// A rule reporting `label` in standardized mode.
    pub fn with_replacement(pattern: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replace: Some(label.into()),
        }
    }

    fn compile(&self, family: &Family) -> Result<CompiledRule> {
        let regex = RegexBuilder::new(&self.pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| TnpError::InvalidRule {
                family: family.to_string(),
                pattern: self.pattern.clone(),
                source,
            })?;
        Ok(CompiledRule {
            regex,
            replace: self.replace.clone(),
        })
    }
}

/// A rule whose pattern has been compiled (case-insensitive).
#[derive(Debug, Clone)]
pub struct CompiledRule {
    regex: Regex,
    replace: Option<String>,
}

impl CompiledRule {
    /// The canonical label, if the rule defines one.
    #[must_use]
    pub fn replacement(&self) -> Option<&str> {
        self.replace.as_deref()
    }

    /// The pattern text the rule was compiled from.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether the rule occurs anywhere in `haystack`.
    #[must_use]
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    /// The first occurrence in `haystack`.
    pub fn first<'h>(&self, haystack: &'h str) -> Option<Captures<'h>> {
        self.regex.captures(haystack)
    }

    /// The last of the non-overlapping occurrences in `haystack`.
    pub fn last<'h>(&self, haystack: &'h str) -> Option<Captures<'h>> {
        self.regex.captures_iter(haystack).last()
    }
}

/// Category-keyed rule overrides, as read from a JSON document:
///
/// ```json
/// { "network": [{ "pattern": "\\bCRKL\\b", "replace": "Crackle" }] }
/// ```
///
/// Keys are category names or auxiliary family names such as `audio_format`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogSpec {
    pub families: BTreeMap<String, Vec<Rule>>,
}

/// Immutable category → ordered rule table.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    rules: Vec<Vec<CompiledRule>>,
}

impl PatternCatalog {
    /// Start a catalog from scratch.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// A builder pre-loaded with the built-in vocabularies.
    pub fn standard_builder() -> CatalogBuilder {
        rules::register(CatalogBuilder::new())
    }

    /// Build the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns the first catalog construction error.
    pub fn standard() -> Result<Self> {
        Self::standard_builder().build()
    }

    /// Build the built-in catalog with the families in `spec` replaced.
    ///
    /// # Errors
    ///
    /// Fails if `spec` names an unknown family or any resulting rule does not compile.
    pub fn with_overrides(spec: CatalogSpec) -> Result<Self> {
        let mut builder = Self::standard_builder();
        for (name, family_rules) in spec.families {
            builder.replace_family(&name, family_rules)?;
        }
        builder.build()
    }

    /// Parse a JSON [`CatalogSpec`] and apply it over the built-in catalog.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON, or as [`PatternCatalog::with_overrides`].
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: CatalogSpec = serde_json::from_str(json)?;
        Self::with_overrides(spec)
    }

    pub(crate) fn from_compiled(rules: Vec<Vec<CompiledRule>>) -> Self {
        debug_assert_eq!(rules.len(), Category::COUNT);
        let catalog = Self { rules };
        debug!(rules = catalog.rule_count(), "pattern catalog ready");
        catalog
    }

    /// Rules for `category`, highest priority first.
    #[must_use]
    pub fn rules(&self, category: Category) -> &[CompiledRule] {
        &self.rules[category as usize]
    }

    /// Total number of compiled rules across all categories.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.iter().map(Vec::len).sum()
    }
}

static DEFAULT_CATALOG: LazyLock<PatternCatalog> = LazyLock::new(|| {
    PatternCatalog::standard()
        .unwrap_or_else(|err| panic!("built-in pattern catalog is invalid: {err}"))
});

/// The process-wide built-in catalog, built on first use.
///
/// # Panics
///
/// Panics if a built-in rule fails to compile; running with a partial
/// catalog is never allowed.
pub fn default_catalog() -> &'static PatternCatalog {
    &DEFAULT_CATALOG
}
