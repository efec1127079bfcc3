//! # Matcher
//!
//! Resolves at most one match per category: rules are tried in priority
//! order and the first rule with an occurrence wins the category.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::catalog::PatternCatalog;
use crate::types::Category;

/// The winning occurrence of a category in a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedMatch {
    /// The category this match resolved.
    pub category: Category,
    /// Byte offset where the whole rule occurrence starts.
    pub start: usize,
    /// Byte offset where the whole rule occurrence ends (exclusive).
    pub end: usize,
    /// Byte offset of the reported portion: the first capture group when it
    /// participated, otherwise the whole occurrence.
    pub value_start: usize,
    /// End of the reported portion (exclusive).
    pub value_end: usize,
    /// Canonical label in standardized mode when the rule has one,
    /// otherwise the reported portion of the title.
    pub content: String,
    /// Index of the winning rule within its category.
    pub rule: usize,
}

impl ResolvedMatch {
    /// The reported portion of `title`, independent of the parse mode.
    #[must_use]
    pub fn raw<'t>(&self, title: &'t str) -> &'t str {
        &title[self.value_start..self.value_end]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Applies a catalog to titles.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'c> {
    catalog: &'c PatternCatalog,
    standardized: bool,
}

impl<'c> Matcher<'c> {
    pub fn new(catalog: &'c PatternCatalog, standardized: bool) -> Self {
        Self {
            catalog,
            standardized,
        }
    }

    /// Resolve every category against `title`.
    ///
    /// Categories without any matching rule are absent from the map.
    pub fn resolve(&self, title: &str) -> BTreeMap<Category, ResolvedMatch> {
        Category::ALL
            .into_iter()
            .filter_map(|category| {
                self.resolve_category(title, category)
                    .map(|resolved| (category, resolved))
            })
            .collect()
    }

    /// Resolve a single category, first successful rule wins.
    pub fn resolve_category(&self, title: &str, category: Category) -> Option<ResolvedMatch> {
        for (index, rule) in self.catalog.rules(category).iter().enumerate() {
            let caps = if category.selects_last() {
                rule.last(title)
            } else {
                rule.first(title)
            };
            let Some(caps) = caps else {
                continue;
            };

            let whole = caps.get(0)?;
            let value = caps.get(1).unwrap_or(whole);
            let content = match rule.replacement() {
                Some(label) if self.standardized => label.to_string(),
                _ => value.as_str().to_string(),
            };

            trace!(%category, rule = index, start = whole.start(), end = whole.end(), %content, "resolved category");
            return Some(ResolvedMatch {
                category,
                start: whole.start(),
                end: whole.end(),
                value_start: value.start(),
                value_end: value.end(),
                content,
                rule: index,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{default_catalog, Rule};

    fn single_rule_catalog(category: Category, rules: Vec<Rule>) -> PatternCatalog {
        let mut builder = PatternCatalog::builder();
        for c in Category::ALL {
            let list = if c == category {
                rules.clone()
            } else {
                vec![Rule::new("zzqqneverzzqq")]
            };
            builder = builder.rules(c, list);
        }
        builder.build().unwrap()
    }

    #[test]
    fn first_rule_with_a_match_wins() {
        let catalog = single_rule_catalog(
            Category::Codec,
            vec![
                Rule::with_replacement("av1", "AV1"),
                Rule::with_replacement("x264", "H.264"),
                Rule::with_replacement("264", "generic"),
            ],
        );
        let matcher = Matcher::new(&catalog, true);
        let resolved = matcher
            .resolve_category("Title.2020.x264-GRP", Category::Codec)
            .unwrap();
        assert_eq!(resolved.rule, 1);
        assert_eq!(resolved.content, "H.264");
        assert_eq!((resolved.start, resolved.end), (11, 15));
    }

    #[test]
    fn raw_mode_ignores_replacement() {
        let catalog = single_rule_catalog(
            Category::Quality,
            vec![Rule::with_replacement(r"\bBlu-?Ray\b", "Blu-ray")],
        );
        let raw = Matcher::new(&catalog, false)
            .resolve_category("Movie.BLURAY.x264", Category::Quality)
            .unwrap();
        assert_eq!(raw.content, "BLURAY");

        let standard = Matcher::new(&catalog, true)
            .resolve_category("Movie.BLURAY.x264", Category::Quality)
            .unwrap();
        assert_eq!(standard.content, "Blu-ray");
    }

    #[test]
    fn capture_group_supplies_content() {
        let catalog = single_rule_catalog(
            Category::Resolution,
            vec![Rule::new(r"res:([0-9]{3,4}p)")],
        );
        let resolved = Matcher::new(&catalog, true)
            .resolve_category("Movie res:720p", Category::Resolution)
            .unwrap();
        assert_eq!(resolved.content, "720p");
        assert_eq!((resolved.start, resolved.end), (6, 14));
        assert_eq!((resolved.value_start, resolved.value_end), (10, 14));
        assert_eq!(resolved.raw("Movie res:720p"), "720p");
    }

    #[test]
    fn non_participating_group_falls_back_to_whole_match() {
        let catalog =
            single_rule_catalog(Category::Episode, vec![Rule::new(r"ep(?:x([0-9]+))?[0-9]+")]);
        let resolved = Matcher::new(&catalog, true)
            .resolve_category("Show ep12", Category::Episode)
            .unwrap();
        assert_eq!(resolved.content, "ep12");
    }

    #[test]
    fn year_takes_the_last_occurrence() {
        let resolved = Matcher::new(default_catalog(), true)
            .resolve_category("The.Thing.1982.Remake.2011.720p", Category::Year)
            .unwrap();
        assert_eq!(resolved.content, "2011");
        assert_eq!(resolved.start, 22);
    }

    #[test]
    fn other_categories_take_the_first_occurrence() {
        let resolved = Matcher::new(default_catalog(), false)
            .resolve_category("Show.720p.Extras.1080p", Category::Resolution)
            .unwrap();
        assert_eq!(resolved.content, "720p");
    }

    #[test]
    fn unmatched_categories_are_absent() {
        let resolved = Matcher::new(default_catalog(), true).resolve("Plain Title");
        assert!(resolved.is_empty());
    }

    #[test]
    fn resolve_is_keyed_in_category_order() {
        let resolved = Matcher::new(default_catalog(), true)
            .resolve("Movie.Title.2020.1080p.BluRay.x264-GROUP");
        let keys: Vec<Category> = resolved.keys().copied().collect();
        assert_eq!(
            keys,
            vec![
                Category::Quality,
                Category::Resolution,
                Category::Year,
                Category::Codec
            ]
        );
    }
}
