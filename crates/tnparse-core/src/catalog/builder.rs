//! # Catalog Builder
//!
//! Catalog construction is two-phase. Leaf families are supplied as plain
//! rule lists; composed families declare the families they are built from
//! and a [`Composition`] strategy. `build` resolves composed families in
//! dependency order, then compiles every rule.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use super::rules::{DELIMITERS, LINKED};
use super::{CompiledRule, PatternCatalog, Rule};
use crate::error::{Result, TnpError};
use crate::types::Category;

/// A named rule family: either a category or an auxiliary family that only
/// exists to feed composed categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    Category(Category),
    Aux(String),
}

impl Family {
    pub fn aux(name: impl Into<String>) -> Self {
        Self::Aux(name.into())
    }
}

impl From<Category> for Family {
    fn from(category: Category) -> Self {
        Self::Category(category)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category(category) => write!(f, "{category}"),
            Self::Aux(name) => f.write_str(name),
        }
    }
}

/// Speaker and subwoofer counts of an audio channel layout, e.g. 5.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelLayout {
    pub speakers: u8,
    pub subwoofers: u8,
}

impl ChannelLayout {
    pub const fn new(speakers: u8, subwoofers: u8) -> Self {
        Self {
            speakers,
            subwoofers,
        }
    }
}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.speakers, self.subwoofers)
    }
}

/// How a composed family derives its rules from its dependencies.
#[derive(Debug, Clone, PartialEq)]
pub enum Composition {
    /// Each template's `{linked}` placeholder becomes a non-capturing
    /// alternation of every dependency rule. Templates without the
    /// placeholder pass through unchanged.
    Linked { templates: Vec<Rule> },

    /// Every dependency rule crossed with every layout, each variant
    /// requiring the channel suffix. All channeled variants come before
    /// the bare dependency rules.
    Channeled { layouts: Vec<ChannelLayout> },
}

impl Composition {
    fn compose(&self, dependencies: &[Rule]) -> Vec<Rule> {
        match self {
            Self::Linked { templates } => {
                let linked = link(dependencies);
                templates
                    .iter()
                    .map(|template| Rule {
                        pattern: template.pattern.replace(LINKED, &linked),
                        replace: template.replace.clone(),
                    })
                    .collect()
            }
            Self::Channeled { layouts } => {
                let mut rules = Vec::with_capacity(dependencies.len() * (layouts.len() + 1));
                for dep in dependencies {
                    for layout in layouts {
                        let ChannelLayout {
                            speakers,
                            subwoofers,
                        } = *layout;
                        rules.push(Rule {
                            pattern: format!(
                                r"((?:{}){DELIMITERS}*{speakers}[. \-]?{subwoofers}(?:ch)?)",
                                dep.pattern
                            ),
                            replace: dep.replace.as_ref().map(|label| format!("{label} {layout}")),
                        });
                    }
                }
                rules.extend(dependencies.iter().map(|dep| Rule {
                    pattern: format!("({})", dep.pattern),
                    replace: dep.replace.clone(),
                }));
                rules
            }
        }
    }
}

/// Joins rule patterns into a single non-capturing alternation.
fn link(rules: &[Rule]) -> String {
    let body = rules
        .iter()
        .map(|rule| rule.pattern.as_str())
        .collect::<Vec<_>>()
        .join("|");
    format!("(?:{body})")
}

#[derive(Debug, Clone)]
enum Source {
    Rules(Vec<Rule>),
    Composed {
        depends_on: Vec<Family>,
        composition: Composition,
    },
}

/// Assembles a [`PatternCatalog`] from leaf and composed families.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    families: BTreeMap<Family, Source>,
}

impl CatalogBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ordered rule list of a leaf category.
    pub fn rules(mut self, category: Category, rules: Vec<Rule>) -> Self {
        self.families
            .insert(Family::Category(category), Source::Rules(rules));
        self
    }

    /// Add an auxiliary family that composed categories can depend on.
    pub fn auxiliary(mut self, name: impl Into<String>, rules: Vec<Rule>) -> Self {
        self.families
            .insert(Family::Aux(name.into()), Source::Rules(rules));
        self
    }

    /// Declare a category composed from other families.
    pub fn composed(
        mut self,
        category: Category,
        depends_on: impl IntoIterator<Item = Family>,
        composition: Composition,
    ) -> Self {
        self.families.insert(
            Family::Category(category),
            Source::Composed {
                depends_on: depends_on.into_iter().collect(),
                composition,
            },
        );
        self
    }

    /// Replace the rules of an existing family.
    ///
    /// For a `Linked` family the rules become its new templates and the
    /// declared dependencies are kept. Any other family becomes a leaf.
    ///
    /// # Errors
    ///
    /// Returns `TnpError::UnknownCategory` if no family with this name exists.
    pub fn replace_family(&mut self, name: &str, rules: Vec<Rule>) -> Result<()> {
        let family = match name.parse::<Category>() {
            Ok(category) => Family::Category(category),
            Err(_) => Family::aux(name.trim()),
        };
        let source = self
            .families
            .get_mut(&family)
            .ok_or_else(|| TnpError::UnknownCategory(name.to_string()))?;

        match source {
            Source::Composed {
                composition: Composition::Linked { templates },
                ..
            } => *templates = rules,
            other => *other = Source::Rules(rules),
        }
        debug!(family = %family, "replaced family rules");
        Ok(())
    }

    /// Resolve composed families, then compile every category.
    ///
    /// # Errors
    ///
    /// Fails on a missing dependency, a dependency cycle, a category with no
    /// rules, or any rule that does not compile.
    pub fn build(self) -> Result<PatternCatalog> {
        let resolved = self.resolve()?;

        // Auxiliary families are only validated; categories embed them.
        for (family, rules) in &resolved {
            if let Family::Aux(_) = family {
                for rule in rules {
                    rule.compile(family)?;
                }
            }
        }

        let mut compiled: Vec<Vec<CompiledRule>> = Vec::with_capacity(Category::COUNT);
        for category in Category::ALL {
            let family = Family::Category(category);
            let rules = resolved
                .get(&family)
                .ok_or(TnpError::MissingCategory(category))?;
            let rules = rules
                .iter()
                .map(|rule| rule.compile(&family))
                .collect::<Result<Vec<_>>>()?;
            debug!(%category, rules = rules.len(), "compiled category");
            compiled.push(rules);
        }

        Ok(PatternCatalog::from_compiled(compiled))
    }

    /// Expand composed families in dependency order.
    fn resolve(self) -> Result<BTreeMap<Family, Vec<Rule>>> {
        let mut resolved = BTreeMap::new();
        let mut pending = Vec::new();

        for (family, source) in self.families {
            match source {
                Source::Rules(rules) => {
                    resolved.insert(family, rules);
                }
                Source::Composed {
                    depends_on,
                    composition,
                } => pending.push((family, depends_on, composition)),
            }
        }

        while !pending.is_empty() {
            let before = pending.len();
            let mut waiting = Vec::new();

            for (family, depends_on, composition) in pending {
                if depends_on.iter().all(|dep| resolved.contains_key(dep)) {
                    let dependencies: Vec<Rule> = depends_on
                        .iter()
                        .flat_map(|dep| resolved[dep].iter().cloned())
                        .collect();
                    let rules = composition.compose(&dependencies);
                    debug!(family = %family, rules = rules.len(), "composed family");
                    resolved.insert(family, rules);
                } else {
                    waiting.push((family, depends_on, composition));
                }
            }

            if waiting.len() == before {
                let pending_families: Vec<&Family> = waiting.iter().map(|(f, ..)| f).collect();
                for (family, depends_on, _) in &waiting {
                    if let Some(missing) = depends_on
                        .iter()
                        .find(|dep| !resolved.contains_key(*dep) && !pending_families.contains(dep))
                    {
                        return Err(TnpError::MissingDependency {
                            family: family.to_string(),
                            dependency: missing.to_string(),
                        });
                    }
                }
                return Err(TnpError::DependencyCycle {
                    family: waiting[0].0.to_string(),
                });
            }
            pending = waiting;
        }

        Ok(resolved)
    }
}
