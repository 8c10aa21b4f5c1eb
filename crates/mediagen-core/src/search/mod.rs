//! Ranked fuzzy search over a model catalog
//!
//! [`RankedSearch`] turns a catalog and the live query into the ordered,
//! bounded list a picker shows. With a query, every item is scored across its
//! fields and non-matches are dropped. Without one, items whose title
//! mentions a popular term are lifted to the top and everything else keeps
//! its catalog order.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;
use crate::errors::{MediagenError, Result};

pub mod fuzzy;
pub mod weights;

pub use fuzzy::fuzzy_score;
pub use weights::{score_item, FieldWeights};

#[cfg(test)]
mod tests;

/// Hard cap on the number of ranked results.
pub const MAX_RESULTS: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    /// Title fragments that lift an item in the empty-query view.
    #[serde(default = "default_popular_terms")]
    pub popular_terms: Vec<String>,
    /// Relevance assigned to popular items when there is no query.
    #[serde(default = "default_popular_boost")]
    pub popular_boost: f64,
}

fn default_popular_terms() -> Vec<String> {
    ["flux", "veo", "kling", "wan", "stable"]
        .iter()
        .map(|t| t.to_string())
        .collect()
}

fn default_popular_boost() -> f64 {
    100.0
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            popular_terms: default_popular_terms(),
            popular_boost: default_popular_boost(),
        }
    }
}

/// One catalog item with its relevance for the current query.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMatch<'a> {
    pub item: &'a CatalogItem,
    pub score: f64,
}

#[derive(Debug, Clone)]
pub struct RankedSearch {
    weights: FieldWeights,
    popular: Option<Regex>,
    popular_boost: f64,
}

impl Default for RankedSearch {
    fn default() -> Self {
        Self {
            weights: FieldWeights::default(),
            popular: popular_pattern(&default_popular_terms()).ok().flatten(),
            popular_boost: default_popular_boost(),
        }
    }
}

impl RankedSearch {
    pub fn new(config: SearchConfig) -> Result<Self> {
        if !config.popular_boost.is_finite() || config.popular_boost < 0.0 {
            return Err(MediagenError::ConfigError(format!(
                "popular boost must be a non-negative number, got {}",
                config.popular_boost
            )));
        }

        Ok(Self {
            weights: FieldWeights::default(),
            popular: popular_pattern(&config.popular_terms)?,
            popular_boost: config.popular_boost,
        })
    }

    /// Whether `title` mentions any configured popular term.
    pub fn is_popular(&self, title: &str) -> bool {
        self.popular
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(title))
    }

    /// Rank `items` against `query`.
    ///
    /// Results are ordered by descending score with ties kept in catalog
    /// order, and never exceed [`MAX_RESULTS`]. An empty result is valid;
    /// showing a placeholder for it is up to the caller.
    pub fn rank<'a>(&self, items: &'a [CatalogItem], query: &str) -> Vec<ScoredMatch<'a>> {
        let query = query.trim();

        let mut matches: Vec<ScoredMatch<'a>> = if query.is_empty() {
            items
                .iter()
                .map(|item| ScoredMatch {
                    item,
                    score: self.default_relevance(item),
                })
                .collect()
        } else {
            items
                .iter()
                .map(|item| ScoredMatch {
                    item,
                    score: self.weights.score(item, query),
                })
                .filter(|m| m.score > 0.0)
                .collect()
        };

        // Vec::sort_by is stable, so equal scores keep catalog order.
        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches.truncate(MAX_RESULTS);

        tracing::trace!(query, results = matches.len(), "ranked catalog");
        matches
    }

    fn default_relevance(&self, item: &CatalogItem) -> f64 {
        if self.is_popular(&item.title) {
            self.popular_boost
        } else {
            0.0
        }
    }
}

/// Case-insensitive alternation of the non-blank terms, matched literally.
fn popular_pattern(terms: &[String]) -> Result<Option<Regex>> {
    let alternatives: Vec<String> = terms
        .iter()
        .map(|term| term.trim())
        .filter(|term| !term.is_empty())
        .map(regex::escape)
        .collect();

    if alternatives.is_empty() {
        return Ok(None);
    }

    let pattern = RegexBuilder::new(&alternatives.join("|"))
        .case_insensitive(true)
        .build()?;
    Ok(Some(pattern))
}
