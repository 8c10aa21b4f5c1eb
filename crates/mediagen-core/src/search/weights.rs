//! Multi-field relevance for a single catalog item

use super::fuzzy::score_lowercase;
use crate::catalog::CatalogItem;

/// Multipliers applied to each searchable field's fuzzy score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldWeights {
    pub title: f64,
    pub id: f64,
    pub category: f64,
    pub description: f64,
    /// Applied to the best-scoring tag only.
    pub tag: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: 3.0,
            id: 2.0,
            category: 1.5,
            description: 0.5,
            tag: 1.2,
        }
    }
}

impl FieldWeights {
    /// Weighted relevance of `item` for an already trimmed, non-empty query.
    /// Zero means no field matched.
    pub fn score(&self, item: &CatalogItem, query: &str) -> f64 {
        let q = query.to_lowercase();
        let field = |text: &str| score_lowercase(&q, &text.to_lowercase());

        let best_tag = item
            .tags
            .iter()
            .map(|tag| field(tag))
            .fold(0.0, f64::max);

        field(&item.title) * self.title
            + field(&item.id) * self.id
            + field(&item.category) * self.category
            + field(&item.description) * self.description
            + best_tag * self.tag
    }
}

/// Score `item` against `query` with the default field weights.
///
/// The query is trimmed first; a blank query scores zero.
pub fn score_item(item: &CatalogItem, query: &str) -> f64 {
    let query = query.trim();
    if query.is_empty() {
        return 0.0;
    }
    FieldWeights::default().score(item, query)
}
