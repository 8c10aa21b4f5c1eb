//! Catalog of selectable generation models
//!
//! A catalog is loaded once per session and never mutated afterwards. Every
//! field of [`CatalogItem`] defaults to empty on deserialization so a record
//! with missing fields still ranks; the missing field simply scores zero.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub mod listing;

pub use listing::*;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CatalogItem {
    pub fn new(id: &str, title: &str, category: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            tags: vec![],
        }
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }
}

/// Read-only, id-unique set of catalog items in load order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog, keeping the first item seen for any repeated id.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        let mut seen = HashSet::with_capacity(items.len());
        let mut unique = Vec::with_capacity(items.len());

        for item in items {
            if seen.contains(&item.id) {
                tracing::debug!(id = %item.id, "dropping duplicate catalog entry");
                continue;
            }
            seen.insert(item.id.clone());
            unique.push(item);
        }

        Self { items: unique }
    }

    /// Small built-in catalog used when the remote listing is unavailable.
    pub fn fallback() -> Self {
        Self::new(vec![
            CatalogItem::new("fal-ai/flux-2", "Flux 2", "text-to-image", "Latest Flux"),
            CatalogItem::new("fal-ai/flux/dev", "FLUX.1 [dev]", "text-to-image", "High quality"),
            CatalogItem::new("fal-ai/flux/schnell", "FLUX.1 [schnell]", "text-to-image", "Fast"),
            CatalogItem::new("fal-ai/recraft-v3", "Recraft V3", "text-to-image", "Vector art"),
            CatalogItem::new(
                "fal-ai/kling-video/v1.6/pro/text-to-video",
                "Kling 1.6",
                "text-to-video",
                "Video",
            ),
            CatalogItem::new("fal-ai/veo2", "Veo 2", "text-to-video", "Google video"),
            CatalogItem::new("fal-ai/luma-dream-machine", "Luma", "text-to-video", "Video"),
        ])
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CatalogItem> {
        self.items
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<CatalogItem>> for Catalog {
    fn from(items: Vec<CatalogItem>) -> Self {
        Catalog::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let catalog = Catalog::new(vec![
            CatalogItem::new("a", "First", "text-to-image", ""),
            CatalogItem::new("b", "Other", "text-to-image", ""),
            CatalogItem::new("a", "Second", "text-to-video", ""),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("a").unwrap().title, "First");
        assert_eq!(catalog.items()[1].id, "b");
    }

    #[test]
    fn fallback_catalog_is_populated() {
        let catalog = Catalog::fallback();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.get("fal-ai/flux/dev").unwrap().title, "FLUX.1 [dev]");
        assert!(catalog.items().iter().all(|item| item.tags.is_empty()));
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let item: CatalogItem = serde_json::from_str(r#"{"id": "fal-ai/veo2"}"#).unwrap();
        assert_eq!(item.id, "fal-ai/veo2");
        assert!(item.title.is_empty());
        assert!(item.tags.is_empty());
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::new(vec![]);
        assert!(catalog.is_empty());
        assert!(catalog.get("anything").is_none());
    }
}
