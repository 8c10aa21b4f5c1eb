//! Decoding of the remote model listing
//!
//! The listing endpoint returns every model the provider hosts. Only live,
//! text-prompted image and video inference models make sense for a prompt
//! box, so everything else is filtered out before it reaches the catalog.

use serde::Deserialize;

use super::{Catalog, CatalogItem};
use crate::errors::Result;

pub const SUPPORTED_CATEGORIES: &[&str] = &["text-to-image", "text-to-video"];

/// Id fragments of models that need an input image despite a text-to-* category.
pub const IMAGE_INPUT_ID_PATTERNS: &[&str] = &[
    "/edit",
    "/lora",
    "/img2img",
    "/inpaint",
    "/outpaint",
    "/upscale",
    "/controlnet",
    "/ip-adapter",
    "/redux",
    "/canny",
    "/depth",
];

const INFERENCE_KIND: &str = "inference";
const DEFAULT_CATEGORY: &str = "other";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelListing {
    #[serde(default)]
    pub items: Option<Vec<ListedModel>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedModel {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub deprecated: bool,
    #[serde(default)]
    pub removed: bool,
    #[serde(default)]
    pub unlisted: bool,
}

impl ModelListing {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Keep the supported models, in listing order, as a catalog.
    pub fn into_catalog(self) -> Catalog {
        let listed = self.items.unwrap_or_default();
        let total = listed.len();

        let items: Vec<CatalogItem> = listed
            .into_iter()
            .filter(ListedModel::is_supported)
            .map(CatalogItem::from)
            .collect();

        tracing::debug!(total, kept = items.len(), "filtered model listing");
        Catalog::new(items)
    }
}

impl ListedModel {
    pub fn is_supported(&self) -> bool {
        if self.deprecated || self.removed || self.unlisted {
            return false;
        }
        if self.kind.as_deref() != Some(INFERENCE_KIND) {
            return false;
        }
        match self.category.as_deref() {
            Some(category) if SUPPORTED_CATEGORIES.contains(&category) => {}
            _ => return false,
        }

        let id = self.id.to_lowercase();
        !IMAGE_INPUT_ID_PATTERNS
            .iter()
            .any(|pattern| id.contains(pattern))
    }
}

impl From<ListedModel> for CatalogItem {
    fn from(model: ListedModel) -> Self {
        let title = match model.title {
            Some(title) if !title.is_empty() => title,
            _ => model.id.rsplit('/').next().unwrap_or_default().to_string(),
        };

        CatalogItem {
            title,
            category: model
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            description: model.short_description.unwrap_or_default(),
            tags: model.tags.unwrap_or_default(),
            id: model.id,
        }
    }
}
