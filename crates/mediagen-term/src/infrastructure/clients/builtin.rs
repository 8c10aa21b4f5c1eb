use anyhow::Result;
use async_trait::async_trait;
use mediagen_core::Catalog;
use mediagen_core::CatalogItem;

use crate::domain::models::CatalogSource;
use crate::domain::models::CatalogSourceName;

/// Serves the built-in fallback catalog without touching the network.
#[derive(Default)]
pub struct BuiltinCatalog {}

#[async_trait]
impl CatalogSource for BuiltinCatalog {
    fn name(&self) -> CatalogSourceName {
        return CatalogSourceName::Builtin;
    }

    async fn fetch(&self) -> Result<Vec<CatalogItem>> {
        return Ok(Catalog::fallback().items().to_vec());
    }
}
