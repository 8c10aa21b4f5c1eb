use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use mediagen_core::CatalogItem;
use mediagen_core::ModelListing;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::CatalogSource;
use crate::domain::models::CatalogSourceName;

#[cfg(test)]
#[path = "fal_test.rs"]
mod tests;

/// Loads the catalog from the provider's public model listing.
pub struct FalCatalog {
    url: String,
    limit: u32,
    timeout_ms: u64,
}

impl FalCatalog {
    pub fn new(url: &str, limit: u32, timeout_ms: u64) -> FalCatalog {
        return FalCatalog {
            url: url.to_string(),
            limit,
            timeout_ms,
        };
    }

    pub fn from_config() -> Result<FalCatalog> {
        return Ok(FalCatalog::new(
            &Config::get(ConfigKey::CatalogUrl),
            Config::parse::<u32>(ConfigKey::CatalogLimit)?,
            Config::parse::<u64>(ConfigKey::CatalogTimeoutMs)?,
        ));
    }
}

#[async_trait]
impl CatalogSource for FalCatalog {
    fn name(&self) -> CatalogSourceName {
        return CatalogSourceName::Fal;
    }

    async fn fetch(&self) -> Result<Vec<CatalogItem>> {
        if self.url.is_empty() {
            bail!("Model listing URL is not defined");
        }

        let res = reqwest::Client::new()
            .get(&self.url)
            .query(&[("limit", self.limit)])
            .timeout(Duration::from_millis(self.timeout_ms))
            .send()
            .await;

        let response = match res {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(error = ?err, url = self.url.as_str(), "model listing is not reachable");
                bail!("Model listing is not reachable: {err}");
            }
        };

        let status = response.status().as_u16();
        if status >= 400 {
            tracing::error!(status = status, "model listing request failed");
            bail!("Model listing request failed with HTTP {status}");
        }

        let body = response.text().await?;
        let catalog = ModelListing::from_json(&body)?.into_catalog();

        return Ok(catalog.into_items());
    }
}
