use mediagen_core::Catalog;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::models::CatalogSource;
use crate::domain::models::CatalogSourceBox;
use crate::domain::models::Event;

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;

pub struct CatalogService {}

impl CatalogService {
    /// Fetch the catalog from `source`, falling back to the built-in catalog
    /// when the source fails.
    pub async fn load(source: &dyn CatalogSource) -> Catalog {
        let source_name = source.name();
        match source.fetch().await {
            Ok(items) => {
                let catalog = Catalog::new(items);
                tracing::info!(source = %source_name, models = catalog.len(), "fetched catalog");
                return catalog;
            }
            Err(err) => {
                tracing::warn!(source = %source_name, error = %err, "catalog fetch failed, using defaults");
                return Catalog::fallback();
            }
        }
    }

    /// Load the catalog in the background and report it as an event.
    pub fn spawn_load(source: CatalogSourceBox, tx: mpsc::UnboundedSender<Event>) -> JoinHandle<()> {
        return tokio::spawn(async move {
            let catalog = CatalogService::load(source.as_ref()).await;
            if tx.send(Event::CatalogLoaded(catalog)).is_err() {
                tracing::debug!("event loop closed before catalog arrived");
            }
        });
    }
}
