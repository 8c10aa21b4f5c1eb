use anyhow::Result;
use async_trait::async_trait;
use mediagen_core::CatalogItem;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, EnumVariantNames};

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Display,
    EnumString,
    EnumVariantNames,
    Serialize,
    Deserialize,
    EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum CatalogSourceName {
    #[default]
    Fal,
    Builtin,
}

impl CatalogSourceName {
    pub fn parse(s: &str) -> Option<CatalogSourceName> {
        CatalogSourceName::iter().find(|e| e.to_string() == s)
    }
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    fn name(&self) -> CatalogSourceName;
    async fn fetch(&self) -> Result<Vec<CatalogItem>>;
}

pub type CatalogSourceBox = Box<dyn CatalogSource>;
