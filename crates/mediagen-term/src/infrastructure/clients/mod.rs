pub mod builtin;
pub mod fal;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::CatalogSourceBox;
use crate::domain::models::CatalogSourceName;

pub struct CatalogSourceManager {}

impl CatalogSourceManager {
    pub fn get(name: &str) -> Result<CatalogSourceBox> {
        match CatalogSourceName::parse(name) {
            Some(CatalogSourceName::Fal) => return Ok(Box::new(fal::FalCatalog::from_config()?)),
            Some(CatalogSourceName::Builtin) => {
                return Ok(Box::<builtin::BuiltinCatalog>::default())
            }
            None => bail!(format!("No catalog source implemented for {name}")),
        }
    }
}
