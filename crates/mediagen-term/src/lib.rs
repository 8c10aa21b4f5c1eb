//! Terminal model browser for generative-media catalogs.
//!
//! This crate wires the ranking engine from `mediagen-core` to a terminal:
//! it loads the model catalog from a remote listing (or the built-in
//! fallback), keeps the picker state as the user types, and renders the
//! ranked options line by line.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::browse::start_loop;
pub use configuration::{Config, ConfigKey};
pub use domain::models::{CatalogSource, CatalogSourceName, Event, SelectOption};
pub use domain::services::{CatalogService, EventsService, ModelPicker};
pub use infrastructure::clients::CatalogSourceManager;
