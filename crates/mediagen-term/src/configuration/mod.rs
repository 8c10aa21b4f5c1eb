//! Configuration management for the model browser.
//!
//! This module provides centralized configuration handling for the catalog
//! source, search tuning, display and logging.

mod config;

pub use config::*;
