//! Core domain logic for the model browser.
//!
//! This module contains the picker state and data models that drive the
//! terminal session, independent of where the catalog comes from.

pub mod models;
pub mod services;
