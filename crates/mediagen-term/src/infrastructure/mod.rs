//! Infrastructure layer providing external integrations.
//!
//! This module contains the catalog sources that talk to the outside world.

pub mod clients;
