//! Catalog model and ranked fuzzy search for generative-media models.
//!
//! This crate holds the pieces of the model browser that carry no I/O: the
//! catalog records, the rules that turn a remote model listing into a catalog,
//! and the ranking engine that orders the catalog against the query a user is
//! typing.
//!
//! # Architecture Overview
//!
//! - **Catalog**: immutable, id-unique collection of [`CatalogItem`]s plus the
//!   built-in fallback used when the remote listing cannot be fetched
//! - **Listing**: filtering and mapping of the raw model-listing JSON
//! - **Search**: per-field fuzzy scoring, field weighting and the
//!   sort/filter/truncate pipeline behind [`RankedSearch`]
//!
//! Everything here is synchronous and free of shared mutable state; callers
//! pass the catalog and query in and get a fresh result back.

pub mod catalog;
pub mod errors;
pub mod search;

pub use catalog::{Catalog, CatalogItem, ModelListing};
pub use errors::MediagenError;
pub use search::{
    fuzzy_score, score_item, FieldWeights, RankedSearch, ScoredMatch, SearchConfig, MAX_RESULTS,
};
