// src/catalog/mod.rs
// =============================================================================
// The app's content catalog (authors, topics, articles, videos, audio).
//
// Submodules:
// - types: The data model, with content as a tagged enum
// - api: The ContentApi trait and the in-memory MockCatalog behind it
//
// The crawler does not use this module; it is here so the catalog model
// the app depends on has one typed definition.
// =============================================================================

mod api;
mod types;

pub use api::{ContentApi, MockCatalog};
pub use types::{Author, Content, ContentInfo, ContentType, SearchParams, Topic};
