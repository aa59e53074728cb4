// src/storage/mod.rs
// =============================================================================
// Everything the crawler writes to disk.
//
// Submodules:
// - filename: URL -> file name (pure, deterministic)
// - pages: The output directory and the saved page bodies
// - metadata: The `_url_mapping.json` index describing every saved page
// =============================================================================

mod filename;
mod metadata;
mod pages;

pub use filename::derive_filename;
pub use metadata::{MetadataIndex, PageMetadata};
pub use pages::PageStore;
