// src/links/mod.rs
// =============================================================================
// Link discovery for the crawler.
//
// Submodules:
// - html: Pulls <a href> targets out of a page and decides which ones stay
//         on the website we are crawling
// =============================================================================

mod html;

pub use html::{extract_links, is_in_scope};
