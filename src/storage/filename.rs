// src/storage/filename.rs
// =============================================================================
// Turns a URL into the name of the file its page is saved under.
//
// Rules, applied in order:
// 1. Take the URL path and drop one leading and one trailing '/'
// 2. Replace the remaining '/' with '_'
// 3. An empty path (the homepage) becomes "index"
// 4. Keep a ".html"/".htm" extension, otherwise add ".html"
// 5. If the URL has a query string, add "_<8 hex digits>" before the
//    extension so "/search?q=a" and "/search?q=b" land in different files
// 6. Replace characters that are not allowed in file names with '_'
//
// The same URL always gives the same name, in this run and the next one,
// which is what lets the metadata index overwrite instead of growing.
// =============================================================================

use sha2::{Digest, Sha256};
use url::Url;

const DEFAULT_EXTENSION: &str = ".html";
const PAGE_EXTENSIONS: [&str; 2] = [".html", ".htm"];
const QUERY_DIGEST_BYTES: usize = 4;

pub fn derive_filename(url: &Url) -> String {
    let path = url.path();
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);

    let mut name = path.replace('/', "_");
    if name.is_empty() {
        name.push_str("index");
    }

    let (stem, extension) = match PAGE_EXTENSIONS.iter().find(|ext| name.ends_with(*ext)) {
        Some(ext) => (name[..name.len() - ext.len()].to_string(), *ext),
        None => (name, DEFAULT_EXTENSION),
    };

    let stem = match url.query() {
        Some(query) if !query.is_empty() => format!("{}_{}", stem, query_digest(query)),
        _ => stem,
    };

    sanitize(&format!("{}{}", stem, extension))
}

// First bytes of SHA-256 over the raw query, hex encoded
fn query_digest(query: &str) -> String {
    let digest = Sha256::digest(query.as_bytes());
    hex::encode(&digest[..QUERY_DIGEST_BYTES])
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '|' | '?' | '*' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
