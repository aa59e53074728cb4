// src/links/html.rs
// =============================================================================
// This module finds the links a crawl should follow.
//
// We use the `scraper` crate to parse HTML and select <a href="..."> tags,
// and the `url` crate to:
// - Resolve relative links against the page they were found on
// - Drop the #fragment part (it never changes what the server returns)
// - Compare hosts so we stay on the seed's website
//
// Rust concepts:
// - Option<T> / bool: Malformed URLs are "no answer", not errors
// - Vec + HashSet: Deduplicates while keeping the order links appear in
// =============================================================================

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

// Returns true if `candidate` points at the same host as `root`
//
// The candidate may be relative; it is resolved against `root` first.
// Anything that fails to parse, or is not http/https, is out of scope.
//
// Examples (root = https://example.org):
//   "/about"                      -> true
//   "https://example.org/x?y=1"   -> true
//   "https://other.org/"          -> false
//   "mailto:someone@example.org"  -> false
//   "http://[::1"                 -> false (malformed)
pub fn is_in_scope(candidate: &str, root: &Url) -> bool {
    match root.join(candidate) {
        Ok(resolved) => same_host(&resolved, root),
        Err(_) => false,
    }
}

// Host check on an already-resolved URL
fn same_host(url: &Url, root: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
        && url.host_str().is_some()
        && url.host_str() == root.host_str()
}

// Extracts every in-scope link from a page
//
// Parameters:
//   body: the HTML content of the page
//   page_url: where the page came from (relative links resolve against it)
//   root: the seed URL, which decides what "same website" means
//
// Returns: absolute, fragment-free, deduplicated URLs on the root's host,
// in the order they first appear in the document
pub fn extract_links(body: &str, page_url: &Url, root: &Url) -> Vec<Url> {
    let mut links = Vec::new();
    let mut seen = HashSet::new();

    let document = Html::parse_document(body);

    // The selector is a constant; if it ever failed to parse there would
    // simply be nothing to follow
    let Ok(selector) = Selector::parse("a[href]") else {
        return links;
    };

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if let Some(link) = resolve_link(page_url, href) {
            if is_in_scope(link.as_str(), root) && seen.insert(link.as_str().to_string()) {
                links.push(link);
            }
        }
    }

    links
}

// Resolves an href against the page URL and strips its fragment
//
// An anchor like "#top" resolves to the page itself. mailto:, tel: and
// javascript: links resolve fine but have no host, so the scope check
// drops them. Returns None for empty hrefs and anything the url crate
// refuses to parse.
pub fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    let mut url = base.join(href).ok()?;
    url.set_fragment(None);
    Some(url)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does is_in_scope take &str but extract_links return Url?
//    - is_in_scope answers a yes/no question about untrusted text
//    - extract_links hands results to the frontier, which wants parsed URLs
//      so nobody has to parse them twice
//
// 2. What does base.join(href) do?
//    - Exactly what a browser does when you click a link
//    - "https://example.org/a/b" + "/a/b/c" = "https://example.org/a/b/c"
//    - "https://example.org/a/b" + "c"      = "https://example.org/a/c"
//    - An absolute href ignores the base entirely
//
// 3. What is let-else?
//    - let Some(x) = value else { ... };
//    - Binds x if the pattern matches, otherwise runs the else block,
//      which must leave the scope (return, continue, break)
//
// 4. Why a Vec plus a HashSet?
//    - The HashSet answers "have we seen this link already?" in O(1)
//    - The Vec keeps document order, so links near the top of a page are
//      queued (and crawled) first
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_in_scope_relative_and_absolute() {
        let root = url("https://example.org");
        assert!(is_in_scope("/about", &root));
        assert!(is_in_scope("https://example.org/x?y=1", &root));
        assert!(is_in_scope("http://example.org/plain", &root));
    }

    #[test]
    fn test_out_of_scope_other_host() {
        let root = url("https://example.org");
        assert!(!is_in_scope("https://other.org/", &root));
        assert!(!is_in_scope("https://www.example.org/", &root));
        assert!(!is_in_scope("mailto:someone@example.org", &root));
    }

    #[test]
    fn test_malformed_is_out_of_scope() {
        let root = url("https://example.org");
        assert!(!is_in_scope("http://[::1", &root));
        assert!(!is_in_scope("https://exa mple.org/", &root));
    }

    #[test]
    fn test_extract_resolves_nested_relative_link() {
        let page = url("https://example.org/a/b");
        let root = url("https://example.org");
        let links = extract_links(r#"<a href="/a/b/c">C</a>"#, &page, &root);
        let expected: Vec<Url> = vec![url("https://example.org/a/b/c")];
        assert_eq!(links, expected);
    }

    #[test]
    fn test_extract_strips_fragments_and_dedupes() {
        let page = url("https://example.org/");
        let root = url("https://example.org");
        let html = r##"
            <a href="/docs#intro">Intro</a>
            <a href="/docs#usage">Usage</a>
            <a href="https://example.org/docs">Docs</a>
            <a href="#top">Top</a>
        "##;
        let links = extract_links(html, &page, &root);
        let expected: Vec<Url> = vec![url("https://example.org/docs"), url("https://example.org/")];
        assert_eq!(links, expected);
        for link in &links {
            assert!(link.fragment().is_none());
        }
    }

    #[test]
    fn test_extract_keeps_document_order() {
        let page = url("https://example.org/p");
        let root = url("https://example.org");
        let html = r##"
            <a href="/zeta">Z</a>
            <a href="/alpha">A</a>
            <a href="/zeta">Z again</a>
        "##;
        let links = extract_links(html, &page, &root);
        let expected: Vec<Url> = vec![url("https://example.org/zeta"), url("https://example.org/alpha")];
        assert_eq!(links, expected);
    }

    #[test]
    fn test_same_page_anchor_counts_as_a_link() {
        let page = url("https://example.org/p");
        let root = url("https://example.org");
        let html = r##"<a href="/zeta">Z</a><a href="/alpha">A</a><a href="#top">Top</a>"##;
        let links = extract_links(html, &page, &root);
        assert_eq!(links.len(), 3);
        assert_eq!(links[2], url("https://example.org/p"));
    }

    #[test]
    fn test_resolve_anchor_gives_page_without_fragment() {
        let base = url("https://example.org/page#old");
        assert_eq!(resolve_link(&base, "#top").unwrap().as_str(), "https://example.org/page");
        assert!(resolve_link(&base, "   ").is_none());
    }

    #[test]
    fn test_extract_drops_out_of_scope_and_special_schemes() {
        let page = url("https://example.org/");
        let root = url("https://example.org");
        let html = r#"
            <a href="https://rust-lang.org">Rust</a>
            <a href="mailto:test@example.org">Email</a>
            <a href="tel:+15555555">Call</a>
            <a href="javascript:void(0)">Nothing</a>
            <a href="/kept">Kept</a>
            <a>No href</a>
        "#;
        let links = extract_links(html, &page, &root);
        let expected: Vec<Url> = vec![url("https://example.org/kept")];
        assert_eq!(links, expected);
    }

    #[test]
    fn test_resolve_link_keeps_query() {
        let base = url("https://example.org/page");
        let link = resolve_link(&base, "search?q=torah#results").unwrap();
        assert_eq!(link.as_str(), "https://example.org/search?q=torah");
    }
}
