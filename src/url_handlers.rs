//! Deep-link resolution.
//!
//! Inputs that parse as URLs are resolved to an element before plain text
//! search is attempted:
//!
//! - `atomicguru://detail/<atomic-number>` routes straight to a detail page;
//! - `https://atomicguru.netlify.app/open?<Symbol>` is the share-link form,
//!   resolved by case-insensitive symbol lookup.
//!
//! Anything unresolvable falls back to the caller's default handling.

use crate::catalog::Catalog;
use crate::element::Element;

pub const SHARE_HOST: &str = "atomicguru.netlify.app";

/// Resolve a deep link to an atomic number. Returns `None` when the input is
/// not a URL or does not name a catalog element.
pub fn resolve_deep_link(catalog: &Catalog, input: &str) -> Option<u32> {
    let url = reqwest::Url::parse(input).ok()?;
    match url.scheme() {
        "atomicguru" => handle_detail_url(catalog, &url),
        "http" | "https" => handle_share_url(catalog, &url),
        scheme => {
            log::warn!("unsupported URL scheme {scheme} in {url}");
            None
        }
    }
}

fn handle_detail_url(catalog: &Catalog, url: &reqwest::Url) -> Option<u32> {
    if url.host_str() != Some("detail") {
        log::warn!("unsupported deep link {url}");
        return None;
    }
    let number = match url.path().trim_start_matches('/').parse::<u32>() {
        Ok(ok) => ok,
        Err(err) => {
            log::warn!("failed to parse atomic number in {url}: {err}");
            return None;
        }
    };
    let element = catalog.by_number(number)?;
    Some(element.atomic_number)
}

fn handle_share_url(catalog: &Catalog, url: &reqwest::Url) -> Option<u32> {
    if url.host_str() != Some(SHARE_HOST) || url.path() != "/open" {
        return None;
    }
    // The symbol rides as the first (usually only) query parameter name
    let symbol = url.query()?.split('&').next()?.split('=').next()?;
    match catalog.by_symbol(symbol) {
        Some(element) => Some(element.atomic_number),
        None => {
            log::warn!("no element with symbol {symbol:?} for {url}");
            None
        }
    }
}

/// The shareable link for an element, the inverse of [`resolve_deep_link`]
pub fn share_url(element: &Element) -> String {
    format!("https://{}/open?{}", SHARE_HOST, element.symbol)
}

#[cfg(test)]
mod tests {
    use super::{resolve_deep_link, share_url};
    use crate::catalog::test_catalog;

    #[test]
    fn detail_links_resolve_by_number() {
        let catalog = test_catalog();
        assert_eq!(resolve_deep_link(&catalog, "atomicguru://detail/8"), Some(8));
        assert_eq!(resolve_deep_link(&catalog, "atomicguru://detail/999"), None);
        assert_eq!(resolve_deep_link(&catalog, "atomicguru://detail/abc"), None);
        assert_eq!(resolve_deep_link(&catalog, "atomicguru://other/8"), None);
    }

    #[test]
    fn share_links_resolve_by_symbol() {
        let catalog = test_catalog();
        assert_eq!(
            resolve_deep_link(&catalog, "https://atomicguru.netlify.app/open?O"),
            Some(8)
        );
        // Case-insensitive, and tolerant of an `=` suffix
        assert_eq!(
            resolve_deep_link(&catalog, "https://atomicguru.netlify.app/open?na="),
            Some(11)
        );
        assert_eq!(
            resolve_deep_link(&catalog, "https://atomicguru.netlify.app/open?Zz"),
            None
        );
        assert_eq!(
            resolve_deep_link(&catalog, "https://example.com/open?O"),
            None
        );
    }

    #[test]
    fn plain_text_is_not_a_link() {
        let catalog = test_catalog();
        assert_eq!(resolve_deep_link(&catalog, "oxygen"), None);
        assert_eq!(resolve_deep_link(&catalog, ""), None);
    }

    #[test]
    fn share_url_round_trips() {
        let catalog = test_catalog();
        let oxygen = catalog.by_number(8).expect("fixture has oxygen");
        let url = share_url(oxygen);
        assert_eq!(url, "https://atomicguru.netlify.app/open?O");
        assert_eq!(resolve_deep_link(&catalog, &url), Some(8));
    }
}
