use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};
use url::{Position, Url};

use crate::http::Fetch;

static DOC_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ochmo-m?tb-\d+.*\.pdf\?").unwrap());

static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// Fetch the listing page and return absolute URLs of brief PDFs, in page order.
///
/// A failed listing fetch is logged and yields an empty list.
pub async fn discover_document_urls<F: Fetch>(fetcher: &F, listing_url: &str) -> Vec<String> {
    info!("Fetching listing page: {}", listing_url);
    let html = match fetcher.fetch(listing_url).await {
        Ok(html) => html,
        Err(e) => {
            warn!("Failed to fetch the listing page: {}", e);
            return Vec::new();
        }
    };

    let links = extract_hyperlinks(&html, listing_url);
    let total = links.len();
    let urls = document_links(links);
    info!("Document links: {} of {} hyperlinks", urls.len(), total);
    urls
}

/// Every `<a href>` on the page as `(href, absolute url)`.
///
/// Hrefs that cannot be resolved against `base_url` are skipped.
pub fn extract_hyperlinks(html: &[u8], base_url: &str) -> Vec<(String, String)> {
    let doc = Html::parse_document(&String::from_utf8_lossy(html));
    let base = Url::parse(base_url).ok();

    let mut links = Vec::new();
    for el in doc.select(&LINK_SELECTOR) {
        let Some(href) = el.value().attr("href") else {
            continue;
        };
        match resolve_href(base.as_ref(), href) {
            Ok(abs) => links.push((href.to_string(), abs)),
            Err(e) => debug!("Skipping href {:?}: {}", href, e),
        }
    }
    links
}

/// Resolve `href` against `base` keeping the href's own characters.
///
/// Spaces and non-ASCII text are not percent-encoded. `Url::join` is only a
/// validity check.
pub fn resolve_href(base: Option<&Url>, href: &str) -> Result<String, url::ParseError> {
    if Url::parse(href).is_ok() {
        return Ok(href.to_string());
    }
    let Some(base) = base else {
        return Err(url::ParseError::RelativeUrlWithoutBase);
    };
    base.join(href)?;

    let resolved = if href.is_empty() {
        base.as_str().to_string()
    } else if href.starts_with("//") {
        format!("{}:{}", base.scheme(), href)
    } else if href.starts_with('/') {
        let (path, rest) = split_path(href);
        format!("{}{}{}", &base[..Position::BeforePath], remove_dot_segments(path), rest)
    } else if href.starts_with('?') {
        format!("{}{}", &base[..Position::AfterPath], href)
    } else if href.starts_with('#') {
        format!("{}{}", &base[..Position::AfterQuery], href)
    } else {
        let dir = match base.path().rfind('/') {
            Some(i) => &base.path()[..=i],
            None => "/",
        };
        let (path, rest) = split_path(href);
        let merged = format!("{}{}", dir, path);
        format!("{}{}{}", &base[..Position::BeforePath], remove_dot_segments(&merged), rest)
    };
    Ok(resolved)
}

/// Split at the first `?` or `#`.
fn split_path(href: &str) -> (&str, &str) {
    match href.find(['?', '#']) {
        Some(i) => href.split_at(i),
        None => (href, ""),
    }
}

/// Collapse `.` and `..` segments of an absolute path.
fn remove_dot_segments(path: &str) -> String {
    let segs: Vec<&str> = path.split('/').collect();
    let last = segs.len() - 1;
    let mut out: Vec<&str> = Vec::with_capacity(segs.len());
    for (i, seg) in segs.iter().enumerate() {
        match *seg {
            "." => {}
            ".." => {
                // keep the leading empty segment (root)
                if out.len() > 1 {
                    out.pop();
                }
            }
            s => {
                out.push(s);
                continue;
            }
        }
        if i == last {
            out.push("");
        }
    }
    out.join("/")
}

/// Keep links whose raw href looks like a brief PDF with a query string.
fn document_links(links: Vec<(String, String)>) -> Vec<String> {
    links
        .into_iter()
        .filter(|(href, _)| DOC_LINK_RE.is_match(href))
        .map(|(_, abs)| abs)
        .collect()
}
