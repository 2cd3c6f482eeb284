//! Asset discovery: scan a page's markup for static resource references.
//!
//! Only three element kinds are scanned, each with one fixed reference
//! attribute. No CSS parsing, no srcset, no transitive discovery.

use std::collections::HashSet;

use scraper::{Html, Selector};
use url::Url;

/// Element kinds scanned for asset references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Link,
    Script,
    Img,
}

impl AssetKind {
    fn from_element_name(name: &str) -> Option<Self> {
        match name {
            "link" => Some(AssetKind::Link),
            "script" => Some(AssetKind::Script),
            "img" => Some(AssetKind::Img),
            _ => None,
        }
    }

    /// The attribute carrying this kind's reference.
    pub fn ref_attr(self) -> &'static str {
        match self {
            AssetKind::Link => "href",
            AssetKind::Script | AssetKind::Img => "src",
        }
    }
}

/// Scans `html` for `link`/`script`/`img` references and returns the unique
/// absolute URLs in first-seen document order.
///
/// Each reference is resolved against `base` (the page's own URL). Elements
/// without their reference attribute, empty references and references that
/// fail to resolve are skipped. Duplicates collapse to a single entry, so a
/// URL referenced from several tags is fetched once.
pub fn discover_assets(html: &str, base: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("link, script, img").unwrap();

    let mut seen = HashSet::new();
    let mut assets = Vec::new();
    for element in document.select(&selector) {
        let Some(kind) = AssetKind::from_element_name(element.value().name()) else {
            continue;
        };
        let Some(reference) = element.value().attr(kind.ref_attr()) else {
            continue;
        };
        let reference = reference.trim();
        if reference.is_empty() {
            continue;
        }
        let url = match base.join(reference) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("skipping unresolvable reference {:?}: {}", reference, e);
                continue;
            }
        };
        if seen.insert(url.as_str().to_owned()) {
            assets.push(url);
        }
    }
    assets
}
