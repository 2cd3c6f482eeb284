//! Mirror orchestration: fetch one page, save it, then fetch its assets.
//!
//! The page fetch is the only fatal step. Every per-asset failure (network,
//! non-200, write error) is logged, counted and skipped so one broken
//! resource never aborts the run.

mod pool;

use std::path::Path;

use thiserror::Error;
use url::Url;

use crate::assets;
use crate::config::MirrorConfig;
use crate::fetch::{self, FetchError, FetchOptions};
use crate::storage;
use crate::url_map;

/// Fatal mirroring failures. Anything not listed here is logged and skipped.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// The target string did not parse as an absolute URL.
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The root page itself could not be fetched; nothing to mirror.
    #[error("failed to retrieve {url}: {source}")]
    PageFetch {
        url: Url,
        #[source]
        source: FetchError,
    },
    /// The output root could not be created.
    #[error("failed to prepare output root: {0:#}")]
    OutputRoot(anyhow::Error),
}

/// End-of-run accounting returned by [`mirror_site`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorReport {
    /// Whether the page bytes made it to disk (a page write failure is
    /// logged and the run continues with the in-memory body).
    pub page_saved: bool,
    /// Unique asset URLs discovered in the page.
    pub assets_discovered: usize,
    /// Assets fetched and written.
    pub assets_saved: usize,
    /// Assets that failed to fetch or write.
    pub assets_failed: usize,
}

/// Mirrors `target` into `config.output_dir`.
///
/// Fetches the page, saves its raw bytes under the URL's mapped path, scans
/// the markup for `link`/`script`/`img` references, then fetches each unique
/// asset once (concurrently when `max_concurrent_fetches > 1`) and saves it
/// under its own mapped path. Returns the run's accounting; the only `Err`
/// cases are the fatal ones listed on [`MirrorError`].
pub fn mirror_site(config: &MirrorConfig, target: &str) -> Result<MirrorReport, MirrorError> {
    let page_url = Url::parse(target).map_err(|source| MirrorError::InvalidUrl {
        url: target.to_string(),
        source,
    })?;
    let output_root = Path::new(&config.output_dir);
    let options = FetchOptions::from_config(config);

    storage::prepare_output_root(output_root).map_err(MirrorError::OutputRoot)?;

    let page = match fetch::fetch_url(&page_url, &options) {
        Ok(resource) => resource,
        Err(source) => {
            tracing::error!("failed to retrieve {}: {}", page_url, source);
            return Err(MirrorError::PageFetch {
                url: page_url,
                source,
            });
        }
    };

    let page_saved = save_body(&page_url, &page.body, output_root);

    let html = String::from_utf8_lossy(&page.body);
    let asset_urls = assets::discover_assets(&html, &page_url);
    let assets_discovered = asset_urls.len();
    tracing::info!("discovered {} unique assets", assets_discovered);

    let (assets_saved, assets_failed) = pool::fetch_all(
        asset_urls,
        &options,
        output_root,
        config.max_concurrent_fetches,
    );

    tracing::info!("website cloned to: {}", output_root.display());
    Ok(MirrorReport {
        page_saved,
        assets_discovered,
        assets_saved,
        assets_failed,
    })
}

/// Fetches one asset and saves it under its mapped path. Returns whether the
/// file was written; every failure is logged here and not propagated.
fn save_resource(url: &Url, options: &FetchOptions, output_root: &Path) -> bool {
    match fetch::fetch_url(url, options) {
        Ok(resource) => save_body(url, &resource.body, output_root),
        Err(FetchError::Http { status }) => {
            tracing::warn!("failed to download {} (HTTP {})", url, status);
            false
        }
        Err(e) => {
            tracing::error!("error downloading {}: {}", url, e);
            false
        }
    }
}

/// Writes fetched bytes under the URL's mapped path, logging the outcome.
fn save_body(url: &Url, body: &[u8], output_root: &Path) -> bool {
    let relative = url_map::local_path_for_url(url);
    match storage::save_bytes(output_root, &relative, body) {
        Ok(path) => {
            tracing::info!("saved file: {}", path.display());
            true
        }
        Err(e) => {
            tracing::error!("failed to save {}: {:#}", url, e);
            false
        }
    }
}
