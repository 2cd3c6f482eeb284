//! Single HTTP GET fetch returning the full response body.
//!
//! One call, one transfer: no ranges, no resume. Redirects are followed
//! transparently up to a bounded count; only a final 200 yields a body.

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::config::MirrorConfig;

/// User agent sent when the configuration does not name one.
pub const DEFAULT_USER_AGENT: &str = concat!("webmirror/", env!("CARGO_PKG_VERSION"));

/// Per-transfer tunables, normally derived from [`MirrorConfig`].
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
    /// Hard wall-clock timeout for the whole transfer.
    pub timeout: Duration,
    /// Overrides [`DEFAULT_USER_AGENT`] when set.
    pub user_agent: Option<String>,
}

impl FetchOptions {
    pub fn from_config(config: &MirrorConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(config.connect_timeout_secs),
            timeout: Duration::from_secs(config.request_timeout_secs),
            user_agent: config.user_agent.clone(),
        }
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from_config(&MirrorConfig::default())
    }
}

/// A completed fetch: final status 200 and the raw body bytes.
#[derive(Debug)]
pub struct FetchedResource {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Why a fetch produced no usable body. `Http` and `Network` are logged at
/// different levels by callers, so they stay distinct variants.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The transfer itself failed (DNS, connect, timeout, TLS, ...).
    #[error("{0}")]
    Network(#[from] curl::Error),
    /// The server completed the response with a non-200 status.
    #[error("HTTP {status}")]
    Http { status: u32 },
    /// Refused before any transfer: libcurl also speaks file:// and ftp://.
    /// Only the initial URL is vetted here; redirect targets fall to
    /// libcurl's default redirect-protocol set, which excludes file:// but
    /// still admits ftp://.
    #[error("unsupported URL scheme {scheme:?}")]
    UnsupportedScheme { scheme: String },
}

/// Fetches `url` with a single GET and returns the body on HTTP 200.
///
/// Compressed bodies are decoded by libcurl before they reach the caller, so
/// the returned bytes are what the markup references, not the wire encoding.
pub fn fetch_url(url: &Url, options: &FetchOptions) -> Result<FetchedResource, FetchError> {
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(FetchError::UnsupportedScheme {
                scheme: other.to_string(),
            })
        }
    }

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str())?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(options.connect_timeout)?;
    easy.timeout(options.timeout)?;
    easy.useragent(options.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))?;
    easy.accept_encoding("")?; // all built-in encodings, decoded transparently

    let mut body = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    if status != 200 {
        return Err(FetchError::Http { status });
    }
    Ok(FetchedResource { status, body })
}
