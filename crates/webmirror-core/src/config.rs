use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/webmirror/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// Directory the mirrored tree is written under, relative to the working
    /// directory unless absolute.
    pub output_dir: String,
    /// TCP connect timeout per request, in seconds.
    pub connect_timeout_secs: u64,
    /// Total per-request timeout, in seconds.
    pub request_timeout_secs: u64,
    /// Maximum number of asset fetches in flight at once (1 = sequential,
    /// document order).
    pub max_concurrent_fetches: usize,
    /// Optional User-Agent override; if missing, a built-in default is sent.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            output_dir: "cloned_website".to_string(),
            connect_timeout_secs: 15,
            request_timeout_secs: 300,
            max_concurrent_fetches: 4,
            user_agent: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("webmirror")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MirrorConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MirrorConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MirrorConfig = toml::from_str(&data)?;
    Ok(cfg)
}
