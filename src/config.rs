use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::models::configuration::EdgeConfig;

static SEARCH_PATHS: &[&str] = &[
    "./config.yml",
    "./config.json",
    "~/.config/ec/config.yml",
    "~/.config/ec/config.json",
    "/etc/ec/config.yml",
];

const ENV_PREFIX: &str = "EC_";

async fn read_yaml_file(path: &Path) -> Result<EdgeConfig> {
    let file = tokio::fs::read(path).await.map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let content = String::from_utf8_lossy(&file);
    if content.trim().is_empty() {
        return Ok(EdgeConfig::default());
    }
    serde_yaml::from_str(&content).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        source: e,
    })
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

async fn find_config_file() -> Option<PathBuf> {
    for candidate in SEARCH_PATHS {
        let path = expand(candidate);
        if tokio::fs::metadata(&path).await.is_ok() {
            return Some(path);
        }
    }
    None
}

/// Overlays `EC_*` variables on top of file values.
pub fn apply_env_overrides<F>(mut config: EdgeConfig, lookup: F) -> EdgeConfig
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| {
        lookup(format!("{}{}", ENV_PREFIX, name).as_str()).filter(|v| !v.is_empty())
    };

    if let Some(v) = var("EDGE_BASE_URL") {
        config.edge_base_url = v;
    }
    if let Some(v) = var("EDGE_USERNAME") {
        config.edge_username = v;
    }
    if let Some(v) = var("EDGE_PASSWORD") {
        config.edge_password = v;
    }
    if let Some(v) = var("EDGE_PROXY_URL") {
        config.edge_proxy.url = v;
    }
    if let Some(v) = var("EDGE_PROXY_USERNAME") {
        config.edge_proxy.username = v;
    }
    if let Some(v) = var("EDGE_PROXY_PASSWORD") {
        config.edge_proxy.password = v;
    }
    config
}

/// Loads the explicit config file, or the first one found on the search
/// path, then applies environment overrides.
pub async fn load(explicit: Option<&str>) -> Result<EdgeConfig> {
    let file_config = match explicit {
        Some(path) => read_yaml_file(&expand(path)).await?,
        None => match find_config_file().await {
            Some(path) => {
                debug!("Using config file {}", path.display());
                read_yaml_file(&path).await?
            }
            None => {
                warn!("No config file found, using defaults and environment");
                EdgeConfig::default()
            }
        },
    };

    Ok(apply_env_overrides(file_config, |name| std::env::var(name).ok()))
}
