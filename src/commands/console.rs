use log::info;
use reqwest::Url;

use crate::error::{Error, Result};
use crate::models::configuration::EdgeConfig;
use crate::providers::edge_client::join_url;

const CONSOLE_PATH: &str = "edge/manage-images";

/// Image management page of the web console for the configured Edge host.
pub fn console_url(config: &EdgeConfig) -> Result<Url> {
    join_url(&config.edge_base_url, CONSOLE_PATH)
}

pub fn open(url: &str) -> Result<()> {
    info!("Opening {}", url);
    webbrowser::open(url).map_err(|e| Error::Browser {
        url: url.to_string(),
        source: e,
    })
}
