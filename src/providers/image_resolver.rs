use log::debug;
use reqwest::{Method, Url};

use crate::error::{Error, Result};
use crate::models::image::ImageMetadata;
use crate::providers::api_client::ApiClient;

pub const IMAGES_ENDPOINT: &str = "api/edge/v1/images";

pub fn image_path(image_id: &str) -> String {
    format!("{}/{}", IMAGES_ENDPOINT, image_id)
}

/// Looks up an image and returns the URL of its installer ISO.
pub async fn resolve_installer_url<C: ApiClient>(client: &C, image_id: &str) -> Result<Url> {
    let url = client.endpoint(&image_path(image_id))?;
    let body = client.call(Method::GET, &url, None).await?;
    let metadata: ImageMetadata = serde_json::from_slice(&body)?;

    let iso_url = metadata.installer.image_build_iso_url.trim();
    if iso_url.is_empty() {
        return Err(Error::MissingInstallerUrl {
            image_id: image_id.to_string(),
        });
    }
    debug!("Image {} installer: {}", image_id, iso_url);
    Url::parse(iso_url).map_err(|e| Error::invalid_url(iso_url, e))
}
