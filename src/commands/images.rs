use std::path::Path;

use bytes::Bytes;
use reqwest::Method;

use crate::error::{Error, Result};
use crate::providers::api_client::ApiClient;
use crate::providers::image_resolver::{IMAGES_ENDPOINT, image_path};

async fn get<C: ApiClient>(client: &C, path: &str) -> Result<Bytes> {
    let url = client.endpoint(path)?;
    client.call(Method::GET, &url, None).await
}

pub async fn list<C: ApiClient>(client: &C) -> Result<Bytes> {
    get(client, IMAGES_ENDPOINT).await
}

pub async fn show<C: ApiClient>(client: &C, image_id: &str) -> Result<Bytes> {
    get(client, &image_path(image_id)).await
}

pub async fn repo<C: ApiClient>(client: &C, image_id: &str) -> Result<Bytes> {
    get(client, &format!("{}/repo", image_path(image_id))).await
}

pub async fn status<C: ApiClient>(client: &C, image_id: &str) -> Result<Bytes> {
    get(client, &format!("{}/status", image_path(image_id))).await
}

/// Submits a new image build described by the JSON file at `definition`.
pub async fn create<C: ApiClient>(client: &C, definition: &Path) -> Result<Bytes> {
    let body = tokio::fs::read(definition)
        .await
        .map_err(|e| Error::io(definition, e))?;
    let url = client.endpoint(IMAGES_ENDPOINT)?;
    client.call(Method::POST, &url, Some(Bytes::from(body))).await
}
