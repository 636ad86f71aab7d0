use bytes::Bytes;
use log::{debug, warn};
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::{Client, Method, Proxy, Response, Url};

use crate::error::{Error, Result};
use crate::models::configuration::EdgeConfig;
use crate::providers::api_client::ApiClient;

/// Edge API client authenticating every call with HTTP Basic credentials.
pub struct EdgeClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

fn build_client(config: &EdgeConfig) -> Result<Client> {
    let proxy = &config.edge_proxy;
    if !proxy.is_set() {
        return Ok(Client::builder().build()?);
    }

    debug!("Routing requests through proxy {}", proxy.url);
    let mut p = Proxy::all(&proxy.url).map_err(|e| Error::invalid_url(&proxy.url, e))?;
    if !proxy.username.is_empty() {
        p = p.basic_auth(&proxy.username, &proxy.password);
    }
    Ok(Client::builder().proxy(p).build()?)
}

pub(crate) fn join_url(base: &str, path: &str) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|e| Error::invalid_url(base, e))?;
    let joined = format!(
        "{}/{}",
        url.path().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    url.set_path(&joined);
    Ok(url)
}

async fn ensure_success(url: &Url, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if let Ok(body) = response.text().await {
        debug!("{} {} body: {}", url, status, body);
    }
    Err(Error::Status {
        url: url.to_string(),
        status,
    })
}

impl ApiClient for EdgeClient {
    fn new(config: &EdgeConfig) -> Result<Self> {
        // Fail early on a bad base URL instead of on the first request.
        join_url(&config.edge_base_url, "")?;
        Ok(EdgeClient {
            client: build_client(config)?,
            base_url: config.edge_base_url.clone(),
            username: config.edge_username.clone(),
            password: config.edge_password.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        join_url(&self.base_url, path)
    }

    async fn call(&self, method: Method, url: &Url, body: Option<Bytes>) -> Result<Bytes> {
        debug!("{} {}", method, url);
        let is_post = method == Method::POST;
        let mut request = self.client.request(method, url.clone());
        if !self.username.is_empty() || !self.password.is_empty() {
            request = request.basic_auth(&self.username, Some(&self.password));
        }
        if is_post {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body.unwrap_or_default());
        }

        let response = request.send().await?;
        let response = ensure_success(url, response).await?;
        Ok(response.bytes().await?)
    }

    async fn head_content_length(&self, url: &Url) -> Result<u64> {
        debug!("HEAD {}", url);
        let response = self.client.head(url.clone()).send().await?;
        if !response.status().is_success() {
            warn!("HEAD {} returned {}, size unknown", url, response.status());
            return Ok(0);
        }

        // `Response::content_length` reports the (empty) body of a HEAD, so
        // read the header itself.
        let length = response
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());
        match length {
            Some(length) => Ok(length),
            None => {
                warn!("{} did not report a usable Content-Length", url);
                Ok(0)
            }
        }
    }

    async fn open(&self, url: &Url) -> Result<Response> {
        debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;
        ensure_success(url, response).await
    }
}
