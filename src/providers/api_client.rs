use bytes::Bytes;
use reqwest::{Method, Response, Url};

use crate::error::Result;
use crate::models::configuration::EdgeConfig;

pub trait ApiClient {
    fn new(config: &EdgeConfig) -> Result<Self>
    where
        Self: Sized;

    /// Joins an API path such as `api/edge/v1/images` onto the base URL.
    fn endpoint(&self, path: &str) -> Result<Url>;

    /// Authenticated request against the Edge API returning the whole body.
    /// `body` is only sent with `POST`.
    fn call(
        &self,
        method: Method,
        url: &Url,
        body: Option<Bytes>,
    ) -> impl std::future::Future<Output = Result<Bytes>> + Send;

    /// Size advertised by a `HEAD` on `url`, `0` when unknown.
    fn head_content_length(
        &self,
        url: &Url,
    ) -> impl std::future::Future<Output = Result<u64>> + Send;

    /// Unauthenticated `GET` whose body the caller streams.
    fn open(&self, url: &Url) -> impl std::future::Future<Output = Result<Response>> + Send;
}
