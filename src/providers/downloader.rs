use std::path::Path;

use reqwest::Url;

use crate::error::Result;
use crate::models::download::DownloadProgress;
use crate::providers::progress::ProgressSink;

pub trait Downloader {
    /// Streams `url` into `destination`, publishing the file only once it is complete.
    fn download_to<P: ProgressSink + Send>(
        &self,
        url: &Url,
        destination: &Path,
        progress: &mut P,
    ) -> impl std::future::Future<Output = Result<DownloadProgress>> + Send;
}

/// Path the transfer is written to before it is renamed into place.
pub fn partial_path(destination: &Path) -> std::path::PathBuf {
    let mut partial = destination.as_os_str().to_owned();
    partial.push(".partial");
    partial.into()
}
