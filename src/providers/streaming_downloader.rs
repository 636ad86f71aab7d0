use std::path::Path;

use futures_util::StreamExt;
use log::{debug, info, warn};
use reqwest::{Response, Url};
use tokio::io::AsyncWriteExt;

use crate::error::{Error, Result};
use crate::models::download::DownloadProgress;
use crate::providers::api_client::ApiClient;
use crate::providers::downloader::{Downloader, partial_path};
use crate::providers::progress::ProgressSink;

pub struct StreamingDownloader<'a, C: ApiClient> {
    client: &'a C,
}

impl<'a, C: ApiClient> StreamingDownloader<'a, C> {
    pub fn new(client: &'a C) -> Self {
        StreamingDownloader { client }
    }
}

async fn stream_into<P: ProgressSink>(
    response: Response,
    file: &mut tokio::fs::File,
    partial: &Path,
    progress: &mut DownloadProgress,
    sink: &mut P,
) -> Result<()> {
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk)
            .await
            .map_err(|e| Error::io(partial, e))?;
        progress.advance(chunk.len());
        sink.report(progress);
    }
    file.flush().await.map_err(|e| Error::io(partial, e))?;
    file.sync_all().await.map_err(|e| Error::io(partial, e))
}

impl<C: ApiClient + Sync> Downloader for StreamingDownloader<'_, C> {
    async fn download_to<P: ProgressSink + Send>(
        &self,
        url: &Url,
        destination: &Path,
        sink: &mut P,
    ) -> Result<DownloadProgress> {
        let mut total = self.client.head_content_length(url).await?;
        let response = self.client.open(url).await?;
        if total == 0 {
            if let Some(length) = response.content_length() {
                debug!("Using GET Content-Length {} for {}", length, url);
                total = length;
            }
        }
        info!(
            "Downloading {} bytes from {} to {}",
            total,
            url,
            destination.display()
        );

        let partial = partial_path(destination);
        let mut file = tokio::fs::File::create(&partial)
            .await
            .map_err(|e| Error::io(&partial, e))?;

        let mut progress = DownloadProgress::new(total);
        let copied = stream_into(response, &mut file, &partial, &mut progress, sink).await;
        drop(file);
        sink.finish(&progress);
        if let Err(e) = copied {
            warn!(
                "Download of {} stopped after {} bytes, partial data left in {}",
                url,
                progress.bytes_downloaded,
                partial.display()
            );
            return Err(e);
        }

        tokio::fs::rename(&partial, destination)
            .await
            .map_err(|e| Error::Publish {
                from: partial.clone(),
                to: destination.to_path_buf(),
                source: e,
            })?;
        info!(
            "Saved {} bytes to {}",
            progress.bytes_downloaded,
            destination.display()
        );
        Ok(progress)
    }
}
