use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use reqwest::Url;

use crate::commands::emit;
use crate::error::{Error, Result};
use crate::models::download::{DownloadRequest, IsoOutcome};
use crate::providers::api_client::ApiClient;
use crate::providers::checksum::sha256_of;
use crate::providers::downloader::Downloader;
use crate::providers::image_resolver::resolve_installer_url;
use crate::providers::progress::ProgressSink;

/// `output_path` wins; otherwise the URL's file name inside `output_dir`
/// (the current directory when empty). Directories are not created.
pub fn destination_for(url: &Url, request: &DownloadRequest) -> Result<PathBuf> {
    if !request.output_path.is_empty() {
        return Ok(PathBuf::from(&request.output_path));
    }
    let filename = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| Error::NoFilename {
            url: url.to_string(),
        })?;
    let dir = if request.output_dir.is_empty() {
        "."
    } else {
        request.output_dir.as_str()
    };
    Ok(Path::new(dir).join(filename))
}

/// Resolves an image's installer ISO and, if requested, downloads and
/// fingerprints it.
pub async fn fetch_iso<C, D, P, W>(
    client: &C,
    downloader: &D,
    request: &DownloadRequest,
    sink: &mut P,
    out: &mut W,
) -> Result<IsoOutcome>
where
    C: ApiClient,
    D: Downloader,
    P: ProgressSink + Send,
    W: Write,
{
    let url = resolve_installer_url(client, &request.image_id).await?;
    emit(out, format!("{}\n", url).as_bytes())?;

    let mut outcome = IsoOutcome {
        installer_url: url.to_string(),
        destination: None,
        progress: None,
        checksum: None,
    };
    if !request.download {
        return Ok(outcome);
    }

    let destination = destination_for(&url, request)?;
    emit(
        out,
        format!("Downloading {} to {}\n", url, destination.display()).as_bytes(),
    )?;
    let progress = downloader.download_to(&url, &destination, sink).await?;
    outcome.progress = Some(progress);

    if request.verify_checksum {
        emit(out, b"Calculating sha256 checksum...\n")?;
        let checksum = sha256_of(&destination).await?;
        emit(out, format!("Checksum (sha256): {}\n", checksum).as_bytes())?;
        outcome.checksum = Some(checksum);
    }

    info!("Image {} saved to {}", request.image_id, destination.display());
    outcome.destination = Some(destination);
    Ok(outcome)
}
