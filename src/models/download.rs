use std::path::PathBuf;

/// Options for a single `image iso` invocation.
#[derive(Debug, Clone, Default)]
pub struct DownloadRequest {
    pub image_id: String,
    pub download: bool,
    pub output_dir: String,
    pub output_path: String,
    pub verify_checksum: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadProgress {
    pub bytes_downloaded: u64,
    pub total_size: u64,
}

impl DownloadProgress {
    pub fn new(total_size: u64) -> Self {
        DownloadProgress {
            bytes_downloaded: 0,
            total_size,
        }
    }

    pub fn advance(&mut self, chunk_len: usize) {
        self.bytes_downloaded += chunk_len as u64;
    }

    /// `None` while the total size is unknown.
    pub fn percent(&self) -> Option<f64> {
        if self.total_size == 0 {
            return None;
        }
        Some(self.bytes_downloaded as f64 / self.total_size as f64 * 100.0)
    }
}

#[derive(Debug, Clone)]
pub struct IsoOutcome {
    pub installer_url: String,
    pub destination: Option<PathBuf>,
    pub progress: Option<DownloadProgress>,
    pub checksum: Option<String>,
}
