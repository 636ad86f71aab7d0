use std::path::Path;

use log::debug;
use sha2::{Digest, Sha256};
use tokio::io::AsyncReadExt;

use crate::error::{Error, Result};

const BUFFER_SIZE: usize = 64 * 1024;

/// Lowercase hex SHA-256 of the file at `path`.
pub async fn sha256_of(path: &Path) -> Result<String> {
    debug!("Calculating SHA256 of {}", path.display());
    let mut file = tokio::fs::File::open(path)
        .await
        .map_err(|e| Error::io(path, e))?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];
    loop {
        let read = file
            .read(&mut buffer)
            .await
            .map_err(|e| Error::io(path, e))?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    let hash = format!("{:x}", hasher.finalize());
    debug!("SHA256 of {}: {}", path.display(), hash);
    Ok(hash)
}
