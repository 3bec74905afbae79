use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::error::{ConvertError, Result};

/// Statistics for one input read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

fn read_error(path: &Path, source: std::io::Error) -> ConvertError {
    if source.kind() == ErrorKind::NotFound {
        ConvertError::FileNotFound { path: path.to_path_buf() }
    } else {
        ConvertError::FileRead { path: path.to_path_buf(), source }
    }
}

/// Read the whole subtitle file into memory
///
/// Missing paths map to [`ConvertError::FileNotFound`]; directories and other
/// I/O failures to [`ConvertError::FileRead`].
pub async fn read_subtitle_file<P: AsRef<Path>>(file_path: P) -> Result<(Vec<u8>, ReadStats)> {
    let path = file_path.as_ref();
    let start_time = std::time::Instant::now();

    debug!("Starting read of subtitle file: {}", path.display());

    let metadata = fs::metadata(path).await.map_err(|e| {
        warn!("Cannot access {}: {}", path.display(), e);
        read_error(path, e)
    })?;

    if !metadata.is_file() {
        warn!("Not a regular file: {}", path.display());
        return Err(ConvertError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(ErrorKind::InvalidInput, "not a regular file"),
        });
    }

    let bytes = fs::read(path).await.map_err(|e| read_error(path, e))?;

    let stats = ReadStats {
        file_path: path.display().to_string(),
        bytes_read: bytes.len() as u64,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };

    info!(
        "Read {}: {} bytes in {}ms",
        path.display(),
        stats.bytes_read,
        stats.duration_ms
    );

    Ok((bytes, stats))
}
