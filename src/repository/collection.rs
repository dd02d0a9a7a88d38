//! Flat JSON collection files

use std::path::Path;

use tokio::fs;

use crate::{error::StorageError, models::Record};

/// Read a whole collection; a missing file is an empty collection
pub async fn load<R: Record>(path: &Path) -> Result<Vec<R>, StorageError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    serde_json::from_slice(&bytes).map_err(|source| StorageError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

/// Rewrite a whole collection.
///
/// The JSON is written to a sibling `.tmp` file which is then renamed over
/// the target, so readers see either the old or the new collection.
pub async fn save<R: Record>(path: &Path, records: &[R]) -> Result<(), StorageError> {
    let json = serde_json::to_vec_pretty(records).map_err(StorageError::Encode)?;

    let tmp_path = path.with_extension("json.tmp");
    let io_err = |source: std::io::Error| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    fs::write(&tmp_path, json).await.map_err(io_err)?;
    fs::rename(&tmp_path, path).await.map_err(io_err)?;
    Ok(())
}
