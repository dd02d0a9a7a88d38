//! ID photo files

use std::{
    io,
    path::{Path, PathBuf},
};

use tokio::fs;

/// Suffix of photo copies waiting for a collection commit
const STAGED_SUFFIX: &str = ".staged";

/// Decoded front and back photos of an ID document
#[derive(Debug, Clone)]
pub struct PhotoPair {
    pub front: Vec<u8>,
    pub back: Vec<u8>,
}

/// Photo directory shared by all collections
#[derive(Debug, Clone)]
pub struct PhotoStore {
    dir: PathBuf,
    url_prefix: String,
}

impl PhotoStore {
    pub fn new(dir: impl Into<PathBuf>, url_prefix: &str) -> Self {
        Self {
            dir: dir.into(),
            url_prefix: url_prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Path under which a photo is served
    pub fn web_path(&self, file_name: &str) -> String {
        if self.url_prefix.is_empty() {
            file_name.to_string()
        } else {
            format!("{}/{}", self.url_prefix, file_name)
        }
    }

    pub async fn write(&self, file_name: &str, bytes: &[u8]) -> io::Result<()> {
        fs::write(self.path(file_name), bytes).await
    }

    /// Remove a photo, logging instead of failing
    pub async fn remove_quietly(&self, file_name: &str) {
        if let Err(e) = fs::remove_file(self.path(file_name)).await {
            tracing::warn!("Could not delete photo {}: {}", file_name, e);
        }
    }

    /// Copy `from` next to its future name `to`, returning the staged name
    pub async fn stage(&self, from: &str, to: &str) -> io::Result<String> {
        let staged = format!("{}{}", to, STAGED_SUFFIX);
        fs::copy(self.path(from), self.path(&staged)).await?;
        Ok(staged)
    }

    /// Move a photo (usually a staged copy) onto `to`, replacing any file there
    pub async fn rename(&self, from: &str, to: &str) -> io::Result<()> {
        fs::rename(self.path(from), self.path(to)).await
    }
}
