//! Repository layer over the collection files and the photo directory

pub mod collection;
pub mod photos;
pub mod records;

use tokio::fs;

use crate::{
    config::StorageConfig,
    error::{AppResult, StorageError},
    models::{KeyEntry, Visitor},
};

pub use photos::{PhotoPair, PhotoStore};
pub use records::RecordStore;

pub const VISITORS_FILE: &str = "visitors.json";
pub const KEYS_FILE: &str = "keys.json";

/// Main repository struct holding both collections
#[derive(Clone)]
pub struct Repository {
    pub visitors: RecordStore<Visitor>,
    pub keys: RecordStore<KeyEntry>,
}

impl Repository {
    /// Build a repository without touching the disk
    pub fn new(config: &StorageConfig) -> Self {
        let photos = PhotoStore::new(&config.photos_dir, &config.photos_url);
        Self {
            visitors: RecordStore::new(config.data_dir.join(VISITORS_FILE), photos.clone()),
            keys: RecordStore::new(config.data_dir.join(KEYS_FILE), photos),
        }
    }

    /// Create the data and photo directories, then build the repository
    pub async fn open(config: &StorageConfig) -> AppResult<Self> {
        for dir in [&config.data_dir, &config.photos_dir] {
            fs::create_dir_all(dir)
                .await
                .map_err(|source| StorageError::Io {
                    path: dir.clone(),
                    source,
                })?;
        }
        Ok(Self::new(config))
    }
}
