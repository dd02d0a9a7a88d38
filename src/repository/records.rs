//! Serially numbered record collections

use std::{collections::HashSet, marker::PhantomData, path::PathBuf, sync::Arc};

use tokio::sync::Mutex;

use super::{
    collection,
    photos::{PhotoPair, PhotoStore},
};
use crate::{
    error::{AppError, AppResult},
    models::{
        serial::{format_serial, is_dense},
        PhotoSide, Record,
    },
};

/// A photo copy waiting for the collection commit
struct StagedPhoto {
    staged: String,
    source: String,
    target: String,
}

/// One collection file plus its photos.
///
/// Every operation runs its load/mutate/save cycle while holding the
/// collection lock, so there is a single writer per collection.
pub struct RecordStore<R> {
    path: PathBuf,
    photos: PhotoStore,
    lock: Arc<Mutex<()>>,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for RecordStore<R> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            photos: self.photos.clone(),
            lock: self.lock.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new(path: impl Into<PathBuf>, photos: PhotoStore) -> Self {
        Self {
            path: path.into(),
            photos,
            lock: Arc::new(Mutex::new(())),
            _record: PhantomData,
        }
    }

    fn photo_refs(&self, serial: &str) -> (String, String) {
        (
            self.photos.web_path(&R::photo_file_name(serial, PhotoSide::Front)),
            self.photos.web_path(&R::photo_file_name(serial, PhotoSide::Back)),
        )
    }

    fn not_found(serial: &str) -> AppError {
        AppError::NotFound(format!("{} {} not found", R::KIND, serial))
    }

    /// All records in stored order
    pub async fn list(&self) -> AppResult<Vec<R>> {
        let _guard = self.lock.lock().await;
        Ok(collection::load(&self.path).await?)
    }

    /// Get one record by serial number
    pub async fn get(&self, serial: &str) -> AppResult<R> {
        self.list()
            .await?
            .into_iter()
            .find(|r| r.serial_number() == serial)
            .ok_or_else(|| Self::not_found(serial))
    }

    /// Append a record under the next serial number.
    ///
    /// Any serial number or photo reference on `record` is overwritten. A
    /// collection with gaps is renumbered first so the new serial is unique.
    /// The photos are written before the collection; if either step fails
    /// the photos written so far are removed again.
    pub async fn create(&self, mut record: R, photos: &PhotoPair) -> AppResult<R> {
        let _guard = self.lock.lock().await;
        let mut records: Vec<R> = collection::load(&self.path).await?;
        if !is_dense(records.iter().map(|r| r.serial_number())) {
            tracing::warn!(
                "{} collection {} has gaps in its serial numbers, renumbering",
                R::KIND,
                self.path.display()
            );
            self.commit_renumbered(&mut records, None).await?;
        }

        let serial = format_serial(records.len() + 1);
        let front = R::photo_file_name(&serial, PhotoSide::Front);
        let back = R::photo_file_name(&serial, PhotoSide::Back);

        self.photos
            .write(&front, &photos.front)
            .await
            .map_err(|e| AppError::PhotoIo(format!("{}: {}", front, e)))?;
        if let Err(e) = self.photos.write(&back, &photos.back).await {
            self.photos.remove_quietly(&front).await;
            return Err(AppError::PhotoIo(format!("{}: {}", back, e)));
        }

        let (front_ref, back_ref) = self.photo_refs(&serial);
        record.set_serial_number(serial.clone());
        record.set_photos(front_ref, back_ref);
        records.push(record.clone());

        if let Err(e) = collection::save(&self.path, &records).await {
            self.photos.remove_quietly(&front).await;
            self.photos.remove_quietly(&back).await;
            return Err(e.into());
        }

        tracing::info!("{} {} created", R::KIND, serial);
        Ok(record)
    }

    /// Apply `change` to the record with the given serial number and persist
    pub async fn update<F>(&self, serial: &str, change: F) -> AppResult<R>
    where
        F: FnOnce(&mut R),
    {
        let _guard = self.lock.lock().await;
        let mut records: Vec<R> = collection::load(&self.path).await?;

        let record = records
            .iter_mut()
            .find(|r| r.serial_number() == serial)
            .ok_or_else(|| Self::not_found(serial))?;
        change(record);
        let updated = record.clone();

        collection::save(&self.path, &records).await?;
        Ok(updated)
    }

    /// Delete a record and renumber the rest to `0001..N`.
    ///
    /// Returns the number of remaining records.
    pub async fn delete_and_adjust(&self, serial: &str) -> AppResult<usize> {
        let _guard = self.lock.lock().await;
        let mut records: Vec<R> = collection::load(&self.path).await?;

        let index = records
            .iter()
            .position(|r| r.serial_number() == serial)
            .ok_or_else(|| Self::not_found(serial))?;
        let removed = records.remove(index);

        let moved = self.commit_renumbered(&mut records, Some(&removed)).await?;

        tracing::info!(
            "{} {} deleted, {} renumbered, {} remaining",
            R::KIND,
            serial,
            moved,
            records.len()
        );
        Ok(records.len())
    }

    /// Renumber `records` to `0001..N`, persist them and move their photos.
    ///
    /// Photos of renumbered records are first copied to staged names. Only
    /// once the collection is committed are the photos of `removed` deleted,
    /// the staged copies moved onto their new names, and old names whose
    /// copy landed removed. A photo that could not be staged is renamed in
    /// place instead; if that fails too the old file is left alone. When the
    /// commit fails the staged copies are dropped and nothing else changes.
    /// Returns how many records got a new serial number.
    async fn commit_renumbered(&self, records: &mut [R], removed: Option<&R>) -> AppResult<usize> {
        // (old serial, new serial) for every record that moves
        let mut moves = Vec::new();
        for (i, record) in records.iter_mut().enumerate() {
            let new_serial = format_serial(i + 1);
            if record.serial_number() != new_serial {
                moves.push((record.serial_number().to_string(), new_serial.clone()));
                let (front_ref, back_ref) = self.photo_refs(&new_serial);
                record.set_serial_number(new_serial);
                record.set_photos(front_ref, back_ref);
            }
        }

        let mut staged = Vec::new();
        let mut unstaged = Vec::new();
        for (old, new) in &moves {
            for side in PhotoSide::ALL {
                let source = R::photo_file_name(old, side);
                let target = R::photo_file_name(new, side);
                match self.photos.stage(&source, &target).await {
                    Ok(staged_name) => staged.push(StagedPhoto {
                        staged: staged_name,
                        source,
                        target,
                    }),
                    Err(e) => {
                        tracing::warn!("Could not stage photo {} as {}: {}", source, target, e);
                        unstaged.push((source, target));
                    }
                }
            }
        }

        if let Err(e) = collection::save(&self.path, records).await {
            for photo in &staged {
                self.photos.remove_quietly(&photo.staged).await;
            }
            return Err(e.into());
        }

        if let Some(removed) = removed {
            for side in PhotoSide::ALL {
                self.photos
                    .remove_quietly(&R::photo_file_name(removed.serial_number(), side))
                    .await;
            }
        }

        // Stored serials increase, so new serials only shrink and renaming in
        // order never lands on a file that is still waiting to be moved
        for (source, target) in &unstaged {
            if let Err(e) = self.photos.rename(source, target).await {
                tracing::warn!("Could not rename photo {} to {}: {}", source, target, e);
            }
        }

        let mut promoted = Vec::new();
        for photo in &staged {
            match self.photos.rename(&photo.staged, &photo.target).await {
                Ok(()) => promoted.push(photo.source.as_str()),
                Err(e) => {
                    tracing::warn!("Could not move staged photo {}: {}", photo.staged, e);
                    self.photos.remove_quietly(&photo.staged).await;
                }
            }
        }

        let live: HashSet<String> = records
            .iter()
            .flat_map(|r| PhotoSide::ALL.map(|side| R::photo_file_name(r.serial_number(), side)))
            .collect();
        for source in promoted {
            if !live.contains(source) {
                self.photos.remove_quietly(source).await;
            }
        }

        Ok(moves.len())
    }
}
