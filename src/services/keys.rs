//! Key log service

use std::sync::Arc;

use crate::{
    clock::Clock,
    error::AppResult,
    models::key::{CreateKeyEntry, KeyEntry},
    repository::Repository,
};

use super::validation::FieldErrors;

#[derive(Clone)]
pub struct KeysService {
    repository: Repository,
    clock: Arc<dyn Clock>,
}

impl KeysService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn list(&self) -> AppResult<Vec<KeyEntry>> {
        self.repository.keys.list().await
    }

    pub async fn get(&self, serial: &str) -> AppResult<KeyEntry> {
        self.repository.keys.get(serial).await
    }

    /// Validate and store a key handover. The date defaults to today.
    pub async fn create(&self, data: &CreateKeyEntry) -> AppResult<KeyEntry> {
        let mut fields = FieldErrors::default();
        let id_number = fields.id_number("idNumber", &data.id_number);
        let name = fields.required("name", &data.name);
        let key_tag_name = fields.required("keyTagName", &data.key_tag_name);
        let time_taken = fields.required("timeTaken", &data.time_taken);
        let security_remarks = fields.required("securityRemarks", &data.security_remarks);
        let date = fields.date("date", &data.date);
        let photos = fields.photos(&data.front_photo, &data.back_photo);
        fields.finish()?;

        let entry = KeyEntry {
            serial_number: String::new(),
            id_number,
            name,
            key_tag_name,
            time_taken,
            date: date.unwrap_or_else(|| self.clock.today()),
            security_remarks,
            time_returned: None,
            front_photo: String::new(),
            back_photo: String::new(),
        };

        self.repository.keys.create(entry, &photos).await
    }

    /// Record the time a key came back
    pub async fn return_key(&self, serial: &str, time_returned: &str) -> AppResult<KeyEntry> {
        let time_returned = time_returned.to_string();
        self.repository
            .keys
            .update(serial, |k| k.time_returned = Some(time_returned))
            .await
    }

    /// Delete a key entry and renumber the rest, returning the remaining count
    pub async fn delete(&self, serial: &str) -> AppResult<usize> {
        self.repository.keys.delete_and_adjust(serial).await
    }
}
