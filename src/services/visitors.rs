//! Visitor log service

use std::sync::Arc;

use crate::{
    clock::Clock,
    error::AppResult,
    models::visitor::{CreateVisitor, Visitor},
    repository::Repository,
};

use super::validation::FieldErrors;

#[derive(Clone)]
pub struct VisitorsService {
    repository: Repository,
    clock: Arc<dyn Clock>,
}

impl VisitorsService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn list(&self) -> AppResult<Vec<Visitor>> {
        self.repository.visitors.list().await
    }

    pub async fn get(&self, serial: &str) -> AppResult<Visitor> {
        self.repository.visitors.get(serial).await
    }

    /// Validate and store a new visitor.
    ///
    /// The visit date is always today: a `date` sent by the client is dropped.
    pub async fn create(&self, data: &CreateVisitor) -> AppResult<Visitor> {
        let mut fields = FieldErrors::default();
        let id_number = fields.id_number("idNumber", &data.id_number);
        let name = fields.required("name", &data.name);
        let company = fields.required("company", &data.company);
        let phone = fields.required("phone", &data.phone);
        let purpose = fields.required("purpose", &data.purpose);
        let time_in = fields.required("timeIn", &data.time_in);
        let photos = fields.photos(&data.front_photo, &data.back_photo);
        fields.finish()?;

        let visitor = Visitor {
            serial_number: String::new(),
            id_number,
            name,
            company,
            phone,
            purpose,
            date: self.clock.today(),
            time_in,
            time_out: None,
            front_photo: String::new(),
            back_photo: String::new(),
        };

        self.repository.visitors.create(visitor, &photos).await
    }

    /// Record the time a visitor left
    pub async fn timeout(&self, serial: &str, time_out: &str) -> AppResult<Visitor> {
        let time_out = time_out.to_string();
        self.repository
            .visitors
            .update(serial, |v| v.time_out = Some(time_out))
            .await
    }

    /// Delete a visitor and renumber the rest, returning the remaining count
    pub async fn delete(&self, serial: &str) -> AppResult<usize> {
        self.repository.visitors.delete_and_adjust(serial).await
    }
}
