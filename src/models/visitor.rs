//! Visitor log model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::record::Record;

/// Visitor entry as persisted in `visitors.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    /// Positional serial number (0001, 0002, ...)
    pub serial_number: String,
    /// National ID number (784-XXXX-XXXXXXX-X)
    pub id_number: String,
    pub name: String,
    pub company: String,
    pub phone: String,
    pub purpose: String,
    /// Day of the visit, always set by the server
    pub date: NaiveDate,
    pub time_in: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_out: Option<String>,
    /// Web path of the front ID photo
    pub front_photo: String,
    /// Web path of the back ID photo
    pub back_photo: String,
}

impl Record for Visitor {
    const KIND: &'static str = "Visitor";
    const PHOTO_PREFIX: &'static str = "";

    fn serial_number(&self) -> &str {
        &self.serial_number
    }

    fn set_serial_number(&mut self, serial: String) {
        self.serial_number = serial;
    }

    fn set_photos(&mut self, front: String, back: String) {
        self.front_photo = front;
        self.back_photo = back;
    }

    fn is_active(&self) -> bool {
        self.time_out.is_none()
    }
}

/// Create visitor request
///
/// Every field is optional at the wire level so that missing fields are
/// reported together by validation. `serialNumber` and `date` are accepted
/// but ignored: both are assigned by the server.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVisitor {
    pub serial_number: Option<String>,
    pub id_number: Option<String>,
    pub name: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub purpose: Option<String>,
    pub date: Option<String>,
    pub time_in: Option<String>,
    /// Base64 JPEG, optionally as a `data:image/...;base64,` URI
    pub front_photo: Option<String>,
    /// Base64 JPEG, optionally as a `data:image/...;base64,` URI
    pub back_photo: Option<String>,
}

/// Time out request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeoutVisitor {
    pub time_out: String,
}
