//! Key log model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::record::Record;

/// Key handover entry as persisted in `keys.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyEntry {
    pub serial_number: String,
    pub id_number: String,
    pub name: String,
    /// Label of the key tag handed over
    pub key_tag_name: String,
    pub time_taken: String,
    pub date: NaiveDate,
    pub security_remarks: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_returned: Option<String>,
    pub front_photo: String,
    pub back_photo: String,
}

impl Record for KeyEntry {
    const KIND: &'static str = "Key entry";
    const PHOTO_PREFIX: &'static str = "key_";

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
        self.time_returned.is_none()
    }
}

/// Create key entry request
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateKeyEntry {
    /// Ignored, assigned by the server
    pub serial_number: Option<String>,
    pub id_number: Option<String>,
    pub name: Option<String>,
    pub key_tag_name: Option<String>,
    pub time_taken: Option<String>,
    /// Handover day (YYYY-MM-DD), defaults to today
    pub date: Option<String>,
    pub security_remarks: Option<String>,
    pub front_photo: Option<String>,
    pub back_photo: Option<String>,
}

/// Key return request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReturnKey {
    pub time_returned: String,
}
