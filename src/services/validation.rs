//! Input validation for new log entries

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    error::{AppError, AppResult},
    repository::PhotoPair,
};

// ASCII digits only: `\d` would also accept other scripts' digits
static ID_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^784-[0-9]{4}-[0-9]{7}-[0-9]$").expect("valid ID number pattern")
});

static DATA_URI_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:image/[A-Za-z0-9.+-]+;base64,").expect("valid data URI pattern")
});

/// Whether `value` is a national ID number (784-XXXX-XXXXXXX-X)
pub fn is_valid_id_number(value: &str) -> bool {
    ID_NUMBER.is_match(value)
}

/// Decode a base64 photo, with or without a `data:image/...;base64,` prefix.
/// Line breaks inside the base64 text are ignored.
pub fn decode_photo(payload: &str) -> Option<Vec<u8>> {
    let payload = payload.trim();
    let encoded: String = DATA_URI_PREFIX
        .find(payload)
        .map_or(payload, |m| &payload[m.end()..])
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    STANDARD.decode(encoded).ok().filter(|bytes| !bytes.is_empty())
}

/// Collects every problem with a request before failing
#[derive(Debug, Default)]
pub struct FieldErrors {
    missing: Vec<&'static str>,
    invalid: Vec<String>,
}

impl FieldErrors {
    /// Trimmed value of a required field, recording it as missing when blank
    pub fn required(&mut self, field: &'static str, value: &Option<String>) -> String {
        let value = value.as_deref().map(str::trim).unwrap_or_default();
        if value.is_empty() {
            self.missing.push(field);
        }
        value.to_string()
    }

    pub fn invalid(&mut self, field: &'static str, reason: &str) {
        self.invalid.push(format!("{} {}", field, reason));
    }

    /// Required national ID number
    pub fn id_number(&mut self, field: &'static str, value: &Option<String>) -> String {
        let id = self.required(field, value);
        if !id.is_empty() && !is_valid_id_number(&id) {
            self.invalid(field, "must match 784-XXXX-XXXXXXX-X");
        }
        id
    }

    /// Optional `YYYY-MM-DD` date
    pub fn date(&mut self, field: &'static str, value: &Option<String>) -> Option<NaiveDate> {
        let value = value.as_deref().map(str::trim).filter(|v| !v.is_empty())?;
        match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                self.invalid(field, "must be a YYYY-MM-DD date");
                None
            }
        }
    }

    /// Both required ID photos, decoded
    pub fn photos(&mut self, front: &Option<String>, back: &Option<String>) -> PhotoPair {
        let front = self.photo("frontPhoto", front);
        let back = self.photo("backPhoto", back);
        PhotoPair { front, back }
    }

    fn photo(&mut self, field: &'static str, value: &Option<String>) -> Vec<u8> {
        let payload = self.required(field, value);
        if payload.is_empty() {
            return Vec::new();
        }
        decode_photo(&payload).unwrap_or_else(|| {
            self.invalid(field, "is not a base64 encoded image");
            Vec::new()
        })
    }

    /// Fail with a message naming every missing and invalid field
    pub fn finish(self) -> AppResult<()> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("Missing required fields: {}", self.missing.join(", ")));
        }
        parts.extend(self.invalid);

        if parts.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(parts.join("; ")))
        }
    }
}
