//! Behaviour shared by every serially numbered collection

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

/// Which face of the ID document a photo shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSide {
    Front,
    Back,
}

impl PhotoSide {
    pub const ALL: [PhotoSide; 2] = [PhotoSide::Front, PhotoSide::Back];
}

impl fmt::Display for PhotoSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PhotoSide::Front => "front",
            PhotoSide::Back => "back",
        })
    }
}

/// A log entry stored in a serially numbered collection with two ID photos
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Human readable kind, used in log lines and error messages
    const KIND: &'static str;

    /// Prefix of the photo file names of this kind
    const PHOTO_PREFIX: &'static str;

    fn serial_number(&self) -> &str;

    fn set_serial_number(&mut self, serial: String);

    /// Replace both photo references
    fn set_photos(&mut self, front: String, back: String);

    /// An entry is active until it has been timed out or returned
    fn is_active(&self) -> bool;

    /// File name of a photo for the given serial number
    fn photo_file_name(serial: &str, side: PhotoSide) -> String {
        format!("{}{}_{}.jpg", Self::PHOTO_PREFIX, serial, side)
    }
}
