//! Vehicle and parking-request types

use serde::{Deserialize, Serialize};

/// Normalize a license plate for storage: trimmed, uppercased.
///
/// The 7-character limit is a convention of the GUI input field, not
/// enforced here.
pub fn normalize_plate(plate: &str) -> String {
    plate.trim().to_uppercase()
}

/// A user-registered vehicle
///
/// Identity is `id`; the collection keeps insertion order, which is also
/// the display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Opaque unique identifier, generated from the clock at creation
    pub id: String,
    /// Display name (e.g., "Auto de Flor")
    pub nickname: String,
    /// License plate, stored trimmed and uppercased
    #[serde(rename = "licensePlate")]
    pub license_plate: String,
}

impl Vehicle {
    /// Create a new vehicle with a fresh clock-derived id, normalizing
    /// the nickname and plate.
    pub fn new(nickname: &str, license_plate: &str) -> Self {
        Self {
            id: chrono::Utc::now().timestamp_millis().to_string(),
            nickname: nickname.trim().to_string(),
            license_plate: normalize_plate(license_plate),
        }
    }
}

/// Ephemeral value describing one parking request; never persisted,
/// only formatted into the outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingRequest {
    pub license_plate: String,
    pub minutes: u32,
}

impl ParkingRequest {
    pub fn new(license_plate: impl Into<String>, minutes: u32) -> Self {
        Self {
            license_plate: license_plate.into(),
            minutes,
        }
    }
}
