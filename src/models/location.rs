//! Location model and privacy-reduced views

use serde::{Deserialize, Serialize};

/// Address visibility marker stored on a location document.
///
/// `ParticipantsOnly` is the only supported value post-migration; the legacy
/// stored values `PUBLIC` and `CITY_ONLY` still deserialize but normalize to
/// `ParticipantsOnly`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationVisibility {
    ParticipantsOnly,
    Public,
    CityOnly,
}

impl LocationVisibility {
    /// Collapse legacy markers onto the single supported value
    pub fn normalized(self) -> Self {
        LocationVisibility::ParticipantsOnly
    }
}

/// Exact event location as stored on the event document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub city: String,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Precomputed jittered pair, written once at event creation time
    pub approximate_latitude: Option<f64>,
    pub approximate_longitude: Option<f64>,
    pub visibility: Option<LocationVisibility>,
}

/// Privacy-reduced view of a location shown to unauthorized viewers.
///
/// Carries no exact address or exact coordinates; the approximate pair comes
/// from the stored jitter written at creation time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskedLocation {
    pub city: String,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub approximate_latitude: f64,
    pub approximate_longitude: f64,
    pub visibility: LocationVisibility,
    pub message: String,
}

/// Jittered coordinate pair persisted alongside the exact location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproximateCoordinates {
    pub approximate_latitude: f64,
    pub approximate_longitude: f64,
}
