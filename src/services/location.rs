//! Location visibility and address masking
//!
//! Whether a viewer sees the exact address is strictly stricter than event
//! discoverability: even on a public event, only the organizer and approved
//! participants get past the city. Everyone else receives a masked view built
//! from the jittered coordinate pair written once at event creation time.

use rand::Rng;
use serde::Serialize;

use crate::models::{
    ApproximateCoordinates, Event, Location, LocationVisibility, MaskedLocation,
    ParticipationStatus,
};
use crate::utils::logging::{log_address_masked, log_missing_jitter};

/// Half-width of the uniform coordinate jitter, in degrees per axis.
/// Roughly ±1.1 km at the equator, less at latitude.
pub const DEFAULT_JITTER_DEGREES: f64 = 0.01;

/// User-facing note attached to every masked location
pub const MASKED_ADDRESS_MESSAGE: &str =
    "The exact address is shared with approved participants";

/// Location as a view renders it: the masked variant structurally cannot
/// carry the exact address or exact coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LocationView {
    Exact(Location),
    Masked(MaskedLocation),
}

/// Event plus the location view the caller is allowed to render
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
    #[serde(flatten)]
    pub event: Event,
    pub location_view: Option<LocationView>,
    pub can_see_full_address: bool,
}

/// Whether the viewer may see the exact address: the organizer, or a viewer
/// whose participation request was approved.
pub fn can_see_full_address(
    event: &Event,
    viewer_id: Option<&str>,
    participant_status: Option<ParticipationStatus>,
) -> bool {
    let is_organizer = viewer_id
        .map(|id| !id.is_empty() && event.organizer_id == id)
        .unwrap_or(false);

    is_organizer || participant_status == Some(ParticipationStatus::Approved)
}

/// Build the privacy-reduced view of a location.
///
/// Uses the precomputed jitter pair when present. Locations that predate the
/// jitter migration fall back to the exact coordinates; the fallback is
/// logged so unmigrated documents can be found, but masking still proceeds.
pub fn mask_location(location: &Location) -> MaskedLocation {
    let (approximate_latitude, approximate_longitude) = match (
        location.approximate_latitude,
        location.approximate_longitude,
    ) {
        (Some(lat), Some(lng)) => (lat, lng),
        _ => {
            log_missing_jitter(&location.city);
            (location.latitude, location.longitude)
        }
    };

    MaskedLocation {
        city: location.city.clone(),
        zip_code: location.zip_code.clone(),
        country: location.country.clone(),
        approximate_latitude,
        approximate_longitude,
        visibility: LocationVisibility::ParticipantsOnly,
        message: MASKED_ADDRESS_MESSAGE.to_string(),
    }
}

/// Jitter a coordinate pair with independent uniform offsets per axis.
///
/// Call once at event creation time and persist the result. Recomputing on
/// every read would let repeated "approximate" samples average back to the
/// true location.
pub fn calculate_approximate_coordinates(latitude: f64, longitude: f64) -> ApproximateCoordinates {
    calculate_approximate_coordinates_with(latitude, longitude, DEFAULT_JITTER_DEGREES)
}

/// `calculate_approximate_coordinates` with a configured jitter half-width
pub fn calculate_approximate_coordinates_with(
    latitude: f64,
    longitude: f64,
    jitter_degrees: f64,
) -> ApproximateCoordinates {
    let mut rng = rand::thread_rng();
    ApproximateCoordinates {
        approximate_latitude: latitude + rng.gen_range(-jitter_degrees..=jitter_degrees),
        approximate_longitude: longitude + rng.gen_range(-jitter_degrees..=jitter_degrees),
    }
}

/// Resolve the location view for a viewer: exact for the organizer and
/// approved participants, masked for everyone else.
pub fn event_with_masked_location(
    mut event: Event,
    viewer_id: Option<&str>,
    participant_status: Option<ParticipationStatus>,
) -> EventView {
    let authorized = can_see_full_address(&event, viewer_id, participant_status);
    let location_view = event.location.take().map(|location| {
        if authorized {
            LocationView::Exact(location)
        } else {
            log_address_masked(&event.id, viewer_id);
            LocationView::Masked(mask_location(&location))
        }
    });

    EventView {
        event,
        location_view,
        can_see_full_address: authorized,
    }
}

/// One-line address for list rows and map callouts
pub fn format_address_for_display(view: &LocationView) -> String {
    match view {
        LocationView::Exact(location) => match &location.zip_code {
            Some(zip_code) => format!("{}, {} {}", location.address, zip_code, location.city),
            None => format!("{}, {}", location.address, location.city),
        },
        LocationView::Masked(masked) => match &masked.zip_code {
            Some(zip_code) => format!("{} ({})", masked.city, zip_code),
            None => masked.city.clone(),
        },
    }
}
