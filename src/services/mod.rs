//! Services module
//!
//! This module contains the policy core: permission derivation, location
//! visibility, and lifecycle status. Everything here is a pure synchronous
//! function; `PolicyEngine` only threads configuration through the variants
//! that take tunable knobs.

pub mod lifecycle;
pub mod location;
pub mod permissions;

// Re-export commonly used services
pub use lifecycle::{
    actions_for_status, available_actions, calculate_event_status, refresh_status, stale_statuses,
    EventAction, StatusUpdate, DEFAULT_EVENT_DURATION_HOURS,
};
pub use location::{
    calculate_approximate_coordinates, can_see_full_address, event_with_masked_location,
    format_address_for_display, mask_location, EventView, LocationView, DEFAULT_JITTER_DEGREES,
    MASKED_ADDRESS_MESSAGE,
};
pub use permissions::{
    calculate_permissions, calculate_permissions_at, is_read_only, resolve_role, Permissions,
    UserRole,
};

use chrono::{DateTime, Utc};

use crate::config::PolicyConfig;
use crate::models::{ApproximateCoordinates, Event, EventStatus, ParticipationStatus};
use crate::utils::errors::Result;

/// Policy engine carrying the configured knobs.
///
/// Stateless beyond its configuration; cheap to clone and safe to share. The
/// module-level free functions are the same computations with the default
/// knobs.
#[derive(Debug, Clone)]
pub struct PolicyEngine {
    config: PolicyConfig,
}

impl PolicyEngine {
    /// Create a new engine from validated configuration
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// Full permission set for a viewer, evaluated at `now`
    pub fn calculate_permissions(
        &self,
        event: &Event,
        viewer_id: Option<&str>,
        participant_status: Option<ParticipationStatus>,
        is_friend: bool,
        now: DateTime<Utc>,
    ) -> Result<Permissions> {
        permissions::calculate_permissions_with(
            event,
            viewer_id,
            participant_status,
            is_friend,
            now,
            self.config.default_event_duration(),
        )
    }

    /// Lifecycle status at `now` under the configured default duration
    pub fn event_status(&self, event: &Event, now: DateTime<Utc>) -> EventStatus {
        lifecycle::calculate_event_status_with(event, now, self.config.default_event_duration())
    }

    /// Write-back candidate for one event, `None` when the stored status holds
    pub fn refresh_status(&self, event: &Event, now: DateTime<Utc>) -> Option<EventStatus> {
        lifecycle::refresh_status_with(event, now, self.config.default_event_duration())
    }

    /// Sweep batch over a snapshot of events
    pub fn stale_statuses(&self, events: &[Event], now: DateTime<Utc>) -> Vec<StatusUpdate> {
        lifecycle::stale_statuses_with(events, now, self.config.default_event_duration())
    }

    /// Actions valid for an event at `now`
    pub fn available_actions(
        &self,
        event: &Event,
        is_organizer: bool,
        now: DateTime<Utc>,
    ) -> Vec<EventAction> {
        actions_for_status(self.event_status(event, now), is_organizer)
    }

    /// Jittered coordinate pair under the configured half-width. Call once at
    /// event creation time and persist the result.
    pub fn approximate_coordinates(&self, latitude: f64, longitude: f64) -> ApproximateCoordinates {
        location::calculate_approximate_coordinates_with(
            latitude,
            longitude,
            self.config.jitter_degrees,
        )
    }

    /// Event plus the location view the viewer is allowed to render
    pub fn event_with_masked_location(
        &self,
        event: Event,
        viewer_id: Option<&str>,
        participant_status: Option<ParticipationStatus>,
    ) -> EventView {
        location::event_with_masked_location(event, viewer_id, participant_status)
    }
}

impl Default for PolicyEngine {
    fn default() -> Self {
        Self::new(crate::config::Settings::default().policy)
    }
}
