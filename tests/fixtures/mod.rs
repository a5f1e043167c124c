//! Test fixtures for the policy-core integration tests
//!
//! Builder-style event and location fixtures so scenario tests read as the
//! situation they describe rather than as struct literals.

#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use fake::faker::lorem::en::Sentence;
use fake::Fake;

use soireo_core::models::{
    AccessType, Event, EventStatus, Location, LocationVisibility, Participant,
    ParticipationStatus,
};

/// Builder for event fixtures
#[derive(Debug, Clone)]
pub struct EventBuilder {
    event: Event,
}

impl EventBuilder {
    /// A public upcoming event starting in two days with capacity 10/3
    pub fn new(id: &str, organizer_id: &str) -> Self {
        let start = Utc::now() + Duration::days(2);
        Self {
            event: Event {
                id: id.to_string(),
                title: Sentence(2..5).fake(),
                description: None,
                start_time: start,
                end_time: None,
                location: None,
                organizer_id: organizer_id.to_string(),
                max_participants: Some(10),
                current_participants: Some(3),
                access_type: Some(AccessType::Public),
                is_private: None,
                requires_approval: None,
                status: Some(EventStatus::Upcoming),
                allow_check_in: None,
                created_at: Some(Utc::now()),
                updated_at: None,
            },
        }
    }

    pub fn with_access(mut self, access_type: AccessType) -> Self {
        self.event.access_type = Some(access_type);
        self
    }

    /// Clear `access_type` and set the legacy flags instead
    pub fn with_legacy_flags(
        mut self,
        is_private: Option<bool>,
        requires_approval: Option<bool>,
    ) -> Self {
        self.event.access_type = None;
        self.event.is_private = is_private;
        self.event.requires_approval = requires_approval;
        self
    }

    pub fn with_status(mut self, status: EventStatus) -> Self {
        self.event.status = Some(status);
        self
    }

    pub fn with_capacity(mut self, max: u32, current: u32) -> Self {
        self.event.max_participants = Some(max);
        self.event.current_participants = Some(current);
        self
    }

    pub fn starting_at(mut self, start: DateTime<Utc>) -> Self {
        self.event.start_time = start;
        self
    }

    pub fn ending_at(mut self, end: DateTime<Utc>) -> Self {
        self.event.end_time = Some(end);
        self
    }

    /// Shift the schedule so the event is currently running and mark it so
    pub fn ongoing_now(mut self) -> Self {
        self.event.start_time = Utc::now() - Duration::hours(1);
        self.event.end_time = Some(Utc::now() + Duration::hours(1));
        self.event.status = Some(EventStatus::Ongoing);
        self
    }

    pub fn with_check_in(mut self, allowed: bool) -> Self {
        self.event.allow_check_in = Some(allowed);
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.event.location = Some(location);
        self
    }

    pub fn build(self) -> Event {
        self.event
    }
}

/// A migrated location carrying its precomputed jitter pair
pub fn berlin_location() -> Location {
    Location {
        address: "Oranienstraße 45".to_string(),
        city: "Berlin".to_string(),
        zip_code: Some("10969".to_string()),
        country: Some("Germany".to_string()),
        latitude: 52.5011,
        longitude: 13.4180,
        approximate_latitude: Some(52.5073),
        approximate_longitude: Some(13.4112),
        visibility: Some(LocationVisibility::ParticipantsOnly),
    }
}

/// A location that predates the jitter migration
pub fn unmigrated_location() -> Location {
    let mut location = berlin_location();
    location.approximate_latitude = None;
    location.approximate_longitude = None;
    location
}

/// Participation record fixture
pub fn participant(event_id: &str, user_id: &str, status: ParticipationStatus) -> Participant {
    Participant {
        event_id: event_id.to_string(),
        user_id: user_id.to_string(),
        status,
        joined_at: Utc::now() - Duration::days(1),
    }
}
