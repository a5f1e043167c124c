//! Event lifecycle status derivation
//!
//! The lifecycle state is purely time-driven: `Upcoming` before the start
//! time, `Ongoing` between start and end, `Completed` after the end. The one
//! exception is `Cancelled`, an absorbing state set by an explicit organizer
//! action; once stored, it wins over every date computation. Re-evaluation is
//! lazy — callers refresh on read or via a periodic sweep and write back only
//! when the computed status differs from the stored one.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Event, EventStatus};
use crate::utils::logging::log_status_refresh;

/// Assumed duration of events without an explicit end time
pub const DEFAULT_EVENT_DURATION_HOURS: i64 = 3;

/// Actions a view may offer for an event, keyed by lifecycle state.
///
/// Exhaustive enum rather than a dynamic action map so a new action cannot be
/// added without the match arms below being revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventAction {
    Invite,
    Share,
    Edit,
    Cancel,
    SendReminder,
    CheckIn,
    UploadPhoto,
    PostUpdate,
    MakeAnnouncement,
    ViewPhotos,
    WriteReview,
    ThankParticipants,
    DownloadPhotos,
}

/// Planned write-back for an event whose stored status went stale
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub event_id: String,
    pub from: Option<EventStatus>,
    pub to: EventStatus,
}

/// Derive the lifecycle status of an event at `now`.
///
/// A stored `Cancelled` status is returned unconditionally.
pub fn calculate_event_status(event: &Event, now: DateTime<Utc>) -> EventStatus {
    calculate_event_status_with(event, now, Duration::hours(DEFAULT_EVENT_DURATION_HOURS))
}

/// Derive the lifecycle status with a configured default duration for events
/// that carry no explicit end time.
pub fn calculate_event_status_with(
    event: &Event,
    now: DateTime<Utc>,
    default_duration: Duration,
) -> EventStatus {
    if event.status == Some(EventStatus::Cancelled) {
        return EventStatus::Cancelled;
    }

    let end_time = event
        .end_time
        .unwrap_or(event.start_time + default_duration);

    if now < event.start_time {
        EventStatus::Upcoming
    } else if now <= end_time {
        EventStatus::Ongoing
    } else {
        EventStatus::Completed
    }
}

/// Compute the status an event should carry, returning `Some` only when it
/// differs from the stored one so callers write back nothing otherwise.
pub fn refresh_status(event: &Event, now: DateTime<Utc>) -> Option<EventStatus> {
    refresh_status_with(event, now, Duration::hours(DEFAULT_EVENT_DURATION_HOURS))
}

/// `refresh_status` with a configured default duration
pub fn refresh_status_with(
    event: &Event,
    now: DateTime<Utc>,
    default_duration: Duration,
) -> Option<EventStatus> {
    let computed = calculate_event_status_with(event, now, default_duration);
    if event.status == Some(computed) {
        return None;
    }

    log_status_refresh(
        &event.id,
        event.status.map(status_name),
        status_name(computed),
    );
    Some(computed)
}

/// Plan a sweep batch over a snapshot of events, keeping only the ones whose
/// stored status went stale. The sweep cadence belongs to the caller's
/// scheduler.
pub fn stale_statuses(events: &[Event], now: DateTime<Utc>) -> Vec<StatusUpdate> {
    stale_statuses_with(events, now, Duration::hours(DEFAULT_EVENT_DURATION_HOURS))
}

/// `stale_statuses` with a configured default duration
pub fn stale_statuses_with(
    events: &[Event],
    now: DateTime<Utc>,
    default_duration: Duration,
) -> Vec<StatusUpdate> {
    events
        .iter()
        .filter_map(|event| {
            refresh_status_with(event, now, default_duration).map(|to| StatusUpdate {
                event_id: event.id.clone(),
                from: event.status,
                to,
            })
        })
        .collect()
}

/// Actions valid for an event at `now`, derived from its lifecycle status
pub fn available_actions(event: &Event, is_organizer: bool, now: DateTime<Utc>) -> Vec<EventAction> {
    actions_for_status(calculate_event_status(event, now), is_organizer)
}

/// Actions valid per lifecycle state; organizers get the management set on top
pub fn actions_for_status(status: EventStatus, is_organizer: bool) -> Vec<EventAction> {
    match status {
        EventStatus::Upcoming => {
            let mut actions = vec![EventAction::Invite, EventAction::Share];
            if is_organizer {
                actions.extend([
                    EventAction::Edit,
                    EventAction::Cancel,
                    EventAction::SendReminder,
                ]);
            }
            actions
        }
        EventStatus::Ongoing => {
            let mut actions = vec![
                EventAction::CheckIn,
                EventAction::UploadPhoto,
                EventAction::PostUpdate,
            ];
            if is_organizer {
                actions.push(EventAction::MakeAnnouncement);
            }
            actions
        }
        EventStatus::Completed => {
            let mut actions = vec![
                EventAction::UploadPhoto,
                EventAction::ViewPhotos,
                EventAction::WriteReview,
            ];
            if is_organizer {
                actions.extend([EventAction::ThankParticipants, EventAction::DownloadPhotos]);
            }
            actions
        }
        EventStatus::Cancelled => Vec::new(),
    }
}

fn status_name(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Upcoming => "UPCOMING",
        EventStatus::Ongoing => "ONGOING",
        EventStatus::Completed => "COMPLETED",
        EventStatus::Cancelled => "CANCELLED",
    }
}
