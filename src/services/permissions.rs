//! Access-policy engine
//!
//! Resolves a viewer's role against an event and derives the full capability
//! set from `(event, role, lifecycle status)`. Pure computation: no I/O, no
//! caching, no mutation of inputs. Callers re-invoke on every fresh snapshot
//! delivered by the realtime layer and discard the previous result.
//!
//! Validation comes first: a malformed event fails fast with a missing-field
//! error instead of silently defaulting, since a permissive default here
//! would leak private data.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{AccessType, Event, EventStatus, ParticipationStatus};
use crate::services::lifecycle::{self, DEFAULT_EVENT_DURATION_HOURS};
use crate::utils::errors::{Result, SoireoError};
use crate::utils::logging::log_permissions_computed;

/// Viewer role relative to an event. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Organizer,
    ParticipantApproved,
    ParticipantPending,
    ParticipantRejected,
    External,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Organizer => "ORGANIZER",
            UserRole::ParticipantApproved => "PARTICIPANT_APPROVED",
            UserRole::ParticipantPending => "PARTICIPANT_PENDING",
            UserRole::ParticipantRejected => "PARTICIPANT_REJECTED",
            UserRole::External => "EXTERNAL",
        }
    }
}

/// Capability flags for one viewer against one event.
///
/// Flat booleans so view components can bind without re-deriving policy.
/// Structurally equal for equal inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    pub user_role: UserRole,
    pub is_organizer: bool,
    pub is_approved: bool,

    pub can_view_event_detail: bool,
    pub can_view_info: bool,
    pub can_view_full_address: bool,
    pub can_view_announcements: bool,
    pub can_view_photos: bool,
    pub can_view_participants: bool,

    pub can_join_event: bool,
    pub can_leave_event: bool,
    pub can_edit_event: bool,
    pub can_cancel_event: bool,
    pub can_delete_event: bool,
    pub can_create_announcement: bool,
    pub can_upload_photo: bool,
    pub can_check_in: bool,
    pub can_invite_friends: bool,
    pub can_manage_requests: bool,
}

/// Event fields the engine requires, extracted up front so every flag is
/// computed from validated input or none at all.
struct PolicyInputs {
    access_type: AccessType,
    max_participants: u32,
    current_participants: u32,
}

fn validate_event(event: &Event) -> Result<PolicyInputs> {
    if event.organizer_id.is_empty() {
        return Err(SoireoError::MissingField {
            field: "organizerId",
        });
    }
    if event.status.is_none() {
        return Err(SoireoError::MissingField { field: "status" });
    }
    let access_type = event.effective_access_type()?;
    let max_participants = event.max_participants.ok_or(SoireoError::MissingField {
        field: "maxParticipants",
    })?;
    let current_participants = event.current_participants.ok_or(SoireoError::MissingField {
        field: "currentParticipants",
    })?;

    Ok(PolicyInputs {
        access_type,
        max_participants,
        current_participants,
    })
}

/// Resolve the viewer's role; first match wins.
///
/// The organizer check precedes any participation record, so an organizer
/// carrying a stray participant row still resolves as `Organizer`.
pub fn resolve_role(
    event: &Event,
    viewer_id: Option<&str>,
    participant_status: Option<ParticipationStatus>,
) -> UserRole {
    let viewer_id = match viewer_id {
        Some(id) if !id.is_empty() => id,
        _ => return UserRole::External,
    };

    if event.organizer_id == viewer_id {
        return UserRole::Organizer;
    }

    match participant_status {
        Some(ParticipationStatus::Approved) => UserRole::ParticipantApproved,
        Some(ParticipationStatus::Pending) => UserRole::ParticipantPending,
        Some(ParticipationStatus::Rejected) => UserRole::ParticipantRejected,
        None => UserRole::External,
    }
}

/// Compute the full permission set for a viewer, evaluated at `Utc::now()`.
///
/// `is_friend` is accepted for forward compatibility and unused by the
/// current rule set.
pub fn calculate_permissions(
    event: &Event,
    viewer_id: Option<&str>,
    participant_status: Option<ParticipationStatus>,
    is_friend: bool,
) -> Result<Permissions> {
    calculate_permissions_at(event, viewer_id, participant_status, is_friend, Utc::now())
}

/// Deterministic core of `calculate_permissions`: evaluated at an explicit
/// `now` so the lifecycle-dependent flags are testable.
pub fn calculate_permissions_at(
    event: &Event,
    viewer_id: Option<&str>,
    participant_status: Option<ParticipationStatus>,
    is_friend: bool,
    now: DateTime<Utc>,
) -> Result<Permissions> {
    calculate_permissions_with(
        event,
        viewer_id,
        participant_status,
        is_friend,
        now,
        Duration::hours(DEFAULT_EVENT_DURATION_HOURS),
    )
}

/// `calculate_permissions_at` with a configured default event duration
pub fn calculate_permissions_with(
    event: &Event,
    viewer_id: Option<&str>,
    participant_status: Option<ParticipationStatus>,
    _is_friend: bool,
    now: DateTime<Utc>,
    default_duration: Duration,
) -> Result<Permissions> {
    let inputs = validate_event(event)?;
    let role = resolve_role(event, viewer_id, participant_status);
    let status = lifecycle::calculate_event_status_with(event, now, default_duration);

    let is_organizer = role == UserRole::Organizer;
    let is_approved = role == UserRole::ParticipantApproved;
    let is_authenticated = matches!(viewer_id, Some(id) if !id.is_empty());
    let privileged = is_organizer || is_approved;
    let cancelled = status == EventStatus::Cancelled;
    let full = inputs.current_participants >= inputs.max_participants;

    // The detail page is visible to any authenticated viewer, even one whose
    // role resolves to External; content sections gate separately on role.
    // The per-type match is deliberate so a future per-type rule lands here.
    let can_view_event_detail = match inputs.access_type {
        AccessType::Public => is_authenticated,
        AccessType::Invitation => is_authenticated,
        AccessType::InviteOnly => is_authenticated,
    };

    let can_join_event = !cancelled
        && !full
        && !is_organizer
        && !matches!(
            role,
            UserRole::ParticipantApproved | UserRole::ParticipantPending
        )
        && inputs.access_type != AccessType::InviteOnly;

    let permissions = Permissions {
        user_role: role,
        is_organizer,
        is_approved,

        can_view_event_detail,
        can_view_info: can_view_event_detail,
        can_view_full_address: privileged,
        can_view_announcements: privileged,
        can_view_photos: privileged,
        can_view_participants: privileged,

        can_join_event,
        can_leave_event: matches!(
            role,
            UserRole::ParticipantApproved | UserRole::ParticipantPending
        ),
        can_edit_event: is_organizer,
        can_cancel_event: is_organizer && !cancelled,
        can_delete_event: is_organizer,
        can_create_announcement: is_organizer && !cancelled,
        can_upload_photo: privileged
            && matches!(status, EventStatus::Ongoing | EventStatus::Completed),
        can_check_in: privileged
            && status == EventStatus::Ongoing
            && event.allow_check_in != Some(false),
        can_invite_friends: is_organizer && !cancelled,
        can_manage_requests: is_organizer,
    };

    log_permissions_computed(&event.id, viewer_id, role.as_str());
    Ok(permissions)
}

/// Whether mutating actions are hidden app-wide for this event, regardless of
/// role. True only for a stored cancellation.
pub fn is_read_only(event: &Event) -> bool {
    event.status == Some(EventStatus::Cancelled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::Duration;

    fn test_event() -> Event {
        Event {
            id: "evt-1".to_string(),
            title: "Board game night".to_string(),
            description: None,
            start_time: Utc::now() + Duration::days(2),
            end_time: None,
            location: None,
            organizer_id: "org-1".to_string(),
            max_participants: Some(10),
            current_participants: Some(3),
            access_type: Some(AccessType::Public),
            is_private: None,
            requires_approval: None,
            status: Some(EventStatus::Upcoming),
            allow_check_in: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_role_resolution_first_match_wins() {
        let event = test_event();

        assert_eq!(resolve_role(&event, None, None), UserRole::External);
        assert_eq!(resolve_role(&event, Some(""), None), UserRole::External);
        assert_eq!(resolve_role(&event, Some("org-1"), None), UserRole::Organizer);
        assert_eq!(
            resolve_role(&event, Some("u1"), Some(ParticipationStatus::Approved)),
            UserRole::ParticipantApproved
        );
        assert_eq!(
            resolve_role(&event, Some("u1"), Some(ParticipationStatus::Pending)),
            UserRole::ParticipantPending
        );
        assert_eq!(
            resolve_role(&event, Some("u1"), Some(ParticipationStatus::Rejected)),
            UserRole::ParticipantRejected
        );
        assert_eq!(resolve_role(&event, Some("u1"), None), UserRole::External);
    }

    #[test]
    fn test_organizer_precedence_over_participant_status() {
        let event = test_event();
        assert_eq!(
            resolve_role(&event, Some("org-1"), Some(ParticipationStatus::Rejected)),
            UserRole::Organizer
        );
    }

    #[test]
    fn test_missing_required_fields_fail_fast() {
        let mut event = test_event();
        event.organizer_id = String::new();
        assert_matches!(
            calculate_permissions(&event, Some("u1"), None, false),
            Err(SoireoError::MissingField {
                field: "organizerId"
            })
        );

        let mut event = test_event();
        event.status = None;
        assert_matches!(
            calculate_permissions(&event, Some("u1"), None, false),
            Err(SoireoError::MissingField { field: "status" })
        );

        let mut event = test_event();
        event.max_participants = None;
        assert_matches!(
            calculate_permissions(&event, Some("u1"), None, false),
            Err(SoireoError::MissingField {
                field: "maxParticipants"
            })
        );

        let mut event = test_event();
        event.current_participants = None;
        assert_matches!(
            calculate_permissions(&event, Some("u1"), None, false),
            Err(SoireoError::MissingField {
                field: "currentParticipants"
            })
        );
    }

    #[test]
    fn test_rejected_participant_may_rejoin() {
        let event = test_event();
        let permissions = calculate_permissions(
            &event,
            Some("u1"),
            Some(ParticipationStatus::Rejected),
            false,
        )
        .unwrap();

        assert!(permissions.can_join_event);
        assert!(!permissions.can_leave_event);
    }

    #[test]
    fn test_capacity_boundary() {
        let mut event = test_event();
        event.max_participants = Some(10);
        event.current_participants = Some(9);
        let permissions = calculate_permissions(&event, Some("u1"), None, false).unwrap();
        assert!(permissions.can_join_event);

        event.current_participants = Some(10);
        let permissions = calculate_permissions(&event, Some("u1"), None, false).unwrap();
        assert!(!permissions.can_join_event);
    }

    #[test]
    fn test_authenticated_stranger_sees_detail_page() {
        // No participation record, so the role is External; the detail page
        // is still visible because the viewer is authenticated.
        for access_type in [
            AccessType::Public,
            AccessType::Invitation,
            AccessType::InviteOnly,
        ] {
            let mut event = test_event();
            event.access_type = Some(access_type);

            let permissions =
                calculate_permissions(&event, Some("stranger"), None, false).unwrap();
            assert_eq!(permissions.user_role, UserRole::External);
            assert!(permissions.can_view_event_detail);
            assert!(permissions.can_view_info);

            let anonymous = calculate_permissions(&event, None, None, false).unwrap();
            assert!(!anonymous.can_view_event_detail);

            let empty_id = calculate_permissions(&event, Some(""), None, false).unwrap();
            assert!(!empty_id.can_view_event_detail);
        }
    }

    #[test]
    fn test_invite_only_blocks_join() {
        let mut event = test_event();
        event.access_type = Some(AccessType::InviteOnly);
        let permissions = calculate_permissions(&event, Some("u1"), None, false).unwrap();

        assert!(permissions.can_view_event_detail);
        assert!(!permissions.can_join_event);
    }

    #[test]
    fn test_check_in_requires_ongoing_and_flag() {
        let mut event = test_event();
        event.start_time = Utc::now() - Duration::hours(1);
        event.status = Some(EventStatus::Ongoing);

        let permissions = calculate_permissions(
            &event,
            Some("u1"),
            Some(ParticipationStatus::Approved),
            false,
        )
        .unwrap();
        assert!(permissions.can_check_in);
        assert!(permissions.can_upload_photo);

        event.allow_check_in = Some(false);
        let permissions = calculate_permissions(
            &event,
            Some("u1"),
            Some(ParticipationStatus::Approved),
            false,
        )
        .unwrap();
        assert!(!permissions.can_check_in);
    }

    #[test]
    fn test_cancelled_event_is_read_only() {
        let mut event = test_event();
        event.status = Some(EventStatus::Cancelled);

        assert!(is_read_only(&event));

        let permissions = calculate_permissions(&event, Some("org-1"), None, false).unwrap();
        assert!(!permissions.can_join_event);
        assert!(!permissions.can_cancel_event);
        assert!(!permissions.can_create_announcement);
        assert!(!permissions.can_invite_friends);
        assert!(!permissions.can_upload_photo);
        assert!(!permissions.can_check_in);
        // Edit and delete carry no cancelled check; is_read_only is the
        // app-wide guard.
        assert!(permissions.can_edit_event);
        assert!(permissions.can_delete_event);
    }

    #[test]
    fn test_purity_same_inputs_same_output() {
        let event = test_event();
        let now = Utc::now();
        let first = calculate_permissions_at(
            &event,
            Some("u1"),
            Some(ParticipationStatus::Pending),
            false,
            now,
        )
        .unwrap();
        let second = calculate_permissions_at(
            &event,
            Some("u1"),
            Some(ParticipationStatus::Pending),
            false,
            now,
        )
        .unwrap();

        assert_eq!(first, second);
    }
}
