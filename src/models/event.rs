//! Event model
//!
//! Events arrive as camelCase JSON documents from the "events" collection.
//! Fields the policy engine requires are typed as `Option` here and validated
//! at the engine boundary so a malformed document fails fast instead of
//! silently defaulting to permissive behavior.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::location::Location;
use crate::utils::errors::{Result, SoireoError};

/// Event-level access policy controlling discoverability and join flow.
///
/// The stored value `PRIVATE` is a legacy alias of `INVITE_ONLY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessType {
    Public,
    Invitation,
    #[serde(alias = "PRIVATE")]
    InviteOnly,
}

/// Event lifecycle status; `Cancelled` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub location: Option<Location>,
    pub organizer_id: String,
    pub max_participants: Option<u32>,
    pub current_participants: Option<u32>,
    pub access_type: Option<AccessType>,
    /// Legacy flag, superseded by `access_type`
    pub is_private: Option<bool>,
    /// Legacy flag, superseded by `access_type`
    pub requires_approval: Option<bool>,
    pub status: Option<EventStatus>,
    /// Absent means check-in is allowed
    pub allow_check_in: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Event {
    /// Deserialize an event from a raw document-store snapshot
    pub fn from_document(document: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(document)?)
    }

    /// Resolve the effective access type, normalizing the legacy flags.
    ///
    /// An explicit `access_type` wins. Otherwise `is_private = true` maps to
    /// `InviteOnly`, `requires_approval = true` maps to `Invitation`, and any
    /// other combination of present legacy flags maps to `Public`. A document
    /// carrying neither form is malformed.
    pub fn effective_access_type(&self) -> Result<AccessType> {
        if let Some(access_type) = self.access_type {
            return Ok(access_type);
        }
        match (self.is_private, self.requires_approval) {
            (Some(true), _) => Ok(AccessType::InviteOnly),
            (_, Some(true)) => Ok(AccessType::Invitation),
            (Some(false), _) | (_, Some(false)) => Ok(AccessType::Public),
            (None, None) => Err(SoireoError::MissingField {
                field: "accessType",
            }),
        }
    }

}
