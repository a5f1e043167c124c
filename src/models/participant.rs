//! Participation record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::errors::Result;

/// Participation-request tri-state gating visibility and actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipationStatus {
    Pending,
    Approved,
    Rejected,
}

/// Join record for an `(event, user)` pair.
///
/// Uniqueness per pair is enforced by the participants collection, not
/// re-verified here; the policy engine consumes at most one status per viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub event_id: String,
    pub user_id: String,
    pub status: ParticipationStatus,
    pub joined_at: DateTime<Utc>,
}

impl Participant {
    /// Deserialize a participant from a raw document-store snapshot
    pub fn from_document(document: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(document)?)
    }
}
