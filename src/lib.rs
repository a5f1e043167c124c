//! Soireo access-policy core
//!
//! Pure decision engine for the Soireo social-events platform: viewer role
//! resolution and capability flags, address masking with bounded coordinate
//! jitter, and the time-derived event lifecycle state machine. Persistence,
//! realtime transport, authentication, and UI are collaborators; this crate
//! only computes over the snapshots they deliver.

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, SoireoError};

// Re-export main components for easy access
pub use models::{
    AccessType, ApproximateCoordinates, Event, EventStatus, Location, LocationVisibility,
    MaskedLocation, Participant, ParticipationStatus,
};
pub use services::{EventAction, EventView, Permissions, PolicyEngine, UserRole};
