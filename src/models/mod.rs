//! Data models module
//!
//! This module contains the document shapes consumed by the policy core

pub mod event;
pub mod location;
pub mod participant;

// Re-export commonly used models
pub use event::{AccessType, Event, EventStatus};
pub use location::{ApproximateCoordinates, Location, LocationVisibility, MaskedLocation};
pub use participant::{Participant, ParticipationStatus};
