//! Data models for Eventmap

pub mod event;

// Re-export commonly used types
pub use event::{CreateEvent, Event, EventFilter, EventWithDistance, Location, UpdateEvent};
