//! Domain Events
//!
//! Return types from aggregate behaviour, communicating what happened when a
//! character acted. Adapters decide how (and whether) to show them.

pub mod character_events;
pub mod combat_events;

pub use character_events::*;
pub use combat_events::*;
