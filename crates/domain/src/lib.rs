//! Skirmish domain layer.
//!
//! Characters, their loot, and the events their behaviour produces. Nothing in
//! this crate performs I/O; adapters in the engine decide how events are shown
//! and where characters live.

pub mod aggregates;
pub mod error;
pub mod events;
pub mod value_objects;

pub use aggregates::{Character, CharacterRecord, CharacterVariant, VariantKind};
pub use error::DomainError;
pub use events::{AttackOutcome, CombatEvent, LootTransfer, SpecialAction};
pub use value_objects::{CharacterName, Loot, TREASURE_GOLD_VALUE};
