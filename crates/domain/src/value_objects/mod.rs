//! Value objects - immutable, validated building blocks of the aggregates

mod loot;
mod names;

pub use loot::{Loot, TREASURE_GOLD_VALUE};
pub use names::CharacterName;
