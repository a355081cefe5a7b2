//! Combat use case.

mod engine;
mod types;

pub use engine::CombatEngine;
pub use types::{CombatError, RunReport};
