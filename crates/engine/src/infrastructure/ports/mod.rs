//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Character storage (could swap the in-memory context for a database)
//! - Narration output (could swap the console for a log, a UI, or a test recorder)

mod error;
mod external;
mod repos;
pub mod types;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::CharacterContext;

// =============================================================================
// External Output Ports
// =============================================================================
pub use external::NarratorPort;

// =============================================================================
// Types from types module (re-export for visibility)
// =============================================================================
pub use types::{Narration, Section};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::MockCharacterContext;

#[cfg(test)]
pub use external::MockNarratorPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
