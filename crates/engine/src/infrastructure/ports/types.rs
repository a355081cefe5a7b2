//! Helper types for port operations.

use std::fmt;

use skirmish_domain::CombatEvent;

// =============================================================================
// Narration Types
// =============================================================================

/// Headings that split the run's output into sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    SpecialActions,
    AllSpecialActions,
}

/// One line of output produced by a combat run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Narration {
    /// Something a character did
    Event(CombatEvent),
    /// The selected player's purse
    PlayerGold(u32),
    Section(Section),
    /// The run could not find a player and a goblin to pit against each other
    InitFailed,
}

impl From<CombatEvent> for Narration {
    fn from(event: CombatEvent) -> Self {
        Self::Event(event)
    }
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event(event) => write!(f, "{event}"),
            Self::PlayerGold(gold) => write!(f, "Player Gold: {gold}"),
            Self::Section(Section::SpecialActions) => write!(f, "\n=== Special Actions ==="),
            Self::Section(Section::AllSpecialActions) => {
                write!(f, "\n=== All Characters' Special Actions ===")
            }
            Self::InitFailed => write!(f, "Failed to initialize game characters."),
        }
    }
}
