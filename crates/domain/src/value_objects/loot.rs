//! Loot - the treasure a lootable character carries
//!
//! Treasure is a one-time resource: once taken it is gone and nothing in the
//! domain puts it back, short of an explicit `set_treasure` from seeding code.

/// Gold a player receives for each treasure taken in combat.
pub const TREASURE_GOLD_VALUE: u32 = 10;

/// The lootable capability: an optional treasure descriptor.
///
/// # Invariants
///
/// - A present treasure is never an empty or whitespace-only string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Loot {
    treasure: Option<String>,
}

impl Loot {
    /// Loot holding the given treasure. Blank descriptors produce empty loot.
    pub fn new(treasure: impl Into<String>) -> Self {
        Self::from_option(Some(treasure.into()))
    }

    /// Loot with nothing left to take.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from an optional descriptor, normalising blanks to absent.
    pub fn from_option(treasure: Option<String>) -> Self {
        Self {
            treasure: treasure.filter(|t| !t.trim().is_empty()),
        }
    }

    #[inline]
    pub fn treasure(&self) -> Option<&str> {
        self.treasure.as_deref()
    }

    #[inline]
    pub fn has_treasure(&self) -> bool {
        self.treasure.is_some()
    }

    /// Remove and return the treasure. Subsequent calls return `None`.
    pub fn take(&mut self) -> Option<String> {
        self.treasure.take()
    }

    pub fn set_treasure(&mut self, treasure: Option<String>) {
        *self = Self::from_option(treasure);
    }

    pub(crate) fn into_option(self) -> Option<String> {
        self.treasure
    }
}
