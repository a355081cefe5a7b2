//! Character aggregate - players, goblins and ghosts
//!
//! # Rustic DDD Design
//!
//! - **Closed variants**: `CharacterVariant` replaces a class hierarchy; every
//!   capability check is a `match`, never a downcast
//! - **Newtypes**: `CharacterName` is valid by construction and never reassigned
//! - **Domain events**: behaviour returns `CombatEvent`/`AttackOutcome` values
//!   instead of printing

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;
use crate::events::{AttackOutcome, CombatEvent, LootTransfer, SpecialAction};
use crate::value_objects::{CharacterName, Loot, TREASURE_GOLD_VALUE};

const DEFAULT_LEVEL: u32 = 1;
const DEFAULT_HIT_POINTS: i32 = 10;

/// Discriminator for the concrete kind of character.
///
/// Also used as the `$type` tag of the serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Player,
    Goblin,
    Ghost,
}

impl VariantKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Goblin => "Goblin",
            Self::Ghost => "Ghost",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VariantKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Player" => Ok(Self::Player),
            "Goblin" => Ok(Self::Goblin),
            "Ghost" => Ok(Self::Ghost),
            other => Err(DomainError::unsupported_variant(other)),
        }
    }
}

/// Variant-specific payload carried alongside the shared character record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterVariant {
    Player { gold: u32 },
    Goblin(Loot),
    Ghost(Loot),
}

impl CharacterVariant {
    pub fn kind(&self) -> VariantKind {
        match self {
            Self::Player { .. } => VariantKind::Player,
            Self::Goblin(_) => VariantKind::Goblin,
            Self::Ghost(_) => VariantKind::Ghost,
        }
    }
}

/// A character taking part in a skirmish
///
/// # Invariants
///
/// - `name` is always non-empty and <= 200 characters (enforced by `CharacterName`)
/// - `name` never changes after construction
/// - Player gold is never negative (enforced by `u32`)
///
/// # Example
///
/// ```
/// use skirmish_domain::aggregates::Character;
/// use skirmish_domain::value_objects::CharacterName;
///
/// let mut hero = Character::player(CharacterName::new("Hero").unwrap(), 0);
/// let mut grunt = Character::goblin(CharacterName::new("Grunt").unwrap(), Some("Amulet"));
///
/// let outcome = hero.attack(&mut grunt);
/// assert!(outcome.transferred());
/// assert_eq!(hero.gold(), Some(10));
/// assert_eq!(grunt.loot().and_then(|l| l.treasure()), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    name: CharacterName,
    kind: String,
    level: u32,
    hit_points: i32,
    variant: CharacterVariant,
}

impl Character {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a character with default stats (level 1, 10 HP) and the
    /// variant name as its kind label.
    pub fn new(name: CharacterName, variant: CharacterVariant) -> Self {
        Self {
            name,
            kind: variant.kind().as_str().to_string(),
            level: DEFAULT_LEVEL,
            hit_points: DEFAULT_HIT_POINTS,
            variant,
        }
    }

    pub fn player(name: CharacterName, gold: u32) -> Self {
        Self::new(name, CharacterVariant::Player { gold })
    }

    pub fn goblin(name: CharacterName, treasure: Option<&str>) -> Self {
        Self::new(
            name,
            CharacterVariant::Goblin(Loot::from_option(treasure.map(str::to_string))),
        )
    }

    pub fn ghost(name: CharacterName, treasure: Option<&str>) -> Self {
        Self::new(
            name,
            CharacterVariant::Ghost(Loot::from_option(treasure.map(str::to_string))),
        )
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_hit_points(mut self, hit_points: i32) -> Self {
        self.hit_points = hit_points;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    /// Free-form kind label (e.g. "Human", "Goblin").
    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn hit_points(&self) -> i32 {
        self.hit_points
    }

    #[inline]
    pub fn variant(&self) -> &CharacterVariant {
        &self.variant
    }

    #[inline]
    pub fn variant_kind(&self) -> VariantKind {
        self.variant.kind()
    }

    // =========================================================================
    // Capabilities
    // =========================================================================

    #[inline]
    pub fn is_player(&self) -> bool {
        matches!(self.variant, CharacterVariant::Player { .. })
    }

    /// Gold carried, if this character is a player.
    pub fn gold(&self) -> Option<u32> {
        match self.variant {
            CharacterVariant::Player { gold } => Some(gold),
            _ => None,
        }
    }

    /// The lootable capability, if this character has one.
    pub fn loot(&self) -> Option<&Loot> {
        match &self.variant {
            CharacterVariant::Goblin(loot) | CharacterVariant::Ghost(loot) => Some(loot),
            CharacterVariant::Player { .. } => None,
        }
    }

    pub fn loot_mut(&mut self) -> Option<&mut Loot> {
        match &mut self.variant {
            CharacterVariant::Goblin(loot) | CharacterVariant::Ghost(loot) => Some(loot),
            CharacterVariant::Player { .. } => None,
        }
    }

    #[inline]
    pub fn is_lootable(&self) -> bool {
        self.loot().is_some()
    }

    #[inline]
    pub fn can_fly(&self) -> bool {
        matches!(self.variant, CharacterVariant::Ghost(_))
    }

    fn gold_mut(&mut self) -> Option<&mut u32> {
        match &mut self.variant {
            CharacterVariant::Player { gold } => Some(gold),
            _ => None,
        }
    }

    // =========================================================================
    // Behaviour
    // =========================================================================

    /// Move one step. Every character can.
    pub fn advance(&self) -> CombatEvent {
        CombatEvent::Moved {
            name: self.name.clone(),
        }
    }

    /// Attack another character, looting it if the attacker is a player.
    ///
    /// Only players take anything. Treasure is checked before gold, so at most one
    /// transfer happens per attack:
    /// - A lootable target with treasure loses it and the attacker gains
    ///   `TREASURE_GOLD_VALUE` gold
    /// - Otherwise a player target with gold loses all of it to the attacker
    pub fn attack(&mut self, target: &mut Character) -> AttackOutcome {
        let transfer = match self.gold_mut() {
            Some(attacker_gold) => Self::plunder(attacker_gold, target),
            None => LootTransfer::Nothing,
        };

        AttackOutcome {
            attacker: self.name.clone(),
            target: target.name.clone(),
            transfer,
        }
    }

    fn plunder(attacker_gold: &mut u32, target: &mut Character) -> LootTransfer {
        if let Some(treasure) = target.loot_mut().and_then(Loot::take) {
            *attacker_gold = attacker_gold.saturating_add(TREASURE_GOLD_VALUE);
            return LootTransfer::Treasure {
                treasure,
                gold_value: TREASURE_GOLD_VALUE,
            };
        }

        match target.gold_mut() {
            Some(target_gold) if *target_gold > 0 => {
                let amount = std::mem::take(target_gold);
                *attacker_gold = attacker_gold.saturating_add(amount);
                LootTransfer::Gold { amount }
            }
            _ => LootTransfer::Nothing,
        }
    }

    /// The variant's signature move. Pure output, no state change.
    pub fn perform_special_action(&self) -> CombatEvent {
        let action = match self.variant {
            CharacterVariant::Player { .. } => SpecialAction::SwordStrike,
            CharacterVariant::Goblin(_) => SpecialAction::Backstab,
            CharacterVariant::Ghost(_) => SpecialAction::PhaseThroughWalls,
        };
        CombatEvent::SpecialAction {
            name: self.name.clone(),
            action,
        }
    }

    /// Fly, if this character can.
    pub fn fly(&self) -> Option<CombatEvent> {
        self.can_fly().then(|| CombatEvent::Flew {
            name: self.name.clone(),
        })
    }
}

// =============================================================================
// Serde Implementation
// =============================================================================

/// Flat, tagged wire form of a character.
///
/// `variant` is kept as a raw string so an unknown tag surfaces as
/// `DomainError::UnsupportedVariant` instead of a generic parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    #[serde(rename = "$type")]
    pub variant: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default = "default_hit_points")]
    pub hp: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treasure: Option<String>,
}

fn default_level() -> u32 {
    DEFAULT_LEVEL
}

fn default_hit_points() -> i32 {
    DEFAULT_HIT_POINTS
}

impl From<&Character> for CharacterRecord {
    fn from(character: &Character) -> Self {
        let (gold, treasure) = match &character.variant {
            CharacterVariant::Player { gold } => (Some(*gold), None),
            CharacterVariant::Goblin(loot) | CharacterVariant::Ghost(loot) => {
                (None, loot.clone().into_option())
            }
        };
        Self {
            variant: character.variant_kind().as_str().to_string(),
            name: character.name.to_string(),
            kind: Some(character.kind.clone()),
            level: character.level,
            hp: character.hit_points,
            gold,
            treasure,
        }
    }
}

impl TryFrom<CharacterRecord> for Character {
    type Error = DomainError;

    fn try_from(record: CharacterRecord) -> Result<Self, Self::Error> {
        // The tag decides the shape, so it is checked before any field.
        let kind = record.variant.parse::<VariantKind>()?;
        let name = CharacterName::new(record.name)?;
        let variant = match kind {
            VariantKind::Player => CharacterVariant::Player {
                gold: record.gold.unwrap_or(0),
            },
            VariantKind::Goblin => CharacterVariant::Goblin(Loot::from_option(record.treasure)),
            VariantKind::Ghost => CharacterVariant::Ghost(Loot::from_option(record.treasure)),
        };

        let mut character = Character::new(name, variant)
            .with_level(record.level)
            .with_hit_points(record.hp);
        if let Some(kind) = record.kind.filter(|k| !k.trim().is_empty()) {
            character = character.with_kind(kind);
        }
        Ok(character)
    }
}

impl Serialize for Character {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        CharacterRecord::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Character {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = CharacterRecord::deserialize(deserializer)?;
        Character::try_from(record).map_err(serde::de::Error::custom)
    }
}
