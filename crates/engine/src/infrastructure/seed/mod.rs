//! Built-in starting roster.
//!
//! Compiled into the binary so a run needs no files on disk.

use skirmish_domain::Character;

use crate::infrastructure::codec::{self, CodecError};

const DEFAULT_ROSTER: &str = include_str!("roster.json");

/// Hero the player, Grunt the goblin and Wisp the ghost, in that order.
pub fn default_roster() -> Result<Vec<Character>, CodecError> {
    codec::decode_roster(DEFAULT_ROSTER)
}
