//! JSON codec for characters.
//!
//! Characters travel as flat records tagged with a `$type` discriminator.
//! Decoding goes through `CharacterRecord` first so an unknown discriminator is
//! reported as `DomainError::UnsupportedVariant` rather than a JSON error.

use skirmish_domain::{Character, CharacterRecord, DomainError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    /// Malformed JSON or a record missing required fields.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed record the domain refuses (unknown variant, invalid name).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

impl CodecError {
    pub fn is_unsupported_variant(&self) -> bool {
        matches!(self, Self::Domain(err) if err.is_unsupported_variant())
    }
}

pub fn decode_character(json: &str) -> Result<Character, CodecError> {
    let record: CharacterRecord = serde_json::from_str(json)?;
    Ok(Character::try_from(record)?)
}

/// Decode a JSON array of characters, preserving order.
pub fn decode_roster(json: &str) -> Result<Vec<Character>, CodecError> {
    let records: Vec<CharacterRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .map(|record| Character::try_from(record).map_err(CodecError::from))
        .collect()
}

pub fn encode_character(character: &Character) -> Result<String, CodecError> {
    Ok(serde_json::to_string(character)?)
}

pub fn encode_roster(characters: &[Character]) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(characters)?)
}
