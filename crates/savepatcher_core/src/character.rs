use std::io::{self, Cursor};

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, Result, SaveError};
use crate::format::{ACTIVE_OFFSET, LEVEL_OFFSET, NAME_OFFSET, NAME_SIZE, PLAY_SECONDS_OFFSET};
use crate::reader::LittleEndianReader;

/// Read-only projection of one slot record's metadata. Recomputed from the
/// buffer whenever the slot's bytes change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub slot_index: usize,
    pub name: String,
    pub level: u16,
    pub seconds_played: u32,
    pub active: bool,
}

impl Character {
    pub fn decode(bytes: &[u8], slot_index: usize) -> Result<Self> {
        let (active, name, level, seconds_played) = decode_fields(bytes).map_err(|e| {
            SaveError::new(ErrorCode::Format, format!("slot {slot_index}: {e}"))
        })?;
        Ok(Self {
            slot_index,
            name,
            level,
            seconds_played,
            active,
        })
    }

    /// Stand-in shown when a slot fails to decode. Display keeps going;
    /// transplants refuse such slots.
    pub fn placeholder(slot_index: usize) -> Self {
        Self {
            slot_index,
            name: String::new(),
            level: 0,
            seconds_played: 0,
            active: false,
        }
    }
}

fn decode_fields(bytes: &[u8]) -> io::Result<(bool, String, u16, u32)> {
    let mut r = LittleEndianReader::new(Cursor::new(bytes));

    r.seek_to(ACTIVE_OFFSET as u64)?;
    let active = r.read_u8()? != 0;

    r.seek_to(NAME_OFFSET as u64)?;
    let name = r.read_fixed_string(NAME_SIZE)?;

    r.seek_to(LEVEL_OFFSET as u64)?;
    let level = r.read_u16()?;

    r.seek_to(PLAY_SECONDS_OFFSET as u64)?;
    let seconds_played = r.read_u32()?;

    Ok((active, name, level, seconds_played))
}

#[cfg(test)]
mod tests {
    use super::Character;
    use crate::error::ErrorCode;
    use crate::format::{
        ACTIVE_OFFSET, LEVEL_OFFSET, NAME_OFFSET, PLAY_SECONDS_OFFSET, SLOT_META_SIZE,
    };

    fn slot_record(name: &[u8], level: u16, seconds: u32) -> Vec<u8> {
        let mut bytes = vec![0u8; SLOT_META_SIZE + 16];
        bytes[ACTIVE_OFFSET] = 1;
        bytes[NAME_OFFSET..NAME_OFFSET + name.len()].copy_from_slice(name);
        bytes[LEVEL_OFFSET..LEVEL_OFFSET + 2].copy_from_slice(&level.to_le_bytes());
        bytes[PLAY_SECONDS_OFFSET..PLAY_SECONDS_OFFSET + 4]
            .copy_from_slice(&seconds.to_le_bytes());
        bytes
    }

    #[test]
    fn decodes_metadata_fields() {
        let bytes = slot_record(b"Hero", 30, 12 * 3600);
        let character = Character::decode(&bytes, 2).expect("record should decode");
        assert_eq!(character.slot_index, 2);
        assert_eq!(character.name, "Hero");
        assert_eq!(character.level, 30);
        assert_eq!(character.seconds_played, 43_200);
        assert!(character.active);
    }

    #[test]
    fn name_padding_is_trimmed() {
        let bytes = slot_record(b"Al\0\0\0\0", 1, 0);
        let character = Character::decode(&bytes, 0).expect("record should decode");
        assert_eq!(character.name, "Al");
    }

    #[test]
    fn invalid_name_bytes_fail_with_format_error() {
        let bytes = slot_record(&[0xFF, 0xFE, 0xFD], 1, 0);
        let err = Character::decode(&bytes, 0).expect_err("invalid UTF-8 should fail");
        assert_eq!(err.code, ErrorCode::Format);
    }

    #[test]
    fn record_shorter_than_metadata_fails() {
        let bytes = vec![1u8; SLOT_META_SIZE - 1];
        let err = Character::decode(&bytes, 0).expect_err("short record should fail");
        assert_eq!(err.code, ErrorCode::Format);
    }

    #[test]
    fn zero_sentinel_decodes_as_inactive() {
        let mut bytes = slot_record(b"Ghost", 5, 60);
        bytes[ACTIVE_OFFSET] = 0;
        let character = Character::decode(&bytes, 1).expect("record should decode");
        assert!(!character.active);
    }
}
