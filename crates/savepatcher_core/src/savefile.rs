use std::io::Cursor;
use std::path::Path;

use crate::buffer::ByteBuffer;
use crate::character::Character;
use crate::directory::{SlotDirectory, SlotEntry};
use crate::error::{ErrorCode, Result, SaveError};
use crate::header::SaveHeader;
use crate::reader::LittleEndianReader;

/// A loaded save file: the raw byte arena plus the slot directory and the
/// character projections derived from it.
#[derive(Debug, Clone)]
pub struct SaveFile {
    buffer: ByteBuffer,
    header: SaveHeader,
    directory: SlotDirectory,
    characters: Vec<Character>,
}

impl SaveFile {
    pub fn open(path: &Path) -> Result<Self> {
        Self::from_buffer(ByteBuffer::load(path)?)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::from_buffer(ByteBuffer::from_bytes(bytes)?)
    }

    fn from_buffer(buffer: ByteBuffer) -> Result<Self> {
        let mut r = LittleEndianReader::new(Cursor::new(buffer.as_bytes()));
        let header = SaveHeader::parse(&mut r)
            .map_err(|e| SaveError::new(ErrorCode::Format, format!("bad save header: {e}")))?;
        let directory = SlotDirectory::build(&buffer, &header)?;
        let characters = directory
            .entries()
            .iter()
            .map(|entry| decode_or_placeholder(&buffer, entry))
            .collect();

        Ok(Self {
            buffer,
            header,
            directory,
            characters,
        })
    }

    pub fn header(&self) -> &SaveHeader {
        &self.header
    }

    pub fn slot_count(&self) -> usize {
        self.directory.slot_count()
    }

    /// Character projections in slot index order, one per slot.
    pub fn slots(&self) -> &[Character] {
        &self.characters
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Copy the complete slot record at `index` from `source` into this
    /// save. The copy is byte-verbatim; every byte outside the target
    /// slot's range is left untouched. On any failure the buffer is
    /// unchanged.
    pub fn append_slot(&mut self, source: &SaveFile, index: usize) -> Result<()> {
        let source_entry = *source.directory.entry(index)?;
        let target_entry = *self.directory.entry(index)?;

        if !source_entry.active {
            return Err(SaveError::new(
                ErrorCode::InactiveSlot,
                format!("source slot {index} holds no character"),
            ));
        }
        if source_entry.range.len() != target_entry.range.len() {
            return Err(SaveError::new(
                ErrorCode::FormatMismatch,
                format!(
                    "incompatible slot layouts: source records are {} bytes, target records are {} bytes",
                    source_entry.range.len(),
                    target_entry.range.len()
                ),
            ));
        }

        // A record whose metadata does not decode cleanly is fine to show
        // as a placeholder but must never be copied into another save.
        let record = source
            .buffer
            .slice(source_entry.range.start, source_entry.range.len())?;
        Character::decode(record, index)?;

        self.buffer
            .replace_range(target_entry.range.start, target_entry.range.len(), record)?;
        self.directory.mark_active(index, true)?;

        // The old projection for this slot is stale now.
        self.characters[index] = decode_or_placeholder(&self.buffer, &target_entry);

        Ok(())
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        self.buffer.save(path)
    }
}

fn decode_or_placeholder(buffer: &ByteBuffer, entry: &SlotEntry) -> Character {
    buffer
        .slice(entry.range.start, entry.range.len())
        .and_then(|bytes| Character::decode(bytes, entry.index))
        .unwrap_or_else(|_| Character::placeholder(entry.index))
}
