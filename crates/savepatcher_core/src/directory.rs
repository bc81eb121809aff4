use crate::buffer::ByteBuffer;
use crate::error::{ErrorCode, Result, SaveError};
use crate::format::{ACTIVE_OFFSET, HEADER_SIZE};
use crate::header::SaveHeader;
use crate::layout::ByteRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotEntry {
    pub index: usize,
    pub range: ByteRange,
    pub active: bool,
}

/// In-memory index mapping slot index to byte range and activity.
/// Entry ranges are contiguous, non-overlapping, and in index order.
#[derive(Debug, Clone)]
pub struct SlotDirectory {
    entries: Vec<SlotEntry>,
    record_size: usize,
}

impl SlotDirectory {
    pub fn build(buffer: &ByteBuffer, header: &SaveHeader) -> Result<Self> {
        let slot_count = header.slot_count as usize;
        let record_size = header.record_size as usize;

        let table_end = record_size
            .checked_mul(slot_count)
            .and_then(|len| HEADER_SIZE.checked_add(len))
            .ok_or_else(|| SaveError::new(ErrorCode::Format, "slot table size overflows usize"))?;
        if table_end > buffer.len() {
            return Err(SaveError::new(
                ErrorCode::Format,
                format!(
                    "slot table runs past end of file: need {table_end} bytes, have {}",
                    buffer.len()
                ),
            ));
        }

        let mut entries = Vec::with_capacity(slot_count);
        for index in 0..slot_count {
            let start = HEADER_SIZE + index * record_size;
            let active = buffer.slice(start + ACTIVE_OFFSET, 1)?[0] != 0;
            entries.push(SlotEntry {
                index,
                range: ByteRange {
                    start,
                    end: start + record_size,
                },
                active,
            });
        }

        Ok(Self {
            entries,
            record_size,
        })
    }

    pub fn slot_count(&self) -> usize {
        self.entries.len()
    }

    pub fn record_size(&self) -> usize {
        self.record_size
    }

    pub fn entries(&self) -> &[SlotEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Result<&SlotEntry> {
        let count = self.entries.len();
        self.entries.get(index).ok_or_else(|| {
            SaveError::new(
                ErrorCode::IndexOutOfRange,
                format!("slot index {index} out of range, save has {count} slots"),
            )
        })
    }

    /// Bookkeeping after a transplant; no I/O.
    pub fn mark_active(&mut self, index: usize, active: bool) -> Result<()> {
        let count = self.entries.len();
        let entry = self.entries.get_mut(index).ok_or_else(|| {
            SaveError::new(
                ErrorCode::IndexOutOfRange,
                format!("slot index {index} out of range, save has {count} slots"),
            )
        })?;
        entry.active = active;
        Ok(())
    }
}
