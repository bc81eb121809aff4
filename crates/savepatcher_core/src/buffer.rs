use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ErrorCode, Result, SaveError};
use crate::format::HEADER_SIZE;

/// Owned raw contents of a save file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
}

impl ByteBuffer {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| {
            SaveError::new(
                ErrorCode::Io,
                format!("failed to read {}: {e}", path.display()),
            )
        })?;
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(SaveError::new(
                ErrorCode::Format,
                format!(
                    "file too short for a save header: {} bytes, need at least {HEADER_SIZE}",
                    bytes.len()
                ),
            ));
        }
        Ok(Self { bytes })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn slice(&self, offset: usize, length: usize) -> Result<&[u8]> {
        let end = offset.checked_add(length).ok_or_else(|| {
            SaveError::new(ErrorCode::OutOfBounds, "slice range overflows usize")
        })?;
        self.bytes.get(offset..end).ok_or_else(|| {
            SaveError::new(
                ErrorCode::OutOfBounds,
                format!(
                    "slice {offset}..{end} exceeds buffer length {}",
                    self.bytes.len()
                ),
            )
        })
    }

    /// Overwrite exactly `length` bytes at `offset`. The replacement must be
    /// the same length as the range; slot transplants never resize the file.
    pub fn replace_range(&mut self, offset: usize, length: usize, new_bytes: &[u8]) -> Result<()> {
        if new_bytes.len() != length {
            return Err(SaveError::new(
                ErrorCode::LengthMismatch,
                format!(
                    "replacement is {} bytes, range is {length} bytes",
                    new_bytes.len()
                ),
            ));
        }
        let end = offset.checked_add(length).ok_or_else(|| {
            SaveError::new(ErrorCode::OutOfBounds, "replace range overflows usize")
        })?;
        let buffer_len = self.bytes.len();
        let target = self.bytes.get_mut(offset..end).ok_or_else(|| {
            SaveError::new(
                ErrorCode::OutOfBounds,
                format!("range {offset}..{end} exceeds buffer length {buffer_len}"),
            )
        })?;
        target.copy_from_slice(new_bytes);
        Ok(())
    }

    /// Write the buffer to a temporary sibling file, then rename into place,
    /// so a crash mid-write never leaves a half-written save behind.
    pub fn save(&self, path: &Path) -> Result<()> {
        let tmp_path = temp_sibling(path);
        {
            let mut file = File::create(&tmp_path).map_err(|e| {
                SaveError::new(
                    ErrorCode::Io,
                    format!("failed to create {}: {e}", tmp_path.display()),
                )
            })?;
            file.write_all(&self.bytes).and_then(|_| file.sync_all()).map_err(|e| {
                SaveError::new(
                    ErrorCode::Io,
                    format!("failed to write {}: {e}", tmp_path.display()),
                )
            })?;
        }
        fs::rename(&tmp_path, path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            SaveError::new(
                ErrorCode::Io,
                format!("failed to move output into {}: {e}", path.display()),
            )
        })
    }
}

// The temporary must stay in the target's directory so the final rename
// cannot cross filesystems.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("save"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::ByteBuffer;
    use crate::error::ErrorCode;
    use crate::format::HEADER_SIZE;

    #[test]
    fn rejects_buffer_shorter_than_header() {
        let err = ByteBuffer::from_bytes(vec![0u8; HEADER_SIZE - 1])
            .expect_err("short buffer should be rejected");
        assert_eq!(err.code, ErrorCode::Format);
    }

    #[test]
    fn slice_past_end_is_out_of_bounds() {
        let buffer = ByteBuffer::from_bytes(vec![0u8; 32]).expect("buffer should build");
        let err = buffer.slice(30, 3).expect_err("slice should fail");
        assert_eq!(err.code, ErrorCode::OutOfBounds);
    }

    #[test]
    fn replace_range_requires_equal_lengths() {
        let mut buffer = ByteBuffer::from_bytes(vec![0u8; 32]).expect("buffer should build");
        let err = buffer
            .replace_range(0, 4, &[1, 2, 3])
            .expect_err("length mismatch should fail");
        assert_eq!(err.code, ErrorCode::LengthMismatch);
        assert_eq!(buffer.as_bytes(), &[0u8; 32]);
    }

    #[test]
    fn replace_range_overwrites_exactly_the_range() {
        let mut buffer = ByteBuffer::from_bytes(vec![0u8; 32]).expect("buffer should build");
        buffer
            .replace_range(4, 3, &[7, 8, 9])
            .expect("replace should succeed");
        assert_eq!(&buffer.as_bytes()[..8], &[0, 0, 0, 0, 7, 8, 9, 0]);
    }
}
