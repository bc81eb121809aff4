use std::io::{self, Read, Seek};

use crate::format::{FORMAT_VERSION, MAX_SLOT_COUNT, SIGNATURE, SLOT_META_SIZE};
use crate::reader::LittleEndianReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveHeader {
    pub version: u16,
    pub slot_count: u16,
    pub record_size: u32,
}

impl SaveHeader {
    pub fn parse<R: Read + Seek>(r: &mut LittleEndianReader<R>) -> io::Result<Self> {
        let sig_bytes = r.read_bytes(SIGNATURE.len())?;
        if sig_bytes != SIGNATURE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "invalid save file signature",
            ));
        }

        let version = r.read_u16()?;
        if version != FORMAT_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unsupported format version {version}, expected {FORMAT_VERSION}"),
            ));
        }

        let slot_count = r.read_u16()?;
        if slot_count == 0 || slot_count as usize > MAX_SLOT_COUNT {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("invalid slot count {slot_count}, expected 1..={MAX_SLOT_COUNT}"),
            ));
        }

        let record_size = r.read_u32()?;
        if (record_size as usize) < SLOT_META_SIZE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("slot record size {record_size} too small, need at least {SLOT_META_SIZE}"),
            ));
        }

        Ok(Self {
            version,
            slot_count,
            record_size,
        })
    }
}
