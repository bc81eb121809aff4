// Save file constants
pub const SIGNATURE: &[u8] = b"CHARSAV\0";
pub const FORMAT_VERSION: u16 = 1;
pub const HEADER_SIZE: usize = 16;
pub const MAX_SLOT_COUNT: usize = 32;

// Slot record interior, offsets relative to the record start.
// Bytes at SLOT_META_SIZE.. are opaque character state and are only
// ever moved verbatim.
pub const ACTIVE_OFFSET: usize = 0x00;
pub const NAME_OFFSET: usize = 0x04;
pub const NAME_SIZE: usize = 32;
pub const LEVEL_OFFSET: usize = 0x24;
pub const PLAY_SECONDS_OFFSET: usize = 0x28;
pub const SLOT_META_SIZE: usize = 0x2C;
