//! Save-file codec for copying character slots between save files.
//!
//! A save holds a fixed number of fixed-size slot records behind a small
//! header. [`SaveFile`] loads a file, indexes its slots, exposes their
//! [`Character`] summaries, and can transplant one slot's record from
//! another save without disturbing any other byte.

pub mod buffer;
pub mod character;
pub mod directory;
pub mod error;
pub mod format;
pub mod header;
pub mod layout;
pub mod reader;
pub mod savefile;

pub use buffer::ByteBuffer;
pub use character::Character;
pub use directory::{SlotDirectory, SlotEntry};
pub use error::{ErrorCode, Result, SaveError};
pub use header::SaveHeader;
pub use layout::ByteRange;
pub use savefile::SaveFile;
