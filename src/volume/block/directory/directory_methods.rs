// Directory entry decoding.

use crate::volume::block::directory::directory_struct::{DirEntry, DIRENT_BYTES, NAME_BYTES};
use crate::volume::block::words::le16;

impl DirEntry {
    /// Decode one 16-byte record. Returns `None` for a free slot
    /// (d_ino == 0).
    ///
    /// Callers hand in exactly [`DIRENT_BYTES`] bytes; anything shorter is
    /// a truncated tail and ends iteration before decode is attempted.
    pub fn from_bytes(bytes: &[u8; DIRENT_BYTES]) -> Option<DirEntry> {
        let number = le16(bytes, 0);
        if number == 0 {
            return None;
        }

        // Name runs to the first NUL, or the full 14 bytes without one.
        let raw = &bytes[2..2 + NAME_BYTES];
        let end = raw.iter().position(|&b| b == 0).unwrap_or(NAME_BYTES);
        let name = String::from_utf8_lossy(&raw[..end]).into_owned();

        Some(DirEntry { number, name })
    }
}
