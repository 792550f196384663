// Directory entry layout.

/// A directory entry occupies 16 bytes on disk: a 2-byte inode number and
/// a 14-byte NUL-padded name.
pub const DIRENT_BYTES: usize = 16;

/// Longest possible name. Not NUL-terminated when it runs the full 14.
pub const NAME_BYTES: usize = 14;

/// One decoded directory entry.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DirEntry {
    /// The inode this entry points at. Never 0 once decoded; 0 marks a
    /// free slot and free slots are skipped before they get here.
    pub number: u16,
    pub name: String,
}
