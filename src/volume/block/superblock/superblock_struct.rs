// Superblock layout, straight out of block 1.

/// The v6 superblock.
///
/// Only `isize` and `fsize` matter to the engine; the free-list and lock
/// bookkeeping fields are decoded because the `superblock` reporter prints
/// them, and ignored everywhere else.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SuperBlock {
    /// Blocks occupied by the inode list (starting at block 2).
    pub isize: u16,
    /// Total volume size in blocks.
    pub fsize: u16,
    /// Entries in use inside `free`.
    pub nfree: u16,
    /// The free-block cache.
    pub free: [u16; 100],
    /// Entries in use inside `inode`.
    pub ninode: u16,
    /// The free-inode cache.
    pub inode: [u16; 100],
    /// Free-list lock byte.
    pub flock: u8,
    /// Inode-list lock byte.
    pub ilock: u8,
    /// Superblock-modified byte.
    pub fmod: u8,
    /// Mounted-read-only byte.
    pub ronly: u8,
    /// Last update time, Unix seconds (middle-endian on disk).
    pub time: u32,
}
