// Inode layout
use bitflags::bitflags;

/// An inode occupies 32 bytes on disk, 16 to a block.
pub const INODE_BYTES: usize = 32;

bitflags! {
    /// The v6 mode word.
    ///
    /// The two file-type bits (0x6000) are a field, not flags; use
    /// [`Inode::kind`] to read them.
    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    pub struct InodeMode: u16 {
        const ALLOC = 0x8000;
        const LARGE = 0x1000;
        const SET_UID = 0x0800;
        const SET_GID = 0x0400;
        const STICKY = 0x0200;
        const OWNER_READ = 0x0100;
        const OWNER_WRITE = 0x0080;
        const OWNER_EXEC = 0x0040;
        const GROUP_READ = 0x0020;
        const GROUP_WRITE = 0x0010;
        const GROUP_EXEC = 0x0008;
        const OTHER_READ = 0x0004;
        const OTHER_WRITE = 0x0002;
        const OTHER_EXEC = 0x0001;
    }
}

/// Mask for the file-type field inside the mode word.
pub const KIND_MASK: u16 = 0x6000;

/// What an inode describes, fixed once at decode time.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InodeKind {
    Regular,
    Directory,
    CharDevice,
    BlockDevice,
}

/// One decoded inode.
///
/// The split size0/size1 field and the middle-endian times are repaired
/// here at the codec boundary; nothing above this struct ever sees them.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Inode {
    pub mode: InodeMode,
    /// Link count. Zero means the slot is free.
    pub nlink: u8,
    pub uid: i8,
    pub gid: i8,
    /// File size in bytes, assembled from the 24-bit split field.
    pub size: u32,
    /// Block addresses, meaning depends on [`InodeMode::LARGE`].
    pub addr: [u16; 8],
    /// Access time, Unix seconds.
    pub atime: u32,
    /// Modification time, Unix seconds.
    pub mtime: u32,
}
