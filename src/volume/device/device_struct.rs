// The device. Everything above this speaks in whole blocks.

use std::io::{Read, Seek};

/// v6 volumes are built from 512-byte blocks. Always. The PDP-11 did not
/// negotiate sector sizes.
pub const BLOCK_SIZE: usize = 512;

/// One raw block off the device.
pub type Block = [u8; BLOCK_SIZE];

/// Block 1 holds the superblock.
pub const SUPERBLOCK_BLOCK: u32 = 1;

/// The inode list starts at block 2 and runs for `isize` blocks.
pub const INODE_LIST_START: u32 = 2;

/// Anything that can stand in for a volume image: an opened image file, or
/// an in-memory buffer for images that arrived over a pipe.
pub trait ImageSource: Read + Seek {}
impl<T: Read + Seek> ImageSource for T {}

/// Random access to the fixed 512-byte blocks of one volume image.
///
/// The device owns the seek position, so readers built on top of it must
/// take it `&mut` and run one at a time.
pub struct BlockDevice {
    pub(super) source: Box<dyn ImageSource>,
    pub(super) blocks: u32,
}
