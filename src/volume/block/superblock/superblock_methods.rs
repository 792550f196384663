// Superblock decoding. Pure, no IO in here.

use crate::error_types::format::FormatError;
use crate::volume::block::words::{le16, pdp32};
use crate::volume::block::superblock::superblock_struct::SuperBlock;

// Field offsets within block 1.
const ISIZE: usize = 0;
const FSIZE: usize = 2;
const NFREE: usize = 4;
const FREE: usize = 6;
const NINODE: usize = 206;
const INODE: usize = 208;
const FLOCK: usize = 408;
const ILOCK: usize = 409;
const FMOD: usize = 410;
const RONLY: usize = 411;
const TIME: usize = 412;

/// Bytes of block 1 the superblock actually occupies.
pub const SUPERBLOCK_BYTES: usize = 416;

impl SuperBlock {
    /// Decode a superblock from the raw contents of block 1.
    pub fn from_bytes(bytes: &[u8]) -> Result<SuperBlock, FormatError> {
        if bytes.len() < SUPERBLOCK_BYTES {
            return Err(FormatError::Truncated {
                need: SUPERBLOCK_BYTES,
                have: bytes.len(),
            });
        }

        let mut free = [0u16; 100];
        for (slot, word) in free.iter_mut().enumerate() {
            *word = le16(bytes, FREE + slot * 2);
        }

        let mut inode = [0u16; 100];
        for (slot, word) in inode.iter_mut().enumerate() {
            *word = le16(bytes, INODE + slot * 2);
        }

        Ok(SuperBlock {
            isize: le16(bytes, ISIZE),
            fsize: le16(bytes, FSIZE),
            nfree: le16(bytes, NFREE),
            free,
            ninode: le16(bytes, NINODE),
            inode,
            flock: bytes[FLOCK],
            ilock: bytes[ILOCK],
            fmod: bytes[FMOD],
            ronly: bytes[RONLY],
            time: pdp32(bytes, TIME),
        })
    }

    /// How many inodes the inode list holds.
    pub fn inode_count(&self) -> u32 {
        u32::from(self.isize) * 16
    }
}
