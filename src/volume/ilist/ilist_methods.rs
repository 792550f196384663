// Loading and indexing the inode list.

use log::{debug, trace};

use crate::error_types::range::RangeError;
use crate::error_types::volume::VolumeError;
use crate::volume::block::inode::inode_struct::{Inode, INODE_BYTES};
use crate::volume::block::superblock::superblock_struct::SuperBlock;
use crate::volume::device::device_struct::{BlockDevice, INODE_LIST_START, SUPERBLOCK_BLOCK};
use crate::volume::ilist::ilist_struct::InodeTable;

/// 512 / 32.
const INODES_PER_BLOCK: usize = 16;

impl InodeTable {
    /// Decode the superblock and slurp the whole inode list.
    pub fn load(device: &mut BlockDevice) -> Result<InodeTable, VolumeError> {
        let superblock = SuperBlock::from_bytes(&device.read_block(SUPERBLOCK_BLOCK)?)?;
        debug!(
            "Superblock: isize={} fsize={} -> {} inodes",
            superblock.isize,
            superblock.fsize,
            superblock.inode_count()
        );

        let mut inodes: Vec<Inode> = Vec::with_capacity(superblock.inode_count() as usize);
        for index in 0..u32::from(superblock.isize) {
            let block = device.read_block(INODE_LIST_START + index)?;
            for slot in 0..INODES_PER_BLOCK {
                inodes.push(Inode::from_bytes(
                    &block[slot * INODE_BYTES..(slot + 1) * INODE_BYTES],
                )?);
            }
        }

        Ok(InodeTable { superblock, inodes })
    }

    /// Look up an inode by its 1-based number.
    ///
    /// A free inode (nlink == 0) still comes back; whether to skip it is
    /// the caller's call.
    pub fn get(&self, number: u32) -> Result<&Inode, RangeError> {
        if number == 0 || number > self.inodes.len() as u32 {
            return Err(RangeError::Inode {
                number,
                count: self.inodes.len() as u32,
            });
        }

        let inode = &self.inodes[(number - 1) as usize];
        if !inode.in_use() {
            trace!("Inode {number} looked up but unused (nlink == 0)");
        }
        Ok(inode)
    }

    /// How many inodes the list holds.
    pub fn len(&self) -> u32 {
        self.inodes.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.inodes.is_empty()
    }

    /// The superblock this table was sized from.
    pub fn superblock(&self) -> &SuperBlock {
        &self.superblock
    }

    /// Iterate (number, inode) over the whole list, 1-based.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Inode)> {
        self.inodes
            .iter()
            .enumerate()
            .map(|(index, inode)| (index as u32 + 1, inode))
    }
}
