// The inode list.

use crate::volume::block::inode::inode_struct::Inode;
use crate::volume::block::superblock::superblock_struct::SuperBlock;

/// The whole inode list, decoded once at session start.
///
/// Immutable after [`InodeTable::load`](super::ilist_struct::InodeTable);
/// share it as freely as you like. The device is only needed again when a
/// file's contents are read.
pub struct InodeTable {
    pub(super) superblock: SuperBlock,
    pub(super) inodes: Vec<Inode>,
}
