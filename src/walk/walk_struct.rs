// The tree walk.

use crate::error_types::volume::VolumeError;
use crate::volume::block::inode::inode_struct::Inode;
use crate::volume::device::device_struct::BlockDevice;
use crate::volume::ilist::ilist_struct::InodeTable;
use crate::volume::io::file::types::FileReader;

/// Pre-order, depth-first descent over a volume, starting from any inode.
///
/// The walker owns the device borrow for the duration; the table is shared
/// and read-only. Entries are visited in the order the directory keeps
/// them on disk.
pub struct Walker<'d, 't> {
    pub(super) device: &'d mut BlockDevice,
    pub(super) table: &'t InodeTable,
}

/// One visited entry.
pub struct Entry<'e> {
    /// Path from the walk root, `/`-joined.
    pub path: &'e str,
    /// The entry's own name (the walk root's display name at depth 0).
    pub name: &'e str,
    /// 0 at the walk root.
    pub depth: usize,
    /// Inode number.
    pub number: u32,
    pub inode: &'e Inode,
}

/// What to do at each entry. One method per file type.
///
/// Visitor errors are treated as output failures and abort the walk;
/// per-inode decode problems never reach the visitor at all.
pub trait Visitor {
    fn file(&mut self, entry: &Entry<'_>, reader: &mut FileReader<'_>) -> Result<(), VolumeError>;
    fn directory(&mut self, entry: &Entry<'_>) -> Result<(), VolumeError>;
    fn device(&mut self, entry: &Entry<'_>, major: u8, minor: u8) -> Result<(), VolumeError>;
}
