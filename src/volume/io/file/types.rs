// The file reader.

use crate::volume::device::device_struct::BlockDevice;

/// Streams one file's bytes off the device.
///
/// The full ordered list of data blocks is expanded up front (walking the
/// indirect blocks as needed), then `next_block` and `read` consume it
/// linearly. Not seekable, not restartable; drop it and build another one
/// to read again.
///
/// Holding the device `&mut` means the borrow checker enforces the one
/// rule of the house: one active reader per device.
pub struct FileReader<'d> {
    pub(super) device: &'d mut BlockDevice,
    /// Every data block of the file, in file order.
    pub(super) blocks: Vec<u16>,
    /// Index of the next unread entry in `blocks`.
    pub(super) cursor: usize,
    /// File size in bytes; the last block only carries `size % 512` of it
    /// when that remainder is non-zero.
    pub(super) size: u32,
    /// Bytes pulled off the device but not yet handed to the caller.
    pub(super) spare: Vec<u8>,
}
