// Out-of-bounds errors. Two flavors: block indices against the device,
// inode numbers against the inode list.
// We do not allow string errors. This is RUST damn it, not python!
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum RangeError {
    #[error("block {block} is past the end of a {blocks}-block device")]
    Block { block: u32, blocks: u32 },
    #[error("inode {number} is outside the inode list (valid numbers are 1 through {count})")]
    Inode { number: u32, count: u32 },
}
