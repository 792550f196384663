// Errors for images that decode but do not add up.
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum FormatError {
    #[error("inode {number} addresses {actual} data blocks but its size calls for {expected}")]
    BlockCount {
        number: u32,
        expected: usize,
        actual: usize,
    },
    #[error("indirect block {block} points outside the {blocks}-block volume")]
    IndirectOutOfVolume { block: u32, blocks: u32 },
    #[error("on-disk record needs {need} bytes but only {have} are present")]
    Truncated { need: usize, have: usize },
}
