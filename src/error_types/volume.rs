// The umbrella error for everything the engine can hit while reading a
// volume. Conversions are deliberate, no blanket casting upwards.
use thiserror::Error;

use crate::error_types::format::FormatError;
use crate::error_types::range::RangeError;

#[derive(Debug, Error)]
pub enum VolumeError {
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("i/o failure under block {block}: {source}")]
    Io {
        block: u32,
        #[source]
        source: std::io::Error,
    },
    /// Opening or slurping the volume image itself failed. No block number
    /// exists yet at that point, so this is its own case.
    #[error("cannot read the volume image: {0}")]
    Image(std::io::Error),
    #[error("writing output failed: {0}")]
    Output(#[from] std::io::Error),
}

impl VolumeError {
    /// Whether this error ends the session.
    ///
    /// Range and format problems are scoped to one inode and the traversal
    /// can carry on with the next sibling. A device that stops reading, or
    /// an output stream that stops accepting bytes, cannot be worked around.
    pub fn is_fatal(&self) -> bool {
        match self {
            VolumeError::Range(_) | VolumeError::Format(_) => false,
            VolumeError::Io { .. } | VolumeError::Image(_) | VolumeError::Output(_) => true,
        }
    }
}
