// Archive configuration.

use std::path::PathBuf;

/// A fully-parsed archive run. Option parsing stays with the CLI; the
/// engine only ever sees this record.
#[derive(Debug, Clone)]
pub struct ArchiveOptions {
    /// Where the archive goes. `None` writes to standard output.
    pub output: Option<PathBuf>,
    pub compression: Compression,
    /// Traversal roots, archived in order. The front-end defaults this to
    /// the root inode, 1.
    pub roots: Vec<u32>,
}

/// Compression applied around the tar stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
    Bzip2,
    Xz,
}
