// The directory iterator.

use crate::volume::io::file::types::FileReader;

/// Walks the entries of one directory file.
///
/// A directory's contents are just a file full of 16-byte records, so this
/// rides on a [`FileReader`] and inherits its linear, one-at-a-time nature.
pub struct DirectoryIterator<'d> {
    pub(super) reader: FileReader<'d>,
}
