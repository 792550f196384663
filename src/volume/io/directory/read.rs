// Pulling entries out of a directory file.

use log::trace;

use crate::error_types::volume::VolumeError;
use crate::volume::block::directory::directory_struct::{DirEntry, DIRENT_BYTES};
use crate::volume::io::directory::types::DirectoryIterator;
use crate::volume::io::file::types::FileReader;

impl<'d> DirectoryIterator<'d> {
    /// Wrap a reader that is positioned at the start of a directory file.
    pub fn new(reader: FileReader<'d>) -> DirectoryIterator<'d> {
        DirectoryIterator { reader }
    }

    /// The next live entry, skipping free slots.
    ///
    /// A tail shorter than one record ends iteration; v6 kept directory
    /// sizes as multiples of 16, so a ragged tail just means the file was
    /// cut short and there is nothing in it for us.
    pub fn next_entry(&mut self) -> Result<Option<DirEntry>, VolumeError> {
        loop {
            let record = self.reader.read(Some(DIRENT_BYTES))?;
            if record.len() < DIRENT_BYTES {
                return Ok(None);
            }

            // The length was just checked.
            let mut bytes = [0u8; DIRENT_BYTES];
            bytes.copy_from_slice(&record);

            match DirEntry::from_bytes(&bytes) {
                Some(entry) => {
                    trace!("Directory entry: {} -> inode {}", entry.name, entry.number);
                    return Ok(Some(entry));
                }
                // Free slot, move along.
                None => continue,
            }
        }
    }

    /// Drain every remaining entry into a vec.
    ///
    /// The traversal needs the device back before it can descend, so it
    /// collects first and recurses after.
    pub fn collect_entries(mut self) -> Result<Vec<DirEntry>, VolumeError> {
        let mut entries: Vec<DirEntry> = Vec::new();
        while let Some(entry) = self.next_entry()? {
            entries.push(entry);
        }
        Ok(entries)
    }
}
