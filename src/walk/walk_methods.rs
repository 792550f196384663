// Walking the tree.
//
// Policy (matches the front-ends' contract): a child that fails to decode
// is reported and skipped, the walk moves on to the next sibling. Real IO
// failures and visitor output failures abort the whole session.

use log::{error, warn};

use crate::error_types::volume::VolumeError;
use crate::volume::block::inode::inode_struct::InodeKind;
use crate::volume::device::device_struct::BlockDevice;
use crate::volume::ilist::ilist_struct::InodeTable;
use crate::volume::io::directory::types::DirectoryIterator;
use crate::volume::io::file::types::FileReader;
use crate::walk::walk_struct::{Entry, Visitor, Walker};

impl<'d, 't> Walker<'d, 't> {
    pub fn new(device: &'d mut BlockDevice, table: &'t InodeTable) -> Walker<'d, 't> {
        Walker { device, table }
    }

    /// Walk from `root`, displayed as `root_name`.
    ///
    /// Fails up front if `root` is out of range; errors below the root
    /// follow the skip-and-continue policy.
    pub fn walk<V: Visitor>(
        &mut self,
        root: u32,
        root_name: &str,
        visitor: &mut V,
    ) -> Result<(), VolumeError> {
        self.descend(root, root_name, root_name, 0, visitor)
    }

    fn descend<V: Visitor>(
        &mut self,
        number: u32,
        path: &str,
        name: &str,
        depth: usize,
        visitor: &mut V,
    ) -> Result<(), VolumeError> {
        // Copy out the record so the device stays free for readers.
        let inode = *self.table.get(number)?;
        let entry = Entry {
            path,
            name,
            depth,
            number,
            inode: &inode,
        };

        match inode.kind() {
            InodeKind::Regular => {
                let mut reader = FileReader::new(self.device, number, &inode)?;
                visitor.file(&entry, &mut reader)
            }
            InodeKind::CharDevice | InodeKind::BlockDevice => {
                let (major, minor) = inode.device_numbers();
                visitor.device(&entry, major, minor)
            }
            InodeKind::Directory => {
                visitor.directory(&entry)?;

                // Drain the directory before descending; only one reader
                // may sit on the device at a time.
                let reader = FileReader::new(self.device, number, &inode)?;
                let children = DirectoryIterator::new(reader).collect_entries()?;

                for child in children {
                    // Self and parent would loop forever.
                    if child.name == "." || child.name == ".." {
                        continue;
                    }

                    let child_number = u32::from(child.number);
                    match self.table.get(child_number) {
                        Ok(child_inode) if !child_inode.in_use() => {
                            warn!(
                                "{path}/{}: inode {child_number} has nlink 0, skipping",
                                child.name
                            );
                            continue;
                        }
                        Ok(_) => {}
                        Err(range) => {
                            // A decode failure, not a diagnostic; must be
                            // visible without RUST_LOG set.
                            error!("{path}/{}: {range}, skipping", child.name);
                            continue;
                        }
                    }

                    // Avoid "//x" when the root was displayed as "/".
                    let child_path = if path.ends_with('/') {
                        format!("{path}{}", child.name)
                    } else {
                        format!("{path}/{}", child.name)
                    };
                    if let Err(trouble) =
                        self.descend(child_number, &child_path, &child.name, depth + 1, visitor)
                    {
                        if trouble.is_fatal() {
                            return Err(trouble);
                        }
                        // Damaged inode; next sibling.
                        error!("{child_path}: {trouble}");
                    }
                }
                Ok(())
            }
        }
    }
}
