// Inode decoding, and the mode-word gymnastics.

use crate::error_types::format::FormatError;
use crate::volume::block::inode::inode_struct::{Inode, InodeKind, InodeMode, INODE_BYTES, KIND_MASK};
use crate::volume::block::words::{le16, pdp32};

impl Inode {
    /// Decode one 32-byte inode record.
    pub fn from_bytes(bytes: &[u8]) -> Result<Inode, FormatError> {
        if bytes.len() < INODE_BYTES {
            return Err(FormatError::Truncated {
                need: INODE_BYTES,
                have: bytes.len(),
            });
        }

        // The 24-bit size: high byte, then a low word.
        let size0 = bytes[5];
        let size1 = le16(bytes, 6);
        let size = (u32::from(size0) << 16) | u32::from(size1);

        let mut addr = [0u16; 8];
        for (slot, word) in addr.iter_mut().enumerate() {
            *word = le16(bytes, 8 + slot * 2);
        }

        Ok(Inode {
            mode: InodeMode::from_bits_retain(le16(bytes, 0)),
            nlink: bytes[2],
            uid: bytes[3] as i8,
            gid: bytes[4] as i8,
            size,
            addr,
            atime: pdp32(bytes, 24),
            mtime: pdp32(bytes, 28),
        })
    }

    /// The file-type field, read once.
    ///
    /// The mask covers two bits, so all four values are spoken for; 0x6000
    /// is block-device, and anything the original system never wrote still
    /// lands there, same as the historical decoder.
    pub fn kind(&self) -> InodeKind {
        match self.mode.bits() & KIND_MASK {
            0x0000 => InodeKind::Regular,
            0x4000 => InodeKind::Directory,
            0x2000 => InodeKind::CharDevice,
            _ => InodeKind::BlockDevice,
        }
    }

    /// Whether the slot holds a live file. nlink == 0 means free.
    pub fn in_use(&self) -> bool {
        self.nlink != 0
    }

    /// Device inodes keep (major, minor) packed into addr[0].
    pub fn device_numbers(&self) -> (u8, u8) {
        let word = self.addr[0];
        (((word >> 8) & 0xFF) as u8, (word & 0xFF) as u8)
    }

    /// The ls-style mode string.
    ///
    /// Type char, three rwx triplets, then two trailer flags: 'L' for a
    /// large-mode file and '*' for an allocated slot ('.' otherwise each).
    /// The owner triplet reads the mode directly; group and others read it
    /// after shifting left by 3 and 6, per the original decoder.
    pub fn filemode(&self) -> String {
        let mode = self.mode.bits();
        let mut out = String::with_capacity(12);

        out.push(match self.kind() {
            InodeKind::Regular => '-',
            InodeKind::Directory => 'd',
            InodeKind::CharDevice => 'c',
            InodeKind::BlockDevice => 'b',
        });

        let mut shifted = mode;
        for triplet in 0..3 {
            out.push(if shifted & 0x0100 != 0 { 'r' } else { '-' });
            out.push(if shifted & 0x0080 != 0 { 'w' } else { '-' });

            let exec = shifted & 0x0040 != 0;
            // setuid/setgid land in the first two execute slots, the sticky
            // bit in the third.
            let special = match triplet {
                0 => mode & 0x0800 != 0,
                1 => mode & 0x0400 != 0,
                _ => mode & 0x0200 != 0,
            };
            out.push(match (special, exec, triplet) {
                (true, true, 2) => 't',
                (true, false, 2) => 'T',
                (true, true, _) => 's',
                (true, false, _) => 'S',
                (false, true, _) => 'x',
                (false, false, _) => '-',
            });

            shifted <<= 3;
        }

        out.push(if mode & 0x1000 != 0 { 'L' } else { '.' });
        out.push(if mode & 0x8000 != 0 { '*' } else { '.' });

        out
    }
}
