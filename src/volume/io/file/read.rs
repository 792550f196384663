// Expanding the block list, then reading it.
//
// v6 has two addressing modes, picked by the LARGE bit:
//   small: addr[0..8] are data blocks.
//   large: addr[0..7] are single-indirect blocks, addr[7] double-indirect.
// An indirect block is 256 little-endian words of block numbers. Zero
// entries are skipped at every level.

use log::{debug, trace};

use crate::error_types::format::FormatError;
use crate::error_types::volume::VolumeError;
use crate::volume::block::inode::inode_struct::{Inode, InodeMode};
use crate::volume::block::words::le16;
use crate::volume::device::device_struct::{BlockDevice, BLOCK_SIZE};
use crate::volume::io::file::types::FileReader;

/// Word entries in one indirect block.
const INDIRECT_ENTRIES: usize = BLOCK_SIZE / 2;

impl<'d> FileReader<'d> {
    /// Build a reader over one inode's contents.
    ///
    /// Walks the addressing scheme immediately and verifies the invariant
    /// that the blocks found cover exactly `ceil(size / 512)`; an inode
    /// that fails that is damaged and gets a [`FormatError`].
    ///
    /// `number` is carried for diagnostics only.
    pub fn new(
        device: &'d mut BlockDevice,
        number: u32,
        inode: &Inode,
    ) -> Result<FileReader<'d>, VolumeError> {
        let blocks = expand_blocks(device, inode)?;

        let expected = inode.size.div_ceil(BLOCK_SIZE as u32) as usize;
        if blocks.len() != expected {
            return Err(FormatError::BlockCount {
                number,
                expected,
                actual: blocks.len(),
            }
            .into());
        }

        debug!(
            "Inode {number}: {} bytes across {} data blocks",
            inode.size,
            blocks.len()
        );

        Ok(FileReader {
            device,
            blocks,
            cursor: 0,
            size: inode.size,
            spare: Vec::new(),
        })
    }

    /// The ordered data-block numbers backing this file.
    pub fn block_numbers(&self) -> &[u16] {
        &self.blocks
    }

    /// Read the next data block's contents.
    ///
    /// The final block comes back truncated to `size % 512` bytes when the
    /// size does not land on a block boundary. `None` once exhausted.
    pub fn next_block(&mut self) -> Result<Option<Vec<u8>>, VolumeError> {
        if self.cursor >= self.blocks.len() {
            return Ok(None);
        }

        let number = self.blocks[self.cursor];
        let block = self.device.read_block(u32::from(number))?;
        self.cursor += 1;

        let mut bytes = block.to_vec();
        if self.cursor == self.blocks.len() {
            let remainder = (self.size as usize) % BLOCK_SIZE;
            if remainder != 0 {
                bytes.truncate(remainder);
            }
        }

        trace!("Block {number} gave {} file bytes", bytes.len());
        Ok(Some(bytes))
    }

    /// Read up to `limit` bytes; `None` drains to end-of-file.
    ///
    /// Whole blocks come off the device and the overshoot waits in an
    /// internal buffer for the next call. After end-of-file this returns
    /// an empty vec forever.
    pub fn read(&mut self, limit: Option<usize>) -> Result<Vec<u8>, VolumeError> {
        // Top up the spare buffer until the request is covered or the
        // file runs out.
        while limit.is_none_or(|want| self.spare.len() < want) {
            match self.next_block()? {
                Some(bytes) => self.spare.extend_from_slice(&bytes),
                None => break,
            }
        }

        let take = match limit {
            Some(want) => want.min(self.spare.len()),
            None => self.spare.len(),
        };
        Ok(self.spare.drain(..take).collect())
    }
}

/// Walk the addressing scheme and collect every data block, in order.
fn expand_blocks(device: &mut BlockDevice, inode: &Inode) -> Result<Vec<u16>, VolumeError> {
    let mut found: Vec<u16> = Vec::new();

    if inode.mode.contains(InodeMode::LARGE) {
        // Seven single-indirect slots...
        for &pointer in &inode.addr[..7] {
            if pointer != 0 {
                collect_indirect(device, pointer, &mut found)?;
            }
        }
        // ...and one double-indirect slot at the end.
        let double = inode.addr[7];
        if double != 0 {
            let block = read_indirect(device, double)?;
            for slot in 0..INDIRECT_ENTRIES {
                let pointer = le16(&block, slot * 2);
                if pointer != 0 {
                    collect_indirect(device, pointer, &mut found)?;
                }
            }
        }
    } else {
        // Small mode: the eight words are the data blocks themselves.
        // Zero entries are dropped, not treated as holes; real v6 never
        // wrote sparse small files.
        for &pointer in &inode.addr {
            if pointer != 0 {
                found.push(pointer);
            }
        }
    }

    Ok(found)
}

/// Append the non-zero entries of one indirect block.
fn collect_indirect(
    device: &mut BlockDevice,
    pointer: u16,
    found: &mut Vec<u16>,
) -> Result<(), VolumeError> {
    let block = read_indirect(device, pointer)?;
    for slot in 0..INDIRECT_ENTRIES {
        let entry = le16(&block, slot * 2);
        if entry != 0 {
            found.push(entry);
        }
    }
    Ok(())
}

/// Fetch an indirect block, refusing pointers that leave the volume.
fn read_indirect(
    device: &mut BlockDevice,
    pointer: u16,
) -> Result<[u8; BLOCK_SIZE], VolumeError> {
    // A stray indirect pointer is a format problem with the inode, not a
    // caller asking for a bad block.
    if u32::from(pointer) >= device.blocks() {
        return Err(FormatError::IndirectOutOfVolume {
            block: u32::from(pointer),
            blocks: device.blocks(),
        }
        .into());
    }
    device.read_block(u32::from(pointer))
}
