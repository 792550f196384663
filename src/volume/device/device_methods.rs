// Reading blocks off the image.
// Bounds are checked before we ever touch the source; a seek past the end
// of a file "succeeds" and we would rather hand back a real error.

use std::fs::File;
use std::io::{Cursor, Seek, SeekFrom};
use std::path::Path;

use log::{debug, trace};

use crate::error_types::range::RangeError;
use crate::error_types::volume::VolumeError;
use crate::volume::device::device_struct::{Block, BlockDevice, ImageSource, BLOCK_SIZE};

impl BlockDevice {
    /// Open a volume image from a file on the host.
    pub fn open(path: &Path) -> Result<BlockDevice, VolumeError> {
        debug!("Opening volume image at {}", path.display());
        let file = File::open(path).map_err(VolumeError::Image)?;
        BlockDevice::from_source(Box::new(file))
    }

    /// Wrap an image that is already sitting in memory.
    ///
    /// This is the path for non-seekable inputs (standard input): slurp the
    /// whole thing first, then address it like any other device.
    pub fn from_image(image: Vec<u8>) -> BlockDevice {
        let blocks = (image.len() / BLOCK_SIZE) as u32;
        debug!("In-memory volume image, {blocks} whole blocks");
        BlockDevice {
            source: Box::new(Cursor::new(image)),
            blocks,
        }
    }

    /// Wrap any seekable source.
    ///
    /// A trailing partial block is unaddressable and does not count.
    pub fn from_source(mut source: Box<dyn ImageSource>) -> Result<BlockDevice, VolumeError> {
        let length = source.seek(SeekFrom::End(0)).map_err(VolumeError::Image)?;
        let blocks = (length / BLOCK_SIZE as u64) as u32;
        debug!("Volume image is {length} bytes, {blocks} whole blocks");
        Ok(BlockDevice { source, blocks })
    }

    /// How many whole blocks this device holds.
    pub fn blocks(&self) -> u32 {
        self.blocks
    }

    /// Read one block by absolute block number.
    pub fn read_block(&mut self, block: u32) -> Result<Block, VolumeError> {
        // Bounds checking
        if block >= self.blocks {
            return Err(RangeError::Block {
                block,
                blocks: self.blocks,
            }
            .into());
        }

        trace!("Reading block {block}");

        let offset = u64::from(block) * BLOCK_SIZE as u64;
        let mut buffer: Block = [0u8; BLOCK_SIZE];

        self.seek_read(offset, &mut buffer)
            .map_err(|source| VolumeError::Io { block, source })?;

        Ok(buffer)
    }

    fn seek_read(&mut self, offset: u64, buffer: &mut Block) -> Result<(), std::io::Error> {
        let _ = self.source.seek(SeekFrom::Start(offset))?;
        self.source.read_exact(buffer)
    }
}
