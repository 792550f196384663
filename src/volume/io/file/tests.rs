// File reader tests
#![allow(clippy::unwrap_used)]

use crate::error_types::format::FormatError;
use crate::error_types::volume::VolumeError;
use crate::volume::block::inode::inode_struct::Inode;
use crate::volume::device::device_struct::{BlockDevice, BLOCK_SIZE};
use crate::volume::io::file::types::FileReader;

// A bare image: superblock at block 1 (isize 1, fsize = blocks), inode
// list at block 2, everything past block 2 is data space for the test.
fn image(blocks: usize) -> Vec<u8> {
    let mut image = vec![0u8; blocks * BLOCK_SIZE];
    image[BLOCK_SIZE..BLOCK_SIZE + 2].copy_from_slice(&1u16.to_le_bytes());
    image[BLOCK_SIZE + 2..BLOCK_SIZE + 4].copy_from_slice(&(blocks as u16).to_le_bytes());
    image
}

fn inode(mode: u16, size: u32, addr: [u16; 8]) -> Inode {
    let mut bytes = [0u8; 32];
    bytes[0..2].copy_from_slice(&mode.to_le_bytes());
    bytes[2] = 1; // nlink
    bytes[5] = ((size >> 16) & 0xFF) as u8;
    bytes[6..8].copy_from_slice(&((size & 0xFFFF) as u16).to_le_bytes());
    for (slot, word) in addr.iter().enumerate() {
        bytes[8 + slot * 2..10 + slot * 2].copy_from_slice(&word.to_le_bytes());
    }
    Inode::from_bytes(&bytes).unwrap()
}

fn fill_block(image: &mut [u8], block: usize, byte: u8) {
    image[block * BLOCK_SIZE..(block + 1) * BLOCK_SIZE].fill(byte);
}

fn put_words(image: &mut [u8], block: usize, words: &[u16]) {
    for (slot, word) in words.iter().enumerate() {
        let offset = block * BLOCK_SIZE + slot * 2;
        image[offset..offset + 2].copy_from_slice(&word.to_le_bytes());
    }
}

#[test]
fn small_file_streams_full_then_truncated_block() {
    let mut raw = image(10);
    fill_block(&mut raw, 5, 0xAA);
    fill_block(&mut raw, 6, 0xBB);
    let mut device = BlockDevice::from_image(raw);

    // 1000 bytes in blocks {5, 6}.
    let node = inode(0x8000, 1000, [5, 6, 0, 0, 0, 0, 0, 0]);
    let mut reader = FileReader::new(&mut device, 2, &node).unwrap();

    assert_eq!(reader.block_numbers(), &[5, 6], "two data blocks, in order");

    let first = reader.next_block().unwrap().unwrap();
    assert_eq!(first.len(), 512, "first block is whole");
    assert!(first.iter().all(|&b| b == 0xAA), "block 5 contents");

    let second = reader.next_block().unwrap().unwrap();
    assert_eq!(second.len(), 488, "1000 mod 512 tail");
    assert!(second.iter().all(|&b| b == 0xBB), "block 6 contents");

    assert!(reader.next_block().unwrap().is_none(), "then the end");
}

#[test]
fn large_mode_walks_the_indirect_block() {
    let mut raw = image(300);
    // Indirect block 100 lists data blocks 200 and 201, holes between.
    put_words(&mut raw, 100, &[200, 0, 201, 0]);
    fill_block(&mut raw, 200, 1);
    fill_block(&mut raw, 201, 2);
    let mut device = BlockDevice::from_image(raw);

    let node = inode(0x8000 | 0x1000, 1024, [100, 0, 0, 0, 0, 0, 0, 0]);
    let reader = FileReader::new(&mut device, 3, &node).unwrap();
    assert_eq!(
        reader.block_numbers(),
        &[200, 201],
        "indirect entries in order, zeros skipped"
    );
}

#[test]
fn large_mode_walks_the_double_indirect_block_with_holes() {
    let mut raw = image(300);
    // addr[7] -> block 110; its live entries point at indirect blocks 111
    // and 112, which carry one data block each.
    put_words(&mut raw, 110, &[0, 111, 0, 112]);
    put_words(&mut raw, 111, &[200]);
    put_words(&mut raw, 112, &[201]);
    let mut device = BlockDevice::from_image(raw);

    let node = inode(0x8000 | 0x1000, 1024, [0, 0, 0, 0, 0, 0, 0, 110]);
    let reader = FileReader::new(&mut device, 4, &node).unwrap();
    assert_eq!(
        reader.block_numbers(),
        &[200, 201],
        "holes at the double-indirect level are skipped"
    );
}

#[test]
fn empty_file_yields_nothing() {
    let mut device = BlockDevice::from_image(image(4));
    let node = inode(0x8000, 0, [0; 8]);
    let mut reader = FileReader::new(&mut device, 5, &node).unwrap();

    assert!(reader.block_numbers().is_empty(), "no blocks for no bytes");
    assert!(reader.next_block().unwrap().is_none(), "no block to give");
    assert!(reader.read(None).unwrap().is_empty(), "drain of nothing");
}

#[test]
fn exact_multiple_of_block_size_keeps_the_last_block_whole() {
    let mut raw = image(8);
    fill_block(&mut raw, 4, 0x11);
    fill_block(&mut raw, 5, 0x22);
    let mut device = BlockDevice::from_image(raw);

    let node = inode(0x8000, 1024, [4, 5, 0, 0, 0, 0, 0, 0]);
    let mut reader = FileReader::new(&mut device, 6, &node).unwrap();
    let _ = reader.next_block().unwrap().unwrap();
    let last = reader.next_block().unwrap().unwrap();
    assert_eq!(last.len(), 512, "1024 mod 512 is 0, nothing to truncate");
}

#[test]
fn block_count_mismatch_is_a_format_error() {
    let mut device = BlockDevice::from_image(image(8));
    // Claims 3 blocks of bytes, addresses only 1.
    let node = inode(0x8000, 1500, [3, 0, 0, 0, 0, 0, 0, 0]);
    match FileReader::new(&mut device, 7, &node) {
        Err(VolumeError::Format(FormatError::BlockCount {
            number: 7,
            expected: 3,
            actual: 1,
        })) => {}
        other => panic!("expected a block-count mismatch, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn indirect_pointer_outside_the_volume_is_a_format_error() {
    let mut device = BlockDevice::from_image(image(8));
    let node = inode(0x8000 | 0x1000, 512, [500, 0, 0, 0, 0, 0, 0, 0]);
    match FileReader::new(&mut device, 8, &node) {
        Err(VolumeError::Format(FormatError::IndirectOutOfVolume {
            block: 500,
            blocks: 8,
        })) => {}
        other => panic!("expected out-of-volume, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn read_buffers_across_block_boundaries() {
    let mut raw = image(10);
    fill_block(&mut raw, 5, 0xAA);
    fill_block(&mut raw, 6, 0xBB);
    let mut device = BlockDevice::from_image(raw);

    let node = inode(0x8000, 1000, [5, 6, 0, 0, 0, 0, 0, 0]);
    let mut reader = FileReader::new(&mut device, 2, &node).unwrap();

    let chunk = reader.read(Some(300)).unwrap();
    assert_eq!(chunk.len(), 300, "asked for 300");
    assert!(chunk.iter().all(|&b| b == 0xAA), "all from block 5");

    // 212 left of block 5, then 88 of block 6.
    let chunk = reader.read(Some(300)).unwrap();
    assert_eq!(chunk.len(), 300, "spans the boundary");
    assert!(chunk[..212].iter().all(|&b| b == 0xAA), "tail of block 5");
    assert!(chunk[212..].iter().all(|&b| b == 0xBB), "head of block 6");

    let rest = reader.read(None).unwrap();
    assert_eq!(rest.len(), 400, "1000 - 600 drained");

    assert!(reader.read(Some(10)).unwrap().is_empty(), "empty after EOF");
    assert!(reader.read(None).unwrap().is_empty(), "still empty");
}
