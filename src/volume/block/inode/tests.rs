// Inode decode tests
#![allow(clippy::unwrap_used)]

use rand::Rng;

use crate::volume::block::inode::inode_struct::{Inode, InodeKind, InodeMode};

// Hand-roll a 32-byte record. Times go in half-swapped, like the disk has them.
fn raw_inode(mode: u16, nlink: u8, size: u32, addr: [u16; 8]) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[0..2].copy_from_slice(&mode.to_le_bytes());
    bytes[2] = nlink;
    bytes[3] = 5; // uid
    bytes[4] = 250; // gid, reads back as -6
    bytes[5] = ((size >> 16) & 0xFF) as u8;
    bytes[6..8].copy_from_slice(&((size & 0xFFFF) as u16).to_le_bytes());
    for (slot, word) in addr.iter().enumerate() {
        bytes[8 + slot * 2..10 + slot * 2].copy_from_slice(&word.to_le_bytes());
    }
    let swapped = |t: u32| ((t >> 16) & 0xFFFF) | ((t & 0xFFFF) << 16);
    bytes[24..28].copy_from_slice(&swapped(0x1122_3344).to_le_bytes());
    bytes[28..32].copy_from_slice(&swapped(0x5566_7788).to_le_bytes());
    bytes
}

#[test]
fn decodes_the_split_size_and_swapped_times() {
    let raw = raw_inode(0x8000 | 0x01A4, 2, 0x0012_3456, [7, 8, 0, 0, 0, 0, 0, 0]);
    let inode = Inode::from_bytes(&raw).unwrap();

    assert_eq!(inode.size, 0x0012_3456, "24-bit split size reassembled");
    assert_eq!(inode.nlink, 2, "nlink");
    assert_eq!(inode.uid, 5, "uid");
    assert_eq!(inode.gid, -6, "gid is signed");
    assert_eq!(inode.atime, 0x1122_3344, "atime half-swap undone");
    assert_eq!(inode.mtime, 0x5566_7788, "mtime half-swap undone");
    assert_eq!(inode.addr[1], 8, "addr words are plain little-endian");
    assert!(inode.mode.contains(InodeMode::ALLOC), "alloc bit survived");
}

#[test]
fn kind_covers_all_four_field_values() {
    let kind_of = |mode: u16| {
        Inode::from_bytes(&raw_inode(mode, 1, 0, [0; 8]))
            .unwrap()
            .kind()
    };
    assert_eq!(kind_of(0x8000), InodeKind::Regular, "0x0000 field");
    assert_eq!(kind_of(0xC000), InodeKind::Directory, "0x4000 field");
    assert_eq!(kind_of(0xA000), InodeKind::CharDevice, "0x2000 field");
    assert_eq!(kind_of(0xE000), InodeKind::BlockDevice, "0x6000 field");
}

#[test]
fn device_numbers_unpack_from_addr0() {
    let raw = raw_inode(0xA000, 1, 0, [0x0803, 0, 0, 0, 0, 0, 0, 0]);
    let inode = Inode::from_bytes(&raw).unwrap();
    assert_eq!(inode.device_numbers(), (8, 3), "major in the high byte");
}

#[test]
fn filemode_spells_out_a_plain_file() {
    // 0644 regular, allocated, small.
    let raw = raw_inode(0x8000 | 0o644, 1, 0, [0; 8]);
    let inode = Inode::from_bytes(&raw).unwrap();
    assert_eq!(inode.filemode(), "-rw-r--r--.*", "everyday file");
}

#[test]
fn filemode_spells_out_the_special_bits() {
    // setuid root shell: 04755 equivalent, allocated, large.
    let raw = raw_inode(0x8000 | 0x1000 | 0x0800 | 0o755, 1, 0, [0; 8]);
    let inode = Inode::from_bytes(&raw).unwrap();
    assert_eq!(inode.filemode(), "-rwsr-xr-xL*", "setuid with exec is 's'");

    // setuid without owner exec shows 'S'; sticky without other exec 'T'.
    let raw = raw_inode(0x0800 | 0x0200 | 0o644, 1, 0, [0; 8]);
    let inode = Inode::from_bytes(&raw).unwrap();
    assert_eq!(inode.filemode(), "-rwSr--r-T..", "capital letters mean no exec");

    // Sticky with other exec shows 't', on a directory.
    let raw = raw_inode(0x8000 | 0x4000 | 0x0200 | 0o777, 2, 0, [0; 8]);
    let inode = Inode::from_bytes(&raw).unwrap();
    assert_eq!(inode.filemode(), "drwxrwxrwt.*", "sticky directory");
}

#[test]
fn filemode_shape_holds_for_arbitrary_modes() {
    let mut random = rand::rng();
    for _ in 0..2000 {
        let mode: u16 = random.random();
        let inode = Inode::from_bytes(&raw_inode(mode, 1, 0, [0; 8])).unwrap();
        let text = inode.filemode();
        assert_eq!(text.len(), 12, "type + 9 permission chars + 2 trailers");
        for c in text.chars().skip(1).take(9) {
            assert!(
                matches!(c, 'r' | 'w' | 'x' | 's' | 'S' | 't' | 'T' | '-'),
                "permission slot held {c:?} for mode {mode:#06x}"
            );
        }
    }
}

#[test]
fn short_record_is_rejected() {
    assert!(
        Inode::from_bytes(&[0u8; 31]).is_err(),
        "31 bytes is not an inode"
    );
}
