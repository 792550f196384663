// The one-line-per-inode listing shared by `inodes` and `itree`.

use chrono::{Local, TimeZone};

use crate::volume::block::inode::inode_struct::{Inode, InodeKind};

/// Unix seconds to local "YYYY-MM-DD HH:MM:SS".
pub fn format_time(seconds: u32) -> String {
    match Local.timestamp_opt(i64::from(seconds), 0).earliest() {
        Some(stamp) => stamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        // Every u32 is a representable timestamp, but chrono cannot promise
        // that for an arbitrary local timezone database.
        None => String::from("????-??-?? ??:??:??"),
    }
}

/// `NNNNN MODESTR LL UU GG SSSSSSSS MTIME ATIME [NAME]`.
///
/// Devices have no meaningful size; they show `major,minor` in the size
/// column instead.
pub fn listing_line(number: u32, inode: &Inode, name: Option<&str>) -> String {
    let size_column = match inode.kind() {
        InodeKind::CharDevice | InodeKind::BlockDevice => {
            let (major, minor) = inode.device_numbers();
            format!("{major},{minor}")
        }
        InodeKind::Regular | InodeKind::Directory => inode.size.to_string(),
    };

    let mut line = format!(
        "{number:5} {} {:2} {:2} {:2} {size_column:>8} {} {}",
        inode.filemode(),
        inode.nlink,
        inode.uid,
        inode.gid,
        format_time(inode.mtime),
        format_time(inode.atime),
    );

    if let Some(name) = name {
        line.push(' ');
        line.push_str(name);
    }

    line
}
