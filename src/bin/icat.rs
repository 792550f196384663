// Emit the contents of inodes: raw bytes for files, entry listings for
// directories, a descriptor line for devices.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use v6fs::error_types::volume::VolumeError;
use v6fs::volume::block::inode::inode_struct::InodeKind;
use v6fs::volume::device::device_struct::BlockDevice;
use v6fs::volume::ilist::ilist_struct::InodeTable;
use v6fs::volume::io::directory::types::DirectoryIterator;
use v6fs::volume::io::file::types::FileReader;

#[derive(Parser)]
#[command(version, about = "Cat files out of a v6 file-system image by inode number")]
struct Cli {
    /// The volume image.
    devfile: PathBuf,
    /// Inode numbers to emit; the root inode (1) when none are given.
    inodes: Vec<u32>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(trouble) => {
            eprintln!("icat: {trouble}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), VolumeError> {
    let mut device = BlockDevice::open(&cli.devfile)?;
    let table = InodeTable::load(&mut device)?;

    let numbers = if cli.inodes.is_empty() {
        vec![1]
    } else {
        cli.inodes.clone()
    };

    for number in numbers {
        // A bad inode spoils only itself.
        if let Err(trouble) = cat_one(&mut device, &table, number) {
            if trouble.is_fatal() {
                return Err(trouble);
            }
            eprintln!("icat: inode {number}: {trouble}");
        }
    }
    Ok(())
}

fn cat_one(
    device: &mut BlockDevice,
    table: &InodeTable,
    number: u32,
) -> Result<(), VolumeError> {
    let inode = *table.get(number)?;
    let mut out = std::io::stdout().lock();

    match inode.kind() {
        InodeKind::Regular => {
            let mut reader = FileReader::new(device, number, &inode)?;
            while let Some(bytes) = reader.next_block()? {
                out.write_all(&bytes)?;
            }
        }
        InodeKind::Directory => {
            let reader = FileReader::new(device, number, &inode)?;
            let mut entries = DirectoryIterator::new(reader);
            while let Some(entry) = entries.next_entry()? {
                writeln!(out, "{} {}", entry.name, entry.number)?;
            }
        }
        InodeKind::CharDevice => {
            let (major, minor) = inode.device_numbers();
            writeln!(out, "character device ({major}, {minor})")?;
        }
        InodeKind::BlockDevice => {
            let (major, minor) = inode.device_numbers();
            writeln!(out, "block device ({major}, {minor})")?;
        }
    }

    Ok(())
}
