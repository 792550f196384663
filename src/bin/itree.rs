// Print the file tree under one or more inodes.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use v6fs::error_types::volume::VolumeError;
use v6fs::helpers::listing::listing_line;
use v6fs::volume::device::device_struct::BlockDevice;
use v6fs::volume::ilist::ilist_struct::InodeTable;
use v6fs::volume::io::file::types::FileReader;
use v6fs::walk::walk_struct::{Entry, Visitor, Walker};

#[derive(Parser)]
#[command(version, about = "Print the directory tree of a v6 file-system image")]
struct Cli {
    /// The volume image.
    devfile: PathBuf,
    /// Root inode numbers; the root inode (1) when none are given.
    inodes: Vec<u32>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(trouble) => {
            eprintln!("itree: {trouble}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), VolumeError> {
    let mut device = BlockDevice::open(&cli.devfile)?;
    let table = InodeTable::load(&mut device)?;

    let roots = if cli.inodes.is_empty() {
        vec![1]
    } else {
        cli.inodes.clone()
    };

    let mut printer = TreePrinter;
    let mut walker = Walker::new(&mut device, &table);
    for root in roots {
        if let Err(trouble) = walker.walk(root, "/", &mut printer) {
            if trouble.is_fatal() {
                return Err(trouble);
            }
            // Skip this root, keep going with the rest.
            eprintln!("itree: inode {root}: {trouble}");
        }
    }
    Ok(())
}

struct TreePrinter;

impl TreePrinter {
    fn line(entry: &Entry<'_>) {
        println!(
            "{}{}",
            "->".repeat(entry.depth),
            listing_line(entry.number, entry.inode, Some(entry.name))
        );
    }
}

impl Visitor for TreePrinter {
    fn file(&mut self, entry: &Entry<'_>, _reader: &mut FileReader<'_>) -> Result<(), VolumeError> {
        Self::line(entry);
        Ok(())
    }

    fn directory(&mut self, entry: &Entry<'_>) -> Result<(), VolumeError> {
        Self::line(entry);
        Ok(())
    }

    fn device(&mut self, entry: &Entry<'_>, _major: u8, _minor: u8) -> Result<(), VolumeError> {
        Self::line(entry);
        Ok(())
    }
}
