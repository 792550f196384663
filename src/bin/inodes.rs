// List every in-use inode of one or more volume images.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use v6fs::error_types::volume::VolumeError;
use v6fs::helpers::listing::listing_line;
use v6fs::volume::device::device_struct::BlockDevice;
use v6fs::volume::ilist::ilist_struct::InodeTable;

#[derive(Parser)]
#[command(version, about = "List the in-use inodes of v6 file-system images")]
struct Cli {
    /// Volume images; standard input when none are given.
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(trouble) => {
            eprintln!("inodes: {trouble}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), VolumeError> {
    if cli.files.is_empty() {
        let mut image = Vec::new();
        let _ = std::io::stdin()
            .read_to_end(&mut image)
            .map_err(VolumeError::Image)?;
        let mut device = BlockDevice::from_image(image);
        return report(&mut device, None);
    }

    for path in &cli.files {
        let mut device = BlockDevice::open(path)?;
        report(&mut device, Some(&path.display().to_string()))?;
    }
    Ok(())
}

fn report(device: &mut BlockDevice, label: Option<&str>) -> Result<(), VolumeError> {
    let table = InodeTable::load(device)?;

    if let Some(label) = label {
        println!("{label}:");
    }

    for (number, inode) in table.iter() {
        if !inode.in_use() {
            continue;
        }
        println!("{}", listing_line(number, inode, None));
    }

    Ok(())
}
