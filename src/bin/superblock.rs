// Print the decoded superblock of one or more volume images.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use v6fs::error_types::volume::VolumeError;
use v6fs::helpers::listing::format_time;
use v6fs::volume::block::superblock::superblock_struct::SuperBlock;
use v6fs::volume::device::device_struct::{BlockDevice, SUPERBLOCK_BLOCK};

#[derive(Parser)]
#[command(version, about = "Report the superblock of v6 file-system images")]
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
            eprintln!("superblock: {trouble}");
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
    let superblock = SuperBlock::from_bytes(&device.read_block(SUPERBLOCK_BLOCK)?)?;

    if let Some(label) = label {
        println!("{label}:");
    }

    println!("isize:  {}", superblock.isize);
    println!("fsize:  {}", superblock.fsize);
    println!("nfree:  {}", superblock.nfree);
    println!(
        "free:   {:?}",
        &superblock.free[..usize::from(superblock.nfree.min(100))]
    );
    println!("ninode: {}", superblock.ninode);
    println!(
        "inode:  {:?}",
        &superblock.inode[..usize::from(superblock.ninode.min(100))]
    );
    println!("flock:  {}", superblock.flock);
    println!("ilock:  {}", superblock.ilock);
    println!("fmod:   {}", superblock.fmod);
    println!("ronly:  {}", superblock.ronly);
    println!("time:   {}", format_time(superblock.time));

    Ok(())
}
