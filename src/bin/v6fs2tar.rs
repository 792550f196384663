// Export a v6 file-system image as a tar archive.
//
// Exit codes: 0 all good, 1 the arguments were wrong, 2 the image was not.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use v6fs::archive::archive_methods::write_archive;
use v6fs::archive::archive_struct::{ArchiveOptions, Compression};
use v6fs::error_types::volume::VolumeError;
use v6fs::volume::device::device_struct::BlockDevice;
use v6fs::volume::ilist::ilist_struct::InodeTable;

#[derive(Parser)]
#[command(version, about = "Write a v6 file-system image out as a tar archive")]
struct Cli {
    /// Archive output path; standard output when omitted.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// gzip the archive.
    #[arg(short = 'z', conflicts_with_all = ["bzip2", "xz", "kind"])]
    gzip: bool,

    /// bzip2 the archive.
    #[arg(short = 'j', conflicts_with_all = ["gzip", "xz", "kind"])]
    bzip2: bool,

    /// xz the archive.
    #[arg(short = 'J', conflicts_with_all = ["gzip", "bzip2", "kind"])]
    xz: bool,

    /// Compression by name: gz, bz2 or xz.
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    kind: Option<String>,

    /// The volume image.
    devfile: PathBuf,

    /// Root inode numbers; the root inode (1) when none are given.
    inodes: Vec<u32>,
}

fn main() -> ExitCode {
    env_logger::init();

    // Usage problems exit 1, and clap's default of 2 is spoken for.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(trouble) => {
            let asked_for_it = matches!(
                trouble.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            );
            let _ = trouble.print();
            return ExitCode::from(if asked_for_it { 0 } else { 1 });
        }
    };

    let compression = match pick_compression(&cli) {
        Ok(compression) => compression,
        Err(complaint) => {
            eprintln!("v6fs2tar: {complaint}");
            return ExitCode::from(1);
        }
    };

    let options = ArchiveOptions {
        output: cli.output.clone(),
        compression,
        roots: if cli.inodes.is_empty() {
            vec![1]
        } else {
            cli.inodes.clone()
        },
    };

    match run(&cli.devfile, &options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(trouble) => {
            eprintln!("v6fs2tar: {trouble}");
            ExitCode::from(2)
        }
    }
}

fn pick_compression(cli: &Cli) -> Result<Compression, String> {
    if cli.gzip {
        return Ok(Compression::Gzip);
    }
    if cli.bzip2 {
        return Ok(Compression::Bzip2);
    }
    if cli.xz {
        return Ok(Compression::Xz);
    }
    match cli.kind.as_deref() {
        None => Ok(Compression::None),
        Some("gz") => Ok(Compression::Gzip),
        Some("bz2") => Ok(Compression::Bzip2),
        Some("xz") => Ok(Compression::Xz),
        Some(other) => Err(format!("unknown compression type {other:?} (want gz, bz2 or xz)")),
    }
}

fn run(devfile: &Path, options: &ArchiveOptions) -> Result<(), VolumeError> {
    let mut device = BlockDevice::open(devfile)?;
    let table = InodeTable::load(&mut device)?;
    write_archive(&mut device, &table, options)
}
