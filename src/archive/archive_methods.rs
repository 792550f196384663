// Turning a traversal into a tar stream.
//
// Entry metadata carries over exactly as far as tar can express it: mode
// with the IALLOC/IFMT/ILARG bits stripped, uid/gid, mtime, sizes for
// regular files, (major, minor) for devices. "." and ".." never become
// entries; the walker already refuses to recurse into them.

use std::fs::File;
use std::io::{self, Write};

use bzip2::write::BzEncoder;
use flate2::write::GzEncoder;
use log::{debug, error, info};
use tar::{Builder, EntryType, Header};
use xz2::write::XzEncoder;

use crate::archive::archive_struct::{ArchiveOptions, Compression};
use crate::error_types::volume::VolumeError;
use crate::volume::block::inode::inode_struct::InodeKind;
use crate::volume::device::device_struct::BlockDevice;
use crate::volume::ilist::ilist_struct::InodeTable;
use crate::volume::io::file::types::FileReader;
use crate::walk::walk_struct::{Entry, Visitor, Walker};

/// Bits that do not belong in a tar mode field: IALLOC, IFMT, ILARG.
const TAR_MODE_MASK: u16 = 0x0FFF;

/// Write the archive described by `options`.
pub fn write_archive(
    device: &mut BlockDevice,
    table: &InodeTable,
    options: &ArchiveOptions,
) -> Result<(), VolumeError> {
    let sink = Sink::open(options)?;
    let mut builder = Builder::new(sink);

    {
        let mut visitor = TarVisitor {
            builder: &mut builder,
        };
        let mut walker = Walker::new(device, table);
        for &root in &options.roots {
            debug!("Archiving from inode {root}");
            if let Err(trouble) = walker.walk(root, ".", &mut visitor) {
                if trouble.is_fatal() {
                    return Err(trouble);
                }
                // A bad root spoils only itself.
                error!("inode {root}: {trouble}, not archived");
            }
        }
    }

    let sink = builder.into_inner()?;
    sink.finish()?;
    info!("Archive complete");
    Ok(())
}

// The output stream, with compression already wrapped around it. An enum
// rather than a Box<dyn Write> so the encoders can be finished explicitly;
// dropping them would swallow any failure in the final squeeze.
enum Sink {
    Plain(Box<dyn Write>),
    Gzip(GzEncoder<Box<dyn Write>>),
    Bzip2(BzEncoder<Box<dyn Write>>),
    Xz(XzEncoder<Box<dyn Write>>),
}

impl Sink {
    fn open(options: &ArchiveOptions) -> Result<Sink, io::Error> {
        let raw: Box<dyn Write> = match &options.output {
            Some(path) => {
                debug!("Archive goes to {}", path.display());
                Box::new(File::create(path)?)
            }
            None => Box::new(io::stdout()),
        };

        Ok(match options.compression {
            Compression::None => Sink::Plain(raw),
            Compression::Gzip => Sink::Gzip(GzEncoder::new(raw, flate2::Compression::default())),
            Compression::Bzip2 => Sink::Bzip2(BzEncoder::new(raw, bzip2::Compression::default())),
            Compression::Xz => Sink::Xz(XzEncoder::new(raw, 6)),
        })
    }

    fn finish(self) -> Result<(), io::Error> {
        match self {
            Sink::Plain(mut sink) => sink.flush(),
            Sink::Gzip(encoder) => encoder.finish()?.flush(),
            Sink::Bzip2(encoder) => encoder.finish()?.flush(),
            Sink::Xz(encoder) => encoder.finish()?.flush(),
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Plain(sink) => sink.write(buffer),
            Sink::Gzip(encoder) => encoder.write(buffer),
            Sink::Bzip2(encoder) => encoder.write(buffer),
            Sink::Xz(encoder) => encoder.write(buffer),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Plain(sink) => sink.flush(),
            Sink::Gzip(encoder) => encoder.flush(),
            Sink::Bzip2(encoder) => encoder.flush(),
            Sink::Xz(encoder) => encoder.flush(),
        }
    }
}

struct TarVisitor<'b, W: Write> {
    builder: &'b mut Builder<W>,
}

impl<W: Write> TarVisitor<'_, W> {
    fn header_for(entry: &Entry<'_>) -> Header {
        let mut header = Header::new_ustar();
        header.set_mode(u32::from(entry.inode.mode.bits() & TAR_MODE_MASK));
        // v6 ids are single bytes; carry the raw byte value.
        header.set_uid(u64::from(entry.inode.uid as u8));
        header.set_gid(u64::from(entry.inode.gid as u8));
        header.set_mtime(u64::from(entry.inode.mtime));
        header
    }
}

impl<W: Write> Visitor for TarVisitor<'_, W> {
    fn file(
        &mut self,
        entry: &Entry<'_>,
        reader: &mut FileReader<'_>,
    ) -> Result<(), VolumeError> {
        let bytes = reader.read(None)?;
        let mut header = Self::header_for(entry);
        header.set_entry_type(EntryType::Regular);
        header.set_size(bytes.len() as u64);
        self.builder
            .append_data(&mut header, entry.path, bytes.as_slice())?;
        Ok(())
    }

    fn directory(&mut self, entry: &Entry<'_>) -> Result<(), VolumeError> {
        let mut header = Self::header_for(entry);
        header.set_entry_type(EntryType::Directory);
        header.set_size(0);
        self.builder
            .append_data(&mut header, entry.path, io::empty())?;
        Ok(())
    }

    fn device(&mut self, entry: &Entry<'_>, major: u8, minor: u8) -> Result<(), VolumeError> {
        let mut header = Self::header_for(entry);
        header.set_entry_type(match entry.inode.kind() {
            InodeKind::CharDevice => EntryType::Char,
            _ => EntryType::Block,
        });
        header.set_size(0);
        header.set_device_major(u32::from(major))?;
        header.set_device_minor(u32::from(minor))?;
        self.builder
            .append_data(&mut header, entry.path, io::empty())?;
        Ok(())
    }
}
