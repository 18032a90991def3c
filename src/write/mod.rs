// Copyright (c) 2021-2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports writing stored ZIP archives.
//!
//! An archive is written in three strictly ordered sections:
//! - one local file header, name and content per entry,
//! - one central directory record per entry, in the same order, each pointing back at its local header,
//! - a single end of central directory record locating and sizing the central directory.
//!
//! # Example
//! ### In memory
//! ```
//! # use storezip::{assemble, LogicalFile};
//! # use storezip::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let files = [LogicalFile::new("foo.txt", "This is an example file.")];
//! let archive: Vec<u8> = assemble(&files)?;
//! #   Ok(())
//! # }
//! ```
//! ### Any writer
//! ```no_run
//! # use storezip::{ArchiveWriter, LogicalFile};
//! # use storezip::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let file = std::fs::File::create("foo.zip")?;
//! let mut writer = ArchiveWriter::new(file);
//!
//! writer.write_entry(&LogicalFile::new("foo.txt", "This is an example file."))?;
//! writer.close()?;
//! #   Ok(())
//! # }
//! ```

pub(crate) mod entry_whole;
pub(crate) mod io;
pub mod layout;

use crate::entry::{checked_entry_count, checked_offset, EncodedEntry, LogicalFile};
use crate::error::{Result, ZipError};
use crate::spec::consts::{CDH_SIGNATURE, EOCDR_SIGNATURE, VERSION_MADE_BY, VERSION_NEEDED};
use crate::spec::header::{CentralDirectoryRecord, EndOfCentralDirectoryHeader, GeneralPurposeFlag};
use crate::spec::Compression;

use entry_whole::EntryWholeWriter;
use io::offset::OffsetWriter;
use layout::Layout;

use std::io::Write;

/// Options which apply to every entry of an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveOptions {
    pub(crate) checksums: bool,
}

impl Default for ArchiveOptions {
    fn default() -> Self {
        Self { checksums: true }
    }
}

impl ArchiveOptions {
    /// Sets whether CRC-32 checksums are computed for each entry.
    ///
    /// When disabled, both CRC-32 fields of every entry are written as zero. Some readers reject or warn about
    /// such entries, so this only exists for byte-compatibility with consumers expecting zeroed checksums.
    pub fn checksums(mut self, checksums: bool) -> Self {
        self.checksums = checksums;
        self
    }
}

/// A stored ZIP archive writer which acts over [`Write`] implementers.
///
/// # Note
/// - [`ArchiveWriter::close()`] must be called once all entries are written, or the output won't be a valid archive.
pub struct ArchiveWriter<W> {
    pub(crate) writer: OffsetWriter<W>,
    pub(crate) entries: Vec<EncodedEntry>,
    pub(crate) options: ArchiveOptions,
}

impl<W: Write> ArchiveWriter<W> {
    /// Construct a new archive writer from a writer.
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, ArchiveOptions::default())
    }

    /// Construct a new archive writer from a writer and a set of options.
    pub fn with_options(writer: W, options: ArchiveOptions) -> Self {
        Self { writer: OffsetWriter::new(writer), entries: Vec::new(), options }
    }

    /// Write a new entry, its local header immediately followed by its name and content.
    ///
    /// Nothing is written if the entry's content, name, offset, or the resulting entry count doesn't fit the format.
    pub fn write_entry(&mut self, file: &LogicalFile) -> Result<()> {
        EntryWholeWriter::from_raw(self, file).write()
    }

    /// Returns the number of bytes written so far.
    pub fn offset(&self) -> u64 {
        self.writer.offset()
    }

    /// Consumes this writer and completes all closing tasks.
    ///
    /// This includes:
    /// - Writing all central directory records.
    /// - Writing the end of central directory record.
    ///
    /// Failure to call this function before going out of scope would result in a corrupted archive.
    pub fn close(mut self) -> Result<W> {
        let num_of_entries = checked_entry_count(self.entries.len())?;
        let cd_offset = self.writer.offset();
        let cent_dir_offset = checked_offset(cd_offset)?;

        for entry in &self.entries {
            let header = CentralDirectoryRecord {
                v_made_by: VERSION_MADE_BY,
                v_needed: VERSION_NEEDED,
                flags: GeneralPurposeFlag::default(),
                compression: Compression::Stored.into(),
                mod_time: 0,
                mod_date: 0,
                crc: entry.crc,
                compressed_size: entry.size,
                uncompressed_size: entry.size,
                file_name_length: entry.file_name_length,
                extra_field_length: 0,
                file_comment_length: 0,
                disk_start: 0,
                inter_attr: 0,
                exter_attr: 0,
                lh_offset: entry.lh_offset,
            };

            self.writer.write_all(&CDH_SIGNATURE.to_le_bytes())?;
            self.writer.write_all(&header.as_slice())?;
            self.writer.write_all(&entry.name)?;
        }

        let size_cent_dir = checked_offset(self.writer.offset() - cd_offset)?;

        let header = EndOfCentralDirectoryHeader {
            disk_num: 0,
            start_cent_dir_disk: 0,
            num_of_entries_disk: num_of_entries,
            num_of_entries,
            size_cent_dir,
            cent_dir_offset,
            file_comm_length: 0,
        };

        self.writer.write_all(&EOCDR_SIGNATURE.to_le_bytes())?;
        self.writer.write_all(&header.as_slice())?;
        self.writer.flush()?;

        tracing::trace!(entries = num_of_entries, cent_dir_offset, size_cent_dir, "wrote central directory");

        Ok(self.writer.into_inner())
    }
}

/// Assembles the provided files, in order, into a complete stored ZIP archive.
///
/// Equivalent to [`assemble_with`] with the default [`ArchiveOptions`] (CRC-32 checksums enabled). The output
/// depends only on the files' names, contents and order, so assembling the same input twice yields identical bytes.
pub fn assemble(files: &[LogicalFile]) -> Result<Vec<u8>> {
    assemble_with(files, ArchiveOptions::default())
}

/// Assembles the provided files, in order, into a complete stored ZIP archive using the provided options.
///
/// The output buffer is sized exactly from the archive's [`Layout`] before any writing takes place.
pub fn assemble_with(files: &[LogicalFile], options: ArchiveOptions) -> Result<Vec<u8>> {
    let layout = Layout::of(files)?;
    let capacity = usize::try_from(layout.total_size()).map_err(|_| ZipError::ArchiveTooLarge(layout.total_size()))?;

    let mut writer = ArchiveWriter::with_options(Vec::with_capacity(capacity), options);
    for file in files {
        writer.write_entry(file)?;
    }
    let data = writer.close()?;

    debug_assert_eq!(data.len(), capacity);
    tracing::debug!(entries = layout.entries(), size = data.len(), "assembled archive");

    Ok(data)
}
