// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A ZIP reader which acts over a borrowed slice of bytes.
//!
//! ### Example
//! ```
//! # use storezip::{assemble, LogicalFile};
//! # use storezip::read::mem::ZipFileReader;
//! # use storezip::error::Result;
//! #
//! # fn run() -> Result<()> {
//! let archive = assemble(&[LogicalFile::new("a.txt", "hi")])?;
//! let reader = ZipFileReader::new(&archive)?;
//!
//! assert_eq!(reader.entries()[0].name(), "a.txt");
//! assert_eq!(reader.entry_data(0)?, b"hi");
//! #   Ok(())
//! # }
//! # run().unwrap();
//! ```

use crate::error::{Result, ZipError};
use crate::read::{Directory, StoredEntry};
use crate::spec::consts::{LFH_LENGTH, LFH_SIGNATURE, SIGNATURE_LENGTH};
use crate::spec::header::LocalFileHeader;
use crate::utils::{assert_signature, compute_crc, read_array, read_bytes};

/// A ZIP reader which acts over a borrowed slice of bytes.
#[derive(Debug, Clone)]
pub struct ZipFileReader<'a> {
    data: &'a [u8],
    directory: Directory,
    entries: Vec<StoredEntry>,
}

impl<'a> ZipFileReader<'a> {
    /// Constructs a new ZIP reader, parsing the end of central directory record and every central directory record.
    pub fn new(data: &'a [u8]) -> Result<ZipFileReader<'a>> {
        let (directory, entries) = crate::read::file(data)?;
        Ok(ZipFileReader { data, directory, entries })
    }

    /// Returns the raw bytes provided to the reader during construction.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the location and size of the central directory.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Returns this archive's entries, in central directory order.
    pub fn entries(&self) -> &[StoredEntry] {
        &self.entries
    }

    /// Returns the first entry with the provided name, alongside its index.
    pub fn entry(&self, name: &str) -> Option<(usize, &StoredEntry)> {
        self.entries.iter().enumerate().find(|(_, entry)| entry.name == name)
    }

    /// Returns the stored content of the entry at the provided index.
    ///
    /// The entry's local file header is validated on the way; if a CRC-32 was recorded it's checked against the
    /// content. Zero is treated as "not recorded".
    pub fn entry_data(&self, index: usize) -> Result<&'a [u8]> {
        let entry = self.entries.get(index).ok_or(ZipError::EntryIndexOutOfBounds)?;
        let mut cursor = entry.header_offset as usize;

        assert_signature(self.data, cursor, LFH_SIGNATURE)?;
        cursor += SIGNATURE_LENGTH;

        let header = LocalFileHeader::from(read_array::<LFH_LENGTH>(self.data, cursor)?);
        cursor += LFH_LENGTH + usize::from(header.file_name_length) + usize::from(header.extra_field_length);

        let content = read_bytes(self.data, cursor, entry.compressed_size as usize)?;

        if entry.crc != 0 {
            let actual = compute_crc(content);
            if actual != entry.crc {
                tracing::warn!(name = %entry.name, expected = entry.crc, actual, "CRC-32 mismatch");
                return Err(ZipError::CRC32CheckError);
            }
        }

        Ok(content)
    }
}
