// Copyright (c) 2022-2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which supports reading stored ZIP archives held in memory.
//!
//! Only single-disk, non-ZIP64, unencrypted archives whose entries use the Stored method are supported, which
//! covers everything this crate writes.

pub mod mem;

pub(crate) mod locator;

use crate::error::{Result, ZipError};
use crate::spec::consts::{CDH_LENGTH, CDH_SIGNATURE, EOCDR_LENGTH, SIGNATURE_LENGTH};
use crate::spec::header::{CentralDirectoryRecord, EndOfCentralDirectoryHeader};
use crate::spec::Compression;
use crate::utils::{assert_signature, read_array, read_bytes};

/// An entry as described by its central directory record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEntry {
    pub(crate) name: String,
    pub(crate) crc: u32,
    pub(crate) compressed_size: u32,
    pub(crate) uncompressed_size: u32,
    pub(crate) header_offset: u32,
}

impl StoredEntry {
    /// Returns the entry's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the entry's CRC-32, or zero if none was recorded.
    pub fn crc32(&self) -> u32 {
        self.crc
    }

    /// Returns the entry's compressed size.
    pub fn compressed_size(&self) -> u32 {
        self.compressed_size
    }

    /// Returns the entry's uncompressed size.
    pub fn uncompressed_size(&self) -> u32 {
        self.uncompressed_size
    }

    /// Returns the offset of the entry's local file header from the start of the archive.
    pub fn header_offset(&self) -> u32 {
        self.header_offset
    }
}

/// The archive-level facts recorded by the end of central directory record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directory {
    /// Offset of the first central directory record.
    pub offset: u32,
    /// Combined length of all central directory records.
    pub size: u32,
    /// Number of central directory records.
    pub entries: u16,
}

pub(crate) fn file(data: &[u8]) -> Result<(Directory, Vec<StoredEntry>)> {
    let eocdr_offset = locator::eocdr(data)?;
    let eocdr = EndOfCentralDirectoryHeader::from(read_array::<EOCDR_LENGTH>(data, eocdr_offset)?);

    // Outdated feature so unlikely to ever make it into this crate.
    if eocdr.disk_num != eocdr.start_cent_dir_disk || eocdr.num_of_entries != eocdr.num_of_entries_disk {
        return Err(ZipError::FeatureNotSupported("Spanned/split files"));
    }

    let directory =
        Directory { offset: eocdr.cent_dir_offset, size: eocdr.size_cent_dir, entries: eocdr.num_of_entries };
    let entries = cd(data, &directory)?;

    Ok((directory, entries))
}

pub(crate) fn cd(data: &[u8], directory: &Directory) -> Result<Vec<StoredEntry>> {
    let mut cursor = directory.offset as usize;
    let mut entries = Vec::with_capacity(directory.entries.into());

    for _ in 0..directory.entries {
        entries.push(cd_record(data, &mut cursor)?);
    }

    Ok(entries)
}

pub(crate) fn cd_record(data: &[u8], cursor: &mut usize) -> Result<StoredEntry> {
    assert_signature(data, *cursor, CDH_SIGNATURE)?;
    *cursor += SIGNATURE_LENGTH;

    let header = CentralDirectoryRecord::from(read_array::<CDH_LENGTH>(data, *cursor)?);
    *cursor += CDH_LENGTH;

    if header.flags.encrypted {
        return Err(ZipError::FeatureNotSupported("Encryption"));
    }
    Compression::try_from(header.compression)?;

    let filename = read_bytes(data, *cursor, header.file_name_length.into())?;
    let name = std::str::from_utf8(filename).map_err(|_| ZipError::StringNotUtf8)?.to_string();
    *cursor += usize::from(header.file_name_length)
        + usize::from(header.extra_field_length)
        + usize::from(header.file_comment_length);

    Ok(StoredEntry {
        name,
        crc: header.crc,
        compressed_size: header.compressed_size,
        uncompressed_size: header.uncompressed_size,
        header_offset: header.lh_offset,
    })
}
