// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};

/// A named in-memory payload which becomes a single entry of the archive.
///
/// The name is used verbatim as the entry's path; it isn't checked for archive path legality (eg. `..` segments
/// or leading slashes), and duplicate names across an archive are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalFile {
    pub(crate) name: String,
    pub(crate) content: Vec<u8>,
}

impl LogicalFile {
    /// Constructs a new file from its name and raw content bytes.
    pub fn new<N, C>(name: N, content: C) -> Self
    where
        N: Into<String>,
        C: Into<Vec<u8>>,
    {
        Self { name: name.into(), content: content.into() }
    }

    /// Returns the file's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the file's content.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub(crate) fn checked_size(&self) -> Result<u32> {
        checked_size(&self.name, self.content.len())
    }

    pub(crate) fn checked_name_length(&self) -> Result<u16> {
        checked_name_length(self.name.len())
    }
}

impl<N, C> From<(N, C)> for LogicalFile
where
    N: Into<String>,
    C: Into<Vec<u8>>,
{
    fn from((name, content): (N, C)) -> Self {
        Self::new(name, content)
    }
}

/// A file whose local header and content have been written, holding what its directory record needs.
#[derive(Debug, Clone)]
pub(crate) struct EncodedEntry {
    pub(crate) name: Vec<u8>,
    pub(crate) file_name_length: u16,
    pub(crate) crc: u32,
    pub(crate) size: u32,
    pub(crate) lh_offset: u32,
}

pub(crate) fn checked_size(name: &str, size: usize) -> Result<u32> {
    u32::try_from(size).map_err(|_| ZipError::EntryTooLarge { name: name.to_string(), size: size as u64 })
}

pub(crate) fn checked_name_length(length: usize) -> Result<u16> {
    u16::try_from(length).map_err(|_| ZipError::FileNameTooLarge(length))
}

pub(crate) fn checked_entry_count(count: usize) -> Result<u16> {
    u16::try_from(count).map_err(|_| ZipError::TooManyEntries(count))
}

pub(crate) fn checked_offset(offset: u64) -> Result<u32> {
    u32::try_from(offset).map_err(|_| ZipError::ArchiveTooLarge(offset))
}
