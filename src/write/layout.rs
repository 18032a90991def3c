// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Up-front sizing of an archive from its input files.
//!
//! Every record has a fixed length plus the entry's name (and, for local headers, its content), so the complete
//! layout is known before a single byte is written. [`assemble`](crate::assemble) uses this to allocate its output
//! once and to reject inputs which exceed the format's 16/32-bit fields before doing any work.

use crate::entry::{checked_entry_count, checked_offset, LogicalFile};
use crate::error::Result;
use crate::spec::consts::{CDH_LENGTH, EOCDR_LENGTH, LFH_LENGTH, SIGNATURE_LENGTH};

pub(crate) const LFH_RECORD_LENGTH: u64 = (SIGNATURE_LENGTH + LFH_LENGTH) as u64;
pub(crate) const CDH_RECORD_LENGTH: u64 = (SIGNATURE_LENGTH + CDH_LENGTH) as u64;
pub(crate) const EOCDR_RECORD_LENGTH: u64 = (SIGNATURE_LENGTH + EOCDR_LENGTH) as u64;

/// The byte layout an archive will have once assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    entries: u16,
    entries_size: u64,
    directory_size: u64,
}

impl Layout {
    /// Computes the layout of an archive holding the provided files, in order.
    ///
    /// Fails with the same error [`assemble`](crate::assemble) would if any file, offset, or the entry count
    /// doesn't fit its record field.
    pub fn of(files: &[LogicalFile]) -> Result<Layout> {
        let entries = checked_entry_count(files.len())?;
        let mut entries_size = 0;
        let mut directory_size = 0;

        for file in files {
            let size = u64::from(file.checked_size()?);
            let name_length = u64::from(file.checked_name_length()?);

            checked_offset(entries_size)?;
            entries_size += LFH_RECORD_LENGTH + name_length + size;
            directory_size += CDH_RECORD_LENGTH + name_length;
        }

        checked_offset(entries_size)?;
        checked_offset(directory_size)?;

        Ok(Layout { entries, entries_size, directory_size })
    }

    /// Returns the number of entries.
    pub fn entries(&self) -> u16 {
        self.entries
    }

    /// Returns the offset at which the central directory starts.
    pub fn directory_offset(&self) -> u64 {
        self.entries_size
    }

    /// Returns the combined length of all central directory records.
    pub fn directory_size(&self) -> u64 {
        self.directory_size
    }

    /// Returns the total length of the archive.
    pub fn total_size(&self) -> u64 {
        self.entries_size + self.directory_size + EOCDR_RECORD_LENGTH
    }
}
