// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::entry::{checked_entry_count, checked_offset, EncodedEntry, LogicalFile};
use crate::error::Result;
use crate::spec::consts::{LFH_SIGNATURE, VERSION_NEEDED};
use crate::spec::header::{GeneralPurposeFlag, LocalFileHeader};
use crate::spec::Compression;
use crate::utils::compute_crc;
use crate::write::ArchiveWriter;

use std::io::Write;

/// Writes a single file's local header, name and content, then records it for the central directory.
pub struct EntryWholeWriter<'b, 'c, W: Write> {
    writer: &'b mut ArchiveWriter<W>,
    file: &'c LogicalFile,
}

impl<'b, 'c, W: Write> EntryWholeWriter<'b, 'c, W> {
    pub fn from_raw(writer: &'b mut ArchiveWriter<W>, file: &'c LogicalFile) -> Self {
        Self { writer, file }
    }

    pub fn write(self) -> Result<()> {
        let size = self.file.checked_size()?;
        let file_name_length = self.file.checked_name_length()?;
        checked_entry_count(self.writer.entries.len() + 1)?;
        let lh_offset = checked_offset(self.writer.writer.offset())?;

        let crc = match self.writer.options.checksums {
            true => compute_crc(&self.file.content),
            false => 0,
        };

        let header = LocalFileHeader {
            version: VERSION_NEEDED,
            flags: GeneralPurposeFlag::default(),
            compression: Compression::Stored.into(),
            mod_time: 0,
            mod_date: 0,
            crc,
            compressed_size: size,
            uncompressed_size: size,
            file_name_length,
            extra_field_length: 0,
        };

        self.writer.writer.write_all(&LFH_SIGNATURE.to_le_bytes())?;
        self.writer.writer.write_all(&header.as_slice())?;
        self.writer.writer.write_all(self.file.name.as_bytes())?;
        self.writer.writer.write_all(&self.file.content)?;

        tracing::trace!(name = %self.file.name, offset = lh_offset, size, crc, "wrote local file header");

        self.writer.entries.push(EncodedEntry {
            name: self.file.name.as_bytes().to_vec(),
            file_name_length,
            crc,
            size,
            lh_offset,
        });

        Ok(())
    }
}
