// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)


use crate::error::ZipError;
use crate::read::mem::ZipFileReader;
use crate::tests::{init_logger, le_u16, le_u32, two_files};
use crate::{assemble, assemble_with, ArchiveOptions, ArchiveWriter, Layout, LogicalFile};

use std::io::{Error, ErrorKind, Write};

const CRC_HI: u32 = 0xd8932aac;

/// A writer which accepts a fixed number of bytes before failing.
pub(crate) struct FailingWriter {
    pub(crate) remaining: usize,
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if self.remaining == 0 {
            return Err(Error::new(ErrorKind::Other, "sink is full"));
        }
        let written = buf.len().min(self.remaining);
        self.remaining -= written;
        Ok(written)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn empty() {
    let data = assemble(&[]).expect("failed to assemble");
    assert_eq!(data, [0x50, 0x4b, 0x05, 0x06, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn two_files_total_length() {
    init_logger();

    let data = assemble(&two_files()).expect("failed to assemble");
    assert_eq!(data.len(), (30 + 5 + 2) + (30 + 5) + (46 + 5) + (46 + 5) + 22);
}

#[test]
fn two_files_local_headers() {
    let data = assemble(&two_files()).expect("failed to assemble");

    // a.txt at 0
    assert_eq!(&data[0..4], &[0x50, 0x4b, 0x03, 0x04]);
    assert_eq!(le_u16(&data, 4), 20);
    assert_eq!(le_u16(&data, 6), 0);
    assert_eq!(le_u16(&data, 8), 0);
    assert_eq!(le_u16(&data, 10), 0);
    assert_eq!(le_u16(&data, 12), 0);
    assert_eq!(le_u32(&data, 14), CRC_HI);
    assert_eq!(le_u32(&data, 18), 2);
    assert_eq!(le_u32(&data, 22), 2);
    assert_eq!(le_u16(&data, 26), 5);
    assert_eq!(le_u16(&data, 28), 0);
    assert_eq!(&data[30..35], b"a.txt");
    assert_eq!(&data[35..37], b"hi");

    // b.txt at 37
    assert_eq!(&data[37..41], &[0x50, 0x4b, 0x03, 0x04]);
    assert_eq!(le_u32(&data, 37 + 14), 0);
    assert_eq!(le_u32(&data, 37 + 18), 0);
    assert_eq!(le_u32(&data, 37 + 22), 0);
    assert_eq!(&data[67..72], b"b.txt");
}

#[test]
fn two_files_central_directory() {
    let data = assemble(&two_files()).expect("failed to assemble");

    // a.txt at 72
    assert_eq!(&data[72..76], &[0x50, 0x4b, 0x01, 0x02]);
    assert_eq!(le_u16(&data, 76), 20);
    assert_eq!(le_u16(&data, 78), 20);
    assert_eq!(le_u32(&data, 88), CRC_HI);
    assert_eq!(le_u32(&data, 92), 2);
    assert_eq!(le_u32(&data, 96), 2);
    assert_eq!(le_u16(&data, 100), 5);
    assert!(data[102..114].iter().all(|byte| *byte == 0));
    assert_eq!(le_u32(&data, 114), 0);
    assert_eq!(&data[118..123], b"a.txt");

    // b.txt at 123
    assert_eq!(&data[123..127], &[0x50, 0x4b, 0x01, 0x02]);
    assert_eq!(le_u32(&data, 123 + 42), 37);
    assert_eq!(&data[169..174], b"b.txt");
}

#[test]
fn two_files_end_record() {
    let data = assemble(&two_files()).expect("failed to assemble");
    let eocdr = &data[174..];

    assert_eq!(eocdr.len(), 22);
    assert_eq!(&eocdr[0..4], &[0x50, 0x4b, 0x05, 0x06]);
    assert_eq!(le_u16(eocdr, 4), 0);
    assert_eq!(le_u16(eocdr, 6), 0);
    assert_eq!(le_u16(eocdr, 8), 2);
    assert_eq!(le_u16(eocdr, 10), 2);
    assert_eq!(le_u32(eocdr, 12), 102);
    assert_eq!(le_u32(eocdr, 16), 72);
    assert_eq!(le_u16(eocdr, 20), 0);
}

#[test]
fn directory_offsets_point_at_local_headers() {
    let files: Vec<_> =
        (0..10).map(|index| LogicalFile::new(format!("dir/file-{index}.txt"), "x".repeat(index * 7))).collect();
    let data = assemble(&files).expect("failed to assemble");
    let reader = ZipFileReader::new(&data).expect("failed to open reader");

    let mut expected_offset = 0;
    for (entry, file) in reader.entries().iter().zip(&files) {
        assert_eq!(entry.header_offset(), expected_offset);
        assert_eq!(&data[expected_offset as usize..expected_offset as usize + 4], &[0x50, 0x4b, 0x03, 0x04]);
        assert_eq!(entry.compressed_size(), entry.uncompressed_size());
        assert_eq!(entry.uncompressed_size() as usize, file.content().len());

        expected_offset += (30 + file.name().len() + file.content().len()) as u32;
    }

    let directory = reader.directory();
    assert_eq!(directory.offset, expected_offset);
    assert_eq!(directory.entries, 10);
    assert_eq!(directory.size as usize, files.iter().map(|file| 46 + file.name().len()).sum::<usize>());
}

#[test]
fn deterministic() {
    let first = assemble(&two_files()).expect("failed to assemble");
    let second = assemble(&two_files()).expect("failed to assemble");
    assert_eq!(first, second);
}

#[test]
fn zeroed_checksums() {
    let options = ArchiveOptions::default().checksums(false);
    let data = assemble_with(&two_files(), options).expect("failed to assemble");

    assert_eq!(le_u32(&data, 14), 0);
    assert_eq!(le_u32(&data, 88), 0);
    assert_eq!(data.len(), assemble(&two_files()).expect("failed to assemble").len());
}

#[test]
fn duplicate_names_are_kept() {
    let files = [LogicalFile::new("same.txt", "one"), LogicalFile::new("same.txt", "two")];
    let data = assemble(&files).expect("failed to assemble");
    let reader = ZipFileReader::new(&data).expect("failed to open reader");

    assert_eq!(reader.entries().len(), 2);
    assert_eq!(reader.entry_data(1).expect("failed to read entry"), b"two");
}

#[test]
fn multibyte_names() {
    let files = [LogicalFile::new("données/é.txt", "ü")];
    let data = assemble(&files).expect("failed to assemble");

    assert_eq!(le_u16(&data, 26) as usize, "données/é.txt".len());
    assert_eq!(le_u32(&data, 18), 2);

    let reader = ZipFileReader::new(&data).expect("failed to open reader");
    assert_eq!(reader.entries()[0].name(), "données/é.txt");
}

#[test]
fn layout_matches_output() {
    let inputs = [vec![], two_files(), vec![LogicalFile::new("big.bin", vec![7u8; 70_000])]];

    for files in inputs {
        let layout = Layout::of(&files).expect("failed to compute layout");
        let data = assemble(&files).expect("failed to assemble");

        assert_eq!(layout.total_size(), data.len() as u64);
        assert_eq!(layout.entries() as usize, files.len());
        assert_eq!(le_u32(&data, data.len() - 6) as u64, layout.directory_offset());
        assert_eq!(le_u32(&data, data.len() - 10) as u64, layout.directory_size());
    }
}

#[test]
fn writer_matches_assemble() {
    let mut writer = ArchiveWriter::new(Vec::new());
    for file in two_files() {
        writer.write_entry(&file).expect("failed to write entry");
    }
    assert_eq!(writer.offset(), 72);

    let data = writer.close().expect("failed to close writer");
    assert_eq!(data, assemble(&two_files()).expect("failed to assemble"));
}

#[test]
fn upstream_write_error() {
    let mut writer = ArchiveWriter::new(FailingWriter { remaining: 10 });
    let result = writer.write_entry(&LogicalFile::new("a.txt", "hi"));

    assert!(matches!(result, Err(ZipError::UpstreamWriteError(_))));
}
