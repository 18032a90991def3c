// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::ZipError;
use crate::spec::header::{CentralDirectoryRecord, EndOfCentralDirectoryHeader, GeneralPurposeFlag, LocalFileHeader};
use crate::spec::Compression;

#[test]
fn compression_codes() {
    assert_eq!(0, u16::from(Compression::Stored));
    assert_eq!(Compression::Stored, Compression::try_from(0).expect("stored is supported"));
    assert!(matches!(Compression::try_from(8), Err(ZipError::CompressionNotSupported(8))));
}

#[test]
fn general_purpose_flag_bits() {
    assert_eq!([0, 0], GeneralPurposeFlag::default().as_slice());

    let flag = GeneralPurposeFlag { encrypted: true, data_descriptor: true, filename_unicode: true };
    assert_eq!(0x809u16.to_le_bytes(), flag.as_slice());
    assert_eq!(flag, GeneralPurposeFlag::from(0x809));
}

#[test]
fn local_file_header_field_order() {
    let header = LocalFileHeader {
        version: 0x0201,
        flags: GeneralPurposeFlag::default(),
        compression: 0x0403,
        mod_time: 0x0605,
        mod_date: 0x0807,
        crc: 0x0c0b0a09,
        compressed_size: 0x100f0e0d,
        uncompressed_size: 0x14131211,
        file_name_length: 0x1615,
        extra_field_length: 0x1817,
    };
    let bytes = header.as_slice();

    assert_eq!(
        bytes,
        [
            0x01, 0x02, 0x00, 0x00, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0x10,
            0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18
        ]
    );
    assert_eq!(header, LocalFileHeader::from(bytes));
}

#[test]
fn central_directory_record_offset_field() {
    let header = CentralDirectoryRecord {
        v_made_by: 20,
        v_needed: 20,
        flags: GeneralPurposeFlag::default(),
        compression: 0,
        mod_time: 0,
        mod_date: 0,
        crc: 0,
        compressed_size: 0,
        uncompressed_size: 0,
        file_name_length: 5,
        extra_field_length: 0,
        file_comment_length: 0,
        disk_start: 0,
        inter_attr: 0,
        exter_attr: 0,
        lh_offset: 0xdeadbeef,
    };
    let bytes = header.as_slice();

    assert_eq!(&bytes[38..42], &0xdeadbeefu32.to_le_bytes());
    assert_eq!(header, CentralDirectoryRecord::from(bytes));
}

#[test]
fn end_of_central_directory_field_order() {
    let header = EndOfCentralDirectoryHeader {
        disk_num: 0,
        start_cent_dir_disk: 0,
        num_of_entries_disk: 3,
        num_of_entries: 3,
        size_cent_dir: 0x9a,
        cent_dir_offset: 0x1234,
        file_comm_length: 0,
    };

    assert_eq!(header.as_slice(), [0, 0, 0, 0, 3, 0, 3, 0, 0x9a, 0, 0, 0, 0x34, 0x12, 0, 0, 0, 0]);
}
