// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

#![allow(dead_code)]

use std::io::{Cursor, Read};

use storezip::LogicalFile;
use zip::{CompressionMethod, ZipArchive};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn sample_files() -> Vec<LogicalFile> {
    vec![
        LogicalFile::new("sample_data/alpha/back_to_front.txt", "zyxwvutsrqponmlkjihgfedcba\n"),
        LogicalFile::new("sample_data/alpha/front_to_back.txt", "abcdefghijklmnopqrstuvwxyz\n"),
        LogicalFile::new("sample_data/numeric/forward.txt", "0123456789\n".repeat(64)),
        LogicalFile::new("sample_data/numeric/empty.txt", ""),
    ]
}

/// Read every entry back with the `zip` crate, in archive order, checking each one is stored as-is.
pub fn read_with_zip(data: Vec<u8>) -> Vec<(String, Vec<u8>)> {
    let mut archive = ZipArchive::new(Cursor::new(data)).expect("zip failed to open the archive");
    let mut entries = Vec::with_capacity(archive.len());

    for index in 0..archive.len() {
        let mut file = archive.by_index(index).expect("zip failed to open an entry");
        assert_eq!(file.compression(), CompressionMethod::Stored);
        assert_eq!(file.size(), file.compressed_size());

        let mut content = Vec::new();
        file.read_to_end(&mut content).expect("zip failed to read an entry");
        entries.push((file.name().to_string(), content));
    }

    entries
}

pub fn check_round_trip(files: &[LogicalFile]) {
    let data = storezip::assemble(files).expect("failed to assemble");
    let entries = read_with_zip(data);

    let expected: Vec<_> = files.iter().map(|file| (file.name().to_string(), file.content().to_vec())).collect();
    assert_eq!(entries, expected);
}
