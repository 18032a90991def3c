// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};
use crate::spec::consts::SIGNATURE_LENGTH;

use crc32fast::Hasher;

pub(crate) fn compute_crc(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Return a borrowed run of `length` bytes starting at `offset`.
pub(crate) fn read_bytes(data: &[u8], offset: usize, length: usize) -> Result<&[u8]> {
    offset.checked_add(length).and_then(|end| data.get(offset..end)).ok_or(ZipError::UnexpectedEof(offset))
}

/// Return a fixed-size copy of the bytes starting at `offset`, for decoding into a record.
pub(crate) fn read_array<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N]> {
    let mut array = [0; N];
    array.copy_from_slice(read_bytes(data, offset, N)?);
    Ok(array)
}

/// Assert that the four-byte signature at `offset` matches the expected signature.
pub(crate) fn assert_signature(data: &[u8], offset: usize, expected: u32) -> Result<()> {
    match u32::from_le_bytes(read_array::<SIGNATURE_LENGTH>(data, offset)?) {
        actual if actual == expected => Ok(()),
        actual => Err(ZipError::UnexpectedHeaderError(actual, expected)),
    }
}
