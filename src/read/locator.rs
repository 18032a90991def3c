// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! <https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT> (4.3.16)
//!
//! The end of central directory record may be followed by a variable-length archive comment, so its start can't be
//! assumed to be a fixed distance from the end of the data. Since the whole archive is already in memory, we search
//! backwards from the last position the record could start at, down to the furthest a maximum-length comment could
//! push it.

use crate::error::{Result, ZipError};
use crate::spec::consts::{EOCDR_LENGTH, EOCDR_SIGNATURE, SIGNATURE_LENGTH};

/// Locate the `end of central directory record` offset, if one exists.
/// The returned offset excludes the signature (4 bytes).
pub(crate) fn eocdr(data: &[u8]) -> Result<usize> {
    let signature = EOCDR_SIGNATURE.to_le_bytes();
    let upper = data.len().saturating_sub(EOCDR_LENGTH);
    let lower = data.len().saturating_sub(EOCDR_LENGTH + SIGNATURE_LENGTH + u16::MAX as usize);

    match reverse_search_buffer(&data[lower..upper], &signature) {
        Some(match_index) => Ok(lower + match_index + 1),
        None => Err(ZipError::UnableToLocateEOCDR),
    }
}

/// A naive reverse linear search along the buffer for the specified signature bytes.
///
/// Returns the index of the final signature byte of the last match.
pub(crate) fn reverse_search_buffer(buffer: &[u8], signature: &[u8]) -> Option<usize> {
    'outer: for index in (0..buffer.len()).rev() {
        for (signature_index, signature_byte) in signature.iter().rev().enumerate() {
            if let Some(next_index) = index.checked_sub(signature_index) {
                if buffer[next_index] != *signature_byte {
                    continue 'outer;
                }
            } else {
                break 'outer;
            }
        }
        return Some(index);
    }
    None
}

