// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A module which holds relevant error reporting structures/types.

use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

/// An enum of possible errors and their descriptions.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("entry '{name}' is too large to be stored ({size} bytes, limit is 4294967295)")]
    EntryTooLarge { name: String, size: u64 },
    #[error("file name too large ({0} bytes, limit is 65535)")]
    FileNameTooLarge(usize),
    #[error("too many entries ({0}, limit is 65535)")]
    TooManyEntries(usize),
    #[error("archive offset {0} does not fit a 32-bit field")]
    ArchiveTooLarge(u64),

    #[error("feature not supported: '{0}'")]
    FeatureNotSupported(&'static str),
    #[error("compression not supported: {0}")]
    CompressionNotSupported(u16),
    #[error("unable to locate the end of central directory record")]
    UnableToLocateEOCDR,
    #[error("Encountered an unexpected header (actual: {0:#x}, expected: {1:#x}).")]
    UnexpectedHeaderError(u32, u32),
    #[error("unexpected end of data at offset {0}")]
    UnexpectedEof(usize),
    #[error("a computed CRC32 value did not match the expected value")]
    CRC32CheckError,
    #[error("entry index was out of bounds")]
    EntryIndexOutOfBounds,
    #[error("attempted to convert non-UTF8 bytes to a string/str")]
    StringNotUtf8,

    #[error("picker cannot {action} while {from}")]
    InvalidPickerTransition { from: &'static str, action: &'static str },
    #[error("picked selector was empty")]
    EmptySelector,
    #[error("section payload has no markup")]
    MissingMarkup,

    #[error("an upstream writer returned an error: {0}")]
    UpstreamWriteError(#[from] std::io::Error),
}
