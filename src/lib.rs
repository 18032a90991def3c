// Copyright (c) 2021 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! # storezip
//!
//! A deterministic, in-memory ZIP archive assembler for the Stored (uncompressed) method.
//!
//! ## Features
//! - Byte-exact local file headers, central directory records, and end of central directory record.
//! - Reproducible output: timestamps and attributes are always zeroed, and CRC-32 values depend on content only.
//! - Fails fast when an entry, offset, or entry count doesn't fit the format's 16/32-bit fields.
//! - A minimal in-memory reader for stored archives.
//! - Aims for byte-for-byte [specification](https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT) compliance.
//!
//! ## Example
//! ```
//! use storezip::{assemble, LogicalFile};
//!
//! let files = [LogicalFile::new("a.txt", "hi"), LogicalFile::new("b.txt", "")];
//! let archive = assemble(&files)?;
//!
//! // Two local headers with content, two central directory records, and the end record.
//! assert_eq!(archive.len(), (30 + 5 + 2) + (30 + 5) + (46 + 5) * 2 + 22);
//! # Ok::<(), storezip::error::ZipError>(())
//! ```

pub mod entry;
pub mod error;
pub mod picker;
pub mod read;
pub mod section;
pub mod write;

pub(crate) mod spec;
pub(crate) mod utils;


pub use crate::entry::LogicalFile;
pub use crate::section::{Download, ExtractionMeta, SectionPayload};
pub use crate::spec::Compression;
pub use crate::write::layout::Layout;
pub use crate::write::{assemble, assemble_with, ArchiveOptions, ArchiveWriter};
