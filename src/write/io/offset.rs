// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::io::{Result, Write};

/// A wrapper around a [`Write`] implementation which tracks the current byte offset.
///
/// The offset is the archive's write cursor: every record which refers back to an earlier position (a directory
/// record's local header offset, or the end record's directory offset) reads it from here.
pub struct OffsetWriter<W> {
    inner: W,
    offset: u64,
}

impl<W> OffsetWriter<W>
where
    W: Write,
{
    /// Constructs a new wrapper from an inner [`Write`] writer.
    pub fn new(inner: W) -> Self {
        Self { inner, offset: 0 }
    }

    /// Returns the current byte offset.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Consumes this wrapper and returns the inner [`Write`] writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W> Write for OffsetWriter<W>
where
    W: Write,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let written = self.inner.write(buf)?;
        self.offset += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()
    }
}
