// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Packaging of an extracted page section into a downloadable archive.
//!
//! An extractor hands over the section's markup, styles and scripts alongside a [`ExtractionMeta`] record. Each
//! payload is prefixed with a comment header describing where it came from, and the three files are assembled into
//! a single [`Download`].
//!
//! ```
//! # use storezip::section::{ExtractionMeta, SectionPayload};
//! # use storezip::error::Result;
//! #
//! # fn run() -> Result<()> {
//! let payload = SectionPayload {
//!     html: "<section id=\"hero\"></section>".to_string(),
//!     css: String::new(),
//!     js: String::new(),
//!     meta: ExtractionMeta {
//!         url: "https://example.com/".to_string(),
//!         selector: "#hero".to_string(),
//!         extracted_at: "2024-01-01T00:00:00.000Z".to_string(),
//!         notes: vec![],
//!     },
//! };
//!
//! let download = payload.into_download(1_700_000_000_000)?;
//! assert_eq!(download.file_name(), "section-scraper-1700000000000.zip");
//! #   Ok(())
//! # }
//! # run().unwrap();
//! ```

use crate::entry::LogicalFile;
use crate::error::{Result, ZipError};
use crate::write::assemble;

use futures_lite::io::{AsyncWrite, AsyncWriteExt};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tokio")]
use tokio_util::compat::TokioAsyncWriteCompatExt;

/// The MIME type attached to every [`Download`].
pub const ZIP_MIME_TYPE: &str = "application/zip";

pub const HTML_FILE_NAME: &str = "section.html";
pub const CSS_FILE_NAME: &str = "section.css";
pub const JS_FILE_NAME: &str = "section.js";

const CSS_FALLBACK: &str = "/* No section-specific CSS was detected. */\n";
const JS_FALLBACK: &str = "// No section-specific JavaScript was detected.\n";

/// Where and when a section was extracted from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionMeta {
    pub url: String,
    pub selector: String,
    pub extracted_at: String,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// The payloads produced by extracting a single page section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPayload {
    pub html: String,
    #[serde(default)]
    pub css: String,
    #[serde(default)]
    pub js: String,
    pub meta: ExtractionMeta,
}

impl SectionPayload {
    /// Wraps each payload in its comment header and returns the files in archive order (markup, styles, scripts).
    ///
    /// Empty styles or scripts are replaced by a placeholder comment; empty markup is an error, as there would be
    /// no section to speak of.
    pub fn into_files(self) -> Result<Vec<LogicalFile>> {
        if self.html.trim().is_empty() {
            return Err(ZipError::MissingMarkup);
        }

        let meta = &self.meta;
        let css = if self.css.is_empty() { CSS_FALLBACK } else { self.css.as_str() };
        let js = if self.js.is_empty() { JS_FALLBACK } else { self.js.as_str() };

        Ok(vec![
            LogicalFile::new(HTML_FILE_NAME, html_header(meta) + &self.html),
            LogicalFile::new(CSS_FILE_NAME, css_header(meta) + css),
            LogicalFile::new(JS_FILE_NAME, js_header(meta) + js),
        ])
    }

    /// Assembles this section into a [`Download`] whose file name carries the provided timestamp.
    pub fn into_download(self, timestamp_millis: i64) -> Result<Download> {
        let files = self.into_files()?;
        Ok(Download::new(assemble(&files)?, timestamp_millis))
    }
}

fn html_header(meta: &ExtractionMeta) -> String {
    format!(
        "<!--\n  Section extracted from: {}\n  Selector: {}\n  Extracted at: {}\n\n  Notes:\n  \
         - Check image paths (data-original-src) and import the assets into your theme.\n  \
         - Adapt this markup to your theme's templating (sections, snippets, blocks).\n-->\n\n",
        meta.url, meta.selector, meta.extracted_at
    )
}

fn css_header(meta: &ExtractionMeta) -> String {
    format!(
        "/*\n  CSS extracted for section: {}\n  Source: {}\n  Date: {}\n\n  Recommendations:\n  \
         - Remove global selectors and scope rules to the section.\n  \
         - Prefer your theme's utility classes or design tokens.\n  \
         - Review @keyframes and @media queries.\n*/\n\n",
        meta.selector, meta.url, meta.extracted_at
    )
}

fn js_header(meta: &ExtractionMeta) -> String {
    let notes = match meta.notes.is_empty() {
        true => "  -".to_string(),
        false => meta.notes.iter().map(|note| format!("  - {note}")).collect::<Vec<_>>().join("\n"),
    };

    format!(
        "/*\n  JS extracted for section: {}\n  Source: {}\n  Date: {}\n\n  IMPORTANT:\n  \
         - Move this logic into one of your theme's script files.\n  \
         - Initialise the section from your theme's section load/select events.\n  \
         - Complete it by hand with any global scripts it depends on.\n\n  \
         Automatic notes:\n{}\n*/\n\n",
        meta.selector, meta.url, meta.extracted_at, notes
    )
}

/// An assembled archive paired with the name and MIME type a save action should present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    file_name: String,
    data: Vec<u8>,
}

impl Download {
    /// Wraps archive bytes, naming them `section-scraper-<timestamp_millis>.zip`.
    pub fn new(data: Vec<u8>, timestamp_millis: i64) -> Self {
        Self { file_name: format!("section-scraper-{timestamp_millis}.zip"), data }
    }

    /// Wraps archive bytes, naming them after the current time.
    #[cfg(feature = "chrono")]
    pub fn now(data: Vec<u8>) -> Self {
        Self::new(data, chrono::Utc::now().timestamp_millis())
    }

    /// Returns the suggested file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the MIME type.
    pub fn mime_type(&self) -> &'static str {
        ZIP_MIME_TYPE
    }

    /// Returns the archive bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes this download and returns the archive bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Writes the archive bytes to the provided writer and flushes it.
    pub async fn write_to<W: AsyncWrite + Unpin>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.data).await?;
        writer.flush().await?;
        Ok(())
    }

    /// Writes the archive bytes to the provided tokio writer and flushes it.
    #[cfg(feature = "tokio")]
    pub async fn write_to_tokio<W: tokio::io::AsyncWrite + Unpin>(&self, writer: W) -> Result<()> {
        self.write_to(writer.compat_write()).await
    }

    /// Saves the archive under its suggested file name within the provided directory, returning the file's path.
    #[cfg(feature = "tokio-fs")]
    pub async fn save_in<P: AsRef<std::path::Path>>(&self, dir: P) -> Result<std::path::PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        let file = tokio::fs::File::create(&path).await?;
        self.write_to_tokio(file).await?;

        tracing::debug!(path = %path.display(), size = self.data.len(), "saved download");
        Ok(path)
    }
}
