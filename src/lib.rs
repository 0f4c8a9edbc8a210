#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]

mod error;
mod parser;
mod section;
mod writer;

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

pub use crate::error::{Error, InvalidSectionName, ParseError};
pub use crate::parser::Parser;
pub use crate::section::{Document, GLOBAL_SECTION, Section};
pub use crate::writer::write_document;

/// Byte Order Mark (BOM) is used to signal the endianness of an encoding. The order `0xFF 0xFE`
/// strongly suggests that the encoding is using little-endian byte order.
///
/// <https://en.wikipedia.org/wiki/Byte_order_mark>
const BOM_UTF16_LE: &[u8] = &[0xFF, 0xFE];

/// Editors on Windows like to prefix UTF-8 files with this.
const BOM_UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];

impl Document {
    /// Parses INI text.
    ///
    /// # Errors
    ///
    /// See [`Parser::into_document`].
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Parser::new(text).into_document()
    }

    /// Reads `reader` to the end and parses the decoded text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileOpen`] if reading fails and [`Error::Parse`] if the text is malformed.
    /// The path in either error is empty since a reader has none.
    pub fn from_reader<R>(reader: &mut R) -> Result<Self, Error>
    where
        R: Read + ?Sized,
    {
        read_from(reader, Path::new(""))
    }

    /// Loads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileOpen`] if the file cannot be opened or read, and [`Error::Parse`] on
    /// the first malformed line. No partially parsed document is returned.
    pub fn read_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|source| Error::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let document = read_from(&mut file, path)?;
        tracing::debug!(
            path = %path.display(),
            sections = document.len(),
            "read INI file"
        );

        Ok(document)
    }

    /// Serializes the document into `writer`.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by `writer`.
    pub fn write_to<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: Write + ?Sized,
    {
        write_document(writer, self)
    }

    /// Creates (or truncates) the file at `path` and writes the document into it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] if the file cannot be created, or if writing or flushing fails.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let to_error = |source| Error::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = BufWriter::new(File::create(path).map_err(to_error)?);
        self.write_to(&mut writer).map_err(to_error)?;
        writer.flush().map_err(to_error)?;

        tracing::debug!(
            path = %path.display(),
            sections = self.len(),
            "wrote INI file"
        );

        Ok(())
    }
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn read_from<R>(reader: &mut R, path: &Path) -> Result<Document, Error>
where
    R: Read + ?Sized,
{
    let mut buffer = Vec::with_capacity(4096);
    reader
        .read_to_end(&mut buffer)
        .map_err(|source| Error::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

    let text = decode_data(&buffer);
    Document::parse(&text).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

// Anything without a UTF-16 LE BOM is treated as UTF-8; invalid sequences become U+FFFD.
fn decode_data(data: &[u8]) -> String {
    if let Some(data) = data.strip_prefix(BOM_UTF16_LE) {
        let utf16 = data
            .chunks_exact(2)
            .map(|chunk| u16::from_le_bytes([chunk[0], chunk[1]]))
            .collect::<Vec<u16>>();

        char::decode_utf16(utf16)
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect::<String>()
    } else {
        let data = data.strip_prefix(BOM_UTF8).unwrap_or(data);
        String::from_utf8_lossy(data).into_owned()
    }
}
