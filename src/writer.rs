use std::fmt;
use std::io::{self, Write};

use crate::section::Document;

/// Emits `document` as INI text: global pairs without a header, then every other section as
/// `[name]` followed by its `key = value` lines.
///
/// # Errors
///
/// Returns the first error reported by `writer`.
pub fn write_document<W>(writer: &mut W, document: &Document) -> io::Result<()>
where
    W: Write + ?Sized,
{
    write!(writer, "{document}")
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in self.sections() {
            if !section.is_global() {
                writeln!(f, "[{}]", section.name())?;
            }

            for (key, value) in section.entries() {
                writeln!(f, "{key} = {value}")?;
            }
        }

        Ok(())
    }
}
