use crate::error::ParseError;
use crate::section::Document;

/// Represents an on-going parse.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    text: &'a str,
    document: Document,
    // Position of the section that receives key/value lines; the global section is 0.
    active: usize,
}

/// Classification of a single trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Comment,
    Header(&'a str),
    Pair(&'a str, &'a str),
    Unrecognized,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            document: Document::new(),
            active: 0,
        }
    }
}

impl Parser<'_> {
    /// Consumes every line in file order.
    ///
    /// # Errors
    ///
    /// Stops at the first line that is not blank, a comment, a section header or a `key = value`
    /// pair, and at the first header whose name is empty or reserved.
    pub fn into_document(mut self) -> Result<Document, ParseError> {
        let text = self.text;
        for (index, raw) in text.lines().enumerate() {
            self.parse_line(index + 1, raw)?;
        }

        Ok(self.document)
    }

    fn parse_line(&mut self, line: usize, raw: &str) -> Result<(), ParseError> {
        match classify(raw) {
            Line::Blank | Line::Comment => {}
            Line::Header(name) => {
                self.active = self
                    .document
                    .insert_section_full(name)
                    .map_err(|source| ParseError::InvalidSectionName { line, source })?;
            }
            Line::Pair(key, value) => {
                self.document.section_at_mut(self.active).set(key, value);
            }
            Line::Unrecognized => {
                return Err(ParseError::UnrecognizedLine {
                    line,
                    content: raw.trim().to_owned(),
                });
            }
        }

        Ok(())
    }
}

fn classify(raw: &str) -> Line<'_> {
    // `trim` also removes the '\r' left behind by CRLF line endings.
    let line = raw.trim();

    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with([';', '#']) {
        return Line::Comment;
    }
    if line.len() > 2 && line.starts_with('[') && line.ends_with(']') {
        return Line::Header(&line[1..line.len() - 1]);
    }

    match line.split_once('=') {
        Some((key, value)) => Line::Pair(key.trim_end(), value.trim_start()),
        None => Line::Unrecognized,
    }
}
