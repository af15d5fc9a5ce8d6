//! Line codec for the command store.
//!
//! Every line of the store is either a record (`Description;Command`), a
//! comment (first non-whitespace character is `#`), or something else that is
//! kept as-is. Decoding is lenient: quotes are ordinary characters and only the
//! first delimiter separates the fields, so commands may contain `;`. Lines
//! that are not valid UTF-8 are kept as raw bytes.

use std::fmt::{Display, Formatter};

/// Separates the description from the command.
pub const FIELD_DELIMITER: char = ';';
/// Marks a line as a comment.
pub const COMMENT_MARKER: char = '#';

/// One stored command with its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub description: String,
    pub command: String,
}

impl Record {
    pub fn new(description: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: command.into(),
        }
    }

    /// A description holding the delimiter will be split differently when the
    /// store is read back.
    #[must_use]
    pub fn has_ambiguous_description(&self) -> bool {
        self.description.contains(FIELD_DELIMITER)
    }

    /// A description starting with the comment marker reads back as a comment.
    #[must_use]
    pub fn reads_as_comment(&self) -> bool {
        self.description.trim_start().starts_with(COMMENT_MARKER)
    }

    /// The first field holding a line break, which would split the record
    /// across several store lines.
    #[must_use]
    pub fn field_with_line_break(&self) -> Option<&'static str> {
        let has_line_break = |text: &str| text.contains(['\n', '\r']);

        if has_line_break(&self.description) {
            Some("Description")
        } else if has_line_break(&self.command) {
            Some("Command")
        } else {
            None
        }
    }
}

impl Display for Record {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} ({})", self.description, self.command)
    }
}

/// A decoded store line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Record(Record),
    Comment(String),
    /// No delimiter found. Never searched, written back verbatim.
    Malformed(String),
    /// Not valid UTF-8. Never searched, written back byte for byte.
    Undecodable(Vec<u8>),
}

impl Line {
    /// Bytes written back to the store for this line, without a line ending.
    #[must_use]
    pub fn to_raw(&self) -> Vec<u8> {
        match self {
            Line::Record(record) => encode(record).into_bytes(),
            Line::Comment(raw) | Line::Malformed(raw) => raw.clone().into_bytes(),
            Line::Undecodable(raw) => raw.clone(),
        }
    }

    #[must_use]
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Line::Record(record) => Some(record),
            _ => None,
        }
    }
}

/// Decodes one raw line (without its line ending).
#[must_use]
pub fn decode(raw_line: &str) -> Line {
    if raw_line.trim_start().starts_with(COMMENT_MARKER) {
        return Line::Comment(raw_line.to_string());
    }

    match raw_line.split_once(FIELD_DELIMITER) {
        Some((description, command)) => Line::Record(Record::new(description, command)),
        None => Line::Malformed(raw_line.to_string()),
    }
}

/// Decodes one raw line that may not be valid UTF-8.
#[must_use]
pub fn decode_bytes(raw_line: &[u8]) -> Line {
    match std::str::from_utf8(raw_line) {
        Ok(text) => decode(text),
        Err(_) => Line::Undecodable(raw_line.to_vec()),
    }
}

/// Encodes a record as a store line. Fields are not escaped.
#[must_use]
pub fn encode(record: &Record) -> String {
    format!("{}{FIELD_DELIMITER}{}", record.description, record.command)
}
