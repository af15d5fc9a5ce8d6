//! Placeholders inside stored commands.
//!
//! A placeholder looks like `{"Label":"Default"}`. Neither part may contain a
//! `"`; the label must not be empty. Resolution asks for a value per
//! occurrence, left to right, and splices it into exactly the span of that
//! occurrence. Inserted values are plain text: they are never re-scanned or
//! interpreted.

use std::ops::Range;

use indexmap::IndexSet;
use log::debug;

use crate::error::Result;
use crate::prompt::Prompter;

const OPEN: &str = "{\"";
const SEPARATOR: &str = "\":\"";
const CLOSE: &str = "\"}";

/// One placeholder occurrence in a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub label: String,
    pub default: String,
    /// Byte range of the whole token, braces included.
    pub span: Range<usize>,
}

impl Placeholder {
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("Input for '{}' [{}]: ", self.label, self.default)
    }
}

/// Finds the leftmost placeholder starting at or after byte offset `from`.
#[must_use]
pub fn find_placeholder(text: &str, from: usize) -> Option<Placeholder> {
    let mut search_from = from;

    while let Some(offset) = text.get(search_from..)?.find(OPEN) {
        let start = search_from + offset;
        if let Some(placeholder) = parse_at(text, start) {
            return Some(placeholder);
        }
        search_from = start + 1;
    }

    None
}

fn parse_at(text: &str, start: usize) -> Option<Placeholder> {
    let label_start = start + OPEN.len();
    let label_length = text[label_start..].find('"')?;
    if label_length == 0 {
        return None;
    }
    let label_end = label_start + label_length;

    if !text[label_end..].starts_with(SEPARATOR) {
        return None;
    }

    let default_start = label_end + SEPARATOR.len();
    let default_end = default_start + text[default_start..].find('"')?;

    if !text[default_end..].starts_with(CLOSE) {
        return None;
    }

    Some(Placeholder {
        label: text[label_start..label_end].to_string(),
        default: text[default_start..default_end].to_string(),
        span: start..default_end + CLOSE.len(),
    })
}

/// Iterator over the placeholders of a command, left to right.
pub struct Placeholders<'a> {
    text: &'a str,
    cursor: usize,
}

impl Iterator for Placeholders<'_> {
    type Item = Placeholder;

    fn next(&mut self) -> Option<Self::Item> {
        let placeholder = find_placeholder(self.text, self.cursor)?;
        self.cursor = placeholder.span.end;
        Some(placeholder)
    }
}

#[must_use]
pub fn placeholders(text: &str) -> Placeholders<'_> {
    Placeholders { text, cursor: 0 }
}

/// Distinct labels in order of first appearance.
#[must_use]
pub fn labels(text: &str) -> IndexSet<String> {
    placeholders(text).map(|placeholder| placeholder.label).collect()
}

/// Prompts for every placeholder occurrence and returns the finished command.
///
/// A blank reply keeps the default. Text without placeholders comes back unchanged.
///
/// # Errors
///
/// Propagates prompt errors, such as the operator cancelling.
pub fn resolve(text: &str, prompter: &mut dyn Prompter) -> Result<String> {
    let mut resolved = text.to_string();
    let mut cursor = 0;

    while let Some(placeholder) = find_placeholder(&resolved, cursor) {
        let value = prompter.read_or_default(&placeholder.prompt(), &placeholder.default)?;
        debug!("Resolved `{}` to `{}`", placeholder.label, value);

        resolved.replace_range(placeholder.span.clone(), &value);
        cursor = placeholder.span.start + value.len();
    }

    Ok(resolved)
}
