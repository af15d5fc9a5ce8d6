//! The command store: an ordered list of lines backed by one file.
//!
//! New records are appended in place. Deletes rewrite the whole file through a
//! temporary file in the same directory that is renamed over the original, so
//! a failed write never leaves a truncated store behind. The line ending found
//! when the store is read (`\n` or `\r\n`) is kept for everything written back.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::record::{decode_bytes, encode, Line, Record};

const STORE_FILE: &str = "store";
const LF: &str = "\n";
const CRLF: &str = "\r\n";

#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    lines: Vec<Line>,
    ends_with_newline: bool,
    line_ending: &'static str,
}

impl Store {
    /// Loads the store at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreNotFound`] if the file does not exist, or
    /// [`Error::Io`] if it cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        Self::read(path)?.ok_or_else(|| Error::store_not_found(&path.display().to_string()))
    }

    /// Loads the store at `path`, starting empty if the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file exists but cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match Self::read(path)? {
            Some(store) => Ok(store),
            None => {
                debug!("No store at `{}` yet, starting empty", path.display());
                Ok(Self {
                    path: path.to_path_buf(),
                    lines: Vec::new(),
                    ends_with_newline: true,
                    line_ending: LF,
                })
            }
        }
    }

    fn read(path: &Path) -> Result<Option<Self>> {
        let contents = match fs::read(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(Error::io_error(
                    STORE_FILE,
                    &path.display().to_string(),
                    e,
                ))
            }
        };

        let lines: Vec<Line> = split_lines(&contents).map(decode_bytes).collect();

        let malformed = lines
            .iter()
            .filter(|line| matches!(line, Line::Malformed(_)))
            .count();
        if malformed > 0 {
            debug!("Skipping {malformed} lines without a `;` separator");
        }
        let undecodable = lines
            .iter()
            .filter(|line| matches!(line, Line::Undecodable(_)))
            .count();
        if undecodable > 0 {
            warn!("Skipping {undecodable} lines that are not valid UTF-8");
        }
        debug!("Loaded {} lines from `{}`", lines.len(), path.display());

        Ok(Some(Self {
            path: path.to_path_buf(),
            lines,
            ends_with_newline: contents.is_empty() || contents.ends_with(b"\n"),
            line_ending: detect_line_ending(&contents),
        }))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Records with their store positions, in file order.
    pub fn records(&self) -> impl Iterator<Item = (usize, &Record)> {
        self.lines
            .iter()
            .enumerate()
            .filter_map(|(position, line)| line.as_record().map(|record| (position, record)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Appends one record to the end of the file without rewriting it.
    ///
    /// The file (and its directory) is created if missing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LineBreakInField`] if either field holds a line break,
    /// without touching the file, or [`Error::Io`] if the file cannot be
    /// opened or written.
    pub fn append(&mut self, record: Record) -> Result<()> {
        if let Some(field) = record.field_with_line_break() {
            return Err(Error::LineBreakInField(field));
        }

        let path_description = self.path.display().to_string();

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| Error::io_error("store directory", &path_description, e))?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::io_error(STORE_FILE, &path_description, e))?;

        let mut text = String::new();
        // the last line must not run into the new one
        if !self.ends_with_newline {
            text.push_str(self.line_ending);
        }
        text.push_str(&encode(&record));
        text.push_str(self.line_ending);

        file.write_all(text.as_bytes())
            .map_err(|e| Error::io_error(STORE_FILE, &path_description, e))?;

        info!("Appended `{}` to `{}`", record.description, path_description);
        self.lines.push(Line::Record(record));
        self.ends_with_newline = true;
        Ok(())
    }

    /// Removes the record at `position` and rewrites the file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `position` does not hold a record, or
    /// [`Error::Io`] if the rewrite fails. The store is unchanged on error.
    pub fn delete(&mut self, position: usize) -> Result<Record> {
        let removed = match self.lines.get(position) {
            Some(Line::Record(record)) => record.clone(),
            _ => {
                return Err(Error::OutOfRange {
                    index: position,
                    count: self.lines.len(),
                })
            }
        };

        let mut lines = self.lines.clone();
        lines.remove(position);
        self.rewrite_all(lines)?;

        info!("Removed `{}` from position {position}", removed.description);
        Ok(removed)
    }

    /// Replaces every line of the store and atomically rewrites the file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the temporary file cannot be written or moved
    /// into place. The original file is left untouched in that case.
    pub fn rewrite_all(&mut self, lines: Vec<Line>) -> Result<()> {
        let mut contents = Vec::new();
        for line in &lines {
            contents.extend_from_slice(&line.to_raw());
            contents.extend_from_slice(self.line_ending.as_bytes());
        }

        write_atomic(&self.path, &contents)?;
        debug!("Rewrote {} lines to `{}`", lines.len(), self.path.display());

        self.lines = lines;
        self.ends_with_newline = true;
        Ok(())
    }
}

/// Splits raw contents into lines without their `\n` or `\r\n` endings.
fn split_lines(contents: &[u8]) -> impl Iterator<Item = &[u8]> {
    contents.split_inclusive(|byte| *byte == b'\n').map(|line| {
        let line = line.strip_suffix(b"\n").unwrap_or(line);
        line.strip_suffix(b"\r").unwrap_or(line)
    })
}

/// The ending of the first line, or `\n` when there is none.
fn detect_line_ending(contents: &[u8]) -> &'static str {
    match contents.iter().position(|byte| *byte == b'\n') {
        Some(end) if end > 0 && contents[end - 1] == b'\r' => CRLF,
        _ => LF,
    }
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let path_description = path.display().to_string();
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Same directory as the target, so the final rename stays on one filesystem
    let mut temp_file = NamedTempFile::new_in(directory)
        .map_err(|e| Error::io_error("temporary store", &path_description, e))?;

    temp_file
        .write_all(contents)
        .and_then(|()| temp_file.as_file().sync_all())
        .map_err(|e| Error::io_error("temporary store", &path_description, e))?;

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(temp_file.path(), metadata.permissions())
            .map_err(|e| Error::io_error("temporary store", &path_description, e))?;
    }

    temp_file
        .persist(path)
        .map_err(|e| Error::io_error(STORE_FILE, &path_description, e.error))?;

    Ok(())
}
