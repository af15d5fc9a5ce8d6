use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Command store not found at `{}`. Create it with `--add` or write lines as `Description;Command`.", .path)]
    StoreNotFound { path: String },

    #[error("{} cannot be empty.", .0)]
    EmptyRequiredField(&'static str),

    #[error("{} cannot contain line breaks, the store keeps one command per line.", .0)]
    LineBreakInField(&'static str),

    #[error("Selection {} is out of range. Only {} matches found.", .index, .count)]
    OutOfRange { index: usize, count: usize },

    #[error("Invalid selection: `{}`", .0)]
    InvalidSelection(String),

    #[error("Clipboard unavailable: {}", .0)]
    ClipboardUnavailable(String),

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error with sub process: {}", .0)]
    SubProcess(std::io::Error),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Prompt error: {}", .0)]
    Prompt(String),

    #[error("Cancelled.")]
    Cancelled,
}

impl Error {
    pub fn io_error(file_description: &str, path: &str, original: std::io::Error) -> Self {
        Self::Io {
            file_description: file_description.to_string(),
            path: path.to_string(),
            original,
        }
    }

    pub fn store_not_found(path: &str) -> Self {
        Self::StoreNotFound {
            path: path.to_string(),
        }
    }

    /// Process exit status for a failed invocation.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        1
    }
}
