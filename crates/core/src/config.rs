//! Configuration for a single shelf invocation.
//!
//! Paths are resolved here (including `~` expansion) and gathered, together
//! with the requested mode, into one immutable [`Config`] that is passed to
//! every flow.

use std::env;
use std::path::PathBuf;

/// Default path for the command store
const DEFAULT_STORE_PATH: &str = "~/.shelf.csv";

/// Default shell to use for command execution
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// What the invocation should do with the selected command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Resolve placeholders and run the command in the shell.
    Execute,
    /// Resolve placeholders and print the command.
    Print,
    /// Resolve placeholders and copy the command to the clipboard.
    Copy,
    /// Store a new command.
    Add,
    /// Delete the selected command from the store.
    Remove,
    /// Replace the selected command with an edited copy.
    Edit,
}

impl Mode {
    /// Picks the mode from independent flags. Store-changing modes win over
    /// output modes, and printing wins over copying.
    #[must_use]
    pub fn from_flags(add: bool, remove: bool, edit: bool, print: bool, copy: bool) -> Self {
        if add {
            Mode::Add
        } else if remove {
            Mode::Remove
        } else if edit {
            Mode::Edit
        } else if print {
            Mode::Print
        } else if copy {
            Mode::Copy
        } else {
            Mode::Execute
        }
    }
}

/// Everything one invocation needs, built once from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub verbose: bool,
    /// One-based index into the matches, `None` when no fast selection was asked for.
    pub fast_index: Option<usize>,
    pub store_path: PathBuf,
    /// Positional arguments: the search term, or description and command when adding.
    pub terms: Vec<String>,
    pub shell: String,
}

impl Config {
    /// The search term, positional arguments joined by spaces.
    #[must_use]
    pub fn search_term(&self) -> String {
        self.terms.join(" ")
    }
}

/// Resolves the command store path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// store path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use shelf_core::config::get_store_path;
///
/// let custom = get_store_path(&Some("/path/to/commands.csv".to_string()));
/// assert_eq!(custom.to_str(), Some("/path/to/commands.csv"));
/// ```
#[must_use]
pub fn get_store_path(store_path_arg: &Option<String>) -> PathBuf {
    let store_path = match store_path_arg {
        Some(store_path) => store_path,
        None => DEFAULT_STORE_PATH,
    };

    PathBuf::from(shellexpand::tilde(store_path).as_ref())
}

/// The shell used to run commands: `$SHELL`, or [`DEFAULT_SHELL`] when unset.
#[must_use]
pub fn get_shell() -> String {
    env::var("SHELL")
        .ok()
        .filter(|shell| !shell.is_empty())
        .unwrap_or_else(|| DEFAULT_SHELL.to_string())
}

/// Maps the raw `--fast` value to a selection; `0` means no fast selection.
#[must_use]
pub fn fast_index(raw: usize) -> Option<usize> {
    (raw > 0).then_some(raw)
}
