//! Copying finished commands to the system clipboard.
//!
//! The text is piped into a platform clipboard tool found on `PATH`:
//! `pbcopy` on macOS, `clip` on Windows, and `wl-copy`, `xclip` or `xsel`
//! elsewhere.

use std::env;
use std::ffi::OsStr;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use log::info;

use crate::error::{Error, Result};

pub trait Clipboard {
    /// # Errors
    ///
    /// Returns [`Error::ClipboardUnavailable`] if the text could not be copied.
    fn copy(&self, text: &str) -> Result<()>;
}

/// A clipboard tool and the arguments that make it read from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backend {
    pub program: String,
    pub args: Vec<String>,
}

impl Backend {
    fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Backends to try, most preferred first.
#[must_use]
pub fn candidates(wayland: bool) -> Vec<Backend> {
    if cfg!(target_os = "macos") {
        return vec![Backend::new("pbcopy", &[])];
    }

    if cfg!(windows) {
        return vec![Backend::new("clip", &[])];
    }

    let mut backends = Vec::new();
    if wayland {
        backends.push(Backend::new("wl-copy", &[]));
    }
    backends.push(Backend::new("xclip", &["-selection", "clipboard"]));
    backends.push(Backend::new("xsel", &["--clipboard", "--input"]));
    backends
}

/// Looks `program` up in the directories of a `PATH`-style value.
#[must_use]
pub fn find_on_path(program: &str, path_var: &OsStr) -> Option<PathBuf> {
    env::split_paths(path_var).find_map(|directory| {
        let candidate = directory.join(program);
        if candidate.is_file() {
            return Some(candidate);
        }

        let with_extension = candidate.with_extension(env::consts::EXE_EXTENSION);
        (!env::consts::EXE_EXTENSION.is_empty() && with_extension.is_file())
            .then_some(with_extension)
    })
}

#[derive(Debug, Clone)]
pub struct SystemClipboard {
    backend: Backend,
}

impl SystemClipboard {
    /// Finds the first available clipboard tool.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClipboardUnavailable`] if none of the tools is installed.
    pub fn detect() -> Result<Self> {
        let path_var = env::var_os("PATH").unwrap_or_default();
        let wayland = env::var_os("WAYLAND_DISPLAY").is_some();
        let backends = candidates(wayland);

        let backend = backends
            .iter()
            .find(|backend| find_on_path(&backend.program, &path_var).is_some())
            .cloned()
            .ok_or_else(|| {
                let names: Vec<&str> = backends.iter().map(|b| b.program.as_str()).collect();
                Error::ClipboardUnavailable(format!(
                    "none of `{}` was found on PATH",
                    names.join("`, `")
                ))
            })?;

        info!("Using clipboard tool `{}`", backend.program);
        Ok(Self { backend })
    }

    #[must_use]
    pub fn with_backend(backend: Backend) -> Self {
        Self { backend }
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        let program = &self.backend.program;

        let mut child = Command::new(program)
            .args(&self.backend.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|e| Error::ClipboardUnavailable(format!("could not start `{program}`: {e}")))?;

        // stdin is closed when dropped at the end of this block
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| Error::ClipboardUnavailable(format!("writing to `{program}`: {e}")))?;
        }

        let status = child
            .wait()
            .map_err(|e| Error::ClipboardUnavailable(format!("waiting for `{program}`: {e}")))?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::ClipboardUnavailable(format!(
                "`{program}` exited with {status}"
            )))
        }
    }
}

/// Detects the system clipboard only when something is copied.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoClipboard;

impl Clipboard for AutoClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        SystemClipboard::detect()?.copy(text)
    }
}
