//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate and turns the parsed arguments into a [`Config`].

use clap::Parser;
use shelf_core::config::{self, Config, Mode};

const AFTER_HELP: &str = r#"The store is a `;` separated file, one command per line:
  Echo test;echo "Hello World"
Lines starting with `#` are comments.

Placeholders in commands are filled in when the command is recalled.
  Syntax:  {"Label":"DefaultValue"}
  Example: ssh -i {"KeyFile":"~/.ssh/id_rsa"} user@host
Press Enter at a placeholder prompt to keep the default."#;

/// Command-line arguments for the `shelf` binary.
///
/// Everything after the first positional argument is positional as well, so
/// `shelf --add "List files" ls -la` stores `ls -la` as the command.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use shelf_cli::cli_args::Args;
///
/// let args = Args::parse_from(["shelf", "--print", "docker"]);
/// assert!(args.print);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(
    name = "shelf",
    version,
    about = "Store long shell commands and find them again",
    after_help = AFTER_HELP,
    term_width = 0
)]
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// Show verbose output.
    #[arg(long, short = 'v', action)]
    pub verbose: bool,

    /// Pick match number N directly instead of showing the menu (0 shows the menu).
    #[arg(long, short = 'f', value_name = "N", default_value_t = 0)]
    pub fast: usize,

    /// Print the finished command instead of running it.
    #[arg(long, action)]
    pub print: bool,

    /// Copy the finished command to the clipboard instead of running it.
    #[arg(long, action)]
    pub copy: bool,

    /// Add a new command: `--add "Description" command...`, or interactively.
    #[arg(long, action)]
    pub add: bool,

    /// Search for a command and remove it.
    #[arg(long, action)]
    pub remove: bool,

    /// Search for a command and edit it. The edited command moves to the end of the store.
    #[arg(long, action)]
    pub edit: bool,

    /// Path to the command store.
    ///
    /// If not provided, defaults to `~/.shelf.csv`.
    #[arg(long = "db", value_name = "PATH")]
    pub store_path: Option<String>,

    /// Search term, or description and command when adding.
    #[arg(trailing_var_arg = true)]
    pub terms: Vec<String>,
}

impl Args {
    /// Builds the configuration for this invocation.
    #[must_use]
    pub fn to_config(&self) -> Config {
        Config {
            mode: Mode::from_flags(self.add, self.remove, self.edit, self.print, self.copy),
            verbose: self.verbose,
            fast_index: config::fast_index(self.fast),
            store_path: config::get_store_path(&self.store_path),
            terms: self.terms.clone(),
            shell: config::get_shell(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["shelf"]);

        assert!(!args.verbose);
        assert_eq!(args.fast, 0);
        assert!(!args.print);
        assert!(!args.copy);
        assert!(!args.add);
        assert!(!args.remove);
        assert!(!args.edit);
        assert!(args.store_path.is_none());
        assert!(args.terms.is_empty());

        let config = args.to_config();
        assert_eq!(config.mode, Mode::Execute);
        assert_eq!(config.fast_index, None);
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from(["shelf", "-v", "-f", "2", "docker"]);

        assert!(args.verbose);
        assert_eq!(args.fast, 2);
        assert_eq!(args.terms, vec!["docker".to_string()]);
        assert_eq!(args.to_config().fast_index, Some(2));
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "shelf",
            "--verbose",
            "--fast",
            "3",
            "--print",
            "--db",
            "/custom/commands.csv",
            "git",
        ]);

        assert!(args.verbose);
        assert_eq!(args.fast, 3);
        assert!(args.print);

        let config = args.to_config();
        assert_eq!(config.mode, Mode::Print);
        assert_eq!(config.store_path, PathBuf::from("/custom/commands.csv"));
        assert_eq!(config.search_term(), "git");
    }

    #[test]
    fn test_search_terms_are_joined() {
        let args = Args::parse_from(["shelf", "docker", "compose", "up"]);
        assert_eq!(args.to_config().search_term(), "docker compose up");
    }

    #[test]
    fn test_add_keeps_trailing_flags_as_command() {
        let args = Args::parse_from(["shelf", "--add", "List files", "ls", "-la"]);

        assert!(args.add);
        assert_eq!(args.terms, vec!["List files", "ls", "-la"]);
        assert_eq!(args.to_config().mode, Mode::Add);
    }

    #[test]
    fn test_mode_flags() {
        assert_eq!(Args::parse_from(["shelf", "--copy"]).to_config().mode, Mode::Copy);
        assert_eq!(Args::parse_from(["shelf", "--remove"]).to_config().mode, Mode::Remove);
        assert_eq!(Args::parse_from(["shelf", "--edit"]).to_config().mode, Mode::Edit);
        assert_eq!(
            Args::parse_from(["shelf", "--print", "--copy"]).to_config().mode,
            Mode::Print
        );
    }

    #[test]
    fn test_version_and_help_are_not_errors() {
        let version = Args::try_parse_from(["shelf", "--version"]).unwrap_err();
        assert_eq!(version.kind(), clap::error::ErrorKind::DisplayVersion);
        assert_eq!(version.exit_code(), 0);

        let help = Args::try_parse_from(["shelf", "-h"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
        assert_eq!(help.exit_code(), 0);
    }

    #[test]
    fn test_invalid_fast_value() {
        assert!(Args::try_parse_from(["shelf", "-f", "two"]).is_err());
    }
}
