//! Shelf CLI Library
//!
//! This crate provides the command-line interface for shelf, a personal
//! library of shell commands. It handles argument parsing, the interactive
//! prompts, the match menu and the add / remove / edit / recall workflows.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing into a [`shelf_core::config::Config`]
//! - [`command_selection`]: Fast selection, single-match and menu selection
//! - [`dispatch`]: The workflow for each mode
//! - [`prompt`]: Line editor used for every question asked
//!
//! # Examples
//!
//! ```bash
//! # Find and run a command
//! shelf docker
//!
//! # Store a new command
//! shelf --add "Tail logs" 'tail -f {"File":"/var/log/syslog"}'
//!
//! # Print the second match instead of running it
//! shelf --print -f 2 ssh
//!
//! # Remove or edit a stored command
//! shelf --remove ssh
//! shelf --edit ssh
//! ```

pub mod cli_args;
pub mod command_selection;
pub mod dispatch;
pub mod prompt;
