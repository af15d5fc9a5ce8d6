//! Shelf Core Library
//!
//! This crate provides the core functionality for shelf, a personal command
//! library: descriptions paired with shell command templates, kept in a flat
//! `Description;Command` file, found by text search and completed through
//! `{"Label":"Default"}` placeholders before being run, printed or copied.
//!
//! # Key Features
//!
//! - **Record Store**: Comment-aware, lenient line format with append and atomic rewrite
//! - **Search**: Case-insensitive substring matching in store order
//! - **Placeholders**: Per-occurrence prompting with literal, offset-based substitution
//! - **Collaborators**: Prompt, clipboard and shell execution behind small traits
//!
//! # Examples
//!
//! Finding stored commands:
//!
//! ```no_run
//! use shelf_core::{config::get_store_path, matcher, store::Store};
//!
//! let store = Store::load(get_store_path(&None))?;
//! for found in matcher::find(&store, "docker") {
//!     println!("{}: {}", found.description, found.command);
//! }
//! # Ok::<(), shelf_core::error::Error>(())
//! ```

pub mod clipboard;
pub mod config;
pub mod error;
pub mod execution;
pub mod matcher;
pub mod prompt;
pub mod record;
pub mod selection;
pub mod store;
pub mod template;
