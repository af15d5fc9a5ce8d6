//! One flow per mode: add, remove, edit, or recall a command and print, copy
//! or execute it.

use std::io::Write;

use itertools::Itertools;
use log::{info, warn};
use shelf_core::clipboard::Clipboard;
use shelf_core::config::{Config, Mode};
use shelf_core::error::{Error, Result};
use shelf_core::execution::Executor;
use shelf_core::matcher::{self, Match};
use shelf_core::prompt::Prompter;
use shelf_core::record::Record;
use shelf_core::store::Store;
use shelf_core::template;

use crate::command_selection::{self, Chosen};

/// Runs one invocation against its collaborators.
pub struct Dispatcher<'a, W: Write> {
    config: &'a Config,
    prompter: &'a mut dyn Prompter,
    clipboard: &'a dyn Clipboard,
    executor: &'a dyn Executor,
    out: W,
    styled: bool,
}

impl<'a, W: Write> Dispatcher<'a, W> {
    pub fn new(
        config: &'a Config,
        prompter: &'a mut dyn Prompter,
        clipboard: &'a dyn Clipboard,
        executor: &'a dyn Executor,
        out: W,
    ) -> Self {
        Self {
            config,
            prompter,
            clipboard,
            executor,
            out,
            styled: false,
        }
    }

    /// Enables terminal styling of menus.
    #[must_use]
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Performs the configured operation and returns the exit code to report.
    ///
    /// # Errors
    ///
    /// Returns any fatal error of the selected flow.
    pub fn run(mut self) -> Result<i32> {
        if self.config.verbose {
            writeln!(self.out, "Using store: {}", self.config.store_path.display())?;
        }

        if self.config.mode == Mode::Add {
            self.add()?;
            return Ok(0);
        }

        let mut store = Store::load(&self.config.store_path)?;
        let term = self.config.search_term();
        let matches = matcher::find(&store, &term);
        info!("{} matches for `{term}`", matches.len());

        let Some(Chosen { found, menu_shown }) = command_selection::choose(
            &matches,
            self.config,
            &mut *self.prompter,
            &mut self.out,
            self.styled,
        )?
        else {
            writeln!(self.out, "No matches found.")?;
            return Ok(0);
        };

        match self.config.mode {
            Mode::Remove => {
                self.remove(&mut store, found)?;
                Ok(0)
            }
            Mode::Edit => {
                self.edit(&mut store, found)?;
                Ok(0)
            }
            _ => self.recall(found, menu_shown),
        }
    }

    fn add(&mut self) -> Result<()> {
        let terms = &self.config.terms;

        if terms.len() < 2 {
            writeln!(self.out, "--- Add New Command ---")?;
            self.out.flush()?;
        }

        let description = match terms.first() {
            Some(description) => description.trim().to_string(),
            None => self.prompter.read_line("Description: ", None)?.trim().to_string(),
        };

        let command = if terms.len() > 1 {
            terms[1..].iter().join(" ").trim().to_string()
        } else {
            self.prompter.read_line("Command: ", None)?.trim().to_string()
        };

        let record = validated(description, command)?;

        let mut store = Store::open(&self.config.store_path)?;
        store.append(record)?;
        writeln!(self.out, "Entry added successfully.")?;
        Ok(())
    }

    fn remove(&mut self, store: &mut Store, found: &Match) -> Result<()> {
        store.delete(found.position)?;
        writeln!(self.out, "Entry removed successfully.")?;
        Ok(())
    }

    fn edit(&mut self, store: &mut Store, found: &Match) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "--- Edit Entry (press Enter to keep the current value) ---")?;
        self.out.flush()?;

        let description = self.read_edited("Description: ", &found.description)?;
        let command = self.read_edited("Command: ", &found.command)?;
        let record = validated(description, command)?;

        // Edited entries move to the end of the store
        store.delete(found.position)?;
        store.append(record)?;
        writeln!(self.out, "Entry edited successfully.")?;
        Ok(())
    }

    fn read_edited(&mut self, prompt: &str, current: &str) -> Result<String> {
        let reply = self.prompter.read_line(prompt, Some(current))?;
        let reply = reply.trim();

        Ok(if reply.is_empty() {
            current.to_string()
        } else {
            reply.to_string()
        })
    }

    fn recall(&mut self, found: &Match, menu_shown: bool) -> Result<i32> {
        let labels = template::labels(&found.command);
        if !labels.is_empty() {
            info!("Placeholders: {}", labels.iter().join(", "));
        }

        self.out.flush()?;
        let resolved = template::resolve(&found.command, &mut *self.prompter)?;

        match self.config.mode {
            Mode::Print => {
                writeln!(self.out, "{resolved}")?;
                Ok(0)
            }
            Mode::Copy => match self.clipboard.copy(&resolved) {
                Ok(()) => {
                    writeln!(self.out, "Command copied to clipboard.")?;
                    Ok(0)
                }
                Err(e) => {
                    // Don't lose the command the operator just filled in
                    writeln!(self.out, "{resolved}")?;
                    Err(e)
                }
            },
            _ => {
                if self.config.verbose {
                    writeln!(self.out, "\nExecuting: {resolved}")?;
                } else if menu_shown {
                    writeln!(self.out, "\nExecuting...")?;
                }
                self.out.flush()?;

                let code = self.executor.execute(&resolved)?;
                info!("Command exited with {code}");
                Ok(code)
            }
        }
    }
}

fn validated(description: String, command: String) -> Result<Record> {
    if description.is_empty() {
        return Err(Error::EmptyRequiredField("Description"));
    }
    if command.is_empty() {
        return Err(Error::EmptyRequiredField("Command"));
    }

    let record = Record::new(description, command);
    if let Some(field) = record.field_with_line_break() {
        return Err(Error::LineBreakInField(field));
    }

    if record.has_ambiguous_description() {
        warn!(
            "Description `{}` contains `;`, it will be split there when the store is read",
            record.description
        );
    }
    if record.reads_as_comment() {
        warn!(
            "Description `{}` starts with `#`, the entry will be read back as a comment",
            record.description
        );
    }
    Ok(record)
}
