//! Choosing one match out of a search result.
//!
//! A fast-selection index picks directly, a single match is taken as-is, and
//! anything else shows a numbered menu and asks for a number.

use std::io::Write;

use crossterm::style::Stylize;
use shelf_core::config::{Config, Mode};
use shelf_core::error::Result;
use shelf_core::matcher::Match;
use shelf_core::prompt::Prompter;
use shelf_core::selection::{self, Pick};

pub const SELECT_PROMPT: &str = "Select a number: ";

/// The match the operator settled on.
#[derive(Debug)]
pub struct Chosen<'a> {
    pub found: &'a Match,
    /// Whether the numbered menu was shown to get here.
    pub menu_shown: bool,
}

/// Picks one of `matches`, or `None` when there are none.
///
/// # Errors
///
/// Returns [`shelf_core::error::Error::OutOfRange`] for a fast index past the
/// end, [`shelf_core::error::Error::InvalidSelection`] for a bad menu reply,
/// or any prompt or output error.
pub fn choose<'a, W: Write>(
    matches: &'a [Match],
    config: &Config,
    prompter: &mut dyn Prompter,
    out: &mut W,
    styled: bool,
) -> Result<Option<Chosen<'a>>> {
    match selection::pick(matches.len(), config.fast_index)? {
        Pick::None => Ok(None),
        Pick::Fast(index) => {
            let found = &matches[index];
            if config.verbose {
                writeln!(out, "Fast selected [{}]: {}", index + 1, found.description)?;
            }
            Ok(Some(Chosen {
                found,
                menu_shown: false,
            }))
        }
        Pick::Only => {
            let found = &matches[0];
            writeln!(out, "Found 1 match: {}", found.description)?;
            writeln!(out, "Cmd : {}", found.command)?;
            Ok(Some(Chosen {
                found,
                menu_shown: false,
            }))
        }
        Pick::Menu => {
            print_menu(matches, config.mode, out, styled)?;
            out.flush()?;

            let reply = prompter.read_line(SELECT_PROMPT, None)?;
            let index = selection::parse_menu_reply(&reply, matches.len())?;
            Ok(Some(Chosen {
                found: &matches[index],
                menu_shown: true,
            }))
        }
    }
}

fn heading(mode: Mode) -> &'static str {
    match mode {
        Mode::Remove => "Select command to REMOVE:",
        Mode::Edit => "Select command to EDIT:",
        _ => "Found commands:",
    }
}

fn print_menu<W: Write>(matches: &[Match], mode: Mode, out: &mut W, styled: bool) -> Result<()> {
    if styled {
        writeln!(out, "{}", heading(mode).bold())?;
    } else {
        writeln!(out, "{}", heading(mode))?;
    }

    for (number, found) in (1..).zip(matches) {
        let label = format!("[{number}]");
        if styled {
            writeln!(out, "{} {}", label.green().bold(), found.description)?;
        } else {
            writeln!(out, "{label} {}", found.description)?;
        }
        writeln!(out, "    Cmd: {}", found.command)?;
    }

    writeln!(out)?;
    Ok(())
}
