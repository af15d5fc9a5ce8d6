use crate::error::{Error, Result};

/// How a match gets chosen from a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    /// Nothing matched.
    None,
    /// Fast selection of the match at this zero-based index.
    Fast(usize),
    /// Exactly one match, no need to ask.
    Only,
    /// Several matches, the operator has to choose.
    Menu,
}

/// Decides how to choose among `count` matches.
///
/// `fast` is the one-based fast-selection index, if any.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if `fast` is larger than `count`.
pub fn pick(count: usize, fast: Option<usize>) -> Result<Pick> {
    if count == 0 {
        return Ok(Pick::None);
    }

    match fast {
        Some(index) if index > count => Err(Error::OutOfRange { index, count }),
        Some(0) | None => Ok(if count == 1 { Pick::Only } else { Pick::Menu }),
        Some(index) => Ok(Pick::Fast(index - 1)),
    }
}

/// Parses a one-based menu reply into a zero-based index.
///
/// # Errors
///
/// Returns [`Error::InvalidSelection`] for anything that is not a number in `1..=count`.
pub fn parse_menu_reply(reply: &str, count: usize) -> Result<usize> {
    let reply = reply.trim();

    match reply.parse::<usize>() {
        Ok(index) if (1..=count).contains(&index) => Ok(index - 1),
        _ => Err(Error::InvalidSelection(reply.to_string())),
    }
}
