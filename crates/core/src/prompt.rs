use crate::error::Result;

/// Reads one line of text from the operator.
pub trait Prompter {
    /// Shows `prompt` and returns the reply without its line ending.
    ///
    /// `initial` is offered as editable text where the implementation supports it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Cancelled`] if the operator aborts the prompt.
    fn read_line(&mut self, prompt: &str, initial: Option<&str>) -> Result<String>;

    /// Reads a reply and falls back to `default` when it is blank.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Prompter::read_line`].
    fn read_or_default(&mut self, prompt: &str, default: &str) -> Result<String> {
        let reply = self.read_line(prompt, None)?;
        let reply = reply.trim();

        if reply.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(reply.to_string())
        }
    }
}
