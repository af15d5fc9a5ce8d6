use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use shelf_core::error::{Error, Result};
use shelf_core::prompt::Prompter;

/// Line editor on the controlling terminal.
///
/// End of input reads as an empty reply; Ctrl+C cancels.
pub struct LinePrompter {
    editor: DefaultEditor,
}

impl LinePrompter {
    /// # Errors
    ///
    /// Returns [`Error::Prompt`] if the terminal cannot be set up.
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| Error::Prompt(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl Prompter for LinePrompter {
    fn read_line(&mut self, prompt: &str, initial: Option<&str>) -> Result<String> {
        let reply = match initial {
            Some(initial) => self.editor.readline_with_initial(prompt, (initial, "")),
            None => self.editor.readline(prompt),
        };

        match reply {
            Ok(line) => Ok(line),
            Err(ReadlineError::Eof) => Ok(String::new()),
            Err(ReadlineError::Interrupted) => Err(Error::Cancelled),
            Err(e) => Err(Error::Prompt(e.to_string())),
        }
    }
}
