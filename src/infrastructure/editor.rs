//! Editor integration for composing entries

use crate::error::{JournalError, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Session for editing a file in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Write `initial` to `draft_path`, let the user edit it, and return
    /// what they saved. The draft file is removed afterwards.
    pub fn compose(&self, draft_path: &Path, initial: &str) -> Result<String> {
        fs::write(draft_path, initial)?;

        let edited = self
            .edit(draft_path)
            .and_then(|_| fs::read_to_string(draft_path).map_err(JournalError::Io));

        if let Err(e) = fs::remove_file(draft_path) {
            log::debug!("Could not remove draft {}: {}", draft_path.display(), e);
        }

        edited
    }

    /// Open a file in the editor and wait for it to exit
    pub fn edit(&self, file_path: &Path) -> Result<()> {
        let (program, mut args) = self.parse_command();
        args.push(file_path.to_string_lossy().to_string());

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        #[cfg(windows)]
        let status = Command::new("cmd")
            .arg("/C")
            .arg(&program)
            .args(&args)
            .status();

        #[cfg(not(windows))]
        let status = Command::new(&program).args(&args).status();

        let status = status.map_err(|e| {
            JournalError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(JournalError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }

        Ok(())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let mut parts = self.command.split_whitespace().map(str::to_string);

        match parts.next() {
            Some(program) => (program, parts.collect()),
            None if cfg!(windows) => ("notepad".to_string(), Vec::new()),
            None => ("nano".to_string(), Vec::new()),
        }
    }
}
