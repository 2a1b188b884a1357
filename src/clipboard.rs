//! Sending assembled text to the system clipboard.
//!
//! There is no built-in clipboard access. The configured
//! `clipboard_command` (e.g. `pbcopy`, `xclip -selection clipboard`,
//! `wl-copy`) is run with the text on its stdin.

use crate::error::{PromptError, Result};
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::thread;

/// Pipe `text` into `command`.
pub fn copy_to_clipboard(text: &str, command: &str) -> Result<()> {
    let args = shell_words::split(command).map_err(|e| {
        PromptError::Clipboard(format!(
            "failed to parse clipboard_command '{}': {}",
            command, e
        ))
    })?;

    let Some((program, program_args)) = args.split_first() else {
        return Err(PromptError::Clipboard(
            "no clipboard_command configured in config.yaml".to_string(),
        ));
    };

    let mut child = Command::new(program)
        .args(program_args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| PromptError::Clipboard(format!("failed to run '{}': {}", program, e)))?;

    // stdin is fed from its own thread so stderr is drained while writing.
    let stdin = child.stdin.take();
    let payload = text.to_string();
    let writer = thread::spawn(move || match stdin {
        Some(mut stdin) => stdin.write_all(payload.as_bytes()),
        None => Ok(()),
    });

    let output = child
        .wait_with_output()
        .map_err(|e| PromptError::Clipboard(format!("failed to wait for '{}': {}", program, e)))?;
    let written = writer
        .join()
        .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(PromptError::Clipboard(format!(
            "'{}' exited with {}: {}",
            program,
            output.status,
            stderr.trim()
        )));
    }

    written.map_err(|e| PromptError::Clipboard(format!("failed to write to '{}': {}", program, e)))
}
