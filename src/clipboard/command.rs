use super::ClipboardStrategy;
use anyhow::{bail, Context, Result};
use std::io::Write;
use std::process::{Child, Command, ExitStatus, Stdio};

#[cfg(target_os = "macos")]
const COPY_COMMANDS: &[&[&str]] = &[&["pbcopy"]];

#[cfg(target_os = "windows")]
const COPY_COMMANDS: &[&[&str]] = &[&["clip"]];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const COPY_COMMANDS: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard", "-in"],
    &["xsel", "--clipboard", "--input"],
];

/// Copies text by piping it into a platform copy tool (`wl-copy`,
/// `xclip`, `xsel`, `pbcopy`, `clip`).
///
/// The tools talk to the display server directly, so this path keeps
/// working in sandboxed sessions where in-process clipboard APIs are
/// blocked.
pub struct CommandCopy {
    commands: &'static [&'static [&'static str]],
}

impl CommandCopy {
    pub fn new() -> Self {
        Self {
            commands: COPY_COMMANDS,
        }
    }
}

impl Default for CommandCopy {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardStrategy for CommandCopy {
    fn name(&self) -> &'static str {
        "command"
    }

    fn attempt(&self, text: &str) -> Result<()> {
        let mut last_error = None;

        for argv in self.commands {
            match pipe_into_command(argv, text) {
                Ok(()) => return Ok(()),
                Err(err) => last_error = Some(err),
            }
        }

        match last_error {
            Some(err) => Err(err),
            None => bail!("no copy command configured for this platform"),
        }
    }
}

/// Reaps the spawned copy tool on every exit path, including early
/// returns.
struct ChildGuard {
    child: Option<Child>,
}

impl ChildGuard {
    fn new(child: Child) -> Self {
        Self { child: Some(child) }
    }

    fn stdin(&mut self) -> Option<std::process::ChildStdin> {
        self.child.as_mut().and_then(|child| child.stdin.take())
    }

    fn wait(mut self) -> Result<ExitStatus> {
        let mut child = self
            .child
            .take()
            .context("copy command already reaped")?;
        child.wait().context("failed to wait for copy command")
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

fn pipe_into_command(argv: &[&str], text: &str) -> Result<()> {
    let child = Command::new(argv[0])
        .args(&argv[1..])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("failed to spawn {}", argv[0]))?;

    let mut guard = ChildGuard::new(child);

    {
        let mut stdin = guard
            .stdin()
            .with_context(|| format!("{} has no stdin", argv[0]))?;
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("failed to pipe text into {}", argv[0]))?;
        // Dropping stdin closes the pipe so the tool can finish.
    }

    let status = guard.wait()?;
    if !status.success() {
        bail!("{} exited with {status}", argv[0]);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_command_is_an_error_not_a_panic() {
        let result = pipe_into_command(&["cliptui-no-such-copy-tool"], "text");
        assert!(result.is_err());
    }

    #[test]
    fn test_failing_command_is_reported() {
        // `false` accepts no stdin input and exits non-zero.
        #[cfg(unix)]
        {
            let result = pipe_into_command(&["false"], "");
            assert!(result.is_err());
        }
    }

    #[test]
    fn test_successful_command_consumes_the_text() {
        #[cfg(unix)]
        {
            let result = pipe_into_command(&["cat"], "some text");
            assert!(result.is_ok());
        }
    }
}
