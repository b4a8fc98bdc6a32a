use anyhow::{Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Pick the platform clipboard command
fn clipboard_command() -> (&'static str, Vec<&'static str>) {
    if cfg!(target_os = "macos") {
        ("pbcopy", vec![])
    } else if cfg!(target_os = "windows") {
        ("clip", vec![])
    } else if Command::new("which")
        .arg("xclip")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
    {
        ("xclip", vec!["-selection", "clipboard"])
    } else {
        ("xsel", vec!["--clipboard", "--input"])
    }
}

/// Pipe `text` into the system clipboard
pub fn copy(text: &str) -> Result<()> {
    let (cmd, args) = clipboard_command();
    pipe_to(cmd, &args, text)
}

/// Run `cmd`, write `text` to its stdin and wait for it. The child is always
/// reaped, even when the write fails.
fn pipe_to(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to open clipboard command '{}'", cmd))?;

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(err) = stdin.write_all(text.as_bytes()) {
            drop(stdin);
            let _ = child.kill();
            let _ = child.wait();
            return Err(err).with_context(|| format!("Failed to write to '{}'", cmd));
        }
    }

    let status = child.wait().context("Clipboard command failed")?;
    if !status.success() {
        anyhow::bail!("Clipboard command '{}' exited with {}", cmd, status);
    }
    Ok(())
}
