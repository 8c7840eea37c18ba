//! Copy-to-clipboard with a text fallback.
//!
//! Pipes the text into the first platform clipboard tool that accepts it.
//! When none does, the text is printed instead so the user can copy it by
//! hand; the failure is reported once and never retried.

use std::io::Write;
use std::process::{Command, Stdio};

const CLIPBOARD_TOOLS: &[&[&str]] = &[
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["clip"],
];

/// Copy `text` to the system clipboard. Returns whether any tool took it.
pub fn copy(text: &str) -> bool {
    CLIPBOARD_TOOLS.iter().any(|tool| pipe_to(tool, text))
}

/// Copy, falling back to printing the text for manual copying.
pub fn copy_or_print(text: &str) {
    if copy(text) {
        eprintln!("Copied to clipboard.");
    } else {
        eprintln!("Clipboard unavailable; output follows for manual copy:");
        println!("{text}");
    }
}

fn pipe_to(tool: &[&str], text: &str) -> bool {
    let Ok(mut child) = Command::new(tool[0])
        .args(&tool[1..])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    else {
        return false;
    };

    if let Some(stdin) = child.stdin.as_mut() {
        if stdin.write_all(text.as_bytes()).is_err() {
            let _ = child.kill();
            let _ = child.wait();
            return false;
        }
    }
    drop(child.stdin.take());

    child.wait().map(|status| status.success()).unwrap_or(false)
}
