use anyhow::{Context, Result};
use std::fs;

/// Reads a prompt from disk, trimmed.
pub fn read_prompt(path: &str) -> Result<String> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read prompt file {}", path))?;
    Ok(text.trim().to_string())
}

/// Writes the assistant's replies, one per paragraph.
pub fn write_replies(path: &str, replies: &[String]) -> Result<()> {
    fs::write(path, replies.join("\n\n")).with_context(|| format!("Failed to write reply to {}", path))
}
