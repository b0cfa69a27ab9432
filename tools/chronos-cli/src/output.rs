//! Stdout formatting

use anyhow::{Context, Result};
use serde::Serialize;

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to format output")?;
    println!("{}", json);
    Ok(())
}

/// Print an opaque action response, or nothing if the server sent no body.
pub fn print_ack(value: Option<serde_json::Value>) -> Result<()> {
    match value {
        Some(value) => print_json(&value),
        None => Ok(()),
    }
}
