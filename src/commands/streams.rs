//! Checksum and normalize subcommands handler

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

use mailroom::streams::{checksum, normalize_line_endings};

fn open_input(file: Option<&Path>) -> Result<Box<dyn Read>> {
    match file {
        Some(path) => {
            let f = File::open(path)
                .with_context(|| format!("Failed to open file: {}", path.display()))?;
            Ok(Box::new(f))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Print the checksum of a file or stdin.
pub fn handle_checksum(file: Option<&Path>, json: bool) -> Result<()> {
    let sum = checksum(open_input(file)?).context("Failed to read input")?;
    if json {
        println!("{}", serde_json::json!({ "checksum": sum }));
    } else {
        println!("{}", sum);
    }
    Ok(())
}

/// Copy a file or stdin to stdout with CRLF normalized to LF.
pub fn handle_normalize(file: Option<&Path>) -> Result<()> {
    let stdout = io::stdout();
    let written = normalize_line_endings(open_input(file)?, stdout.lock())
        .context("Failed to normalize line endings")?;
    tracing::debug!(bytes = written, "Normalized input");
    Ok(())
}
