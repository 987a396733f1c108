pub mod format;
pub mod parse;

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Read the whole input, from stdin when no path or `-` is given
pub fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Write the result to a file, or to stdout when no path is given
pub fn write_output(output: Option<&PathBuf>, content: &str) -> Result<()> {
    if let Some(path) = output {
        fs::write(path, content)
            .with_context(|| format!("Failed to write output file {}", path.display()))?;
        tracing::info!(path = %path.display(), bytes = content.len(), "Wrote output");
    } else {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{content}")?;
    }
    Ok(())
}
