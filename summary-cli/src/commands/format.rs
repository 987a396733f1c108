use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use summary_formatter::format_output_summary;

use super::{read_input, write_output};

#[derive(Args, Debug)]
pub struct Format {
    /// Input file (default: stdin, or `-`)
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Format {
    pub fn execute(&self) -> Result<()> {
        let formatted = self.run()?;
        write_output(self.output.as_ref(), &formatted)
    }

    fn run(&self) -> Result<String> {
        let text = read_input(self.input.as_deref())?;
        tracing::debug!(bytes = text.len(), "Formatting summary");
        Ok(format_output_summary(&text))
    }
}
