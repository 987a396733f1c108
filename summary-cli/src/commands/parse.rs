use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use summary_formatter::{Separator, SummaryRenderer};
use summary_parser::{SectionCatalog, SummaryParser};

use super::{read_input, write_output};

#[derive(Args, Debug)]
pub struct Parse {
    /// Input file (default: stdin, or `-`)
    pub input: Option<PathBuf>,

    /// Section catalog file (.yaml, .yml or .json); the built-in catalog is used otherwise
    #[arg(short, long, env = "SUMMARY_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Label separator for text output
    #[arg(long, value_enum, default_value_t = SeparatorArg::Halfwidth)]
    pub separator: SeparatorArg,

    /// Include empty sections in text output
    #[arg(long)]
    pub include_empty: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeparatorArg {
    Halfwidth,
    Fullwidth,
    Block,
}

impl From<SeparatorArg> for Separator {
    fn from(arg: SeparatorArg) -> Self {
        match arg {
            SeparatorArg::Halfwidth => Separator::Halfwidth,
            SeparatorArg::Fullwidth => Separator::Fullwidth,
            SeparatorArg::Block => Separator::Block,
        }
    }
}

impl Parse {
    pub fn execute(&self) -> Result<()> {
        let rendered = self.run()?;
        write_output(self.output.as_ref(), &rendered)
    }

    fn run(&self) -> Result<String> {
        let custom_catalog;
        let catalog = match &self.catalog {
            Some(path) => {
                custom_catalog = SectionCatalog::from_path(path).with_context(|| {
                    format!("Failed to load section catalog {}", path.display())
                })?;
                tracing::info!(
                    path = %path.display(),
                    sections = custom_catalog.section_names().len(),
                    "Loaded section catalog"
                );
                &custom_catalog
            }
            None => SectionCatalog::default_catalog(),
        };

        let text = read_input(self.input.as_deref())?;
        let summary = SummaryParser::new(catalog).parse(&text);

        let filled = summary
            .iter()
            .filter(|(_, content)| !content.is_empty())
            .count();
        tracing::debug!(sections = summary.len(), filled, "Parsed summary");

        match self.output_format {
            OutputFormat::Json if self.pretty => Ok(serde_json::to_string_pretty(&summary)?),
            OutputFormat::Json => Ok(serde_json::to_string(&summary)?),
            OutputFormat::Text => Ok(SummaryRenderer::new()
                .with_separator(self.separator.into())
                .with_include_empty(self.include_empty)
                .render(&summary)),
        }
    }
}
