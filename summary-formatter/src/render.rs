//! Labeled-text rendering for parsed summaries
//!
//! Turns a [`ParsedSummary`] back into `label: content` text for report
//! generators. Output written with any [`Separator`] parses back to the same
//! sections, as long as no content line itself starts with a known label.

use summary_parser::ParsedSummary;

/// Configuration options for labeled-text rendering
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// How a label is separated from its content
    pub separator: Separator,
    /// Emit sections without content as a bare label
    pub include_empty: bool,
    /// Put a blank line between sections
    pub blank_line_between: bool,
}

/// Label/content separator style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `label: content`
    Halfwidth,
    /// `label：content`
    Fullwidth,
    /// Label on its own line, content below
    Block,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            separator: Separator::Halfwidth,
            include_empty: false,
            blank_line_between: true,
        }
    }
}

/// Parsed summary to labeled text renderer
#[derive(Debug, Clone, Default)]
pub struct SummaryRenderer {
    config: RenderConfig,
}

impl SummaryRenderer {
    /// Create a new renderer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with custom configuration
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Set separator style
    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.config.separator = separator;
        self
    }

    /// Set whether to include empty sections
    pub fn with_include_empty(mut self, include: bool) -> Self {
        self.config.include_empty = include;
        self
    }

    /// Set whether sections are separated by a blank line
    pub fn with_blank_line_between(mut self, blank_line: bool) -> Self {
        self.config.blank_line_between = blank_line;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render sections in catalog order
    pub fn render(&self, summary: &ParsedSummary) -> String {
        let blocks: Vec<String> = summary
            .iter()
            .filter(|(_, content)| self.config.include_empty || !content.is_empty())
            .map(|(section, content)| self.render_section(section, content))
            .collect();

        let joiner = if self.config.blank_line_between {
            "\n\n"
        } else {
            "\n"
        };
        blocks.join(joiner)
    }

    fn render_section(&self, section: &str, content: &str) -> String {
        match (self.config.separator, content.is_empty()) {
            (Separator::Halfwidth, true) => format!("{section}:"),
            (Separator::Halfwidth, false) => format!("{section}: {content}"),
            (Separator::Fullwidth, true) => format!("{section}："),
            (Separator::Fullwidth, false) => format!("{section}：{content}"),
            (Separator::Block, true) => section.to_string(),
            (Separator::Block, false) => format!("{section}\n{content}"),
        }
    }
}
