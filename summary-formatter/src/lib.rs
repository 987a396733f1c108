#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # Summary Formatter
//!
//! Display-side helpers for medical summaries:
//!
//! - **Markup removal**: strip decorative `*`, `＊`, `#` and halfwidth spaces
//!   from labeled text while keeping line breaks and fullwidth punctuation
//! - **Rendering**: turn a parsed summary back into labeled text

pub mod markup;
pub mod render;

// Re-export main types for convenience
pub use markup::format_output_summary;
pub use render::{RenderConfig, Separator, SummaryRenderer};
