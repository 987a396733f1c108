#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # Summary Parser
//!
//! Section parser for loosely formatted medical summaries such as discharge
//! and admission notes.
//!
//! This crate provides a pure, stateless parser that maps free text onto a
//! fixed catalog of section names. Section labels may be written with a
//! halfwidth colon, a fullwidth colon, or plain whitespace, and informal labels
//! are resolved through an alias table.
//!
//! ```
//! use summary_parser::parse_output_summary;
//!
//! let summary = parse_output_summary("入院経過: 第1病日より治療開始\n抗生剤投与\nメモ：血圧手帳記入");
//! assert_eq!(summary.get("入院経過"), Some("第1病日より治療開始\n抗生剤投与"));
//! assert_eq!(summary.get("備考"), Some("血圧手帳記入"));
//! ```

pub mod catalog;
pub mod error;
pub mod header;
pub mod parser;

// Re-export main types for convenience
pub use catalog::{CatalogConfig, DEFAULT_SECTION_ALIASES, DEFAULT_SECTION_NAMES, SectionCatalog};
pub use error::{Result, SummaryError};
pub use header::{LineKind, classify_line};
pub use parser::{ParsedSummary, SummaryParser, parse_output_summary};
