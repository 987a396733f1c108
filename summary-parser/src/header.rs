//! Header line detection

use crate::catalog::SectionCatalog;
use regex::Regex;
use std::sync::OnceLock;

/// How a single stripped line relates to the section structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Opens (or reopens) a default section with inline content
    Header { section: &'a str, content: &'a str },
    /// Looks like `label: ...` but the label opens no default section
    UnknownHeader { label: &'a str },
    /// Plain text
    Text,
}

/// Classify a line that has already been stripped of surrounding whitespace
///
/// # Examples
///
/// ```
/// use summary_parser::{LineKind, SectionCatalog, classify_line};
///
/// let catalog = SectionCatalog::default_catalog();
/// assert_eq!(
///     classify_line(catalog, "メモ：内容"),
///     LineKind::Header { section: "備考", content: "内容" }
/// );
/// assert_eq!(
///     classify_line(catalog, "未知: 内容"),
///     LineKind::UnknownHeader { label: "未知" }
/// );
/// assert_eq!(classify_line(catalog, "抗生剤投与"), LineKind::Text);
/// ```
pub fn classify_line<'a>(catalog: &'a SectionCatalog, line: &'a str) -> LineKind<'a> {
    if let Some(caps) = catalog.header_pattern().captures(line) {
        let (Some(label), Some(content)) = (caps.name("label"), caps.name("content")) else {
            return LineKind::Text;
        };
        let label = label.as_str();
        return match catalog.canonical_section(label) {
            Some(section) => LineKind::Header {
                section,
                content: content.as_str().trim(),
            },
            None => LineKind::UnknownHeader { label },
        };
    }

    // Colon-delimited labels outside the catalog, reported for diagnostics only
    static LABELED_LINE_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = LABELED_LINE_REGEX.get_or_init(|| {
        Regex::new(r"^(?P<label>[^:：\s]+)\s*[:：]").expect("Failed to compile labeled line regex")
    });

    match re.captures(line).and_then(|caps| caps.name("label")) {
        Some(label) => LineKind::UnknownHeader {
            label: label.as_str(),
        },
        None => LineKind::Text,
    }
}
