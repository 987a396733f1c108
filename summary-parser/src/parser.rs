//! Line-oriented section parser
//!
//! Splits free text into the sections of a [`SectionCatalog`]. A single forward
//! pass keeps a "current section" pointer: header lines (re)open a section,
//! every other non-blank line continues the current one or is discarded when
//! no section has been opened yet.

use crate::catalog::SectionCatalog;
use crate::header::{LineKind, classify_line};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::vec;
use tracing::{debug, trace};

/// Parse free text with the built-in section catalog
///
/// The result always holds every default section, in catalog order. Missing
/// sections map to the empty string.
///
/// # Examples
///
/// ```
/// use summary_parser::parse_output_summary;
///
/// let summary = parse_output_summary("入院経過: 順調に回復\n備考：なし");
/// assert_eq!(summary.get("入院経過"), Some("順調に回復"));
/// assert_eq!(summary.get("備考"), Some("なし"));
/// assert_eq!(summary.get("現病歴"), Some(""));
/// ```
pub fn parse_output_summary(text: &str) -> ParsedSummary {
    SummaryParser::default().parse(text)
}

/// Section parser bound to a catalog
#[derive(Debug, Clone, Copy)]
pub struct SummaryParser<'c> {
    catalog: &'c SectionCatalog,
}

impl Default for SummaryParser<'static> {
    fn default() -> Self {
        Self::new(SectionCatalog::default_catalog())
    }
}

impl<'c> SummaryParser<'c> {
    pub fn new(catalog: &'c SectionCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c SectionCatalog {
        self.catalog
    }

    /// Parse text into one entry per catalog section
    ///
    /// A later header for a section replaces whatever the section collected
    /// before, including headers introduced through different aliases.
    pub fn parse(&self, text: &str) -> ParsedSummary {
        let names = self.catalog.section_names();
        let mut collected: Vec<Vec<&str>> = vec![Vec::new(); names.len()];
        let mut current: Option<usize> = None;

        for (line_number, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            let kind = classify_line(self.catalog, line);
            trace!(line_number, ?kind, "Classified line");

            match kind {
                LineKind::Header { section, content } => {
                    let Some(index) = self.catalog.section_index(section) else {
                        continue;
                    };
                    if !collected[index].is_empty() {
                        debug!(section, line_number, "Section header repeated, replacing earlier content");
                    }
                    collected[index] = vec![content];
                    current = Some(index);
                }
                LineKind::UnknownHeader { label } => match current {
                    Some(index) => collected[index].push(line),
                    None => debug!(label, line_number, "Discarding unknown section before any header"),
                },
                LineKind::Text => match current {
                    Some(index) => collected[index].push(line),
                    None => debug!(line_number, "Discarding line before any section header"),
                },
            }
        }

        names
            .iter()
            .zip(collected)
            .map(|(name, lines)| (name.clone(), lines.join("\n").trim().to_string()))
            .collect()
    }
}

/// Parsed sections in catalog order
///
/// Serializes as a map whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSummary {
    sections: Vec<(String, String)>,
}

impl ParsedSummary {
    /// Content of a section, `None` if the name is not part of the result
    pub fn get(&self, name: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|(section, _)| section == name)
            .map(|(_, content)| content.as_str())
    }

    /// `(section, content)` pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sections
            .iter()
            .map(|(section, content)| (section.as_str(), content.as_str()))
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|(section, _)| section.as_str())
    }

    /// Number of sections (not of non-empty sections)
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Whether any section has content
    pub fn has_content(&self) -> bool {
        self.sections.iter().any(|(_, content)| !content.is_empty())
    }

    pub fn into_map(self) -> HashMap<String, String> {
        self.sections.into_iter().collect()
    }
}

impl From<ParsedSummary> for HashMap<String, String> {
    fn from(summary: ParsedSummary) -> Self {
        summary.into_map()
    }
}

impl FromIterator<(String, String)> for ParsedSummary {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            sections: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ParsedSummary {
    type Item = (String, String);
    type IntoIter = vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.into_iter()
    }
}

impl Serialize for ParsedSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for (section, content) in &self.sections {
            map.serialize_entry(section, content)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ParsedSummary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SummaryVisitor;

        impl<'de> Visitor<'de> for SummaryVisitor {
            type Value = ParsedSummary;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of section names to content")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
                let mut sections = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((section, content)) = access.next_entry::<String, String>()? {
                    sections.push((section, content));
                }
                Ok(ParsedSummary { sections })
            }
        }

        deserializer.deserialize_map(SummaryVisitor)
    }
}
