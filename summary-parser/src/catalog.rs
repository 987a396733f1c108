//! Section catalog: default section names, alias table and header pattern
//!
//! A [`SectionCatalog`] is read-only configuration. The built-in catalog is
//! compiled once per process and shared by reference; custom catalogs can be
//! assembled in code or loaded from YAML/JSON via [`CatalogConfig`].

use crate::error::{Result, SummaryError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

/// Default section names, in output order
pub const DEFAULT_SECTION_NAMES: &[&str] = &[
    "現病歴",
    "入院時検査所見",
    "入院経過",
    "退院時状況",
    "備考",
];

/// Built-in alias table (alias, canonical name)
///
/// `治療内容` points at `治療経過`, which is not a default section, so lines
/// labeled with it never open a section.
pub const DEFAULT_SECTION_ALIASES: &[(&str, &str)] = &[
    ("治療内容", "治療経過"),
    ("その他", "備考"),
    ("補足", "備考"),
    ("メモ", "備考"),
];

/// Serializable catalog definition
///
/// ```yaml
/// sections: [現病歴, 入院経過, 備考]
/// aliases:
///   メモ: 備考
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Default section names, in output order
    pub sections: Vec<String>,
    /// Alias label to canonical section name
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            sections: DEFAULT_SECTION_NAMES.iter().map(|s| s.to_string()).collect(),
            aliases: DEFAULT_SECTION_ALIASES
                .iter()
                .map(|(alias, target)| (alias.to_string(), target.to_string()))
                .collect(),
        }
    }
}

/// Immutable set of section names and aliases with its compiled header pattern
#[derive(Debug, Clone)]
pub struct SectionCatalog {
    sections: Vec<String>,
    aliases: HashMap<String, String>,
    header_pattern: Regex,
}

impl SectionCatalog {
    /// Build a catalog from section names and `(alias, canonical)` pairs
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - no section names are given
    /// - a name or alias is empty, padded with whitespace, or contains `:`, `：` or a line break
    /// - a section name is repeated
    /// - an alias has the same label as a section
    ///
    /// # Examples
    ///
    /// ```
    /// use summary_parser::SectionCatalog;
    ///
    /// let catalog = SectionCatalog::new(["所見", "方針"], [("計画", "方針")]).unwrap();
    /// assert_eq!(catalog.resolve("計画"), "方針");
    /// assert!(SectionCatalog::new(Vec::<String>::new(), Vec::<(String, String)>::new()).is_err());
    /// ```
    pub fn new<I, S, A, K, V>(sections: I, aliases: A) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        A: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let sections: Vec<String> = sections.into_iter().map(Into::into).collect();
        if sections.is_empty() {
            return Err(SummaryError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for name in &sections {
            if !is_valid_label(name) {
                return Err(SummaryError::InvalidSectionName { name: name.clone() });
            }
            if !seen.insert(name.as_str()) {
                return Err(SummaryError::DuplicateSection { name: name.clone() });
            }
        }

        let mut alias_table = HashMap::new();
        for (alias, target) in aliases {
            let alias: String = alias.into();
            let target: String = target.into();
            if !is_valid_label(&alias) || !is_valid_label(&target) {
                return Err(SummaryError::InvalidAlias { alias });
            }
            if seen.contains(alias.as_str()) {
                return Err(SummaryError::AliasShadowsSection { alias });
            }
            if !seen.contains(target.as_str()) {
                debug!(alias = %alias, target = %target, "Alias targets a section outside the catalog");
            }
            alias_table.insert(alias, target);
        }

        let labels = sections
            .iter()
            .map(String::as_str)
            .chain(alias_table.keys().map(String::as_str));
        let header_pattern = compile_header_pattern(labels)?;

        Ok(Self {
            sections,
            aliases: alias_table,
            header_pattern,
        })
    }

    /// The built-in catalog, compiled on first use
    pub fn default_catalog() -> &'static SectionCatalog {
        static DEFAULT_CATALOG: OnceLock<SectionCatalog> = OnceLock::new();
        DEFAULT_CATALOG.get_or_init(|| {
            SectionCatalog::from_config(CatalogConfig::default())
                .expect("Built-in section catalog must be valid")
        })
    }

    /// Build a catalog from its serializable form
    pub fn from_config(config: CatalogConfig) -> Result<Self> {
        Self::new(config.sections, config.aliases)
    }

    /// Parse a YAML catalog definition
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: CatalogConfig = serde_yaml::from_str(yaml)?;
        Self::from_config(config)
    }

    /// Parse a JSON catalog definition
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CatalogConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }

    /// Load a catalog file, choosing the format from its extension
    ///
    /// `.yaml` and `.yml` are read as YAML, `.json` as JSON.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let content = |path: &Path| {
            fs::read_to_string(path).map_err(|e| SummaryError::IoError {
                message: format!("{}: {e}", path.display()),
            })
        };

        match extension.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml_str(&content(path)?),
            Some("json") => Self::from_json_str(&content(path)?),
            _ => Err(SummaryError::UnsupportedConfigFormat {
                path: path.display().to_string(),
            }),
        }
    }

    /// Serializable form of this catalog
    pub fn to_config(&self) -> CatalogConfig {
        CatalogConfig {
            sections: self.sections.clone(),
            aliases: self
                .aliases
                .iter()
                .map(|(alias, target)| (alias.clone(), target.clone()))
                .collect(),
        }
    }

    /// Default section names, in output order
    pub fn section_names(&self) -> &[String] {
        &self.sections
    }

    /// Alias entries as `(alias, canonical)` pairs, in no particular order
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, target)| (alias.as_str(), target.as_str()))
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.section_index(name).is_some()
    }

    /// Resolve a label through the alias table, falling back to the label itself
    pub fn resolve<'a>(&'a self, label: &'a str) -> &'a str {
        self.aliases.get(label).map(String::as_str).unwrap_or(label)
    }

    /// Default section a label opens, if any
    pub fn canonical_section(&self, label: &str) -> Option<&str> {
        let resolved = self.resolve(label);
        self.section_index(resolved)
            .map(|index| self.sections[index].as_str())
    }

    pub(crate) fn section_index(&self, name: &str) -> Option<usize> {
        self.sections.iter().position(|section| section == name)
    }

    pub(crate) fn header_pattern(&self) -> &Regex {
        &self.header_pattern
    }
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty() && label.trim() == label && !label.contains([':', '：', '\n', '\r'])
}

/// Compile `label + separator + content` for every known label
///
/// Labels are tried longest first so that a label which is a prefix of
/// another never shadows it. Only the first separator is consumed.
fn compile_header_pattern<'a>(labels: impl Iterator<Item = &'a str>) -> Result<Regex> {
    let mut labels: Vec<&str> = labels.collect();
    labels.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    labels.dedup();

    let alternation = labels
        .iter()
        .map(|label| regex::escape(label))
        .collect::<Vec<_>>()
        .join("|");

    Ok(Regex::new(&format!(
        r"^(?P<label>{alternation})(?:\s*[:：]\s*|\s+|$)(?P<content>.*)$"
    ))?)
}
