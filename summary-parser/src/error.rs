use std::result;

use thiserror::Error;

/// Error types for section catalog construction and loading
///
/// Parsing itself never fails; these errors only arise while building a
/// [`SectionCatalog`](crate::SectionCatalog) from user-supplied configuration.
#[derive(Error, Debug)]
pub enum SummaryError {
    /// Catalog has no default sections
    #[error("Section catalog must contain at least one section")]
    EmptyCatalog,

    /// Section name is empty or contains a separator character
    #[error("Invalid section name: {name:?}")]
    InvalidSectionName { name: String },

    /// Section name listed more than once
    #[error("Duplicate section name: {name}")]
    DuplicateSection { name: String },

    /// Alias label or target is empty or contains a separator character
    #[error("Invalid alias: {alias:?}")]
    InvalidAlias { alias: String },

    /// Alias label equals a default section name
    #[error("Alias {alias} shadows a default section of the same name")]
    AliasShadowsSection { alias: String },

    /// Catalog file extension is not one of yaml, yml or json
    #[error("Unsupported catalog format: {path}")]
    UnsupportedConfigFormat { path: String },

    /// YAML parsing failed
    #[error("YAML parsing failed: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Header pattern failed to compile
    #[error("Header pattern failed to compile: {0}")]
    PatternError(#[from] regex::Error),

    /// IO error for file operations
    #[error("IO error: {message}")]
    IoError { message: String },
}

pub type Result<T> = result::Result<T, SummaryError>;
