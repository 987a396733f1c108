//! Catalog loading from YAML/JSON definitions and custom-catalog parsing.

use std::fs;

use rstest::rstest;
use summary_parser::{CatalogConfig, SectionCatalog, SummaryError, SummaryParser};
use tracing_test::traced_test;

const OUTPATIENT_YAML: &str = r#"
sections:
  - 主訴
  - 所見
  - 方針
aliases:
  計画: 方針
  Plan: 方針
"#;

const OUTPATIENT_JSON: &str = r#"{
  "sections": ["主訴", "所見", "方針"],
  "aliases": { "計画": "方針", "Plan": "方針" }
}"#;

#[rstest]
#[case::yaml(SectionCatalog::from_yaml_str(OUTPATIENT_YAML))]
#[case::json(SectionCatalog::from_json_str(OUTPATIENT_JSON))]
fn test_load_catalog_definition(#[case] catalog: summary_parser::Result<SectionCatalog>) {
    let catalog = catalog.expect("catalog should load");

    assert_eq!(catalog.section_names(), ["主訴", "所見", "方針"]);
    assert_eq!(catalog.resolve("Plan"), "方針");

    let summary = SummaryParser::new(&catalog).parse("主訴: 頭痛\nPlan 経過観察\n1週間後再診");
    assert_eq!(summary.get("主訴"), Some("頭痛"));
    assert_eq!(summary.get("所見"), Some(""));
    assert_eq!(summary.get("方針"), Some("経過観察\n1週間後再診"));
    assert_eq!(summary.get("備考"), None);
}

#[test]
fn test_aliases_default_to_empty() {
    let catalog = SectionCatalog::from_yaml_str("sections: [所見]").unwrap();
    assert_eq!(catalog.aliases().count(), 0);
}

#[rstest]
#[case::yaml("catalog.yaml", OUTPATIENT_YAML)]
#[case::yml("catalog.yml", OUTPATIENT_YAML)]
#[case::json("catalog.json", OUTPATIENT_JSON)]
fn test_from_path(#[case] filename: &str, #[case] content: &str) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(filename);
    fs::write(&path, content).unwrap();

    let catalog = SectionCatalog::from_path(&path).unwrap();
    assert!(catalog.contains_section("方針"));
}

#[test]
fn test_from_path_rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(&path, "sections = []").unwrap();

    assert!(matches!(
        SectionCatalog::from_path(&path),
        Err(SummaryError::UnsupportedConfigFormat { .. })
    ));
}

#[test]
fn test_from_path_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = SectionCatalog::from_path(&dir.path().join("missing.yaml"));
    assert!(matches!(result, Err(SummaryError::IoError { .. })));
}

#[rstest]
#[case::malformed_yaml("sections: [所見", "YAML")]
#[case::missing_sections("aliases: {}", "YAML")]
fn test_yaml_errors(#[case] yaml: &str, #[case] expected: &str) {
    let err = SectionCatalog::from_yaml_str(yaml).unwrap_err();
    assert!(matches!(err, SummaryError::YamlError(_)));
    assert!(err.to_string().contains(expected));
}

#[test]
fn test_json_error() {
    let err = SectionCatalog::from_json_str("{\"sections\": 3}").unwrap_err();
    assert!(matches!(err, SummaryError::JsonError(_)));
}

#[test]
fn test_validation_errors_surface_from_config() {
    let err = SectionCatalog::from_yaml_str("sections: []").unwrap_err();
    assert!(matches!(err, SummaryError::EmptyCatalog));

    let err = SectionCatalog::from_yaml_str("sections: [\"所見：\"]").unwrap_err();
    assert_eq!(err.to_string(), "Invalid section name: \"所見：\"");
}

#[test]
fn test_default_config_matches_default_catalog() {
    let catalog = SectionCatalog::from_config(CatalogConfig::default()).unwrap();
    assert_eq!(
        catalog.section_names(),
        SectionCatalog::default_catalog().section_names()
    );

    let yaml = serde_yaml::to_string(&CatalogConfig::default()).unwrap();
    let reloaded = SectionCatalog::from_yaml_str(&yaml).unwrap();
    assert_eq!(reloaded.to_config(), CatalogConfig::default());
}

#[test]
#[traced_test]
fn test_inert_alias_is_logged() {
    let catalog = SectionCatalog::new(["備考"], [("治療内容", "治療経過")]).unwrap();
    assert_eq!(catalog.canonical_section("治療内容"), None);
    assert!(logs_contain("Alias targets a section outside the catalog"));
}
