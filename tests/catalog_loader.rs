mod common;

use style_wizard::catalog::{Catalog, CatalogError};
use style_wizard::intent::{CitationClass, StyleIntent};
use style_wizard::wizard::decide;

#[test]
fn catalog_path_ends_with_expected() {
    let path = Catalog::catalog_path();
    assert!(path.ends_with("style-wizard/catalog.toml"));
}

#[test]
fn partial_file_keeps_default_lists() {
    let (_dir, path) = common::temp_catalog(&format!(
        r#"
[[archetypes]]
id = "mla"
label = "MLA 9th edition"
class = "author-date"
{}
[[archetypes]]
id = "bluebook"
label = "Bluebook"
class = "note"
"#,
        common::NUMERIC_AND_ENDNOTE_ARCHETYPES
    ));

    let catalog = Catalog::load_from(&path).unwrap();

    assert_eq!(catalog.archetypes.len(), 4);
    assert_eq!(
        catalog.archetype("bluebook").map(|a| a.class),
        Some(CitationClass::Footnote)
    );
    assert_eq!(catalog.fields, Catalog::default().fields);
    assert_eq!(catalog.citation_presets, Catalog::default().citation_presets);
}

#[test]
fn loaded_catalog_drives_choices() {
    let (_dir, path) = common::temp_catalog(&format!(
        r#"
[[archetypes]]
id = "mla"
label = "MLA 9th edition"
class = "author-date"
{}
[[archetypes]]
id = "bluebook"
label = "Bluebook"
class = "footnote"
"#,
        common::NUMERIC_AND_ENDNOTE_ARCHETYPES
    ));
    let catalog = Catalog::load_from(&path).unwrap();
    let intent = StyleIntent {
        field: Some("humanities".into()),
        class: Some(CitationClass::AuthorDate),
        ..Default::default()
    };

    let question = decide(&intent, &catalog).question.unwrap();

    assert_eq!(question.choices.len(), 1);
    assert_eq!(question.choices[0].label, "MLA 9th edition");
}

#[test]
fn catalog_missing_a_class_fails_validation() {
    let (_dir, path) = common::temp_catalog(
        r#"
[[archetypes]]
id = "apa-7"
label = "APA 7th edition"
class = "author-date"

[[archetypes]]
id = "harvard"
label = "Harvard"
class = "author-date"
"#,
    );

    let err = Catalog::load_from(&path).unwrap_err();

    assert!(matches!(err, CatalogError::ValidationError { .. }));
    assert!(err.to_string().contains("numeric"), "{err}");
}

#[test]
fn class_without_bibliography_preset_fails_validation() {
    let (_dir, path) = common::temp_catalog(
        r#"
[[bibliography_presets]]
id = "numbered-list"
label = "Numbered list"
classes = ["numeric"]
"#,
    );
    assert!(matches!(
        Catalog::load_from(&path),
        Err(CatalogError::ValidationError { .. })
    ));
}

#[test]
fn invalid_toml_is_parse_error() {
    let (_dir, path) = common::temp_catalog("archetypes = [");
    assert!(matches!(
        Catalog::load_from(&path),
        Err(CatalogError::ParseError { .. })
    ));
}

#[test]
fn unknown_class_is_parse_error() {
    let (_dir, path) = common::temp_catalog(
        r#"
[[archetypes]]
id = "odd"
label = "Odd"
class = "marginalia"
"#,
    );
    assert!(matches!(
        Catalog::load_from(&path),
        Err(CatalogError::ParseError { .. })
    ));
}

#[test]
fn duplicate_ids_fail_validation() {
    let (_dir, path) = common::temp_catalog(
        r#"
[[author_formats]]
id = "family-given"
label = "Smith, John"

[[author_formats]]
id = "family-given"
label = "SMITH, John"
"#,
    );
    assert!(matches!(
        Catalog::load_from(&path),
        Err(CatalogError::ValidationError { .. })
    ));
}

#[test]
fn missing_file_is_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(
        Catalog::load_from(&path),
        Err(CatalogError::ReadError { .. })
    ));
}
