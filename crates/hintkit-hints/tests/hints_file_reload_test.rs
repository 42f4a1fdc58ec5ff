/// End-to-end tests for hints files on disk: discovery, caching, and merging.
///
/// These cover the behaviors that only show up with a real filesystem:
/// - A model whose hints file is added after a failed lookup is picked up
///   without rebuilding the cache
/// - Earlier search directories shadow later ones
/// - Explicit field hints override file hints field by field
use std::fs;

use hintkit_hints::{
    merge_for_model, Complexity, ContentType, DisplayWidth, EnhancedHints, ExtensibleHint,
    FieldDisplayHint, FieldHintsCache, FileHintsLoader, HintsConfig, PresentationContext,
    PresentationPreference,
};
use tempfile::TempDir;

#[test]
fn test_hints_file_added_after_empty_lookup_is_picked_up() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut cache = FieldHintsCache::new(FileHintsLoader::new([dir.path()]));

    assert!(
        cache.get_field_hints("Foo").is_empty(),
        "No hints file yet, lookup should be empty"
    );
    assert!(!cache.contains("Foo"), "Empty lookups must not be cached");

    fs::write(
        dir.path().join("Foo.hints"),
        r#"{ "bar": { "maxLength": 5, "displayWidth": "narrow" } }"#,
    )
    .expect("Failed to write hints file");

    let hints = cache.get_field_hints("Foo");
    assert_eq!(hints.len(), 1);
    assert_eq!(hints["bar"].max_length, Some(5));
    assert_eq!(hints["bar"].display_width, Some(DisplayWidth::Narrow));
    assert!(cache.contains("Foo"));
}

#[test]
fn test_earlier_search_path_wins() {
    let app = TempDir::new().expect("Failed to create temp dir");
    let shared = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        app.path().join("User.hints"),
        r#"{ "name": { "expectedLength": 12 } }"#,
    )
    .unwrap();
    fs::write(
        shared.path().join("User.hints.yaml"),
        "name:\n  expectedLength: 40\nemail:\n  displayWidth: wide\n",
    )
    .unwrap();

    let config = HintsConfig {
        search_paths: vec![app.path().to_path_buf(), shared.path().to_path_buf()],
        cache_enabled: true,
    };
    let mut cache = config.build_cache();
    let hints = cache.get_field_hints("User");

    assert_eq!(hints.len(), 1, "Only the first file found is used");
    assert_eq!(hints["name"].expected_length, Some(12));
}

#[test]
fn test_yaml_hints_file_skips_metadata_and_bad_fields() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("Order.hints.yml"),
        "_sections:\n  - title: Items\nqty:\n  maxLength: 3\nbroken:\n  minLength: 10\n  maxLength: 2\nnote:\n  isHidden: true\n",
    )
    .unwrap();

    let loader = FileHintsLoader::new([dir.path()]);
    let hints = loader.try_load("Order").expect("Failed to load hints");

    assert_eq!(hints.len(), 2);
    assert!(hints.contains_key("qty"));
    assert!(hints["note"].is_hidden);
    assert!(!hints.contains_key("broken"));
    assert!(!hints.contains_key("_sections"));
}

#[test]
fn test_malformed_file_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Bad.hints"), "{ not json").unwrap();

    let loader = FileHintsLoader::new([dir.path()]);
    assert!(loader.try_load("Bad").is_err());

    let mut cache = FieldHintsCache::new(loader);
    assert!(cache.get_field_hints("Bad").is_empty());
    assert!(!cache.contains("Bad"));
}

#[test]
fn test_merge_for_model_with_file_and_explicit_hints() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("Product.hints"),
        r#"{
            "title": { "expectedLength": 30, "displayWidth": "medium" },
            "summary": { "displayWidth": 320, "showCharacterCounter": true }
        }"#,
    )
    .unwrap();

    let mut cache = FieldHintsCache::new(FileHintsLoader::new([dir.path()]));
    let enhanced = EnhancedHints::new(
        ContentType::Product,
        PresentationPreference::Grid,
        Complexity::Moderate,
        PresentationContext::Browse,
    )
    .with_field_hint(
        "title",
        FieldDisplayHint::new()
            .with_expected_length(60)
            .with_display_width(DisplayWidth::Wide),
    )
    .with_extensible_hint(ExtensibleHint::new("badge", 2).with_data("badgeColor", "red"))
    .with_extensible_hint(ExtensibleHint::new("theme", 7).with_data("badgeColor", "gold"));

    let resolved = merge_for_model(&mut cache, "Product", &enhanced);

    let title = resolved.field_hint("title").expect("title hint");
    assert_eq!(title.expected_length, Some(60));
    assert_eq!(title.width_points(), Some(400.0));

    let summary = resolved.field_hint("summary").expect("summary hint");
    assert_eq!(summary.width_points(), Some(320.0));
    assert!(summary.show_character_counter);

    assert_eq!(resolved.custom_preference("badgeColor"), Some("gold"));
    assert_eq!(resolved.preference(), PresentationPreference::Grid);
}
