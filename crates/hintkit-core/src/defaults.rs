//! Centralized default constants for hintkit.
//!
//! Reserved preference keys, hints-file naming, environment variable names
//! and display-width points live here so the loader, merger and resolver
//! agree on them.

// =============================================================================
// RESERVED CUSTOM PREFERENCE KEYS
// =============================================================================

/// Custom preference key naming the kind of item being presented.
pub const ITEM_TYPE_KEY: &str = "itemType";

/// Custom preference key naming the interaction style of each item.
pub const INTERACTION_STYLE_KEY: &str = "interactionStyle";

/// `itemType` value for feature-card collections.
pub const ITEM_TYPE_FEATURE_CARDS: &str = "featureCards";

/// `interactionStyle` value for cards that expand in place.
pub const INTERACTION_EXPANDABLE: &str = "expandable";

// =============================================================================
// HINTS FILES
// =============================================================================

/// Default directory searched for `<Model>.hints` files.
pub const HINTS_DIR: &str = "Hints";

/// Extension of JSON hints files.
pub const HINTS_EXTENSION: &str = "hints";

/// Extensions accepted for YAML hints files, appended after `.hints`.
pub const HINTS_YAML_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Top-level keys with this prefix are file metadata, not fields.
pub const METADATA_KEY_PREFIX: &str = "_";

// =============================================================================
// DISPLAY WIDTH (points)
// =============================================================================

/// Width of a `narrow` field.
pub const WIDTH_NARROW_POINTS: f64 = 150.0;

/// Width of a `medium` field.
pub const WIDTH_MEDIUM_POINTS: f64 = 200.0;

/// Width of a `wide` field.
pub const WIDTH_WIDE_POINTS: f64 = 400.0;

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Path list of directories searched for hints files.
pub const ENV_HINTS_PATH: &str = "HINTKIT_HINTS_PATH";

/// Enables or disables the field-hints cache.
pub const ENV_CACHE_ENABLED: &str = "HINTKIT_CACHE_ENABLED";

/// Path of a YAML configuration file.
pub const ENV_CONFIG: &str = "HINTKIT_CONFIG";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_points_increase() {
        assert!(WIDTH_NARROW_POINTS < WIDTH_MEDIUM_POINTS);
        assert!(WIDTH_MEDIUM_POINTS < WIDTH_WIDE_POINTS);
    }

    #[test]
    fn test_reserved_keys_are_distinct() {
        assert_ne!(ITEM_TYPE_KEY, INTERACTION_STYLE_KEY);
        assert!(!ITEM_TYPE_KEY.starts_with(METADATA_KEY_PREFIX));
    }
}
