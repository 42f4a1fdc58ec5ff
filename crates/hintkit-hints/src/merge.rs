//! Extensible-hint merging.
//!
//! Folds an [`EnhancedHints`] record into a resolved [`PresentationHints`]:
//!
//! 1. Custom preferences: the base map plus every extensible hint's
//!    `custom_data`, stringified. On a key collision the higher-priority hint
//!    wins. Hints are applied in ascending priority so the last write is the
//!    highest-priority one; among equal priorities the later hint in the list
//!    wins.
//! 2. Field hints: the base (file-sourced) map, overwritten field by field by
//!    the explicit hints.
//! 3. Core tags (content type, preference, complexity, context) come from the
//!    enhanced record.
//!
//! All functions are pure apart from the cache lookup in
//! [`merge_for_model`] and [`hints_for_model`].

use tracing::{debug, trace};

use hintkit_core::{
    CustomPreferences, EnhancedHints, ExtensibleHint, FieldHints, FieldHintsLoader,
    PresentationHints,
};

use crate::cache::FieldHintsCache;

/// Merge `enhanced` on top of `base`. Inputs are not modified.
pub fn merge(base: &PresentationHints, enhanced: &EnhancedHints) -> PresentationHints {
    let custom_preferences =
        merge_custom_preferences(base.custom_preferences(), enhanced.extensible_hints());
    let field_hints = merge_field_hints(base.field_hints(), enhanced.field_hints());

    debug!(
        hint_count = enhanced.extensible_hints().len(),
        field_count = field_hints.len(),
        "Merged presentation hints"
    );

    PresentationHints::new(
        enhanced.content_type(),
        enhanced.preference(),
        enhanced.complexity(),
        enhanced.context(),
    )
    .with_custom_preferences(custom_preferences)
    .with_field_hints(field_hints)
}

/// Apply extensible hints' custom data over `base`, higher priority winning.
pub fn merge_custom_preferences(
    base: &CustomPreferences,
    hints: &[ExtensibleHint],
) -> CustomPreferences {
    let mut ordered: Vec<&ExtensibleHint> = hints.iter().collect();
    // Stable: equal priorities keep list order, so the later one writes last.
    ordered.sort_by_key(|hint| hint.priority);

    let mut merged = base.clone();
    for hint in ordered {
        for (key, value) in &hint.custom_data {
            trace!(
                hint_kind = %hint.kind,
                priority = hint.priority,
                key = %key,
                "Applying custom preference"
            );
            merged.insert(key.clone(), value.to_string());
        }
    }
    merged
}

/// Overlay explicit field hints on file-sourced ones, field by field.
pub fn merge_field_hints(file_hints: &FieldHints, explicit: &FieldHints) -> FieldHints {
    let mut merged = file_hints.clone();
    for (field_id, hint) in explicit {
        if merged.contains_key(field_id) {
            trace!(field_id = %field_id, "Explicit field hint overrides file hint");
        }
        merged.insert(field_id.clone(), hint.clone());
    }
    merged
}

/// Merge `enhanced` using `model_name`'s file-backed field hints as the base.
pub fn merge_for_model<L: FieldHintsLoader>(
    cache: &mut FieldHintsCache<L>,
    model_name: &str,
    enhanced: &EnhancedHints,
) -> PresentationHints {
    let file_hints = cache.get_field_hints(model_name).clone();
    let base = enhanced.core_hints().with_field_hints(file_hints);
    merge(&base, enhanced)
}

/// Attach `model_name`'s file-backed field hints to a plain hint record.
///
/// Field hints already on `hints` are explicit and win.
pub fn hints_for_model<L: FieldHintsLoader>(
    cache: &mut FieldHintsCache<L>,
    model_name: &str,
    hints: PresentationHints,
) -> PresentationHints {
    let field_hints = merge_field_hints(cache.get_field_hints(model_name), hints.field_hints());
    hints.with_field_hints(field_hints)
}
