//! Hint records: what is being presented and how the caller wants it biased.
//!
//! [`PresentationHints`] is the flattened record the resolver consumes.
//! [`EnhancedHints`] additionally carries prioritized [`ExtensibleHint`]s and
//! explicit field hints; the merger in `hintkit-hints` folds it into a
//! `PresentationHints`.
//!
//! Both records are immutable once built: fields are private and every
//! builder method consumes `self`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::trace;

use crate::defaults::{INTERACTION_STYLE_KEY, ITEM_TYPE_KEY};
use crate::field_hint::{FieldDisplayHint, FieldHints};
use crate::models::{Complexity, ContentType, PresentationContext, PresentationPreference};

/// Custom preference key → value. Order carries no meaning.
pub type CustomPreferences = HashMap<String, String>;

// =============================================================================
// CUSTOM VALUE
// =============================================================================

/// Scalar carried in [`ExtensibleHint::custom_data`].
///
/// `Display` is the stringification used when the value is merged into
/// [`CustomPreferences`]:
///
/// | Variant | Text |
/// |---------|------|
/// | `Text` | unchanged |
/// | `Bool` | `true` / `false` |
/// | `Int` | decimal digits |
/// | `Double` | shortest round-trip decimal, always with a fraction (`2.0`, `0.25`) |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "JsonValue", into = "JsonValue")]
pub enum CustomValue {
    Text(String),
    Bool(bool),
    Int(i64),
    Double(f64),
}

impl CustomValue {
    /// Convert an untyped value.
    ///
    /// Non-scalars (arrays, objects, null) and integers outside `i64` degrade
    /// to [`CustomValue::Text`] holding their compact JSON rendering.
    pub fn from_json(value: JsonValue) -> Self {
        match value {
            JsonValue::String(s) => Self::Text(s),
            JsonValue::Bool(b) => Self::Bool(b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if n.is_f64() {
                    n.as_f64().map(Self::Double).unwrap_or_else(|| Self::Text(n.to_string()))
                } else {
                    Self::Text(n.to_string())
                }
            }
            other => {
                trace!(kind = json_kind(&other), "Non-scalar custom value stored as text");
                Self::Text(other.to_string())
            }
        }
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

impl std::fmt::Display for CustomValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            // Debug keeps the fractional part and round-trips exactly.
            Self::Double(d) => write!(f, "{:?}", d),
        }
    }
}

impl From<JsonValue> for CustomValue {
    fn from(value: JsonValue) -> Self {
        Self::from_json(value)
    }
}

impl From<CustomValue> for JsonValue {
    fn from(value: CustomValue) -> Self {
        match value {
            CustomValue::Text(s) => JsonValue::String(s),
            CustomValue::Bool(b) => JsonValue::Bool(b),
            CustomValue::Int(i) => JsonValue::from(i),
            CustomValue::Double(d) => serde_json::Number::from_f64(d)
                .map(JsonValue::Number)
                .unwrap_or_else(|| JsonValue::String(format!("{:?}", d))),
        }
    }
}

impl From<&str> for CustomValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CustomValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for CustomValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for CustomValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<i64> for CustomValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for CustomValue {
    fn from(d: f64) -> Self {
        Self::Double(d)
    }
}

// =============================================================================
// EXTENSIBLE HINT
// =============================================================================

/// Add-on hint data with a priority, layered on top of a base record.
///
/// On a key collision during merge, the hint with the higher `priority` wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensibleHint {
    /// Free-form kind label, e.g. `"featureCards"` or `"ecommerce"`.
    pub kind: String,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub overrides_default: bool,
    #[serde(default)]
    pub custom_data: HashMap<String, CustomValue>,
}

impl ExtensibleHint {
    pub fn new(kind: impl Into<String>, priority: i32) -> Self {
        Self {
            kind: kind.into(),
            priority,
            overrides_default: false,
            custom_data: HashMap::new(),
        }
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<CustomValue>) -> Self {
        self.custom_data.insert(key.into(), value.into());
        self
    }

    pub fn overriding_default(mut self) -> Self {
        self.overrides_default = true;
        self
    }
}

// =============================================================================
// PRESENTATION HINTS
// =============================================================================

/// Resolved hint record consumed by the strategy resolver.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationHints {
    #[serde(default)]
    content_type: ContentType,
    #[serde(default)]
    preference: PresentationPreference,
    #[serde(default)]
    complexity: Complexity,
    #[serde(default)]
    context: PresentationContext,
    #[serde(default)]
    custom_preferences: CustomPreferences,
    #[serde(default)]
    field_hints: FieldHints,
}

impl PresentationHints {
    pub fn new(
        content_type: ContentType,
        preference: PresentationPreference,
        complexity: Complexity,
        context: PresentationContext,
    ) -> Self {
        Self {
            content_type,
            preference,
            complexity,
            context,
            custom_preferences: CustomPreferences::new(),
            field_hints: FieldHints::new(),
        }
    }

    pub fn with_custom_preference(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_preferences.insert(key.into(), value.into());
        self
    }

    /// Replace all custom preferences.
    pub fn with_custom_preferences(mut self, preferences: CustomPreferences) -> Self {
        self.custom_preferences = preferences;
        self
    }

    pub fn with_field_hint(mut self, field_id: impl Into<String>, hint: FieldDisplayHint) -> Self {
        self.field_hints.insert(field_id.into(), hint);
        self
    }

    /// Replace all field hints.
    pub fn with_field_hints(mut self, field_hints: FieldHints) -> Self {
        self.field_hints = field_hints;
        self
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn preference(&self) -> PresentationPreference {
        self.preference
    }

    pub fn complexity(&self) -> Complexity {
        self.complexity
    }

    pub fn context(&self) -> PresentationContext {
        self.context
    }

    pub fn custom_preferences(&self) -> &CustomPreferences {
        &self.custom_preferences
    }

    pub fn custom_preference(&self, key: &str) -> Option<&str> {
        self.custom_preferences.get(key).map(String::as_str)
    }

    pub fn field_hints(&self) -> &FieldHints {
        &self.field_hints
    }

    pub fn field_hint(&self, field_id: &str) -> Option<&FieldDisplayHint> {
        self.field_hints.get(field_id)
    }

    /// Value of the reserved `itemType` preference.
    pub fn item_type(&self) -> Option<&str> {
        self.custom_preference(ITEM_TYPE_KEY)
    }

    /// Value of the reserved `interactionStyle` preference.
    pub fn interaction_style(&self) -> Option<&str> {
        self.custom_preference(INTERACTION_STYLE_KEY)
    }
}

// =============================================================================
// ENHANCED HINTS
// =============================================================================

/// Hint record with extensible hints and explicit field hints attached.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedHints {
    #[serde(default)]
    content_type: ContentType,
    #[serde(default)]
    preference: PresentationPreference,
    #[serde(default)]
    complexity: Complexity,
    #[serde(default)]
    context: PresentationContext,
    #[serde(default)]
    custom_preferences: CustomPreferences,
    #[serde(default)]
    field_hints: FieldHints,
    #[serde(default)]
    extensible_hints: Vec<ExtensibleHint>,
}

impl EnhancedHints {
    pub fn new(
        content_type: ContentType,
        preference: PresentationPreference,
        complexity: Complexity,
        context: PresentationContext,
    ) -> Self {
        Self {
            content_type,
            preference,
            complexity,
            context,
            ..Default::default()
        }
    }

    pub fn with_custom_preference(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_preferences.insert(key.into(), value.into());
        self
    }

    pub fn with_custom_preferences(mut self, preferences: CustomPreferences) -> Self {
        self.custom_preferences = preferences;
        self
    }

    pub fn with_field_hint(mut self, field_id: impl Into<String>, hint: FieldDisplayHint) -> Self {
        self.field_hints.insert(field_id.into(), hint);
        self
    }

    pub fn with_field_hints(mut self, field_hints: FieldHints) -> Self {
        self.field_hints = field_hints;
        self
    }

    pub fn with_extensible_hint(mut self, hint: ExtensibleHint) -> Self {
        self.extensible_hints.push(hint);
        self
    }

    pub fn with_extensible_hints(mut self, hints: impl IntoIterator<Item = ExtensibleHint>) -> Self {
        self.extensible_hints.extend(hints);
        self
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn preference(&self) -> PresentationPreference {
        self.preference
    }

    pub fn complexity(&self) -> Complexity {
        self.complexity
    }

    pub fn context(&self) -> PresentationContext {
        self.context
    }

    pub fn custom_preferences(&self) -> &CustomPreferences {
        &self.custom_preferences
    }

    pub fn field_hints(&self) -> &FieldHints {
        &self.field_hints
    }

    pub fn extensible_hints(&self) -> &[ExtensibleHint] {
        &self.extensible_hints
    }

    /// The record without extensible or field hints attached.
    pub fn core_hints(&self) -> PresentationHints {
        PresentationHints::new(self.content_type, self.preference, self.complexity, self.context)
            .with_custom_preferences(self.custom_preferences.clone())
    }
}

impl From<PresentationHints> for EnhancedHints {
    fn from(hints: PresentationHints) -> Self {
        Self {
            content_type: hints.content_type,
            preference: hints.preference,
            complexity: hints.complexity,
            context: hints.context,
            custom_preferences: hints.custom_preferences,
            field_hints: hints.field_hints,
            extensible_hints: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // =========================================================================
    // CustomValue Tests
    // =========================================================================

    #[test]
    fn test_custom_value_display() {
        assert_eq!(CustomValue::from("abc").to_string(), "abc");
        assert_eq!(CustomValue::from(true).to_string(), "true");
        assert_eq!(CustomValue::from(false).to_string(), "false");
        assert_eq!(CustomValue::from(42).to_string(), "42");
        assert_eq!(CustomValue::from(-7i64).to_string(), "-7");
        assert_eq!(CustomValue::from(2.0).to_string(), "2.0");
        assert_eq!(CustomValue::from(0.25).to_string(), "0.25");
    }

    #[test]
    fn test_custom_value_double_text_is_lossless() {
        for d in [0.1, 1.0 / 3.0, 123456.789, 1e-7, 6.02e23] {
            let text = CustomValue::Double(d).to_string();
            assert_eq!(text.parse::<f64>().unwrap(), d, "{} did not round-trip", text);
        }
    }

    #[test]
    fn test_custom_value_from_json_scalars() {
        assert_eq!(CustomValue::from_json(json!("x")), CustomValue::Text("x".into()));
        assert_eq!(CustomValue::from_json(json!(true)), CustomValue::Bool(true));
        assert_eq!(CustomValue::from_json(json!(5)), CustomValue::Int(5));
        assert_eq!(CustomValue::from_json(json!(1.5)), CustomValue::Double(1.5));
    }

    #[test]
    fn test_custom_value_from_json_non_scalar_degrades_to_text() {
        assert_eq!(
            CustomValue::from_json(json!([1, 2])),
            CustomValue::Text("[1,2]".into())
        );
        assert_eq!(
            CustomValue::from_json(json!({"a": 1})),
            CustomValue::Text("{\"a\":1}".into())
        );
        assert_eq!(CustomValue::from_json(JsonValue::Null), CustomValue::Text("null".into()));
    }

    #[test]
    fn test_custom_value_from_json_large_unsigned_keeps_digits() {
        let value = CustomValue::from_json(json!(u64::MAX));
        assert_eq!(value, CustomValue::Text(u64::MAX.to_string()));
    }

    #[test]
    fn test_custom_value_serde() {
        let data: HashMap<String, CustomValue> =
            serde_json::from_str(r#"{"a": "s", "b": false, "c": 3, "d": 0.5}"#).unwrap();
        assert_eq!(data["a"], CustomValue::Text("s".into()));
        assert_eq!(data["b"], CustomValue::Bool(false));
        assert_eq!(data["c"], CustomValue::Int(3));
        assert_eq!(data["d"], CustomValue::Double(0.5));

        assert_eq!(serde_json::to_string(&CustomValue::Int(3)).unwrap(), "3");
    }

    // =========================================================================
    // ExtensibleHint Tests
    // =========================================================================

    #[test]
    fn test_extensible_hint_builder() {
        let hint = ExtensibleHint::new("featureCards", 10)
            .with_data("itemType", "featureCards")
            .with_data("columns", 3)
            .overriding_default();
        assert_eq!(hint.kind, "featureCards");
        assert_eq!(hint.priority, 10);
        assert!(hint.overrides_default);
        assert_eq!(hint.custom_data["columns"], CustomValue::Int(3));
    }

    #[test]
    fn test_extensible_hint_deserialize_defaults() {
        let hint: ExtensibleHint = serde_json::from_str(r#"{"kind": "plain"}"#).unwrap();
        assert_eq!(hint.priority, 0);
        assert!(!hint.overrides_default);
        assert!(hint.custom_data.is_empty());
    }

    // =========================================================================
    // PresentationHints Tests
    // =========================================================================

    #[test]
    fn test_presentation_hints_default() {
        let hints = PresentationHints::default();
        assert_eq!(hints.content_type(), ContentType::Generic);
        assert_eq!(hints.preference(), PresentationPreference::Automatic);
        assert_eq!(hints.complexity(), Complexity::Moderate);
        assert_eq!(hints.context(), PresentationContext::Dashboard);
        assert!(hints.custom_preferences().is_empty());
        assert!(hints.field_hints().is_empty());
    }

    #[test]
    fn test_reserved_preference_accessors() {
        let hints = PresentationHints::default()
            .with_custom_preference("itemType", "featureCards")
            .with_custom_preference("interactionStyle", "expandable");
        assert_eq!(hints.item_type(), Some("featureCards"));
        assert_eq!(hints.interaction_style(), Some("expandable"));
    }

    #[test]
    fn test_presentation_hints_deserialize_partial() {
        let hints: PresentationHints = serde_json::from_str(
            r#"{"contentType": "media", "customPreferences": {"theme": "dark"}}"#,
        )
        .unwrap();
        assert_eq!(hints.content_type(), ContentType::Media);
        assert_eq!(hints.preference(), PresentationPreference::Automatic);
        assert_eq!(hints.custom_preference("theme"), Some("dark"));
    }

    // =========================================================================
    // EnhancedHints Tests
    // =========================================================================

    #[test]
    fn test_enhanced_core_hints_drops_extras() {
        let enhanced = EnhancedHints::new(
            ContentType::Product,
            PresentationPreference::Grid,
            Complexity::Complex,
            PresentationContext::Browse,
        )
        .with_custom_preference("k", "v")
        .with_field_hint("sku", FieldDisplayHint::new())
        .with_extensible_hint(ExtensibleHint::new("x", 1));

        let core = enhanced.core_hints();
        assert_eq!(core.content_type(), ContentType::Product);
        assert_eq!(core.preference(), PresentationPreference::Grid);
        assert_eq!(core.custom_preference("k"), Some("v"));
        assert!(core.field_hints().is_empty());
    }

    #[test]
    fn test_enhanced_from_presentation_hints() {
        let base = PresentationHints::default()
            .with_field_hint("name", FieldDisplayHint::new().with_expected_length(30));
        let enhanced = EnhancedHints::from(base);
        assert!(enhanced.extensible_hints().is_empty());
        assert_eq!(
            enhanced.field_hints()["name"].expected_length,
            Some(30)
        );
    }
}
