//! Per-field display metadata.
//!
//! Field hints come from two layers: a file-backed set scoped to a model
//! (`User.hints`) and an explicit set supplied by the caller. Both share this
//! shape; the merger decides which one wins for each field id.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::defaults::{WIDTH_MEDIUM_POINTS, WIDTH_NARROW_POINTS, WIDTH_WIDE_POINTS};
use crate::error::{Error, Result};

/// Field id → display hint.
pub type FieldHints = HashMap<String, FieldDisplayHint>;

// =============================================================================
// DISPLAY WIDTH
// =============================================================================

/// Width class of a field.
///
/// Serialized as `"narrow"`, `"medium"`, `"wide"` or a number of points.
/// Numeric strings (`"120"`) are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DisplayWidthRepr", into = "DisplayWidthRepr")]
pub enum DisplayWidth {
    Narrow,
    Medium,
    Wide,
    Points(f64),
}

impl DisplayWidth {
    /// Width in points.
    pub fn points(&self) -> f64 {
        match self {
            Self::Narrow => WIDTH_NARROW_POINTS,
            Self::Medium => WIDTH_MEDIUM_POINTS,
            Self::Wide => WIDTH_WIDE_POINTS,
            Self::Points(p) => *p,
        }
    }
}

impl std::str::FromStr for DisplayWidth {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "narrow" => Ok(Self::Narrow),
            "medium" => Ok(Self::Medium),
            "wide" => Ok(Self::Wide),
            other => other
                .parse::<f64>()
                .ok()
                .filter(|p| p.is_finite() && *p > 0.0)
                .map(Self::Points)
                .ok_or_else(|| format!("Invalid display width: {}", s)),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum DisplayWidthRepr {
    Points(f64),
    Named(String),
}

impl TryFrom<DisplayWidthRepr> for DisplayWidth {
    type Error = String;
    fn try_from(repr: DisplayWidthRepr) -> std::result::Result<Self, Self::Error> {
        match repr {
            DisplayWidthRepr::Points(p) if p.is_finite() && p > 0.0 => Ok(Self::Points(p)),
            DisplayWidthRepr::Points(p) => Err(format!("Invalid display width: {}", p)),
            DisplayWidthRepr::Named(s) => s.parse(),
        }
    }
}

impl From<DisplayWidth> for DisplayWidthRepr {
    fn from(width: DisplayWidth) -> Self {
        match width {
            DisplayWidth::Narrow => Self::Named("narrow".to_string()),
            DisplayWidth::Medium => Self::Named("medium".to_string()),
            DisplayWidth::Wide => Self::Named("wide".to_string()),
            DisplayWidth::Points(p) => Self::Points(p),
        }
    }
}

// =============================================================================
// FIELD DISPLAY HINT
// =============================================================================

fn default_editable() -> bool {
    true
}

fn is_true(b: &bool) -> bool {
    *b
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Display metadata for one field of a model.
///
/// Keys are camelCase on the wire; snake_case aliases are accepted so files
/// written by hand in either style load the same.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDisplayHint {
    /// Typical content length, used to size the field.
    #[serde(default, alias = "expected_length", skip_serializing_if = "Option::is_none")]
    pub expected_length: Option<u32>,

    #[serde(default, alias = "display_width", skip_serializing_if = "Option::is_none")]
    pub display_width: Option<DisplayWidth>,

    #[serde(default, alias = "show_character_counter", skip_serializing_if = "is_false")]
    pub show_character_counter: bool,

    #[serde(default, alias = "max_length", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    #[serde(default, alias = "min_length", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,

    /// Widget kind requested by the model (`"email"`, `"picker"`, ...).
    #[serde(default, alias = "input_type", skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,

    #[serde(default, alias = "is_hidden", skip_serializing_if = "is_false")]
    pub is_hidden: bool,

    #[serde(default = "default_editable", alias = "is_editable", skip_serializing_if = "is_true")]
    pub is_editable: bool,

    /// Opaque key/value pairs forwarded to the view layer.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
}

impl Default for FieldDisplayHint {
    fn default() -> Self {
        Self {
            expected_length: None,
            display_width: None,
            show_character_counter: false,
            max_length: None,
            min_length: None,
            input_type: None,
            is_hidden: false,
            is_editable: true,
            metadata: HashMap::new(),
        }
    }
}

impl FieldDisplayHint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expected_length(mut self, length: u32) -> Self {
        self.expected_length = Some(length);
        self
    }

    pub fn with_display_width(mut self, width: DisplayWidth) -> Self {
        self.display_width = Some(width);
        self
    }

    pub fn with_character_counter(mut self) -> Self {
        self.show_character_counter = true;
        self
    }

    pub fn with_max_length(mut self, length: u32) -> Self {
        self.max_length = Some(length);
        self
    }

    pub fn with_min_length(mut self, length: u32) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn with_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.is_hidden = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.is_editable = false;
        self
    }

    /// Width in points, if a width class was given.
    pub fn width_points(&self) -> Option<f64> {
        self.display_width.map(|w| w.points())
    }

    /// Check that the length bounds are consistent.
    pub fn validate(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(Error::InvalidInput(format!(
                    "minLength {} exceeds maxLength {}",
                    min, max
                )));
            }
        }
        Ok(())
    }
}
