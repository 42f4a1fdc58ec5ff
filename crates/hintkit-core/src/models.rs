//! Semantic tags carried by a hint record and the strategy tag the resolver
//! produces.
//!
//! All tags serialize in camelCase (`"coverFlow"`, `"externalIntegration"`)
//! and parse case-insensitively, ignoring `_`, `-` and whitespace, so
//! `"cover_flow"`, `"CoverFlow"` and `"cover-flow"` are the same value.

use serde::{Deserialize, Serialize};

/// Lowercases and strips separators so loose spellings compare equal.
fn normalize_token(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

// =============================================================================
// CONTENT TYPE
// =============================================================================

/// Semantic category of the data being presented.
///
/// Only [`ContentType::Media`] and [`ContentType::Navigation`] influence
/// strategy resolution; the rest drive iconography and messaging in the
/// view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ContentType {
    #[default]
    Generic,
    Text,
    Number,
    Date,
    Image,
    Boolean,
    Collection,
    Numeric,
    Hierarchical,
    Temporal,
    Media,
    Form,
    List,
    Grid,
    Chart,
    Custom,
    User,
    Transaction,
    Action,
    Product,
    Communication,
    Location,
    Navigation,
    Card,
    Detail,
    Modal,
    Sheet,
    Settings,
    Profile,
    Summary,
    ExternalIntegration,
}

impl ContentType {
    /// Every content type, in declaration order.
    pub const ALL: [ContentType; 31] = [
        Self::Generic,
        Self::Text,
        Self::Number,
        Self::Date,
        Self::Image,
        Self::Boolean,
        Self::Collection,
        Self::Numeric,
        Self::Hierarchical,
        Self::Temporal,
        Self::Media,
        Self::Form,
        Self::List,
        Self::Grid,
        Self::Chart,
        Self::Custom,
        Self::User,
        Self::Transaction,
        Self::Action,
        Self::Product,
        Self::Communication,
        Self::Location,
        Self::Navigation,
        Self::Card,
        Self::Detail,
        Self::Modal,
        Self::Sheet,
        Self::Settings,
        Self::Profile,
        Self::Summary,
        Self::ExternalIntegration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Image => "image",
            Self::Boolean => "boolean",
            Self::Collection => "collection",
            Self::Numeric => "numeric",
            Self::Hierarchical => "hierarchical",
            Self::Temporal => "temporal",
            Self::Media => "media",
            Self::Form => "form",
            Self::List => "list",
            Self::Grid => "grid",
            Self::Chart => "chart",
            Self::Custom => "custom",
            Self::User => "user",
            Self::Transaction => "transaction",
            Self::Action => "action",
            Self::Product => "product",
            Self::Communication => "communication",
            Self::Location => "location",
            Self::Navigation => "navigation",
            Self::Card => "card",
            Self::Detail => "detail",
            Self::Modal => "modal",
            Self::Sheet => "sheet",
            Self::Settings => "settings",
            Self::Profile => "profile",
            Self::Summary => "summary",
            Self::ExternalIntegration => "externalIntegration",
        }
    }

    /// Parse a content type, falling back to [`ContentType::Generic`].
    pub fn from_str_loose(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentType {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = normalize_token(s);
        Self::ALL
            .iter()
            .copied()
            .find(|v| normalize_token(v.as_str()) == wanted)
            .ok_or_else(|| format!("Invalid content type: {}", s))
    }
}

// =============================================================================
// PRESENTATION CONTEXT
// =============================================================================

/// Situation in which the data is shown. Informs messaging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum PresentationContext {
    #[default]
    Dashboard,
    Browse,
    Detail,
    Edit,
    Create,
    Search,
    Settings,
    Profile,
    Summary,
    List,
    Form,
    Modal,
    Navigation,
    Gallery,
    Standard,
}

impl PresentationContext {
    pub const ALL: [PresentationContext; 15] = [
        Self::Dashboard,
        Self::Browse,
        Self::Detail,
        Self::Edit,
        Self::Create,
        Self::Search,
        Self::Settings,
        Self::Profile,
        Self::Summary,
        Self::List,
        Self::Form,
        Self::Modal,
        Self::Navigation,
        Self::Gallery,
        Self::Standard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Browse => "browse",
            Self::Detail => "detail",
            Self::Edit => "edit",
            Self::Create => "create",
            Self::Search => "search",
            Self::Settings => "settings",
            Self::Profile => "profile",
            Self::Summary => "summary",
            Self::List => "list",
            Self::Form => "form",
            Self::Modal => "modal",
            Self::Navigation => "navigation",
            Self::Gallery => "gallery",
            Self::Standard => "standard",
        }
    }

    /// Parse a context, falling back to [`PresentationContext::Dashboard`].
    pub fn from_str_loose(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for PresentationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PresentationContext {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = normalize_token(s);
        Self::ALL
            .iter()
            .copied()
            .find(|v| normalize_token(v.as_str()) == wanted)
            .ok_or_else(|| format!("Invalid presentation context: {}", s))
    }
}

// =============================================================================
// COMPLEXITY
// =============================================================================

/// How much information the presentation carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Complexity {
    Simple,
    #[default]
    Moderate,
    Complex,
    VeryComplex,
    Advanced,
}

impl Complexity {
    pub const ALL: [Complexity; 5] = [
        Self::Simple,
        Self::Moderate,
        Self::Complex,
        Self::VeryComplex,
        Self::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
            Self::VeryComplex => "veryComplex",
            Self::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Complexity {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = normalize_token(s);
        Self::ALL
            .iter()
            .copied()
            .find(|v| normalize_token(v.as_str()) == wanted)
            .ok_or_else(|| format!("Invalid complexity: {}", s))
    }
}

// =============================================================================
// PRESENTATION PREFERENCE
// =============================================================================

/// The caller's explicit ask for a layout.
///
/// Used by the resolver's default rule. Values without a direct strategy
/// counterpart (`modal`, `chart`, `table`, ...) resolve to `adaptive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum PresentationPreference {
    #[default]
    Automatic,
    Minimal,
    Moderate,
    Rich,
    Custom,
    Detail,
    Modal,
    Navigation,
    List,
    Masonry,
    Standard,
    Cards,
    Compact,
    Grid,
    Chart,
    CoverFlow,
    Card,
    Table,
}

impl PresentationPreference {
    pub const ALL: [PresentationPreference; 18] = [
        Self::Automatic,
        Self::Minimal,
        Self::Moderate,
        Self::Rich,
        Self::Custom,
        Self::Detail,
        Self::Modal,
        Self::Navigation,
        Self::List,
        Self::Masonry,
        Self::Standard,
        Self::Cards,
        Self::Compact,
        Self::Grid,
        Self::Chart,
        Self::CoverFlow,
        Self::Card,
        Self::Table,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Automatic => "automatic",
            Self::Minimal => "minimal",
            Self::Moderate => "moderate",
            Self::Rich => "rich",
            Self::Custom => "custom",
            Self::Detail => "detail",
            Self::Modal => "modal",
            Self::Navigation => "navigation",
            Self::List => "list",
            Self::Masonry => "masonry",
            Self::Standard => "standard",
            Self::Cards => "cards",
            Self::Compact => "compact",
            Self::Grid => "grid",
            Self::Chart => "chart",
            Self::CoverFlow => "coverFlow",
            Self::Card => "card",
            Self::Table => "table",
        }
    }

    /// Parse a preference, falling back to [`PresentationPreference::Automatic`].
    pub fn from_str_loose(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for PresentationPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PresentationPreference {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = normalize_token(s);
        Self::ALL
            .iter()
            .copied()
            .find(|v| normalize_token(v.as_str()) == wanted)
            .ok_or_else(|| format!("Invalid presentation preference: {}", s))
    }
}

// =============================================================================
// STRATEGY TAG
// =============================================================================

/// Rendering strategy chosen by the resolver.
///
/// Consumers must match on all six variants. Adding a variant is a breaking
/// change for every view layer built on this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StrategyTag {
    ExpandableCards,
    CoverFlow,
    Grid,
    List,
    Masonry,
    Adaptive,
}

impl StrategyTag {
    pub const ALL: [StrategyTag; 6] = [
        Self::ExpandableCards,
        Self::CoverFlow,
        Self::Grid,
        Self::List,
        Self::Masonry,
        Self::Adaptive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExpandableCards => "expandableCards",
            Self::CoverFlow => "coverFlow",
            Self::Grid => "grid",
            Self::List => "list",
            Self::Masonry => "masonry",
            Self::Adaptive => "adaptive",
        }
    }
}

impl std::fmt::Display for StrategyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StrategyTag {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = normalize_token(s);
        Self::ALL
            .iter()
            .copied()
            .find(|v| normalize_token(v.as_str()) == wanted)
            .ok_or_else(|| format!("Invalid strategy: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // ContentType Tests
    // =========================================================================

    #[test]
    fn test_content_type_default_is_generic() {
        assert_eq!(ContentType::default(), ContentType::Generic);
    }

    #[test]
    fn test_content_type_display_matches_serde() {
        for ct in ContentType::ALL {
            let json = serde_json::to_string(&ct).unwrap();
            assert_eq!(json, format!("\"{}\"", ct));
        }
    }

    #[test]
    fn test_content_type_parse_loose_spellings() {
        assert_eq!(
            "external_integration".parse::<ContentType>().unwrap(),
            ContentType::ExternalIntegration
        );
        assert_eq!(
            "ExternalIntegration".parse::<ContentType>().unwrap(),
            ContentType::ExternalIntegration
        );
        assert_eq!("MEDIA".parse::<ContentType>().unwrap(), ContentType::Media);
    }

    #[test]
    fn test_content_type_parse_invalid() {
        let err = "hologram".parse::<ContentType>().unwrap_err();
        assert_eq!(err, "Invalid content type: hologram");
        assert_eq!(ContentType::from_str_loose("hologram"), ContentType::Generic);
    }

    #[test]
    fn test_content_type_all_is_unique() {
        let mut names: Vec<_> = ContentType::ALL.iter().map(|c| c.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ContentType::ALL.len());
    }

    // =========================================================================
    // Context / Complexity Tests
    // =========================================================================

    #[test]
    fn test_presentation_context_roundtrip_display() {
        for ctx in PresentationContext::ALL {
            assert_eq!(ctx.to_string().parse::<PresentationContext>().unwrap(), ctx);
        }
    }

    #[test]
    fn test_complexity_parse_very_complex() {
        assert_eq!(
            "very_complex".parse::<Complexity>().unwrap(),
            Complexity::VeryComplex
        );
        assert_eq!(
            serde_json::to_string(&Complexity::VeryComplex).unwrap(),
            "\"veryComplex\""
        );
    }

    #[test]
    fn test_complexity_ordering() {
        assert!(Complexity::Simple < Complexity::Moderate);
        assert!(Complexity::VeryComplex < Complexity::Advanced);
    }

    // =========================================================================
    // PresentationPreference Tests
    // =========================================================================

    #[test]
    fn test_preference_parse_cover_flow_variants() {
        for s in ["coverFlow", "cover_flow", "cover-flow", "COVERFLOW"] {
            assert_eq!(
                s.parse::<PresentationPreference>().unwrap(),
                PresentationPreference::CoverFlow,
                "{} should parse",
                s
            );
        }
    }

    #[test]
    fn test_preference_loose_fallback_is_automatic() {
        assert_eq!(
            PresentationPreference::from_str_loose("carousel"),
            PresentationPreference::Automatic
        );
    }

    #[test]
    fn test_preference_deserialize() {
        let pref: PresentationPreference = serde_json::from_str("\"masonry\"").unwrap();
        assert_eq!(pref, PresentationPreference::Masonry);
    }

    // =========================================================================
    // StrategyTag Tests
    // =========================================================================

    #[test]
    fn test_strategy_tag_has_six_variants() {
        assert_eq!(StrategyTag::ALL.len(), 6);
    }

    #[test]
    fn test_strategy_tag_serialization() {
        assert_eq!(
            serde_json::to_string(&StrategyTag::ExpandableCards).unwrap(),
            "\"expandableCards\""
        );
        let tag: StrategyTag = serde_json::from_str("\"coverFlow\"").unwrap();
        assert_eq!(tag, StrategyTag::CoverFlow);
    }

    #[test]
    fn test_strategy_tag_parse() {
        assert_eq!(
            "expandable_cards".parse::<StrategyTag>().unwrap(),
            StrategyTag::ExpandableCards
        );
        assert!("carousel".parse::<StrategyTag>().is_err());
    }
}
