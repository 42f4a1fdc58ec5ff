//! Strategy rules.
//!
//! Each rule inspects the resolved hints and the platform signal and either
//! claims the decision (`Some(strategy)`) or passes (`None`). The resolver
//! evaluates rules in order; the first claim wins.
//!
//! | Order | Rule | Applies when |
//! |-------|------|--------------|
//! | 1 | [`FeatureCardsRule`] | `itemType == "featureCards"` and `interactionStyle == "expandable"` |
//! | 2 | [`MediaRule`] | content type is `media` |
//! | 3 | [`NavigationRule`] | content type is `navigation` |
//! | 4 | [`PreferenceRule`] | always |

use hintkit_core::defaults::{INTERACTION_EXPANDABLE, ITEM_TYPE_FEATURE_CARDS};
use hintkit_core::{
    ContentType, DeviceClass, PlatformFamily, PlatformSignal, PresentationHints,
    PresentationPreference, StrategyTag,
};

/// One entry in the resolver's decision table.
pub trait StrategyRule {
    /// Stable name, used in logs.
    fn name(&self) -> &str;

    /// The strategy this rule picks, or `None` if it does not apply.
    fn evaluate(&self, hints: &PresentationHints, platform: &PlatformSignal)
        -> Option<StrategyTag>;
}

impl<R: StrategyRule + ?Sized> StrategyRule for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn evaluate(
        &self,
        hints: &PresentationHints,
        platform: &PlatformSignal,
    ) -> Option<StrategyTag> {
        (**self).evaluate(hints, platform)
    }
}

// =============================================================================
// FEATURE CARDS
// =============================================================================

/// Expandable feature cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureCardsRule;

impl FeatureCardsRule {
    fn applies(hints: &PresentationHints) -> bool {
        hints.item_type() == Some(ITEM_TYPE_FEATURE_CARDS)
            && hints.interaction_style() == Some(INTERACTION_EXPANDABLE)
    }
}

impl StrategyRule for FeatureCardsRule {
    fn name(&self) -> &str {
        "feature_cards"
    }

    fn evaluate(
        &self,
        hints: &PresentationHints,
        platform: &PlatformSignal,
    ) -> Option<StrategyTag> {
        if !Self::applies(hints) {
            return None;
        }
        let strategy = match platform.family {
            PlatformFamily::VisionOs => StrategyTag::CoverFlow,
            PlatformFamily::MacOs => StrategyTag::ExpandableCards,
            PlatformFamily::Ios => {
                if platform.device == DeviceClass::Pad {
                    StrategyTag::ExpandableCards
                } else {
                    StrategyTag::Adaptive
                }
            }
            PlatformFamily::WatchOs | PlatformFamily::TvOs => StrategyTag::List,
        };
        Some(strategy)
    }
}

// =============================================================================
// MEDIA
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct MediaRule;

impl StrategyRule for MediaRule {
    fn name(&self) -> &str {
        "media"
    }

    fn evaluate(
        &self,
        hints: &PresentationHints,
        platform: &PlatformSignal,
    ) -> Option<StrategyTag> {
        if hints.content_type() != ContentType::Media {
            return None;
        }
        let family = platform.family;
        let strategy = if family.is_spatial() {
            StrategyTag::CoverFlow
        } else if family.is_desktop() || family.is_touch_handheld() {
            StrategyTag::Masonry
        } else {
            StrategyTag::Grid
        };
        Some(strategy)
    }
}

// =============================================================================
// NAVIGATION
// =============================================================================

/// Navigation content follows the device class, not the OS family.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationRule;

impl StrategyRule for NavigationRule {
    fn name(&self) -> &str {
        "navigation"
    }

    fn evaluate(
        &self,
        hints: &PresentationHints,
        platform: &PlatformSignal,
    ) -> Option<StrategyTag> {
        if hints.content_type() != ContentType::Navigation {
            return None;
        }
        let strategy = match platform.device {
            DeviceClass::Pad => StrategyTag::Grid,
            DeviceClass::Phone | DeviceClass::Desktop | DeviceClass::Other => StrategyTag::List,
        };
        Some(strategy)
    }
}

// =============================================================================
// PREFERENCE
// =============================================================================

/// Maps the caller's preference directly. Always applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferenceRule;

impl PreferenceRule {
    pub fn strategy_for(preference: PresentationPreference) -> StrategyTag {
        match preference {
            PresentationPreference::Cards => StrategyTag::ExpandableCards,
            PresentationPreference::List => StrategyTag::List,
            PresentationPreference::Grid => StrategyTag::Grid,
            PresentationPreference::Masonry => StrategyTag::Masonry,
            PresentationPreference::CoverFlow => StrategyTag::CoverFlow,
            _ => StrategyTag::Adaptive,
        }
    }
}

impl StrategyRule for PreferenceRule {
    fn name(&self) -> &str {
        "preference"
    }

    fn evaluate(
        &self,
        hints: &PresentationHints,
        _platform: &PlatformSignal,
    ) -> Option<StrategyTag> {
        Some(Self::strategy_for(hints.preference()))
    }
}

/// The standard rule table, in evaluation order.
pub fn default_rules() -> Vec<Box<dyn StrategyRule>> {
    vec![
        Box::new(FeatureCardsRule),
        Box::new(MediaRule),
        Box::new(NavigationRule),
        Box::new(PreferenceRule),
    ]
}
