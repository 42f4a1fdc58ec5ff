//! # hintkit-strategy
//!
//! Presentation-strategy resolution for hintkit.
//!
//! This crate provides:
//! - An ordered rule table (feature cards, media, navigation, preference)
//! - A resolver that always returns one of the six strategy tags
//! - A planner that short-circuits empty collections to an empty state
//!
//! ## Example
//!
//! ```ignore
//! use hintkit_strategy::{plan_presentation, PlatformSignal, StrategyResolver};
//!
//! let resolver = StrategyResolver::new();
//! let platform = PlatformSignal::for_family(PlatformFamily::MacOs);
//!
//! match plan_presentation(&items, &hints, &platform, &resolver) {
//!     PresentationPlan::EmptyState { .. } => render_placeholder(),
//!     PresentationPlan::Collection { strategy } => render(strategy),
//! }
//! ```

pub mod planner;
pub mod resolver;
pub mod rules;

// Re-export core types
pub use hintkit_core::*;

// Re-export strategy types
pub use planner::{plan_presentation, PresentationPlan};
pub use resolver::{resolve, StrategyResolver};
pub use rules::{
    default_rules, FeatureCardsRule, MediaRule, NavigationRule, PreferenceRule, StrategyRule,
};
