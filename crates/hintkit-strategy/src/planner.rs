//! Presentation planning for a collection of items.
//!
//! An empty collection never reaches the resolver: it gets an empty-state
//! plan carrying the content type and context the view layer needs for its
//! placeholder.

use serde::{Deserialize, Serialize};
use tracing::debug;

use hintkit_core::{
    ContentType, PlatformSignal, PresentationContext, PresentationHints, StrategyTag,
};

use crate::resolver::StrategyResolver;

/// What the view layer should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PresentationPlan {
    /// No items; show a placeholder.
    #[serde(rename_all = "camelCase")]
    EmptyState {
        content_type: ContentType,
        context: PresentationContext,
    },
    /// Render the items with `strategy`.
    Collection { strategy: StrategyTag },
}

impl PresentationPlan {
    pub fn is_empty_state(&self) -> bool {
        matches!(self, Self::EmptyState { .. })
    }

    /// The chosen strategy, or `None` for an empty state.
    pub fn strategy(&self) -> Option<StrategyTag> {
        match self {
            Self::Collection { strategy } => Some(*strategy),
            Self::EmptyState { .. } => None,
        }
    }
}

/// Plan how to present `items`.
///
/// The resolver is only consulted when `items` is non-empty.
pub fn plan_presentation<T>(
    items: &[T],
    hints: &PresentationHints,
    platform: &PlatformSignal,
    resolver: &StrategyResolver,
) -> PresentationPlan {
    if items.is_empty() {
        debug!(
            item_count = 0,
            content_type = %hints.content_type(),
            context = %hints.context(),
            "Empty collection, using empty state"
        );
        return PresentationPlan::EmptyState {
            content_type: hints.content_type(),
            context: hints.context(),
        };
    }

    let strategy = resolver.resolve(hints, platform);
    debug!(item_count = items.len(), strategy = %strategy, "Planned presentation");
    PresentationPlan::Collection { strategy }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::StrategyRule;
    use hintkit_core::{Complexity, PlatformFamily, PresentationPreference};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts evaluations and never applies.
    struct Counting(Rc<Cell<usize>>);

    impl StrategyRule for Counting {
        fn name(&self) -> &str {
            "counting"
        }

        fn evaluate(&self, _: &PresentationHints, _: &PlatformSignal) -> Option<StrategyTag> {
            self.0.set(self.0.get() + 1);
            None
        }
    }

    fn hints() -> PresentationHints {
        PresentationHints::new(
            ContentType::Product,
            PresentationPreference::Grid,
            Complexity::Simple,
            PresentationContext::Browse,
        )
    }

    #[test]
    fn test_empty_collection_bypasses_resolver() {
        let calls = Rc::new(Cell::new(0));
        let resolver = StrategyResolver::new().prepend_rule(Counting(Rc::clone(&calls)));
        let platform = PlatformSignal::for_family(PlatformFamily::Ios);

        let items: Vec<u32> = Vec::new();
        let plan = plan_presentation(&items, &hints(), &platform, &resolver);

        assert_eq!(calls.get(), 0);
        assert_eq!(
            plan,
            PresentationPlan::EmptyState {
                content_type: ContentType::Product,
                context: PresentationContext::Browse,
            }
        );
        assert!(plan.is_empty_state());
        assert_eq!(plan.strategy(), None);
    }

    #[test]
    fn test_non_empty_collection_resolves() {
        let calls = Rc::new(Cell::new(0));
        let resolver = StrategyResolver::new().prepend_rule(Counting(Rc::clone(&calls)));
        let platform = PlatformSignal::for_family(PlatformFamily::MacOs);

        let plan = plan_presentation(&["a", "b"], &hints(), &platform, &resolver);

        assert_eq!(calls.get(), 1);
        assert_eq!(plan.strategy(), Some(StrategyTag::Grid));
        assert!(!plan.is_empty_state());
    }

    #[test]
    fn test_plan_serialization() {
        let plan = PresentationPlan::Collection {
            strategy: StrategyTag::ExpandableCards,
        };
        let json = serde_json::to_value(plan).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "collection", "strategy": "expandableCards" })
        );

        let empty = PresentationPlan::EmptyState {
            content_type: ContentType::Media,
            context: PresentationContext::Dashboard,
        };
        let json = serde_json::to_value(empty).unwrap();
        assert_eq!(json["kind"], "emptyState");
        assert_eq!(json["contentType"], "media");
        assert_eq!(json["context"], "dashboard");
    }
}
