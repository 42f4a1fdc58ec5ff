//! Presentation-strategy resolution.
//!
//! Resolves a [`StrategyTag`] from resolved hints and the platform signal by
//! walking an ordered rule table. The first rule that claims the decision
//! wins; if none does, the result is [`StrategyTag::Adaptive`]. Resolution
//! never fails.

use tracing::{debug, trace};

use hintkit_core::{PlatformSignal, PresentationHints, StrategyTag};

use crate::rules::{default_rules, StrategyRule};

/// Ordered rule table.
pub struct StrategyResolver {
    rules: Vec<Box<dyn StrategyRule>>,
}

impl Default for StrategyResolver {
    fn default() -> Self {
        Self::with_rules(default_rules())
    }
}

impl std::fmt::Debug for StrategyResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyResolver")
            .field("rules", &self.rule_names())
            .finish()
    }
}

impl StrategyResolver {
    /// Resolver with the standard rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver with exactly `rules`, in order.
    pub fn with_rules(rules: Vec<Box<dyn StrategyRule>>) -> Self {
        Self { rules }
    }

    /// Insert a rule ahead of every existing rule.
    pub fn prepend_rule(mut self, rule: impl StrategyRule + 'static) -> Self {
        self.rules.insert(0, Box::new(rule));
        self
    }

    /// Append a rule after every existing rule.
    pub fn append_rule(mut self, rule: impl StrategyRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Pick the strategy for `hints` on `platform`.
    pub fn resolve(&self, hints: &PresentationHints, platform: &PlatformSignal) -> StrategyTag {
        for rule in &self.rules {
            match rule.evaluate(hints, platform) {
                Some(strategy) => {
                    debug!(
                        rule = rule.name(),
                        strategy = %strategy,
                        platform = %platform.family,
                        device = %platform.device,
                        content_type = %hints.content_type(),
                        "Strategy resolved"
                    );
                    return strategy;
                }
                None => trace!(rule = rule.name(), "Rule did not apply"),
            }
        }

        debug!(
            strategy = %StrategyTag::Adaptive,
            platform = %platform.family,
            device = %platform.device,
            "No rule applied, using fallback"
        );
        StrategyTag::Adaptive
    }
}

/// Resolve with the standard rules.
pub fn resolve(hints: &PresentationHints, platform: &PlatformSignal) -> StrategyTag {
    StrategyResolver::default().resolve(hints, platform)
}
