//! Structured logging schema and field name constants for hintkit.
//!
//! All crates use these constants for consistent structured logging fields,
//! so a host application can filter hint-resolution events by a stable name.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | WARN  | Recoverable issue, fallback applied (unreadable hints file) |
//! | DEBUG | Decision points (cache hit/miss, matched rule, chosen strategy) |
//! | TRACE | Per-entry iteration (individual preference writes, field overrides) |
//!
//! hintkit never installs a subscriber; that is left to the host.

// ─── Identity fields ───────────────────────────────────────────────────────

/// Component within hintkit.
/// Values: "loader", "cache", "merger", "resolver", "planner", "config"
pub const COMPONENT: &str = "component";

/// Model name whose field hints are being looked up.
pub const MODEL: &str = "model";

/// Field identifier inside a model.
pub const FIELD_ID: &str = "field_id";

/// Extensible hint kind.
pub const HINT_KIND: &str = "hint_kind";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Number of field hints loaded or merged.
pub const FIELD_COUNT: &str = "field_count";

/// Number of extensible hints applied in a merge.
pub const HINT_COUNT: &str = "hint_count";

/// Priority of an extensible hint.
pub const PRIORITY: &str = "priority";

/// Number of items in the collection being presented.
pub const ITEM_COUNT: &str = "item_count";

// ─── Decision fields ───────────────────────────────────────────────────────

/// Whether a cache lookup was served from memory.
pub const CACHE_HIT: &str = "cache_hit";

/// Name of the strategy rule that matched.
pub const RULE: &str = "rule";

/// Strategy tag chosen by the resolver.
pub const STRATEGY: &str = "strategy";

/// Platform family the decision was made for.
pub const PLATFORM: &str = "platform";

/// Device class the decision was made for.
pub const DEVICE: &str = "device";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// File system path involved in the operation.
pub const PATH: &str = "path";

/// Error message when an operation degrades.
pub const ERROR_MSG: &str = "error";
