//! # hintkit-hints
//!
//! Field-hints loading, caching, and extensible-hint merging for hintkit.
//!
//! This crate provides:
//! - Hints-file discovery and parsing (`<Model>.hints`, JSON or YAML)
//! - A per-model cache that never stores empty results
//! - Priority-ordered merging of extensible hints into resolved hints
//! - Configuration from a YAML file or `HINTKIT_*` environment variables
//!
//! ## Example
//!
//! ```ignore
//! use hintkit_hints::{merge_for_model, HintsConfig};
//!
//! let config = HintsConfig::load()?;
//! let mut cache = config.build_cache();
//!
//! let resolved = merge_for_model(&mut cache, "Product", &enhanced);
//! ```

pub mod cache;
pub mod config;
pub mod loader;
pub mod merge;

// Re-export core types
pub use hintkit_core::*;

// Re-export hints types
pub use cache::{CacheStats, FieldHintsCache};
pub use config::{ConfigError, ConfigResult, HintsConfig};
pub use loader::{parse_hints, FileHintsLoader, HintsFormat, StaticHintsLoader};
pub use merge::{
    hints_for_model, merge, merge_custom_preferences, merge_field_hints, merge_for_model,
};
