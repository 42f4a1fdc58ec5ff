//! # hintkit-core
//!
//! Core types, traits, and abstractions for hintkit.
//!
//! This crate provides the hint records, semantic tags, platform signal and
//! strategy tag shared by the loader/merger (`hintkit-hints`) and the
//! resolver (`hintkit-strategy`).

pub mod defaults;
pub mod error;
pub mod field_hint;
pub mod hints;
pub mod logging;
pub mod models;
pub mod platform;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use field_hint::{DisplayWidth, FieldDisplayHint, FieldHints};
pub use hints::{CustomPreferences, CustomValue, EnhancedHints, ExtensibleHint, PresentationHints};
pub use models::*;
pub use platform::{DeviceClass, PlatformFamily, PlatformSignal};
pub use traits::*;
