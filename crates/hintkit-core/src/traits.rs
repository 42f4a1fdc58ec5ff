//! Core traits for hintkit abstractions.

use crate::field_hint::FieldHints;

/// Source of file-backed, model-scoped field hints.
///
/// Implementations never fail at this surface: a missing or unreadable
/// source yields an empty map. Loading may block on I/O; callers run it on
/// the same execution context as rendering.
pub trait FieldHintsLoader {
    /// Load the field hints declared for `model_name`.
    fn load_hints(&self, model_name: &str) -> FieldHints;
}

impl<L: FieldHintsLoader + ?Sized> FieldHintsLoader for &L {
    fn load_hints(&self, model_name: &str) -> FieldHints {
        (**self).load_hints(model_name)
    }
}

impl<L: FieldHintsLoader + ?Sized> FieldHintsLoader for Box<L> {
    fn load_hints(&self, model_name: &str) -> FieldHints {
        (**self).load_hints(model_name)
    }
}
