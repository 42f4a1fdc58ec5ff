//! Field-hints loaders.
//!
//! [`FileHintsLoader`] reads `<Model>.hints` files from an ordered list of
//! directories. The JSON file wins over a `.hints.yaml` / `.hints.yml`
//! companion in the same directory; earlier directories win over later ones.
//!
//! A hints file is a mapping of field id → field hint:
//!
//! ```json
//! {
//!   "_sections": [{ "title": "Account", "fields": ["username"] }],
//!   "username": { "expectedLength": 20, "displayWidth": "medium", "maxLength": 50 },
//!   "bio": { "displayWidth": "wide", "showCharacterCounter": true }
//! }
//! ```
//!
//! Keys starting with `_` are file metadata and skipped. A field entry that
//! fails to parse or validate is dropped with a warning; the rest of the file
//! still loads.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;
use tracing::{debug, trace, warn};

use hintkit_core::defaults::{
    HINTS_DIR, HINTS_EXTENSION, HINTS_YAML_EXTENSIONS, METADATA_KEY_PREFIX,
};
use hintkit_core::{Error, FieldDisplayHint, FieldHints, FieldHintsLoader, Result};

/// On-disk format of a hints file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintsFormat {
    Json,
    Yaml,
}

impl HintsFormat {
    /// Format implied by a file's extension. Anything that is not YAML is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if HINTS_YAML_EXTENSIONS.contains(&ext.to_lowercase().as_str()) => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

// =============================================================================
// FILE LOADER
// =============================================================================

/// Loads field hints from `<dir>/<Model>.hints` files.
#[derive(Debug, Clone)]
pub struct FileHintsLoader {
    search_paths: Vec<PathBuf>,
}

impl Default for FileHintsLoader {
    fn default() -> Self {
        Self::new([HINTS_DIR])
    }
}

impl FileHintsLoader {
    pub fn new<I, P>(search_paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_paths: search_paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Candidate file names for a model, in precedence order.
    fn candidate_names(model_name: &str) -> Vec<String> {
        let mut names = vec![format!("{}.{}", model_name, HINTS_EXTENSION)];
        names.extend(
            HINTS_YAML_EXTENSIONS
                .iter()
                .map(|ext| format!("{}.{}.{}", model_name, HINTS_EXTENSION, ext)),
        );
        names
    }

    /// Find the hints file for `model_name`, if any.
    pub fn locate(&self, model_name: &str) -> Option<PathBuf> {
        let names = Self::candidate_names(model_name);
        for dir in &self.search_paths {
            for name in &names {
                let path = dir.join(name);
                if path.is_file() {
                    return Some(path);
                }
            }
        }
        None
    }

    /// Load hints for `model_name`, surfacing read and parse errors.
    ///
    /// A model with no hints file is not an error: the result is empty.
    pub fn try_load(&self, model_name: &str) -> Result<FieldHints> {
        validate_model_name(model_name)?;

        let Some(path) = self.locate(model_name) else {
            debug!(model = model_name, "No hints file found");
            return Ok(FieldHints::new());
        };

        let content = std::fs::read_to_string(&path)?;
        let hints = parse_hints(&content, HintsFormat::from_path(&path), &path)?;
        debug!(
            model = model_name,
            path = %path.display(),
            field_count = hints.len(),
            "Loaded hints file"
        );
        Ok(hints)
    }
}

impl FieldHintsLoader for FileHintsLoader {
    fn load_hints(&self, model_name: &str) -> FieldHints {
        match self.try_load(model_name) {
            Ok(hints) => hints,
            Err(e) => {
                warn!(model = model_name, error = %e, "Failed to load field hints, using none");
                FieldHints::new()
            }
        }
    }
}

/// Reject names that would escape the search directories.
fn validate_model_name(model_name: &str) -> Result<()> {
    if model_name.trim().is_empty() {
        return Err(Error::InvalidInput("model name is empty".to_string()));
    }
    if model_name.contains(['/', '\\']) || model_name == ".." || model_name == "." {
        return Err(Error::InvalidInput(format!(
            "model name is not a plain file stem: {}",
            model_name
        )));
    }
    Ok(())
}

/// Parse the contents of a hints file.
///
/// `path` is only used for error messages.
pub fn parse_hints(content: &str, format: HintsFormat, path: &Path) -> Result<FieldHints> {
    if content.trim().is_empty() {
        return Ok(FieldHints::new());
    }

    let document: JsonValue = match format {
        HintsFormat::Json => serde_json::from_str(content)
            .map_err(|e| Error::hints_file(path, e.to_string()))?,
        HintsFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| Error::hints_file(path, e.to_string()))?,
    };

    let JsonValue::Object(entries) = document else {
        return Err(Error::hints_file(
            path,
            "expected a mapping of field ids to hints",
        ));
    };

    let mut hints = FieldHints::with_capacity(entries.len());
    for (field_id, value) in entries {
        if field_id.starts_with(METADATA_KEY_PREFIX) {
            trace!(field_id = %field_id, "Skipping metadata key");
            continue;
        }

        let hint = match serde_json::from_value::<FieldDisplayHint>(value) {
            Ok(hint) => hint,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    field_id = %field_id,
                    error = %e,
                    "Skipping unparseable field hint"
                );
                continue;
            }
        };

        if let Err(e) = hint.validate() {
            warn!(
                path = %path.display(),
                field_id = %field_id,
                error = %e,
                "Skipping invalid field hint"
            );
            continue;
        }

        hints.insert(field_id, hint);
    }

    Ok(hints)
}

// =============================================================================
// STATIC LOADER
// =============================================================================

/// In-memory loader for embedders that ship hints with the binary, and for
/// tests.
#[derive(Debug, Clone, Default)]
pub struct StaticHintsLoader {
    models: HashMap<String, FieldHints>,
}

impl StaticHintsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model_name: impl Into<String>, hints: FieldHints) -> Self {
        self.models.insert(model_name.into(), hints);
        self
    }

    pub fn insert(&mut self, model_name: impl Into<String>, hints: FieldHints) {
        self.models.insert(model_name.into(), hints);
    }

    pub fn remove(&mut self, model_name: &str) -> Option<FieldHints> {
        self.models.remove(model_name)
    }
}

impl FieldHintsLoader for StaticHintsLoader {
    fn load_hints(&self, model_name: &str) -> FieldHints {
        self.models.get(model_name).cloned().unwrap_or_default()
    }
}
