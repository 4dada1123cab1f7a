//! Saving and loading the registry through an [`OptionStore`].
//!
//! Saves replace the whole registry. A set with duplicate canonical keys is
//! rejected before anything is written.

use serde_json::Value;
use stylekit_common::{StoreError, StylekitError};
use tracing::{info, warn};

use crate::registry::{DuplicateGroup, RejectedToken, TokenRegistry};
use crate::store::OptionStore;
use crate::token::Token;

/// Option names the registry reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionKeys {
    /// Structured token list (JSON array).
    pub tokens: String,
    /// CSS derived from the token list.
    pub css: String,
}

impl Default for OptionKeys {
    fn default() -> Self {
        Self {
            tokens: "stylekit_tokens_registry".into(),
            css: "stylekit_tokens_css".into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate tokens: {}", describe_duplicates(.0))]
    Duplicates(Vec<DuplicateGroup>),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid token registry JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl RegistryError {
    /// The collisions behind a rejected save, if that is what this is.
    pub fn duplicates(&self) -> Option<&[DuplicateGroup]> {
        match self {
            RegistryError::Duplicates(groups) => Some(groups),
            _ => None,
        }
    }
}

impl From<RegistryError> for StylekitError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Store(e) => StylekitError::Store(e),
            other => StylekitError::Registry(other.to_string()),
        }
    }
}

fn describe_duplicates(groups: &[DuplicateGroup]) -> String {
    groups
        .iter()
        .map(|g| g.variants.join(" / "))
        .collect::<Vec<_>>()
        .join(", ")
}

/// What a successful save persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedRegistry {
    pub tokens: Vec<Token>,
    pub css: String,
    /// Submitted tokens that normalization dropped. They are no longer stored.
    pub rejected: Vec<RejectedToken>,
}

impl TokenRegistry {
    /// Normalize and persist `tokens`, replacing the stored registry.
    ///
    /// On duplicates nothing is written and the groups are returned in
    /// [`RegistryError::Duplicates`].
    ///
    /// The token list is written before the CSS, in two `set` calls. If the
    /// CSS write fails the new token list is already stored and the stored
    /// CSS is stale; the error is returned and a later save brings them back
    /// in sync. [`load_registry`](Self::load_registry) reads the token list,
    /// so it sees the new registry either way.
    pub fn save_registry<S: OptionStore>(
        &self,
        store: &mut S,
        tokens: &[Token],
    ) -> Result<SavedRegistry, RegistryError> {
        let normalized = self.normalize_registry(tokens);
        if normalized.has_duplicates() {
            warn!(
                groups = normalized.duplicates.len(),
                "token registry save rejected: duplicate names"
            );
            return Err(RegistryError::Duplicates(normalized.duplicates));
        }

        let css = self.tokens_to_css(&normalized.tokens);
        let value = serde_json::to_value(&normalized.tokens)?;
        store.set(&self.keys.tokens, value)?;
        if let Err(e) = store.set(&self.keys.css, Value::String(css.clone())) {
            warn!(key = %self.keys.css, "token CSS write failed, stored CSS is stale: {e}");
            return Err(e.into());
        }

        if !normalized.rejected.is_empty() {
            warn!(count = normalized.rejected.len(), "token registry saved without rejected tokens");
        }
        info!(count = normalized.tokens.len(), "token registry saved");
        Ok(SavedRegistry {
            tokens: normalized.tokens,
            css,
            rejected: normalized.rejected,
        })
    }

    /// Read the stored registry.
    ///
    /// Falls back to parsing the stored CSS when no token list exists.
    pub fn load_registry<S: OptionStore>(&self, store: &S) -> Result<Vec<Token>, RegistryError> {
        match store.get(&self.keys.tokens) {
            Some(Value::Array(items)) => Ok(serde_json::from_value(Value::Array(items))?),
            Some(Value::String(json)) if !json.trim().is_empty() => Ok(serde_json::from_str(&json)?),
            Some(Value::Null) | Some(Value::String(_)) | None => Ok(self.load_from_css(store)),
            Some(other) => Err(StoreError::InvalidValue {
                key: self.keys.tokens.clone(),
                reason: format!("expected a token array, got {}", json_kind(&other)),
            }
            .into()),
        }
    }

    fn load_from_css<S: OptionStore>(&self, store: &S) -> Vec<Token> {
        match store.get(&self.keys.css) {
            Some(Value::String(css)) => self.convert_css_to_registry(&css),
            _ => Vec::new(),
        }
    }

    /// Replace the registry with tokens parsed from `css`, keeping metadata
    /// of tokens that already exist under the same canonical key and context.
    pub fn import_css<S: OptionStore>(
        &self,
        store: &mut S,
        css: &str,
    ) -> Result<SavedRegistry, RegistryError> {
        let incoming = self.convert_css_to_registry(css);
        let existing = self.load_registry(store)?;
        let merged = self.merge_metadata(&incoming, &existing);
        self.save_registry(store, &merged)
    }

    /// Store an empty registry and empty CSS.
    pub fn reset_registry<S: OptionStore>(&self, store: &mut S) -> Result<(), RegistryError> {
        store.set(&self.keys.tokens, Value::Array(Vec::new()))?;
        store.set(&self.keys.css, Value::String(String::new()))?;
        info!("token registry reset");
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
