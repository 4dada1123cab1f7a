//! JSON export and import of token lists.

use serde::Deserialize;
use tracing::info;

use crate::persist::RegistryError;
use crate::registry::{NormalizedRegistry, TokenRegistry};
use crate::token::Token;

#[derive(Deserialize)]
#[serde(untagged)]
enum RegistryDocument {
    List(Vec<Token>),
    Wrapped { tokens: Vec<Token> },
}

/// Pretty-printed JSON array of `tokens`.
pub fn export_registry_json(tokens: &[Token]) -> Result<String, RegistryError> {
    Ok(serde_json::to_string_pretty(tokens)?)
}

/// Parse either a bare token array or `{"tokens": [...]}`.
pub fn parse_registry_json(json: &str) -> Result<Vec<Token>, RegistryError> {
    let doc: RegistryDocument = serde_json::from_str(json)?;
    Ok(match doc {
        RegistryDocument::List(tokens) => tokens,
        RegistryDocument::Wrapped { tokens } => tokens,
    })
}

impl TokenRegistry {
    /// Parse and normalize an exported registry. Duplicates are reported,
    /// not rejected; saving is the caller's decision.
    pub fn import_registry_json(&self, json: &str) -> Result<NormalizedRegistry, RegistryError> {
        let tokens = parse_registry_json(json)?;
        let normalized = self.normalize_registry(&tokens);
        info!(
            parsed = tokens.len(),
            kept = normalized.tokens.len(),
            duplicates = normalized.duplicates.len(),
            "token registry JSON imported"
        );
        Ok(normalized)
    }
}
