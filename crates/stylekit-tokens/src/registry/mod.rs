//! Token canonicalization, collision detection and CSS conversion.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

use stylekit_css::lexer::tokenize_with_limits;
use stylekit_css::CssSanitizer;

use crate::fold::{fold, CanonicalKey};
use crate::persist::OptionKeys;
use crate::token::{normalize_name, Token};

/// Context used when a token names none.
pub const DEFAULT_CONTEXT: &str = ":root";

// =============================================================================
// RESULT TYPES
// =============================================================================

/// One member of a [`DuplicateGroup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub name: String,
    pub context: String,
    pub value: String,
}

/// Tokens in one context whose names fold to the same canonical key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    /// First-seen original name.
    pub canonical: String,
    /// Distinct literal names, first-seen order.
    pub variants: Vec<String>,
    /// One entry per colliding token.
    pub conflicts: Vec<Conflict>,
}

impl DuplicateGroup {
    fn from_members(members: &[&Token]) -> Self {
        let mut variants: Vec<String> = Vec::new();
        for token in members {
            if !variants.contains(&token.name) {
                variants.push(token.name.clone());
            }
        }
        Self {
            canonical: members[0].name.clone(),
            variants,
            conflicts: members
                .iter()
                .map(|token| Conflict {
                    name: token.name.clone(),
                    context: token.context.clone(),
                    value: token.value.clone(),
                })
                .collect(),
        }
    }
}

/// Why normalization dropped a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Nothing usable left in the name.
    EmptyName,
    /// The value did not survive as a single custom-property value.
    UnsafeValue,
    /// The context is not a selector the sanitizer keeps intact.
    UnsafeContext,
}

/// A token dropped by normalization, as the caller submitted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedToken {
    pub name: String,
    pub context: String,
    pub reason: RejectReason,
}

/// Output of [`TokenRegistry::normalize_registry`].
///
/// When `duplicates` is non-empty the set must not be saved. Tokens in
/// `rejected` are not part of `tokens`; saving `tokens` deletes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedRegistry {
    pub tokens: Vec<Token>,
    pub duplicates: Vec<DuplicateGroup>,
    pub rejected: Vec<RejectedToken>,
}

impl NormalizedRegistry {
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Token operations bound to a sanitizer and store keys.
#[derive(Debug, Clone)]
pub struct TokenRegistry {
    sanitizer: CssSanitizer,
    default_context: String,
    pub(crate) keys: OptionKeys,
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::new(CssSanitizer::default())
    }
}

impl TokenRegistry {
    pub fn new(sanitizer: CssSanitizer) -> Self {
        Self {
            sanitizer,
            default_context: DEFAULT_CONTEXT.into(),
            keys: OptionKeys::default(),
        }
    }

    pub fn with_default_context(mut self, context: impl Into<String>) -> Self {
        self.default_context = context.into();
        self
    }

    pub fn with_option_keys(mut self, keys: OptionKeys) -> Self {
        self.keys = keys;
        self
    }

    pub fn sanitizer(&self) -> &CssSanitizer {
        &self.sanitizer
    }

    pub fn default_context(&self) -> &str {
        &self.default_context
    }

    pub fn option_keys(&self) -> &OptionKeys {
        &self.keys
    }

    /// Clean one token's name, value and context.
    ///
    /// Returns `None` when any of them is unusable once cleaned.
    pub fn normalize_token(&self, token: &Token) -> Option<Token> {
        self.check_token(token).ok()
    }

    fn check_token(&self, token: &Token) -> Result<Token, RejectReason> {
        let name = normalize_name(&token.name);
        if name.is_empty() {
            warn!(name = %token.name, "token dropped: empty name");
            return Err(RejectReason::EmptyName);
        }

        let Some(value) = self.sanitizer.sanitize_value(&token.value) else {
            warn!(name = %name, "token dropped: value rejected by sanitizer");
            return Err(RejectReason::UnsafeValue);
        };

        let Some(context) = self.normalize_context(&token.context) else {
            warn!(name = %name, context = %token.context, "token dropped: unusable context");
            return Err(RejectReason::UnsafeContext);
        };

        Ok(Token {
            name,
            value,
            context,
            ..token.clone()
        })
    }

    /// Trimmed context, the default when empty, `None` when it is not a
    /// selector the sanitizer keeps intact.
    fn normalize_context(&self, context: &str) -> Option<String> {
        let context = context.trim();
        if context.is_empty() {
            return Some(self.default_context.clone());
        }
        let wrapped = format!("{context} {{--context-check:0}}");
        let doc = self.sanitizer.parse(&wrapped);
        let mut rules = doc.rules();
        match (rules.next(), rules.next(), doc.nodes.len()) {
            (Some(rule), None, 1) if !rule.is_degraded() => Some(rule.selector.clone()),
            _ => None,
        }
    }

    /// Key used for both grouping and metadata lookup.
    fn context_key(&self, context: &str) -> String {
        let context = context.trim();
        if context.is_empty() {
            self.default_context.clone()
        } else {
            context.to_string()
        }
    }

    /// Normalize every token, then group by `(context, fold(name))`.
    pub fn normalize_registry(&self, tokens: &[Token]) -> NormalizedRegistry {
        let mut kept = Vec::with_capacity(tokens.len());
        let mut rejected = Vec::new();
        for token in tokens {
            match self.check_token(token) {
                Ok(token) => kept.push(token),
                Err(reason) => rejected.push(RejectedToken {
                    name: token.name.clone(),
                    context: token.context.clone(),
                    reason,
                }),
            }
        }

        let duplicates = find_duplicates(&kept);
        if !duplicates.is_empty() {
            debug!(groups = duplicates.len(), "duplicate token names found");
        }
        NormalizedRegistry {
            tokens: kept,
            duplicates,
            rejected,
        }
    }

    /// Backfill `type`, `description` and `group` from `existing` tokens with
    /// the same context and canonical key. `value` always comes from `incoming`.
    pub fn merge_metadata(&self, incoming: &[Token], existing: &[Token]) -> Vec<Token> {
        let mut index: HashMap<(String, CanonicalKey), &Token> = HashMap::new();
        for token in existing {
            index
                .entry((self.context_key(&token.context), fold(&token.name)))
                .or_insert(token);
        }

        incoming
            .iter()
            .map(|token| {
                let key = (self.context_key(&token.context), fold(&token.name));
                match index.get(&key) {
                    Some(previous) => Token {
                        kind: previous.kind,
                        description: previous.description.clone(),
                        group: previous.group.clone(),
                        ..token.clone()
                    },
                    None => token.clone(),
                }
            })
            .collect()
    }

    /// Extract custom properties from top-level rules of sanitized `css`.
    ///
    /// Each rule's selector becomes the token context. Names and values are
    /// taken verbatim; metadata is left at its defaults.
    pub fn convert_css_to_registry(&self, css: &str) -> Vec<Token> {
        let sanitized = self.sanitizer.sanitize(css);
        let doc = tokenize_with_limits(&sanitized, &self.sanitizer.policy().limits);

        let tokens: Vec<Token> = doc
            .rules()
            .flat_map(|rule| {
                rule.declarations
                    .iter()
                    .filter(|decl| decl.is_custom_property())
                    .map(|decl| Token::new(&decl.property, &decl.value, &rule.selector))
            })
            .collect();

        debug!(count = tokens.len(), "tokens extracted from CSS");
        tokens
    }

    /// Emit one rule per context, one `--name: value;` line per token.
    ///
    /// Contexts appear in first-seen order, tokens in input order.
    pub fn tokens_to_css(&self, tokens: &[Token]) -> String {
        let mut contexts: Vec<(String, Vec<&Token>)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for token in tokens {
            let context = self.context_key(&token.context);
            let slot = *index.entry(context.clone()).or_insert_with(|| {
                contexts.push((context, Vec::new()));
                contexts.len() - 1
            });
            contexts[slot].1.push(token);
        }

        let mut css = String::new();
        for (context, members) in &contexts {
            css.push_str(context);
            css.push_str(" {\n");
            for token in members {
                css.push_str(&format!("  {}: {};\n", token.name, token.value));
            }
            css.push_str("}\n");
        }
        css
    }
}

/// Group tokens by `(context, fold(name))` in one pass; groups of two or
/// more become [`DuplicateGroup`]s, in first-seen order.
pub fn find_duplicates(tokens: &[Token]) -> Vec<DuplicateGroup> {
    let mut index: HashMap<(&str, CanonicalKey), usize> = HashMap::new();
    let mut groups: Vec<Vec<&Token>> = Vec::new();

    for token in tokens {
        let key = (token.context.as_str(), fold(&token.name));
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(token);
    }

    groups
        .iter()
        .filter(|members| members.len() > 1)
        .map(|members| DuplicateGroup::from_members(members))
        .collect()
}

// =============================================================================
// DEFAULT-REGISTRY SHORTHANDS
// =============================================================================

pub fn normalize_registry(tokens: &[Token]) -> NormalizedRegistry {
    TokenRegistry::default().normalize_registry(tokens)
}

pub fn merge_metadata(incoming: &[Token], existing: &[Token]) -> Vec<Token> {
    TokenRegistry::default().merge_metadata(incoming, existing)
}

pub fn convert_css_to_registry(css: &str) -> Vec<Token> {
    TokenRegistry::default().convert_css_to_registry(css)
}

pub fn tokens_to_css(tokens: &[Token]) -> String {
    TokenRegistry::default().tokens_to_css(tokens)
}
