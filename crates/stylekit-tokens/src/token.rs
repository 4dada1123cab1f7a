//! Token record and its metadata enums.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::fold::{fold, CanonicalKey};
use crate::registry::DEFAULT_CONTEXT;

/// Characters allowed in a token name after the `--` prefix.
static NAME_INVALID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]").unwrap());

// =============================================================================
// TOKEN TYPE / STATUS
// =============================================================================

/// What kind of value a token holds. Unknown names parse as `Text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TokenType {
    Color,
    #[default]
    Text,
    Number,
    Spacing,
    Dimension,
    FontFamily,
    Shadow,
    Gradient,
}

impl TokenType {
    pub const ALL: [TokenType; 8] = [
        TokenType::Color,
        TokenType::Text,
        TokenType::Number,
        TokenType::Spacing,
        TokenType::Dimension,
        TokenType::FontFamily,
        TokenType::Shadow,
        TokenType::Gradient,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Color => "color",
            TokenType::Text => "text",
            TokenType::Number => "number",
            TokenType::Spacing => "spacing",
            TokenType::Dimension => "dimension",
            TokenType::FontFamily => "font-family",
            TokenType::Shadow => "shadow",
            TokenType::Gradient => "gradient",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "color" | "colour" => TokenType::Color,
            "number" => TokenType::Number,
            "spacing" => TokenType::Spacing,
            "dimension" | "size" => TokenType::Dimension,
            "font-family" | "font_family" | "fontfamily" | "font" => TokenType::FontFamily,
            "shadow" => TokenType::Shadow,
            "gradient" => TokenType::Gradient,
            _ => TokenType::Text,
        }
    }
}

impl From<String> for TokenType {
    fn from(s: String) -> Self {
        TokenType::parse(&s)
    }
}

impl From<TokenType> for String {
    fn from(kind: TokenType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a token. Unknown names parse as `Draft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TokenStatus {
    #[default]
    Draft,
    Ready,
    Deprecated,
}

impl TokenStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenStatus::Draft => "draft",
            TokenStatus::Ready => "ready",
            TokenStatus::Deprecated => "deprecated",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "ready" => TokenStatus::Ready,
            "deprecated" => TokenStatus::Deprecated,
            _ => TokenStatus::Draft,
        }
    }
}

impl From<String> for TokenStatus {
    fn from(s: String) -> Self {
        TokenStatus::parse(&s)
    }
}

impl From<TokenStatus> for String {
    fn from(status: TokenStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for TokenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// TOKEN
// =============================================================================

/// A named custom property with registry metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Token {
    /// `--name`, original casing kept.
    pub name: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: TokenType,
    pub description: String,
    pub group: String,
    /// Selector scope the value applies under.
    pub context: String,
    pub status: TokenStatus,
    pub version: String,
    pub linked_components: Vec<String>,
}

impl Default for Token {
    fn default() -> Self {
        Self {
            name: String::new(),
            value: String::new(),
            kind: TokenType::default(),
            description: String::new(),
            group: String::new(),
            context: DEFAULT_CONTEXT.into(),
            status: TokenStatus::default(),
            version: String::new(),
            linked_components: Vec::new(),
        }
    }
}

impl Token {
    /// A token with default metadata, as reconstructed from plain CSS.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            context: context.into(),
            ..Default::default()
        }
    }

    pub fn with_kind(mut self, kind: TokenType) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: TokenStatus) -> Self {
        self.status = status;
        self
    }

    pub fn canonical_key(&self) -> CanonicalKey {
        fold(&self.name)
    }
}

/// Clean a token name and make sure it starts with `--`.
///
/// Characters outside `[A-Za-z0-9_-]` are removed, casing is kept.
/// Returns an empty string when nothing usable is left.
pub fn normalize_name(name: &str) -> String {
    let cleaned = NAME_INVALID_RE.replace_all(name.trim(), "");
    let bare = cleaned.trim_start_matches('-');
    if bare.is_empty() {
        return String::new();
    }
    format!("--{bare}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_get_a_double_dash_prefix() {
        assert_eq!(normalize_name("spacing-large"), "--spacing-large");
        assert_eq!(normalize_name("--SpacingLarge"), "--SpacingLarge");
        assert_eq!(normalize_name("-x"), "--x");
    }

    #[test]
    fn names_lose_unsafe_characters() {
        assert_eq!(normalize_name(" --brand color;} "), "--brandcolor");
        assert_eq!(normalize_name("--a<script>"), "--ascript");
        assert_eq!(normalize_name("--"), "");
        assert_eq!(normalize_name(" ; "), "");
    }

    #[test]
    fn default_token_lives_in_root() {
        let token = Token::default();
        assert_eq!(token.context, ":root");
        assert_eq!(token.kind, TokenType::Text);
        assert_eq!(token.status, TokenStatus::Draft);
    }

    #[test]
    fn token_serializes_type_field() {
        let token = Token::new("--brand", "#fff", ":root").with_kind(TokenType::Color);
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["type"], "color");
        assert_eq!(json["status"], "draft");
        assert_eq!(json["context"], ":root");
    }

    #[test]
    fn token_deserializes_partial_and_unknown_fields_leniently() {
        let token: Token = serde_json::from_str(
            r#"{"name": "--gap", "value": "8px", "type": "mystery", "status": "READY"}"#,
        )
        .unwrap();
        assert_eq!(token.name, "--gap");
        assert_eq!(token.kind, TokenType::Text);
        assert_eq!(token.status, TokenStatus::Ready);
        assert_eq!(token.context, ":root");
        assert!(token.linked_components.is_empty());
    }

    #[test]
    fn token_type_round_trips_through_strings() {
        for kind in TokenType::ALL {
            assert_eq!(TokenType::parse(kind.as_str()), kind);
        }
        assert_eq!(TokenType::parse("Font"), TokenType::FontFamily);
    }

    #[test]
    fn canonical_key_uses_fold() {
        let token = Token::new("--Brand_Primary", "#000", ":root");
        assert_eq!(token.canonical_key().as_str(), "brandprimary");
    }
}
