//! Canonical keys for token-name collision detection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Case- and separator-folded token name.
///
/// `--SpacingLarge`, `spacing-large`, `spacing_large` and `SPACING-LARGE`
/// all fold to `spacinglarge`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip one leading `--`, lowercase, drop everything but ASCII letters and digits.
pub fn fold(name: &str) -> CanonicalKey {
    let name = name.trim();
    let bare = name.strip_prefix("--").unwrap_or(name);
    CanonicalKey(
        bare.chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spelling_variants_share_a_key() {
        for name in ["--SpacingLarge", "spacing-large", "spacing_large", "SPACING-LARGE"] {
            assert_eq!(fold(name).as_str(), "spacinglarge", "{name}");
        }
    }

    #[test]
    fn digits_are_kept() {
        assert_eq!(fold("--gray-900").as_str(), "gray900");
        assert_eq!(fold("--space-2xl").as_str(), "space2xl");
    }

    #[test]
    fn non_ascii_is_dropped() {
        assert_eq!(fold("--café-noir").as_str(), "cafnoir");
    }

    #[test]
    fn only_one_prefix_is_stripped() {
        assert_eq!(fold("----x").as_str(), "x");
        assert_eq!(fold("  --A  ").as_str(), "a");
    }

    #[test]
    fn display_matches_inner_text() {
        assert_eq!(fold("--Brand-Primary").to_string(), "brandprimary");
    }
}
