//! Design-token registry.
//!
//! Tokens are CSS custom properties (`--name: value;`) plus metadata. The
//! registry converts between raw CSS and structured tokens, folds names into
//! canonical keys to catch spelling variants (`--SpacingLarge` vs
//! `spacing-large`), and refuses to save a set that contains collisions.
//!
//! All CSS that enters or leaves the registry goes through
//! [`stylekit_css::CssSanitizer`].

pub mod fold;
pub mod io;
pub mod persist;
pub mod registry;
pub mod store;
pub mod token;

pub use fold::{fold, CanonicalKey};
pub use io::{export_registry_json, parse_registry_json};
pub use persist::{OptionKeys, RegistryError, SavedRegistry};
pub use registry::{
    convert_css_to_registry, find_duplicates, merge_metadata, normalize_registry, tokens_to_css,
    Conflict, DuplicateGroup, NormalizedRegistry, RejectReason, RejectedToken, TokenRegistry,
    DEFAULT_CONTEXT,
};
pub use store::{MemoryStore, OptionStore};
pub use token::{normalize_name, Token, TokenStatus, TokenType};
