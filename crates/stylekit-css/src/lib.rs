//! CSS sanitizing parser.
//!
//! Turns attacker-reachable CSS text into a safe, canonical form:
//! - Strips HTML tags from the raw input (inner text is kept)
//! - Lexes the text into a tree of rules, at-rules and declarations
//! - Drops denied properties and `url()`s with non-allowed schemes
//! - Re-emits the surviving tree as compact, deterministic CSS
//!
//! The pipeline never fails: anything that cannot be kept safely is dropped.

pub mod document;
pub mod filter;
pub mod lexer;
pub mod policy;
pub mod sanitizer;
pub mod serialize;
pub mod strip;

pub use document::{AtRule, Block, Declaration, Document, Node, Rule};
pub use filter::SecurityFilter;
pub use lexer::tokenize;
pub use policy::{SanitizerLimits, SanitizerPolicy};
pub use sanitizer::{sanitize, CssSanitizer};
pub use serialize::serialize;
pub use strip::strip_tags;
