//! Security filter over a lexed [`Document`].
//!
//! Drops whole declarations and at-rules, never rewrites a value that passes:
//! - Denied properties (`behavior`, `-moz-binding`, ...)
//! - Values with `expression(` or script scheme references
//! - `url(...)`, `image-set(...)` and `@import` targets whose scheme is not allow-listed
//!
//! A rule that loses every declaration is kept as a degraded rule. A block
//! at-rule that keeps no declaration anywhere is dropped.

mod url;

use tracing::debug;

use crate::document::{AtRule, Block, Declaration, Document, Node, Rule};
use crate::policy::{SanitizerPolicy, DENIED_VALUE_PATTERNS};

use url::{fold_for_matching, image_set_targets, import_string_target, scheme_of, url_targets};

/// Applies a [`SanitizerPolicy`] to parsed CSS.
#[derive(Debug, Clone, Copy)]
pub struct SecurityFilter<'p> {
    policy: &'p SanitizerPolicy,
}

impl<'p> SecurityFilter<'p> {
    pub fn new(policy: &'p SanitizerPolicy) -> Self {
        Self { policy }
    }

    pub fn filter(&self, doc: Document) -> Document {
        Document::new(self.filter_nodes(doc.nodes))
    }

    fn filter_nodes(&self, nodes: Vec<Node>) -> Vec<Node> {
        let kept = nodes
            .into_iter()
            .filter_map(|node| match node {
                Node::Rule(rule) => self.filter_rule(rule).map(Node::Rule),
                Node::AtRule(at) => self.filter_at_rule(at).map(Node::AtRule),
            })
            .collect();
        self.join_degraded(kept)
    }

    /// Serialized items have no separator, so a degraded rule's text runs
    /// into the selector of the rule after it. Fold them together here so the
    /// tree matches what re-lexing the output yields, and check the joined
    /// selector again.
    fn join_degraded(&self, nodes: Vec<Node>) -> Vec<Node> {
        let mut out = Vec::with_capacity(nodes.len());
        let mut carry: Option<String> = None;

        for node in nodes {
            match node {
                Node::Rule(rule) => {
                    let selector = match carry.take() {
                        Some(prefix) => join_selectors(&prefix, &rule.selector),
                        None => rule.selector.trim().to_string(),
                    };
                    if rule.is_degraded() {
                        carry = Some(selector);
                    } else if self.has_unsafe_url(&selector) {
                        debug!(selector = %selector, "joined selector with unsafe URL dropped");
                    } else {
                        out.push(Node::Rule(Rule::new(selector, rule.declarations)));
                    }
                }
                Node::AtRule(at) => {
                    self.push_degraded(&mut out, carry.take());
                    out.push(Node::AtRule(at));
                }
            }
        }

        self.push_degraded(&mut out, carry);
        out
    }

    fn push_degraded(&self, out: &mut Vec<Node>, selector: Option<String>) {
        let Some(selector) = selector else {
            return;
        };
        if self.has_unsafe_url(&selector) {
            debug!(selector = %selector, "joined selector with unsafe URL dropped");
            return;
        }
        // An open paren would swallow a following `@` when re-lexed.
        if has_open_paren(&selector) {
            debug!(selector = %selector, "bare text with unbalanced parens dropped");
            return;
        }
        out.push(Node::Rule(Rule::new(selector, Vec::new())));
    }

    fn filter_rule(&self, rule: Rule) -> Option<Rule> {
        if self.has_unsafe_url(&rule.selector) {
            debug!(selector = %rule.selector, "rule with unsafe URL in selector dropped");
            return None;
        }
        let declarations = self.filter_declarations(rule.declarations);
        Some(Rule::new(rule.selector, declarations))
    }

    fn filter_at_rule(&self, at: AtRule) -> Option<AtRule> {
        if self.has_unsafe_url(&at.prelude) || self.has_unsafe_import(&at) {
            debug!(name = %at.name, prelude = %at.prelude, "at-rule with unsafe URL dropped");
            return None;
        }

        let body = match at.body {
            None => return Some(at),
            Some(Block::Declarations(declarations)) => {
                Block::Declarations(self.filter_declarations(declarations))
            }
            Some(Block::Rules(nodes)) => Block::Rules(self.filter_nodes(nodes)),
        };

        if body.is_hollow() {
            debug!(name = %at.name, "at-rule with empty body dropped");
            return None;
        }
        Some(AtRule::block(at.name, at.prelude, body))
    }

    fn filter_declarations(&self, declarations: Vec<Declaration>) -> Vec<Declaration> {
        declarations
            .into_iter()
            .filter(|decl| self.allows_declaration(decl))
            .collect()
    }

    /// Whether a declaration survives the deny-list and URL checks.
    pub fn allows_declaration(&self, decl: &Declaration) -> bool {
        let property = fold_for_matching(&decl.property);
        if self.policy.is_denied_property(&property) {
            debug!(property = %decl.property, "denied property dropped");
            return false;
        }

        let value = fold_for_matching(&decl.value);
        if let Some(pattern) = DENIED_VALUE_PATTERNS.iter().find(|p| value.contains(*p)) {
            debug!(property = %decl.property, pattern, "declaration with denied value dropped");
            return false;
        }

        if self.folded_has_unsafe_url(&value) {
            debug!(property = %decl.property, "declaration with unsafe URL dropped");
            return false;
        }
        true
    }

    fn has_unsafe_url(&self, text: &str) -> bool {
        self.folded_has_unsafe_url(&fold_for_matching(text))
    }

    fn folded_has_unsafe_url(&self, folded: &str) -> bool {
        url_targets(folded)
            .into_iter()
            .chain(image_set_targets(folded))
            .any(|target| self.is_unsafe_target(target))
    }

    fn has_unsafe_import(&self, at: &AtRule) -> bool {
        if at.name_lower() != "import" {
            return false;
        }
        let folded = fold_for_matching(&at.prelude);
        import_string_target(&folded).is_some_and(|target| self.is_unsafe_target(target))
    }

    /// Scheme-relative and path-relative targets are safe.
    fn is_unsafe_target(&self, target: &str) -> bool {
        scheme_of(target).is_some_and(|scheme| !self.policy.is_allowed_scheme(scheme))
    }
}

/// Concatenate two selectors the way the serializer does. A `/` meeting a
/// `*` would open a comment when re-lexed; the scanner puts a space there.
fn join_selectors(prefix: &str, next: &str) -> String {
    let next = next.trim();
    if prefix.ends_with('/') && next.starts_with('*') {
        format!("{prefix} {next}")
    } else {
        format!("{prefix}{next}")
    }
}

/// Paren depth left open at the end of `text`, counted as the lexer does:
/// quoted strings and escapes are inert.
fn has_open_paren(text: &str) -> bool {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        match (quote, ch) {
            (_, '\\') => {
                chars.next();
            }
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    depth > 0
}
