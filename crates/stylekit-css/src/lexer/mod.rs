//! CSS text to [`Document`] tree.
//!
//! Best-effort and total: malformed fragments are dropped, never reported.
//! Brace nesting is tracked by recursion depth, paren nesting by a counter
//! per prelude or declaration. Both are bounded by [`SanitizerLimits`].

mod scanner;

use scanner::{Piece, Scanner};
use tracing::{debug, warn};

use crate::document::{AtRule, Block, Declaration, Document, Node, Rule};
use crate::policy::SanitizerLimits;

/// At-rules whose block holds declarations rather than nested rules.
const DECLARATION_AT_RULES: &[&str] = &[
    "font-face",
    "page",
    "property",
    "counter-style",
    "font-palette-values",
    "viewport",
    "-ms-viewport",
];

/// Lex `text` with the default limits.
pub fn tokenize(text: &str) -> Document {
    tokenize_with_limits(text, &SanitizerLimits::default())
}

/// Lex `text`, truncating or dropping whatever exceeds `limits`.
pub fn tokenize_with_limits(text: &str, limits: &SanitizerLimits) -> Document {
    let text = truncate_input(text, limits.max_input_bytes);
    let mut lexer = Lexer::new(text, *limits);
    Document::new(lexer.parse_nodes(0))
}

/// Cut `text` to at most `max_bytes`, backing off to a char boundary.
pub(crate) fn truncate_input(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    warn!(len = text.len(), max_bytes, "CSS input truncated");
    &text[..end]
}

// =============================================================================
// LEXER
// =============================================================================

struct Lexer<'a> {
    pieces: Scanner<'a>,
    limits: SanitizerLimits,
    items: usize,
    exhausted: bool,
}

impl<'a> Lexer<'a> {
    fn new(text: &'a str, limits: SanitizerLimits) -> Self {
        Self {
            pieces: Scanner::new(text),
            limits,
            items: 0,
            exhausted: false,
        }
    }

    /// Count one more kept item; false once the item budget is spent.
    fn admit(&mut self) -> bool {
        if self.items >= self.limits.max_items {
            if !self.exhausted {
                warn!(max_items = self.limits.max_items, "CSS item limit reached, dropping the rest");
                self.exhausted = true;
            }
            return false;
        }
        self.items += 1;
        true
    }

    fn push_node(&mut self, nodes: &mut Vec<Node>, node: Node) {
        if self.admit() {
            nodes.push(node);
        }
    }

    /// Parse a rule list until the enclosing `}` (depth > 0) or end of input.
    fn parse_nodes(&mut self, depth: usize) -> Vec<Node> {
        let mut nodes = Vec::new();
        let mut prelude = String::new();
        let mut parens = 0usize;

        while let Some(piece) = self.pieces.next() {
            match piece {
                Piece::Char('{') => {
                    let head = std::mem::take(&mut prelude);
                    parens = 0;
                    if let Some(node) = self.parse_block(head.trim(), depth) {
                        self.push_node(&mut nodes, node);
                    }
                }
                Piece::Char('}') => {
                    if depth > 0 {
                        self.flush_prelude(&mut nodes, &mut prelude);
                        return nodes;
                    }
                    debug!("stray '}}' at top level ignored");
                }
                Piece::Char(';') if parens == 0 && is_at_rule(&prelude) => {
                    self.flush_prelude(&mut nodes, &mut prelude);
                }
                Piece::Char('@') if parens == 0 && !is_at_rule(&prelude) => {
                    self.flush_prelude(&mut nodes, &mut prelude);
                    prelude.push('@');
                }
                Piece::Char(ch) => {
                    match ch {
                        '(' => parens += 1,
                        ')' => parens = parens.saturating_sub(1),
                        _ => {}
                    }
                    prelude.push(ch);
                }
                Piece::Quoted(text) | Piece::Escaped(text) => prelude.push_str(text),
            }
            if self.exhausted {
                return nodes;
            }
        }

        self.flush_prelude(&mut nodes, &mut prelude);
        nodes
    }

    /// Turn pending prelude text into a statement at-rule or a bare rule.
    fn flush_prelude(&mut self, nodes: &mut Vec<Node>, prelude: &mut String) {
        let text = std::mem::take(prelude);
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let node = match text.strip_prefix('@') {
            Some(rest) => {
                let (name, prelude) = split_at_rule(rest);
                if name.is_empty() {
                    debug!(text, "at-rule without a name dropped");
                    return;
                }
                Node::AtRule(AtRule::statement(name, prelude))
            }
            None => Node::Rule(Rule::new(text, Vec::new())),
        };
        self.push_node(nodes, node);
    }

    /// Parse the block that follows `head {`.
    fn parse_block(&mut self, head: &str, depth: usize) -> Option<Node> {
        if depth + 1 > self.limits.max_depth {
            warn!(max_depth = self.limits.max_depth, "CSS block nesting too deep, skipping block");
            self.skip_block();
            return None;
        }

        if let Some(rest) = head.strip_prefix('@') {
            let (name, prelude) = split_at_rule(rest);
            if name.is_empty() {
                self.skip_block();
                return None;
            }
            let body = if DECLARATION_AT_RULES.contains(&name.to_ascii_lowercase().as_str()) {
                Block::Declarations(self.parse_declarations())
            } else {
                Block::Rules(self.parse_nodes(depth + 1))
            };
            return Some(Node::AtRule(AtRule::block(name, prelude, body)));
        }

        let declarations = self.parse_declarations();
        if head.is_empty() {
            debug!("rule without a selector dropped");
            return None;
        }
        Some(Node::Rule(Rule::new(head, declarations)))
    }

    /// Parse `property: value;` pairs until the closing `}` or end of input.
    fn parse_declarations(&mut self) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        let mut pending = PendingDeclaration::default();
        let max_parens = self.limits.max_depth;

        while let Some(piece) = self.pieces.next() {
            match piece {
                Piece::Char('}') => {
                    self.finish_declaration(&mut declarations, &mut pending);
                    return declarations;
                }
                Piece::Char('{') => {
                    // Nested rules are not part of the tree.
                    debug!("nested block inside a rule dropped");
                    self.skip_block();
                    pending = PendingDeclaration::default();
                }
                Piece::Char(';') if pending.parens == 0 => {
                    self.finish_declaration(&mut declarations, &mut pending);
                }
                Piece::Char(':') if pending.parens == 0 && !pending.has_colon => {
                    pending.has_colon = true;
                }
                Piece::Char(ch) => pending.push_char(ch, max_parens),
                Piece::Quoted(text) | Piece::Escaped(text) => pending.buffer().push_str(text),
            }
            if self.exhausted {
                return declarations;
            }
        }

        self.finish_declaration(&mut declarations, &mut pending);
        declarations
    }

    fn finish_declaration(
        &mut self,
        declarations: &mut Vec<Declaration>,
        pending: &mut PendingDeclaration,
    ) {
        if let Some(declaration) = std::mem::take(pending).into_declaration() {
            if self.admit() {
                declarations.push(declaration);
            }
        }
    }

    /// Consume up to and including the `}` matching an already-read `{`.
    fn skip_block(&mut self) {
        let mut open = 1usize;
        for piece in self.pieces.by_ref() {
            match piece {
                Piece::Char('{') => open += 1,
                Piece::Char('}') => {
                    open -= 1;
                    if open == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

#[derive(Debug, Default)]
struct PendingDeclaration {
    property: String,
    value: String,
    has_colon: bool,
    parens: usize,
    too_deep: bool,
}

impl PendingDeclaration {
    fn buffer(&mut self) -> &mut String {
        if self.has_colon {
            &mut self.value
        } else {
            &mut self.property
        }
    }

    fn push_char(&mut self, ch: char, max_parens: usize) {
        match ch {
            '(' => {
                self.parens += 1;
                if self.parens > max_parens {
                    self.too_deep = true;
                }
            }
            ')' => self.parens = self.parens.saturating_sub(1),
            _ => {}
        }
        self.buffer().push(ch);
    }

    /// A declaration needs a property, a colon and balanced parens.
    fn into_declaration(self) -> Option<Declaration> {
        let property = self.property.trim();
        if property.is_empty() && !self.has_colon {
            return None;
        }
        if property.is_empty() || !self.has_colon || self.parens != 0 || self.too_deep {
            debug!(property, "malformed declaration dropped");
            return None;
        }
        Some(Declaration::new(property, self.value.trim()))
    }
}

fn is_at_rule(prelude: &str) -> bool {
    prelude.trim_start().starts_with('@')
}

/// Split `name prelude` (text after `@`) at the first whitespace, paren or quote.
fn split_at_rule(rest: &str) -> (&str, &str) {
    let end = rest
        .find(|ch: char| ch.is_whitespace() || matches!(ch, '(' | '"' | '\''))
        .unwrap_or(rest.len());
    (&rest[..end], rest[end..].trim())
}
