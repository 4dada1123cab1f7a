//! Parsed CSS tree.

/// A single `property: value` pair.
///
/// `value` is the authored text with only the outer whitespace trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }

    /// Custom properties (`--name`) are design tokens.
    pub fn is_custom_property(&self) -> bool {
        self.property.starts_with("--")
    }
}

/// A selector with its declaration block.
///
/// A rule with no declarations is a *degraded* rule: it serializes as its
/// bare selector text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    pub fn new(selector: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            selector: selector.into(),
            declarations,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// Body of a block at-rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Nested rules, e.g. `@media screen { .a { ... } }`.
    Rules(Vec<Node>),
    /// Declarations, e.g. `@font-face { src: url(...) }`.
    Declarations(Vec<Declaration>),
}

impl Block {
    /// True when no declaration survives anywhere inside the block.
    pub fn is_hollow(&self) -> bool {
        match self {
            Block::Declarations(decls) => decls.is_empty(),
            Block::Rules(nodes) => nodes.iter().all(Node::is_hollow),
        }
    }
}

/// `@name prelude;` or `@name prelude { body }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtRule {
    /// Name without the leading `@`.
    pub name: String,
    pub prelude: String,
    /// `None` for statement at-rules such as `@import`.
    pub body: Option<Block>,
}

impl AtRule {
    pub fn statement(name: impl Into<String>, prelude: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prelude: prelude.into(),
            body: None,
        }
    }

    pub fn block(name: impl Into<String>, prelude: impl Into<String>, body: Block) -> Self {
        Self {
            name: name.into(),
            prelude: prelude.into(),
            body: Some(body),
        }
    }

    /// Lowercased name, for comparisons.
    pub fn name_lower(&self) -> String {
        self.name.to_ascii_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Rule(Rule),
    AtRule(AtRule),
}

impl Node {
    fn is_hollow(&self) -> bool {
        match self {
            Node::Rule(rule) => rule.is_degraded(),
            Node::AtRule(at) => at.body.as_ref().map_or(false, Block::is_hollow),
        }
    }
}

/// Top-level items in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level rules, skipping at-rules.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Rule(rule) => Some(rule),
            Node::AtRule(_) => None,
        })
    }
}
