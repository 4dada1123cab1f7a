//! Canonical CSS output.
//!
//! - Rule: `selector {prop:value; prop:value}` (no trailing `;`)
//! - Degraded rule: bare selector text, no braces
//! - Statement at-rule: `@name prelude;`
//! - Block at-rule: `@name prelude {...}`
//!
//! Items are concatenated with no separator.

use crate::document::{AtRule, Block, Declaration, Document, Node, Rule};

pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();
    write_nodes(&mut out, &doc.nodes);
    out
}

fn write_nodes(out: &mut String, nodes: &[Node]) {
    for node in nodes {
        match node {
            Node::Rule(rule) => write_rule(out, rule),
            Node::AtRule(at) => write_at_rule(out, at),
        }
    }
}

fn write_rule(out: &mut String, rule: &Rule) {
    out.push_str(rule.selector.trim());
    if rule.is_degraded() {
        return;
    }
    out.push_str(" {");
    write_declarations(out, &rule.declarations);
    out.push('}');
}

fn write_at_rule(out: &mut String, at: &AtRule) {
    out.push('@');
    out.push_str(&at.name);
    if !at.prelude.is_empty() {
        out.push(' ');
        out.push_str(&at.prelude);
    }
    match &at.body {
        None => out.push(';'),
        Some(Block::Rules(nodes)) => {
            out.push_str(" {");
            write_nodes(out, nodes);
            out.push('}');
        }
        Some(Block::Declarations(declarations)) => {
            out.push_str(" {");
            write_declarations(out, declarations);
            out.push('}');
        }
    }
}

fn write_declarations(out: &mut String, declarations: &[Declaration]) {
    for (i, decl) in declarations.iter().enumerate() {
        if i > 0 {
            out.push_str("; ");
        }
        out.push_str(&decl.property);
        out.push(':');
        out.push_str(&decl.value);
    }
}
