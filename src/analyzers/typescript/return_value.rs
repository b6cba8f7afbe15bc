//! Name extraction for `return` statements
//!
//! The mixin rules compare the name a function returns with the name of a
//! class it declares. Extraction sits behind [`ReturnedName`] so a resolver
//! with scope information can replace the textual default.

use crate::analyzers::typescript::parser::node_text;
use crate::analyzers::typescript::syntax::{returned_expression, SyntaxKind};
use tree_sitter::Node;

pub trait ReturnedName {
    /// Simple name returned by `ret`, or `None` when the returned expression
    /// is not a plain name reference.
    fn returned_name<'s>(&self, ret: &Node, source: &'s str) -> Option<&'s str>;
}

/// Textual extraction: unwraps parentheses and type assertions, then takes
/// the identifier text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextualReturnedName;

impl ReturnedName for TextualReturnedName {
    fn returned_name<'s>(&self, ret: &Node, source: &'s str) -> Option<&'s str> {
        if SyntaxKind::of(ret) != SyntaxKind::ReturnStatement {
            return None;
        }
        let expr = strip_wrappers(returned_expression(ret)?)?;
        match SyntaxKind::of(&expr) {
            SyntaxKind::Identifier => Some(node_text(&expr, source)),
            _ => None,
        }
    }
}

/// `(X)`, `X as T`, `X satisfies T`, `X!` and `<T>X` all name `X`
fn strip_wrappers(mut expr: Node) -> Option<Node> {
    loop {
        expr = match expr.kind() {
            "parenthesized_expression" | "non_null_expression" => first_named(&expr)?,
            "as_expression" | "satisfies_expression" => first_named(&expr)?,
            "type_assertion" => last_named(&expr)?,
            _ => return Some(expr),
        };
    }
}

fn first_named<'tree>(node: &Node<'tree>) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let child = node
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment");
    child
}

fn last_named<'tree>(node: &Node<'tree>) -> Option<Node<'tree>> {
    let count = node.named_child_count();
    node.named_child(count.checked_sub(1)?)
}
