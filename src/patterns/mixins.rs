//! Mixin recognition
//!
//! A mixin is a callable that takes a base class and returns a class
//! extending it. The classifier inspects one top-level declaration and
//! reports the node that defines the callable together with the class node
//! it produces. Recognized forms:
//!
//! ```text
//! const M = base => class M extends base {}
//! const M = base => { return class M extends base {} }
//! const M = base => { class M extends base {} return M; }
//! const M = base => { class M extends base {} }
//! function M(base) { return class M extends base {} }
//! function M(base) { class M extends base {} return M; }
//! function M(base) { class M extends base {} }
//! ```
//!
//! Inside a block only the first `return` and the first class declaration
//! take part in matching.

use crate::analyzers::typescript::parser::node_text;
use crate::analyzers::typescript::return_value::{ReturnedName, TextualReturnedName};
use crate::analyzers::typescript::syntax::{
    block_statements, declarator_initializer, declarators, function_body, returned_expression,
    SyntaxKind,
};
use crate::core::MixinShape;
use serde::{Deserialize, Serialize};
use tree_sitter::Node;

/// The two nodes that make up a mixin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixinNodes<'tree> {
    /// Declaration statement or function declaration; the arrow/function
    /// expression itself for the block-return-expression form
    pub mixin_function: Node<'tree>,
    /// Always a class expression or class declaration
    pub mixin_class: Node<'tree>,
    pub shape: MixinShape,
}

/// Knobs for the class-declaration forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixinOptions {
    /// Accept a block that declares a class but never returns anything
    pub implicit_return: bool,
}

impl Default for MixinOptions {
    fn default() -> Self {
        Self {
            implicit_return: true,
        }
    }
}

/// Stateless classifier over nodes of a tree parsed from `source`.
#[derive(Debug, Clone)]
pub struct MixinClassifier<'s, R = TextualReturnedName> {
    source: &'s str,
    names: R,
    options: MixinOptions,
}

impl<'s> MixinClassifier<'s, TextualReturnedName> {
    /// Classifier with textual name matching and default options
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            names: TextualReturnedName,
            options: MixinOptions::default(),
        }
    }
}

impl<'s, R: ReturnedName> MixinClassifier<'s, R> {
    /// Swap the strategy used to read the name a `return` hands back
    pub fn with_name_extractor<N: ReturnedName>(self, names: N) -> MixinClassifier<'s, N> {
        MixinClassifier {
            source: self.source,
            names,
            options: self.options,
        }
    }

    /// Replace the matching options
    pub fn with_options(mut self, options: MixinOptions) -> Self {
        self.options = options;
        self
    }

    /// `true` when `node` is a mixin declaration
    pub fn is_mixin(&self, node: &Node) -> bool {
        self.extract_mixin_nodes(node).is_some()
    }

    /// Mixin function and class nodes for `node`, or `None` when it is not a mixin
    pub fn extract_mixin_nodes<'tree>(&self, node: &Node<'tree>) -> Option<MixinNodes<'tree>> {
        match SyntaxKind::of(node) {
            SyntaxKind::VariableDeclarationStatement => self.variable_forms(node),
            SyntaxKind::FunctionDeclaration => self.function_forms(node),
            _ => None,
        }
    }

    fn variable_forms<'tree>(&self, statement: &Node<'tree>) -> Option<MixinNodes<'tree>> {
        let initializer = declarators(statement)
            .iter()
            .filter_map(declarator_initializer)
            .find(|init| SyntaxKind::of(init) == SyntaxKind::FunctionLikeExpression)?;
        let body = function_body(&initializer)?;

        match SyntaxKind::of(&body) {
            SyntaxKind::ClassExpression => Some(MixinNodes {
                mixin_function: *statement,
                mixin_class: body,
                shape: MixinShape::ExpressionBody,
            }),
            SyntaxKind::Block => {
                let scan = BlockScan::of(&body);
                if let Some(class) = scan.returned_class_expression() {
                    return Some(MixinNodes {
                        mixin_function: initializer,
                        mixin_class: class,
                        shape: MixinShape::BlockReturnExpression,
                    });
                }
                self.class_declaration_rule(&scan, statement, |explicit_return| {
                    MixinShape::BlockClassDeclaration { explicit_return }
                })
            }
            _ => None,
        }
    }

    fn function_forms<'tree>(&self, function: &Node<'tree>) -> Option<MixinNodes<'tree>> {
        let body = function_body(function)?;
        if SyntaxKind::of(&body) != SyntaxKind::Block {
            return None;
        }

        let scan = BlockScan::of(&body);
        if let Some(class) = scan.returned_class_expression() {
            return Some(MixinNodes {
                mixin_function: *function,
                mixin_class: class,
                shape: MixinShape::FunctionReturnExpression,
            });
        }
        self.class_declaration_rule(&scan, function, |explicit_return| {
            MixinShape::FunctionClassDeclaration { explicit_return }
        })
    }

    /// First class declaration, matched against the first return by name.
    fn class_declaration_rule<'tree>(
        &self,
        scan: &BlockScan<'tree>,
        mixin_function: &Node<'tree>,
        shape: impl Fn(bool) -> MixinShape,
    ) -> Option<MixinNodes<'tree>> {
        let class_decl = scan.first_class_declaration?;

        let matched = match scan.first_return {
            Some(ret) => {
                let class_name = class_decl
                    .child_by_field_name("name")
                    .map(|name| node_text(&name, self.source));
                let returned = self.names.returned_name(&ret, self.source);
                matches!((class_name, returned), (Some(a), Some(b)) if a == b)
            }
            None => self.options.implicit_return,
        };

        matched.then(|| MixinNodes {
            mixin_function: *mixin_function,
            mixin_class: class_decl,
            shape: shape(scan.first_return.is_some()),
        })
    }
}

/// First `return` and first class declaration among a block's statements.
#[derive(Debug, Default)]
struct BlockScan<'tree> {
    first_return: Option<Node<'tree>>,
    first_class_declaration: Option<Node<'tree>>,
}

impl<'tree> BlockScan<'tree> {
    fn of(block: &Node<'tree>) -> Self {
        let mut scan = Self::default();
        for statement in block_statements(block) {
            match SyntaxKind::of(&statement) {
                SyntaxKind::ReturnStatement if scan.first_return.is_none() => {
                    scan.first_return = Some(statement);
                }
                SyntaxKind::ClassDeclaration if scan.first_class_declaration.is_none() => {
                    scan.first_class_declaration = Some(statement);
                }
                _ => {}
            }
        }
        scan
    }

    fn returned_class_expression(&self) -> Option<Node<'tree>> {
        let expr = returned_expression(self.first_return.as_ref()?)?;
        (SyntaxKind::of(&expr) == SyntaxKind::ClassExpression).then_some(expr)
    }
}

/// `true` when `node` is a mixin declaration, using default options
pub fn is_mixin(node: &Node, source: &str) -> bool {
    MixinClassifier::new(source).is_mixin(node)
}

/// Mixin function and class nodes for `node`, using default options
pub fn extract_mixin_nodes<'tree>(node: &Node<'tree>, source: &str) -> Option<MixinNodes<'tree>> {
    MixinClassifier::new(source).extract_mixin_nodes(node)
}
