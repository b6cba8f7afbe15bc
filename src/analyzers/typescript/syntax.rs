//! Closed set of node tags the mixin rules care about
//!
//! Maps tree-sitter grammar kinds from both the JavaScript and TypeScript
//! grammars onto a single enum so the rules can dispatch with `match`.

use tree_sitter::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    /// `const`/`let`/`var` statement holding one or more declarators
    VariableDeclarationStatement,
    /// Named function statement, including TS overload signatures without a body
    FunctionDeclaration,
    /// Arrow function or function expression
    FunctionLikeExpression,
    ClassExpression,
    ClassDeclaration,
    ReturnStatement,
    Block,
    Identifier,
    Other,
}

impl SyntaxKind {
    pub fn from_kind(kind: &str) -> Self {
        match kind {
            "lexical_declaration" | "variable_declaration" => Self::VariableDeclarationStatement,
            "function_declaration" | "generator_function_declaration" | "function_signature" => {
                Self::FunctionDeclaration
            }
            "arrow_function" | "function_expression" | "function" | "generator_function" => {
                Self::FunctionLikeExpression
            }
            "class" => Self::ClassExpression,
            "class_declaration" | "abstract_class_declaration" => Self::ClassDeclaration,
            "return_statement" => Self::ReturnStatement,
            "statement_block" => Self::Block,
            "identifier" | "type_identifier" => Self::Identifier,
            _ => Self::Other,
        }
    }

    pub fn of(node: &Node) -> Self {
        Self::from_kind(node.kind())
    }
}

/// Initializer of a variable-style declarator (`name = value`).
///
/// Destructuring declarators (`{ a } = value`) are skipped.
pub fn declarator_initializer<'tree>(declarator: &Node<'tree>) -> Option<Node<'tree>> {
    if declarator.kind() != "variable_declarator" {
        return None;
    }
    let name = declarator.child_by_field_name("name")?;
    if SyntaxKind::of(&name) != SyntaxKind::Identifier {
        return None;
    }
    declarator.child_by_field_name("value")
}

/// Declarators of a variable statement, in source order
pub fn declarators<'tree>(statement: &Node<'tree>) -> Vec<Node<'tree>> {
    let mut cursor = statement.walk();
    let found: Vec<_> = statement
        .named_children(&mut cursor)
        .filter(|child| child.kind() == "variable_declarator")
        .collect();
    found
}

/// Statements directly inside a block, in source order
pub fn block_statements<'tree>(block: &Node<'tree>) -> Vec<Node<'tree>> {
    let mut cursor = block.walk();
    let statements: Vec<_> = block
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect();
    statements
}

/// Expression returned by a return statement, if any
pub fn returned_expression<'tree>(ret: &Node<'tree>) -> Option<Node<'tree>> {
    let mut cursor = ret.walk();
    let expr = ret
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment");
    expr
}

/// Body of a function-like node (`body` field)
pub fn function_body<'tree>(function: &Node<'tree>) -> Option<Node<'tree>> {
    function.child_by_field_name("body")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::typescript::parser::parse_source;
    use crate::core::ast::JsLanguageVariant;
    use std::path::Path;

    fn first_statement_kind(source: &str, variant: JsLanguageVariant) -> SyntaxKind {
        let ast = parse_source(source, Path::new("t"), variant).unwrap();
        let root = ast.tree.root_node();
        SyntaxKind::of(&root.named_child(0).unwrap())
    }

    #[test]
    fn test_statement_kinds() {
        let js = JsLanguageVariant::JavaScript;
        assert_eq!(
            first_statement_kind("const a = 1;", js),
            SyntaxKind::VariableDeclarationStatement
        );
        assert_eq!(
            first_statement_kind("var a = 1;", js),
            SyntaxKind::VariableDeclarationStatement
        );
        assert_eq!(
            first_statement_kind("function f() {}", js),
            SyntaxKind::FunctionDeclaration
        );
        assert_eq!(
            first_statement_kind("function* g() {}", js),
            SyntaxKind::FunctionDeclaration
        );
        assert_eq!(
            first_statement_kind("class A {}", js),
            SyntaxKind::ClassDeclaration
        );
        assert_eq!(first_statement_kind("a + b;", js), SyntaxKind::Other);
    }

    #[test]
    fn test_typescript_kinds() {
        let ts = JsLanguageVariant::TypeScript;
        assert_eq!(
            first_statement_kind("abstract class A {}", ts),
            SyntaxKind::ClassDeclaration
        );
        assert_eq!(
            first_statement_kind("function f(a: string): void;", ts),
            SyntaxKind::FunctionDeclaration
        );
    }

    #[test]
    fn test_destructuring_declarator_skipped() {
        let source = "const { a } = () => class {}, b = () => class {};";
        let ast = parse_source(source, Path::new("t.js"), JsLanguageVariant::JavaScript).unwrap();
        let statement = ast.tree.root_node().named_child(0).unwrap();

        let decls = declarators(&statement);
        assert_eq!(decls.len(), 2);
        assert!(declarator_initializer(&decls[0]).is_none());
        assert_eq!(
            SyntaxKind::of(&declarator_initializer(&decls[1]).unwrap()),
            SyntaxKind::FunctionLikeExpression
        );
    }

    #[test]
    fn test_returned_expression() {
        let source = "function f() { return; }\nfunction g() { return x; }";
        let ast = parse_source(source, Path::new("t.js"), JsLanguageVariant::JavaScript).unwrap();
        let root = ast.tree.root_node();

        let body_f = function_body(&root.named_child(0).unwrap()).unwrap();
        let ret_f = block_statements(&body_f)[0];
        assert!(returned_expression(&ret_f).is_none());

        let body_g = function_body(&root.named_child(1).unwrap()).unwrap();
        let ret_g = block_statements(&body_g)[0];
        assert_eq!(
            SyntaxKind::of(&returned_expression(&ret_g).unwrap()),
            SyntaxKind::Identifier
        );
    }
}
