//! Property-based tests for mixin classification
//!
//! - Classification is deterministic for the same tree
//! - Only variable statements and function declarations can match
//! - A declared class matches an explicit return exactly when the names agree

mod common;

use common::{first_statement, parse_js};
use mixinmap::{extract_mixin_nodes, is_mixin};
use proptest::prelude::*;

/// Capitalized identifiers never collide with JS keywords
fn class_identifier() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9_]{0,10}"
}

/// Wrapping forms for a class body that never form a mixin
fn non_declaration(name: String) -> impl Strategy<Value = String> {
    prop_oneof![
        Just(format!("class {name} extends Base {{}}")),
        Just(format!("{name} = (base) => class extends base {{}};")),
        Just(format!("({name}) => class extends {name} {{}};")),
        Just(format!("if ({name}) {{ class {name} {{}} }}")),
        Just(format!("new {name}();")),
    ]
}

fn mixin_source() -> impl Strategy<Value = String> {
    (class_identifier(), class_identifier()).prop_flat_map(|(mixin, class)| {
        prop_oneof![
            Just(format!("const {mixin} = (b) => class {class} extends b {{}};")),
            Just(format!(
                "const {mixin} = (b) => {{ return class {class} extends b {{}}; }};"
            )),
            Just(format!(
                "function {mixin}(b) {{ class {class} extends b {{}} return {class}; }}"
            )),
            Just(format!("function {mixin}(b) {{ class {class} extends b {{}} }}")),
        ]
    })
}

proptest! {
    #[test]
    fn prop_classification_is_deterministic(source in mixin_source()) {
        let ast = parse_js(&source);
        let node = first_statement(&ast);

        let first = extract_mixin_nodes(&node, &ast.source);
        let second = extract_mixin_nodes(&node, &ast.source);

        prop_assert!(first.is_some());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_non_declarations_never_match(
        source in class_identifier().prop_flat_map(non_declaration)
    ) {
        let ast = parse_js(&source);
        let node = first_statement(&ast);

        prop_assert!(!is_mixin(&node, &ast.source));
        prop_assert!(extract_mixin_nodes(&node, &ast.source).is_none());
    }

    #[test]
    fn prop_explicit_return_requires_same_name(
        declared in class_identifier(),
        returned in class_identifier(),
    ) {
        let source = format!(
            "function M(base) {{ class {declared} extends base {{}} return {returned}; }}"
        );
        let ast = parse_js(&source);

        prop_assert_eq!(is_mixin(&first_statement(&ast), &ast.source), declared == returned);
    }

    #[test]
    fn prop_match_class_is_inside_input(source in mixin_source()) {
        let ast = parse_js(&source);
        let node = first_statement(&ast);
        let nodes = extract_mixin_nodes(&node, &ast.source).unwrap();

        prop_assert!(nodes.mixin_class.start_byte() >= node.start_byte());
        prop_assert!(nodes.mixin_class.end_byte() <= node.end_byte());
        prop_assert!(matches!(nodes.mixin_class.kind(), "class" | "class_declaration"));
    }
}
