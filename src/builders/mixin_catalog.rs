//! Mixin catalog construction.
//!
//! Runs the mixin classifier over every top-level declaration of a file and
//! turns the matched nodes into [`MixinRecord`]s that outlive the syntax tree.
//! Projects are catalogued file by file in parallel.

use crate::analyzers::typescript::parser::{
    detect_variant, has_parse_errors, node_column, node_line, node_text, parse_source,
};
use crate::analyzers::typescript::syntax::{declarator_initializer, declarators, SyntaxKind};
use crate::core::ast::SourceAst;
use crate::core::{CatalogResults, FileMixins, Language, MixinRecord};
use crate::io::walker::FileWalker;
use crate::patterns::mixins::{MixinClassifier, MixinNodes, MixinOptions};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span, warn};
use tree_sitter::Node;

/// A top-level declaration, with any `export` wrapper removed
#[derive(Debug, Clone, Copy)]
struct TopLevelDeclaration<'tree> {
    node: Node<'tree>,
    exported: bool,
}

fn top_level_declarations<'tree>(root: &Node<'tree>) -> Vec<TopLevelDeclaration<'tree>> {
    let mut cursor = root.walk();
    let declarations: Vec<_> = root
        .named_children(&mut cursor)
        .filter_map(|statement| {
            if statement.kind() == "export_statement" {
                statement
                    .child_by_field_name("declaration")
                    .map(|node| TopLevelDeclaration {
                        node,
                        exported: true,
                    })
            } else {
                Some(TopLevelDeclaration {
                    node: statement,
                    exported: false,
                })
            }
        })
        .collect();
    declarations
}

/// Catalog the mixins declared at the top level of a parsed file
pub fn catalog_mixins(ast: &SourceAst, options: MixinOptions) -> Vec<MixinRecord> {
    let classifier = MixinClassifier::new(&ast.source).with_options(options);
    let root = ast.tree.root_node();

    top_level_declarations(&root)
        .into_iter()
        .filter_map(|decl| {
            classifier
                .extract_mixin_nodes(&decl.node)
                .map(|nodes| build_record(ast, &decl, &nodes))
        })
        .collect()
}

fn build_record(ast: &SourceAst, decl: &TopLevelDeclaration, nodes: &MixinNodes) -> MixinRecord {
    let source = ast.source.as_str();
    let (name, function) = mixin_binding(&decl.node);
    let text = |node: Node| node_text(&node, source).to_string();

    MixinRecord {
        name: name.map(text),
        class_name: nodes.mixin_class.child_by_field_name("name").map(text),
        shape: nodes.shape,
        parameters: function
            .map(|f| parameter_names(&f, source))
            .unwrap_or_default(),
        superclass: superclass(&nodes.mixin_class).map(text),
        exported: decl.exported,
        file: ast.path.clone(),
        line: node_line(&nodes.mixin_function),
        column: node_column(&nodes.mixin_function),
        class_line: node_line(&nodes.mixin_class),
    }
}

/// Binding name and callable node of a mixin declaration
fn mixin_binding<'tree>(decl: &Node<'tree>) -> (Option<Node<'tree>>, Option<Node<'tree>>) {
    match SyntaxKind::of(decl) {
        SyntaxKind::FunctionDeclaration => (decl.child_by_field_name("name"), Some(*decl)),
        SyntaxKind::VariableDeclarationStatement => declarators(decl)
            .into_iter()
            .find_map(|declarator| {
                let init = declarator_initializer(&declarator)?;
                (SyntaxKind::of(&init) == SyntaxKind::FunctionLikeExpression)
                    .then(|| (declarator.child_by_field_name("name"), Some(init)))
            })
            .unwrap_or((None, None)),
        _ => (None, None),
    }
}

fn parameter_names(function: &Node, source: &str) -> Vec<String> {
    // `base => ...` has a single `parameter` instead of a parameter list
    if let Some(param) = function.child_by_field_name("parameter") {
        return vec![node_text(&param, source).to_string()];
    }
    let Some(params) = function.child_by_field_name("parameters") else {
        return Vec::new();
    };

    let mut cursor = params.walk();
    let names: Vec<String> = params
        .named_children(&mut cursor)
        .filter(|p| p.kind() != "comment")
        .map(|p| {
            let target = match p.kind() {
                "required_parameter" | "optional_parameter" => p.child_by_field_name("pattern"),
                "assignment_pattern" => p.child_by_field_name("left"),
                _ => None,
            };
            node_text(&target.unwrap_or(p), source).to_string()
        })
        .collect();
    names
}

/// Expression after `extends` in a class heritage clause
fn superclass<'tree>(class: &Node<'tree>) -> Option<Node<'tree>> {
    let mut cursor = class.walk();
    let heritage = class
        .named_children(&mut cursor)
        .find(|child| child.kind() == "class_heritage")?;

    let mut cursor = heritage.walk();
    let first = heritage.named_children(&mut cursor).next()?;
    if first.kind() == "extends_clause" {
        first.child_by_field_name("value")
    } else {
        Some(first)
    }
}

/// Parse `content` and catalog it
pub fn catalog_source(content: &str, path: &Path, options: MixinOptions) -> Result<FileMixins> {
    let variant = detect_variant(path);
    let ast = parse_source(content, path, variant)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let parse_errors = has_parse_errors(&ast.tree);
    if parse_errors {
        warn!(file = %path.display(), "Source has syntax errors; catalog may be incomplete");
    }

    let mixins = catalog_mixins(&ast, options);
    debug!(file = %path.display(), count = mixins.len(), "Catalogued file");

    Ok(FileMixins {
        path: path.to_path_buf(),
        language: variant.language(),
        has_parse_errors: parse_errors,
        mixins,
    })
}

/// Read one file from disk and catalog it
pub fn catalog_file(path: &Path, options: MixinOptions) -> Result<FileMixins> {
    let content = crate::io::read_file(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    catalog_source(&content, path, options)
}

/// Catalog many files in parallel, sorted by path.
///
/// Files that cannot be read are logged and left out.
pub fn catalog_paths(paths: &[PathBuf], options: MixinOptions) -> Vec<FileMixins> {
    let mut files: Vec<FileMixins> = paths
        .par_iter()
        .filter_map(|path| match catalog_file(path, options) {
            Ok(file) => Some(file),
            Err(e) => {
                warn!(file = %path.display(), "Skipping file: {:#}", e);
                None
            }
        })
        .collect();

    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}

/// Project-level settings for a catalog run
#[derive(Debug, Clone)]
pub struct CatalogOptions {
    pub languages: Vec<Language>,
    pub ignore_patterns: Vec<String>,
    pub mixins: MixinOptions,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            languages: vec![Language::JavaScript, Language::TypeScript],
            ignore_patterns: Vec::new(),
            mixins: MixinOptions::default(),
        }
    }
}

/// Walk `root` and catalog every matching source file
pub fn catalog_project(root: &Path, options: &CatalogOptions) -> Result<CatalogResults> {
    let span = info_span!("catalog_project", root = %root.display());
    let _enter = span.enter();

    let paths = if root.is_file() {
        vec![root.to_path_buf()]
    } else {
        FileWalker::new(root.to_path_buf())
            .with_languages(options.languages.clone())
            .with_ignore_patterns(options.ignore_patterns.clone())
            .walk()?
    };
    debug!(files = paths.len(), "Discovered source files");

    let files = catalog_paths(&paths, options.mixins);
    let results = CatalogResults {
        project_path: root.to_path_buf(),
        files_analyzed: files.len(),
        files,
    };

    info!(
        files = results.files_analyzed,
        mixins = results.total_mixins(),
        "Catalog complete"
    );
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MixinShape;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn catalog(source: &str, file: &str) -> Vec<MixinRecord> {
        catalog_source(source, Path::new(file), MixinOptions::default())
            .unwrap()
            .mixins
    }

    #[test]
    fn test_exported_arrow_mixin() {
        let mixins = catalog(
            "export const Sized = (klass) => class Sized extends klass {};",
            "sized.js",
        );

        assert_eq!(mixins.len(), 1);
        let m = &mixins[0];
        assert_eq!(m.name.as_deref(), Some("Sized"));
        assert_eq!(m.class_name.as_deref(), Some("Sized"));
        assert_eq!(m.shape, MixinShape::ExpressionBody);
        assert_eq!(m.parameters, vec!["klass".to_string()]);
        assert_eq!(m.superclass.as_deref(), Some("klass"));
        assert!(m.exported);
        assert_eq!(m.line, 1);
    }

    #[test]
    fn test_unparenthesized_parameter() {
        let mixins = catalog("const M = base => class extends base {};", "m.js");
        assert_eq!(mixins[0].parameters, vec!["base".to_string()]);
        assert_eq!(mixins[0].class_name, None);
    }

    #[test]
    fn test_block_return_expression_location_is_arrow() {
        let source = indoc! {"
            // header
            const Focusable =
              (base) => {
                return class extends base {};
              };
        "};
        let mixins = catalog(source, "f.js");

        assert_eq!(mixins.len(), 1);
        assert_eq!(mixins[0].shape, MixinShape::BlockReturnExpression);
        assert_eq!(mixins[0].name.as_deref(), Some("Focusable"));
        assert_eq!(mixins[0].line, 3);
        assert_eq!(mixins[0].column, 3);
        assert_eq!(mixins[0].class_line, 4);
        assert!(!mixins[0].exported);
    }

    #[test]
    fn test_typescript_function_mixin() {
        let source = indoc! {"
            type Constructor<T = {}> = new (...args: any[]) => T;

            export default function Timestamped<TBase extends Constructor>(Base: TBase, label = 'ts') {
              class Timestamped extends Base {
                timestamp = Date.now();
              }
              return Timestamped;
            }

            export class NotAMixin {}
        "};
        let mixins = catalog(source, "timestamped.ts");

        assert_eq!(mixins.len(), 1);
        let m = &mixins[0];
        assert_eq!(m.name.as_deref(), Some("Timestamped"));
        assert_eq!(
            m.shape,
            MixinShape::FunctionClassDeclaration {
                explicit_return: true
            }
        );
        assert_eq!(m.parameters, vec!["Base".to_string(), "label".to_string()]);
        assert_eq!(m.superclass.as_deref(), Some("Base"));
        assert_eq!(m.line, 3);
    }

    #[test]
    fn test_nested_declarations_are_not_catalogued() {
        let source = indoc! {"
            function outer() {
              const Inner = (base) => class extends base {};
              return 1;
            }
        "};
        assert!(catalog(source, "n.js").is_empty());
    }

    #[test]
    fn test_parse_errors_are_flagged() {
        let file = catalog_source(
            "const M = (base) => class extends base {};\nconst = ;",
            Path::new("broken.js"),
            MixinOptions::default(),
        )
        .unwrap();
        assert!(file.has_parse_errors);
        assert_eq!(file.language, Language::JavaScript);
    }

    #[test]
    fn test_strict_options_drop_implicit_returns() {
        let source = "function M(base) { class A extends base {} }";
        let strict = MixinOptions {
            implicit_return: false,
        };
        let file = catalog_source(source, Path::new("m.js"), strict).unwrap();
        assert!(file.mixins.is_empty());
    }
}
