// Test utility module for mixinmap integration tests
#![allow(dead_code)]

use mixinmap::{parse_source, JsLanguageVariant, SourceAst};
use std::path::{Path, PathBuf};

pub fn parse_js(source: &str) -> SourceAst {
    parse_source(source, Path::new("test.js"), JsLanguageVariant::JavaScript)
        .expect("Failed to parse JavaScript")
}

pub fn parse_ts(source: &str) -> SourceAst {
    parse_source(source, Path::new("test.ts"), JsLanguageVariant::TypeScript)
        .expect("Failed to parse TypeScript")
}

/// First top-level statement of a parsed file
pub fn first_statement(ast: &SourceAst) -> tree_sitter::Node<'_> {
    ast.tree
        .root_node()
        .named_child(0)
        .expect("Source has no statements")
}

// Helper to create a temporary project with the given files
pub fn create_project(files: &[(&str, &str)]) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path().to_path_buf();
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directory");
        }
        std::fs::write(&path, content).expect("Failed to write test file");
    }
    (temp_dir, root)
}
