//! TypeScript/JavaScript syntax support
//!
//! This module wraps the tree-sitter grammars used for JS/TS sources:
//!
//! - Parsing with the right grammar per file extension
//! - A closed tag set over grammar node kinds
//! - Name extraction for `return` statements
//!
//! # Example
//!
//! ```ignore
//! use mixinmap::analyzers::typescript::parser::{detect_variant, parse_source};
//!
//! let ast = parse_source(source, path, detect_variant(path))?;
//! let root = ast.tree.root_node();
//! ```

pub mod parser;
pub mod return_value;
pub mod syntax;

pub use parser::{detect_variant, has_parse_errors, parse_source};
pub use return_value::{ReturnedName, TextualReturnedName};
pub use syntax::SyntaxKind;
