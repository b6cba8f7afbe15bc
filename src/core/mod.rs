pub mod ast;
pub mod errors;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use errors::{Error, Result};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Copy)]
pub enum Language {
    JavaScript,
    TypeScript,
    Unknown,
}

impl Language {
    pub fn from_extension(ext: &str) -> Self {
        static EXTENSION_MAP: &[(&[&str], Language)] = &[
            (&["js", "jsx", "mjs", "cjs"], Language::JavaScript),
            (&["ts", "tsx", "mts", "cts"], Language::TypeScript),
        ];

        EXTENSION_MAP
            .iter()
            .find(|(exts, _)| exts.contains(&ext))
            .map(|(_, lang)| *lang)
            .unwrap_or(Language::Unknown)
    }

    pub fn from_path(path: &std::path::Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Unknown)
    }

    /// Parse a user-facing language name (`js`, `typescript`, ...)
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "js" | "javascript" => Language::JavaScript,
            "ts" | "typescript" => Language::TypeScript,
            _ => Language::Unknown,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(Language, &str)] = &[
            (Language::JavaScript, "JavaScript"),
            (Language::TypeScript, "TypeScript"),
            (Language::Unknown, "Unknown"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(l, _)| l == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

/// Structural form a recognized mixin takes.
///
/// The variants are closed: every match the classifier produces is exactly
/// one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MixinShape {
    /// `const M = base => class extends base {}`
    ExpressionBody,
    /// `const M = base => { return class extends base {} }`
    BlockReturnExpression,
    /// `const M = base => { class C extends base {} return C; }`, or without
    /// the return when implicit returns are accepted
    BlockClassDeclaration { explicit_return: bool },
    /// `function M(base) { return class extends base {} }`
    FunctionReturnExpression,
    /// `function M(base) { class C extends base {} return C; }`
    FunctionClassDeclaration { explicit_return: bool },
}

impl MixinShape {
    /// True when the class is reached only through the implicit-return heuristic
    pub fn is_implicit_return(&self) -> bool {
        matches!(
            self,
            MixinShape::BlockClassDeclaration {
                explicit_return: false
            } | MixinShape::FunctionClassDeclaration {
                explicit_return: false
            }
        )
    }
}

impl std::fmt::Display for MixinShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MixinShape::ExpressionBody => "arrow expression",
            MixinShape::BlockReturnExpression => "arrow returning class",
            MixinShape::BlockClassDeclaration {
                explicit_return: true,
            } => "arrow with class declaration",
            MixinShape::BlockClassDeclaration {
                explicit_return: false,
            } => "arrow with class declaration (implicit return)",
            MixinShape::FunctionReturnExpression => "function returning class",
            MixinShape::FunctionClassDeclaration {
                explicit_return: true,
            } => "function with class declaration",
            MixinShape::FunctionClassDeclaration {
                explicit_return: false,
            } => "function with class declaration (implicit return)",
        };
        write!(f, "{label}")
    }
}

/// One catalogued mixin, detached from the syntax tree it was found in
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MixinRecord {
    pub name: Option<String>,
    pub class_name: Option<String>,
    pub shape: MixinShape,
    pub parameters: Vec<String>,
    pub superclass: Option<String>,
    pub exported: bool,
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
    pub class_line: usize,
}

/// Mixins found in a single file
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FileMixins {
    pub path: PathBuf,
    pub language: Language,
    pub has_parse_errors: bool,
    pub mixins: Vec<MixinRecord>,
}

/// Aggregated catalog for a run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogResults {
    pub project_path: PathBuf,
    pub files_analyzed: usize,
    pub files: Vec<FileMixins>,
}

impl CatalogResults {
    pub fn total_mixins(&self) -> usize {
        self.files.iter().map(|f| f.mixins.len()).sum()
    }

    pub fn mixins(&self) -> impl Iterator<Item = &MixinRecord> {
        self.files.iter().flat_map(|f| f.mixins.iter())
    }
}
