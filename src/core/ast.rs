use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Grammar flavour a JS/TS source is parsed with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JsLanguageVariant {
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
}

impl JsLanguageVariant {
    pub fn from_extension(ext: &str) -> Option<Self> {
        static EXTENSION_MAP: &[(&[&str], JsLanguageVariant)] = &[
            (&["js", "mjs", "cjs"], JsLanguageVariant::JavaScript),
            (&["jsx"], JsLanguageVariant::Jsx),
            (&["ts", "mts", "cts"], JsLanguageVariant::TypeScript),
            (&["tsx"], JsLanguageVariant::Tsx),
        ];

        EXTENSION_MAP
            .iter()
            .find(|(exts, _)| exts.contains(&ext))
            .map(|(_, variant)| *variant)
    }

    pub fn language(&self) -> super::Language {
        match self {
            JsLanguageVariant::JavaScript | JsLanguageVariant::Jsx => super::Language::JavaScript,
            JsLanguageVariant::TypeScript | JsLanguageVariant::Tsx => super::Language::TypeScript,
        }
    }
}

/// A parsed source file together with the text its nodes point into
#[derive(Clone, Debug)]
pub struct SourceAst {
    pub tree: tree_sitter::Tree,
    pub path: PathBuf,
    pub source: String,
    pub language_variant: JsLanguageVariant,
}
