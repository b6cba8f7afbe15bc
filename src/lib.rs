// Export modules for library usage
pub mod analyzers;
pub mod builders;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod patterns;

// Re-export commonly used types
pub use crate::core::{
    ast::{JsLanguageVariant, SourceAst},
    CatalogResults, FileMixins, Language, MixinRecord, MixinShape,
};

pub use crate::patterns::mixins::{
    extract_mixin_nodes, is_mixin, MixinClassifier, MixinNodes, MixinOptions,
};

pub use crate::analyzers::typescript::{
    parse_source, ReturnedName, SyntaxKind, TextualReturnedName,
};

pub use crate::builders::mixin_catalog::{
    catalog_file, catalog_mixins, catalog_project, catalog_source, CatalogOptions,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
