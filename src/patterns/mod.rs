//! Structural code patterns recognized in JS/TS declarations

pub mod mixins;

pub use mixins::{extract_mixin_nodes, is_mixin, MixinClassifier, MixinNodes, MixinOptions};
