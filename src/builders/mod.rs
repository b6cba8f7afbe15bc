pub mod mixin_catalog;

pub use mixin_catalog::{
    catalog_file, catalog_mixins, catalog_paths, catalog_project, catalog_source, CatalogOptions,
};
