mod accessors;
mod core;
mod loader;

pub use self::accessors::{get_config, get_ignore_patterns, get_languages, get_mixin_options};
pub use self::core::{IgnoreConfig, LanguagesConfig, MixinmapConfig, MixinsConfig};
pub use self::loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
