use serde::{Deserialize, Serialize};

use crate::patterns::mixins::MixinOptions;

/// Root configuration structure for mixinmap
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MixinmapConfig {
    /// Mixin recognition settings
    #[serde(default)]
    pub mixins: Option<MixinsConfig>,

    /// Language configuration
    #[serde(default)]
    pub languages: Option<LanguagesConfig>,

    /// Ignore patterns
    #[serde(default)]
    pub ignore: Option<IgnoreConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixinsConfig {
    /// Treat a class declared in a function body without any `return` as the
    /// function's result
    #[serde(default = "default_implicit_return")]
    pub implicit_return: bool,
}

impl Default for MixinsConfig {
    fn default() -> Self {
        Self {
            implicit_return: default_implicit_return(),
        }
    }
}

fn default_implicit_return() -> bool {
    MixinOptions::default().implicit_return
}

impl From<&MixinsConfig> for MixinOptions {
    fn from(config: &MixinsConfig) -> Self {
        MixinOptions {
            implicit_return: config.implicit_return,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagesConfig {
    pub enabled: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IgnoreConfig {
    pub patterns: Vec<String>,
}
