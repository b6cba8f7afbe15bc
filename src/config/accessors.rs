use std::sync::OnceLock;

use super::core::MixinmapConfig;
use super::loader::load_config;
use crate::core::Language;
use crate::patterns::mixins::MixinOptions;

/// Cache the configuration
static CONFIG: OnceLock<MixinmapConfig> = OnceLock::new();

/// Get the cached configuration
pub fn get_config() -> &'static MixinmapConfig {
    CONFIG.get_or_init(load_config)
}

/// Mixin recognition options from `config`, defaults when absent
pub fn get_mixin_options(config: &MixinmapConfig) -> MixinOptions {
    config
        .mixins
        .as_ref()
        .map(MixinOptions::from)
        .unwrap_or_default()
}

/// Enabled languages; both JavaScript and TypeScript when unset
pub fn get_languages(config: &MixinmapConfig) -> Vec<Language> {
    match &config.languages {
        Some(languages) if !languages.enabled.is_empty() => languages
            .enabled
            .iter()
            .map(|name| Language::from_name(name))
            .filter(|lang| *lang != Language::Unknown)
            .collect(),
        _ => vec![Language::JavaScript, Language::TypeScript],
    }
}

pub fn get_ignore_patterns(config: &MixinmapConfig) -> Vec<String> {
    config
        .ignore
        .as_ref()
        .map(|ignore| ignore.patterns.clone())
        .unwrap_or_default()
}
