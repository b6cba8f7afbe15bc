use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::MixinmapConfig;
use crate::core::{Error, Language, Result};

pub const CONFIG_FILE_NAME: &str = ".mixinmap.toml";

/// Read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<MixinmapConfig> {
    let mut config = toml::from_str::<MixinmapConfig>(contents).map_err(|e| {
        Error::Configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
    })?;

    if let Some(ref mut languages) = config.languages {
        let (known, unknown): (Vec<String>, Vec<String>) = languages
            .enabled
            .drain(..)
            .partition(|name| Language::from_name(name) != Language::Unknown);
        for name in unknown {
            log::warn!("Ignoring unsupported language '{}' in config", name);
        }
        languages.enabled = known;
    }

    if let Some(ref ignore) = config.ignore {
        for pattern in &ignore.patterns {
            glob::Pattern::new(pattern).map_err(|e| {
                Error::Configuration(format!("Invalid ignore pattern '{}': {}", pattern, e))
            })?;
        }
    }

    Ok(config)
}

/// Try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<MixinmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory ancestors of `start`, nearest first, up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Search `start` and its ancestors for a config file
pub fn load_config_from(start: &Path) -> MixinmapConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            MixinmapConfig::default()
        })
}

pub fn load_config() -> MixinmapConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            MixinmapConfig::default()
        }
    }
}
