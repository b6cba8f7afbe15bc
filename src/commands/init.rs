use crate::config::CONFIG_FILE_NAME;
use crate::core::Error;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# mixinmap configuration

[mixins]
# Accept `base => { class M extends base {} }` even though nothing is returned
implicit_return = true

[languages]
enabled = ["javascript", "typescript"]

[ignore]
patterns = [
    "**/node_modules/**",
    "**/dist/**",
    "**/*.min.js",
]
"#;

/// Write the default config into `dir`
pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Err(Error::file_system(
            "Configuration file already exists. Use --force to overwrite.",
            &config_path,
        )
        .into());
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    log::info!("Created {}", config_path.display());
    Ok(())
}

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_and_validate_config;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_parses() {
        let config = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert!(config.mixins.unwrap().implicit_return);
        assert_eq!(config.ignore.unwrap().patterns.len(), 3);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        init_config_in(dir.path(), false).unwrap();
        assert!(init_config_in(dir.path(), false).is_err());
        assert!(init_config_in(dir.path(), true).is_ok());
    }
}
