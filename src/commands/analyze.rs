use crate::builders::mixin_catalog::{catalog_project, CatalogOptions};
use crate::config::{self, MixinmapConfig};
use crate::core::Language;
use crate::io::output::{create_writer, OutputFormat};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub languages: Option<Vec<String>>,
    pub ignore: Option<Vec<String>>,
    pub no_implicit_return: bool,
}

/// Merge CLI flags over the file configuration
pub fn build_catalog_options(
    flags: &AnalyzeConfig,
    file_config: &MixinmapConfig,
) -> CatalogOptions {
    let languages = match &flags.languages {
        Some(names) => names
            .iter()
            .map(|name| Language::from_name(name))
            .filter(|lang| *lang != Language::Unknown)
            .collect(),
        None => config::get_languages(file_config),
    };

    let mut ignore_patterns = config::get_ignore_patterns(file_config);
    ignore_patterns.extend(flags.ignore.iter().flatten().cloned());

    let mut mixins = config::get_mixin_options(file_config);
    if flags.no_implicit_return {
        mixins.implicit_return = false;
    }

    CatalogOptions {
        languages,
        ignore_patterns,
        mixins,
    }
}

pub fn handle_analyze(flags: AnalyzeConfig) -> Result<()> {
    let options = build_catalog_options(&flags, config::get_config());
    if options.languages.is_empty() {
        anyhow::bail!("No supported languages selected (expected js and/or ts)");
    }

    let results = catalog_project(&flags.path, &options)
        .with_context(|| format!("Failed to analyze {}", flags.path.display()))?;

    let sink: Box<dyn Write> = match &flags.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };
    create_writer(flags.format, sink).write_results(&results)
}
