use crate::core::{CatalogResults, MixinRecord};
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &CatalogResults) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &CatalogResults) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_results(&mut self, results: &CatalogResults) -> anyhow::Result<()> {
        writeln!(self.writer, "# Mixin Catalog")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} mixins in {} files under `{}`",
            results.total_mixins(),
            results.files_analyzed,
            results.project_path.display()
        )?;

        if results.total_mixins() == 0 {
            return Ok(());
        }

        writeln!(self.writer)?;
        writeln!(self.writer, "| Mixin | Class | Form | Parameters | Location |")?;
        writeln!(self.writer, "|-------|-------|------|------------|----------|")?;
        for mixin in results.mixins() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {}:{} |",
                display_name(&mixin.name),
                display_name(&mixin.class_name),
                mixin.shape,
                mixin.parameters.join(", "),
                mixin.file.display(),
                mixin.line
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Human-readable report; colors follow the `colored` crate's terminal detection
pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_mixin(&mut self, mixin: &MixinRecord) -> anyhow::Result<()> {
        let location = format!("{}:{}:{}", mixin.file.display(), mixin.line, mixin.column);
        writeln!(
            self.writer,
            "  {}({}) -> {}",
            display_name(&mixin.name).bold(),
            mixin.parameters.join(", "),
            display_name(&mixin.class_name).cyan()
        )?;
        writeln!(self.writer, "    {} {}", "at".dimmed(), location)?;
        writeln!(self.writer, "    {} {}", "form".dimmed(), mixin.shape)?;
        if let Some(superclass) = &mixin.superclass {
            writeln!(self.writer, "    {} {}", "extends".dimmed(), superclass)?;
        }
        if mixin.shape.is_implicit_return() {
            writeln!(
                self.writer,
                "    {}",
                "note: class is declared but never returned".yellow()
            )?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_results(&mut self, results: &CatalogResults) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Mixin Catalog".bold().blue())?;
        writeln!(self.writer, "{}", "=============".blue())?;
        writeln!(self.writer)?;

        for file in results.files.iter().filter(|f| !f.mixins.is_empty()) {
            writeln!(self.writer, "{}", file.path.display().to_string().underline())?;
            for mixin in &file.mixins {
                self.write_mixin(mixin)?;
            }
            writeln!(self.writer)?;
        }

        let parse_failures = results.files.iter().filter(|f| f.has_parse_errors).count();
        writeln!(
            self.writer,
            "Found {} mixins in {} files",
            results.total_mixins().to_string().green().bold(),
            results.files_analyzed
        )?;
        if parse_failures > 0 {
            writeln!(
                self.writer,
                "{}",
                format!("{parse_failures} files had syntax errors").yellow()
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

fn display_name(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or("<anonymous>")
}

pub fn create_writer<'a>(
    format: OutputFormat,
    sink: Box<dyn Write + 'a>,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    }
}
