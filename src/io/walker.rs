use crate::core::{Error, Language, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

pub struct FileWalker {
    root: PathBuf,
    languages: Vec<Language>,
    ignore_patterns: Vec<String>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            languages: vec![Language::JavaScript, Language::TypeScript],
            ignore_patterns: vec![],
        }
    }

    pub fn with_languages(mut self, languages: Vec<Language>) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let patterns = self
            .ignore_patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut files = Vec::new();
        // dot-directories (.git, .cache, ...) are skipped; .gitignore applies
        // whether or not the tree is a git checkout
        let walker = WalkBuilder::new(&self.root)
            .hidden(true)
            .git_ignore(true)
            .require_git(false)
            .build();

        for entry in walker {
            let entry = entry.map_err(|e| {
                Error::file_system(format!("Failed to walk directory: {e}"), &self.root)
            })?;
            let path = entry.path();

            if path.is_file() && self.should_process(path, &patterns) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path, patterns: &[glob::Pattern]) -> bool {
        let lang = Language::from_path(path);
        if lang == Language::Unknown || !self.languages.contains(&lang) {
            return false;
        }

        let path_str = path.to_string_lossy();
        !patterns.iter().any(|p| p.matches(&path_str))
    }
}
